//! Variables and the definitions that introduce them.

use crate::references::ReferenceId;
use crate::scopes::ScopeId;
use serde::Serialize;
use tscope_common::Atom;
use tscope_syntax::NodeIndex;

/// Index of a variable in the scope tree's variable arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, PartialOrd, Ord)]
pub struct VariableId(pub u32);

/// Why a binding exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DefinitionKind {
    Variable,
    FunctionName,
    Parameter,
    ClassName,
    CatchBinding,
    ImportBinding,
    EnumName,
    EnumMemberName,
}

/// One declaration site of a variable. A variable accumulates several
/// definitions when the same name is declared repeatedly in one scope
/// (multiple `var` statements, function overload signatures).
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Definition {
    pub kind: DefinitionKind,
    /// The identifier node bound.
    pub name: NodeIndex,
    /// The node that introduces the binding (declarator, function, enum...).
    pub node: NodeIndex,
    /// The enclosing statement/declaration node, or `NONE`.
    pub parent: NodeIndex,
    /// Positional index for parameters.
    pub index: Option<u32>,
    /// Whether a parameter binding is a rest element.
    pub rest: bool,
}

impl Definition {
    pub fn new(kind: DefinitionKind, name: NodeIndex, node: NodeIndex) -> Definition {
        Definition {
            kind,
            name,
            node,
            parent: NodeIndex::NONE,
            index: None,
            rest: false,
        }
    }

    pub fn with_parent(
        kind: DefinitionKind,
        name: NodeIndex,
        node: NodeIndex,
        parent: NodeIndex,
    ) -> Definition {
        Definition {
            kind,
            name,
            node,
            parent,
            index: None,
            rest: false,
        }
    }

    pub fn parameter(name: NodeIndex, node: NodeIndex, index: u32, rest: bool) -> Definition {
        Definition {
            kind: DefinitionKind::Parameter,
            name,
            node,
            parent: NodeIndex::NONE,
            index: Some(index),
            rest,
        }
    }
}

/// A declared name. Created the first time a name is declared in a scope;
/// `references` is populated during resolution, not at declaration time.
#[derive(Clone, Debug, Serialize)]
pub struct Variable {
    pub name: Atom,
    /// The scope that declared it.
    pub scope: ScopeId,
    pub defs: Vec<Definition>,
    /// The binding occurrences (the name side of each definition). Empty
    /// for implicit bindings such as `arguments`.
    pub identifiers: Vec<NodeIndex>,
    /// References that resolved to this variable.
    pub references: Vec<ReferenceId>,
}
