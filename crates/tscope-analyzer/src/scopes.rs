//! The scope tree.
//!
//! Scopes, variables and references live in three flat arenas addressed by
//! integer handles. Ownership edges (parent scope → child scopes, scope →
//! variables, scope → references) are forward index lists; back edges
//! (child → parent, variable → scope, reference → resolved variable) are
//! plain IDs, so the graph has no ownership cycles.

use crate::references::{Reference, ReferenceId};
use crate::variables::{Variable, VariableId};
use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};
use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use tscope_common::Atom;
use tscope_syntax::NodeIndex;

/// An insertion-ordered name map with the fx hasher.
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Index of a scope in the scope tree's scope arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, PartialOrd, Ord)]
pub struct ScopeId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ScopeKind {
    Global,
    Module,
    Function,
    /// The one-variable scope holding a named function expression's own
    /// name, visible only inside its body.
    FunctionExpressionName,
    Block,
    Switch,
    Catch,
    With,
    Class,
    For,
    Enum,
}

impl ScopeKind {
    /// Scopes that `var` declarations hoist into (and that anchor
    /// `variable_scope` back-references).
    pub fn is_variable_scope(self) -> bool {
        matches!(
            self,
            ScopeKind::Global | ScopeKind::Module | ScopeKind::Function
        )
    }
}

/// A node in the scope tree.
#[derive(Clone, Debug, Serialize)]
pub struct Scope {
    pub kind: ScopeKind,
    /// The syntax node that opened this scope.
    pub node: NodeIndex,
    /// Lexically enclosing scope; `None` only for the global scope.
    pub parent: Option<ScopeId>,
    /// The nearest enclosing function/module/global scope (self for those
    /// kinds) — where `var` declarations actually live.
    pub variable_scope: ScopeId,
    pub is_strict: bool,
    /// True only for `FunctionExpressionName` scopes.
    pub function_expression_scope: bool,
    /// Declared names in insertion order.
    #[serde(serialize_with = "serialize_variable_map")]
    pub variables: FxIndexMap<Atom, VariableId>,
    /// References that syntactically occur in this scope, in source order.
    pub references: Vec<ReferenceId>,
    /// References that crossed this scope unresolved when it closed.
    pub through: Vec<ReferenceId>,
    pub child_scopes: Vec<ScopeId>,
    /// Working set during the walk: references still awaiting resolution
    /// here. Drained into `through`/`Variable::references` at close.
    #[serde(skip)]
    pub(crate) left: Vec<ReferenceId>,
}

fn serialize_variable_map<S: Serializer>(
    map: &FxIndexMap<Atom, VariableId>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(map.iter().map(|(&name, &id)| (name, id)))
}

/// The completed analysis result: the global scope plus all descendants,
/// fully resolved. Callers must treat it as immutable.
#[derive(Debug, Serialize)]
pub struct ScopeTree {
    pub scopes: Vec<Scope>,
    pub variables: Vec<Variable>,
    pub references: Vec<Reference>,
    pub global: ScopeId,
    #[serde(skip)]
    pub(crate) node_scopes: FxHashMap<u32, SmallVec<[ScopeId; 1]>>,
}

impl ScopeTree {
    pub(crate) fn new() -> ScopeTree {
        ScopeTree {
            scopes: Vec::new(),
            variables: Vec::new(),
            references: Vec::new(),
            global: ScopeId(0),
            node_scopes: FxHashMap::default(),
        }
    }

    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0 as usize]
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id.0 as usize]
    }

    pub fn reference(&self, id: ReferenceId) -> &Reference {
        &self.references[id.0 as usize]
    }

    pub fn global_scope(&self) -> &Scope {
        self.scope(self.global)
    }

    /// References that stayed unresolved past the global scope
    /// (undeclared or ambient names).
    pub fn unresolved(&self) -> &[ReferenceId] {
        &self.global_scope().through
    }

    /// All scopes opened by `node`, outermost first. A node can open more
    /// than one (a named function expression opens its name scope and its
    /// function scope; a module root opens the global and module scopes).
    pub fn scopes_for(&self, node: NodeIndex) -> &[ScopeId] {
        self.node_scopes
            .get(&node.0)
            .map(SmallVec::as_slice)
            .unwrap_or(&[])
    }

    /// The innermost non-name scope opened by `node`, if any.
    pub fn acquire(&self, node: NodeIndex) -> Option<ScopeId> {
        self.scopes_for(node)
            .iter()
            .copied()
            .rev()
            .find(|&id| !self.scope(id).function_expression_scope)
    }

    /// Look up a variable declared directly in `scope`.
    pub fn variable_named(&self, scope: ScopeId, name: Atom) -> Option<VariableId> {
        self.scope(scope).variables.get(&name).copied()
    }

    pub(crate) fn scope_mut(&mut self, id: ScopeId) -> &mut Scope {
        &mut self.scopes[id.0 as usize]
    }

    pub(crate) fn variable_mut(&mut self, id: VariableId) -> &mut Variable {
        &mut self.variables[id.0 as usize]
    }

    pub(crate) fn reference_mut(&mut self, id: ReferenceId) -> &mut Reference {
        &mut self.references[id.0 as usize]
    }
}
