//! Node and payload storage.
//!
//! Nodes live in a `NodeArena`: a flat `Vec<Node>` of (kind, span, payload
//! index) triples plus one payload pool per node shape. Several kinds share
//! a pool when they have the same shape (e.g. `ForStatement`,
//! `WhileStatement` and `DoWhileStatement` all use `LoopData`), the same
//! consolidation the accessors expose: `get_loop` answers for any of them
//! and returns `None` for everything else.

use crate::base::{NodeIndex, NodeList};
use crate::kind::{SyntaxKind, VariableDeclKind};
use tscope_common::{Atom, Interner, Span};

/// Payload slot for kinds that carry no payload.
pub const DATA_NONE: u32 = u32::MAX;

/// A syntax tree node: a type tag, a source span, and an index into the
/// payload pool for its kind.
#[derive(Clone, Copy, Debug)]
pub struct Node {
    pub kind: SyntaxKind,
    pub span: Span,
    pub data: u32,
}

/// Assignment operators. The analyzer only distinguishes simple assignment
/// from the compound forms (which read before they write); the full set is
/// part of the frontend contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignmentOperator {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Exp,
    ShiftLeft,
    ShiftRight,
    ShiftRightUnsigned,
    BitAnd,
    BitOr,
    BitXor,
    LogicalAnd,
    LogicalOr,
    Coalesce,
}

impl AssignmentOperator {
    /// Compound operators read the target before writing it.
    pub fn is_compound(self) -> bool {
        !matches!(self, AssignmentOperator::Assign)
    }
}

// Payload shapes. One struct per pool; the kinds sharing each pool are
// listed on the accessor below.

#[derive(Clone, Debug)]
pub struct IdentifierData {
    pub atom: Atom,
    /// Type annotation attached to this identifier when it appears in a
    /// binding position (`x: T`). `NONE` elsewhere.
    pub type_annotation: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct LiteralData {
    /// Raw literal text.
    pub atom: Atom,
}

#[derive(Clone, Debug)]
pub struct ListData {
    pub nodes: NodeList,
}

#[derive(Clone, Debug)]
pub struct WrapperData {
    /// The single child, `NONE` where the construct allows omission
    /// (`return;`, `break;`).
    pub inner: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct PairData {
    pub left: NodeIndex,
    pub right: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct UnaryExprData {
    /// Operator text (`"!"`, `"typeof"`, `"++"`).
    pub op: Atom,
    pub operand: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct BinaryExprData {
    /// Operator text (`"+"`, `"&&"`, `"in"`).
    pub op: Atom,
    pub left: NodeIndex,
    pub right: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct AssignmentExprData {
    pub op: AssignmentOperator,
    pub left: NodeIndex,
    pub right: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ConditionalData {
    pub test: NodeIndex,
    pub consequent: NodeIndex,
    /// `NONE` for an `if` without `else`.
    pub alternate: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct CallExprData {
    pub callee: NodeIndex,
    pub type_arguments: NodeList,
    pub arguments: NodeList,
}

#[derive(Clone, Debug)]
pub struct MemberExprData {
    pub object: NodeIndex,
    pub property: NodeIndex,
    pub computed: bool,
}

#[derive(Clone, Debug)]
pub struct PropertyData {
    pub key: NodeIndex,
    pub value: NodeIndex,
    pub computed: bool,
    pub shorthand: bool,
}

#[derive(Clone, Debug)]
pub struct FunctionData {
    /// `NONE` for anonymous functions and arrows.
    pub name: NodeIndex,
    pub type_parameters: NodeIndex,
    pub params: NodeList,
    pub return_type: NodeIndex,
    /// `NONE` for ambient/overload signatures.
    pub body: NodeIndex,
    pub is_async: bool,
    pub is_generator: bool,
}

#[derive(Clone, Debug)]
pub struct ClassData {
    pub name: NodeIndex,
    pub type_parameters: NodeIndex,
    pub super_class: NodeIndex,
    pub implements: NodeList,
    pub body: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ClassMemberData {
    pub key: NodeIndex,
    /// Method function for `MethodDefinition`; initializer (or `NONE`) for
    /// `PropertyDefinition`.
    pub value: NodeIndex,
    /// Only meaningful for `PropertyDefinition`.
    pub type_annotation: NodeIndex,
    pub computed: bool,
    pub is_static: bool,
}

#[derive(Clone, Debug)]
pub struct VariableDeclarationData {
    pub kind: VariableDeclKind,
    pub declarations: NodeList,
}

#[derive(Clone, Debug)]
pub struct VariableDeclaratorData {
    pub name: NodeIndex,
    pub init: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct PatternData {
    /// Array-pattern holes are `NONE` entries.
    pub elements: NodeList,
    pub type_annotation: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct LoopData {
    pub initializer: NodeIndex,
    pub test: NodeIndex,
    pub update: NodeIndex,
    pub body: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ForInOfData {
    pub left: NodeIndex,
    pub right: NodeIndex,
    pub body: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct SwitchData {
    pub discriminant: NodeIndex,
    pub cases: NodeList,
}

#[derive(Clone, Debug)]
pub struct SwitchCaseData {
    /// `NONE` for the `default` clause.
    pub test: NodeIndex,
    pub statements: NodeList,
}

#[derive(Clone, Debug)]
pub struct TryData {
    pub block: NodeIndex,
    pub handler: NodeIndex,
    pub finalizer: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct CatchClauseData {
    /// `NONE` for a bindingless `catch {}`.
    pub param: NodeIndex,
    pub body: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ImportData {
    pub specifiers: NodeList,
    pub source: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ExportData {
    pub declaration: NodeIndex,
    pub specifiers: NodeList,
    pub source: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct TypeReferenceData {
    /// For `TypeQuery` this is the queried expression name
    /// (`Identifier` or `QualifiedName`).
    pub type_name: NodeIndex,
    pub type_arguments: NodeList,
}

#[derive(Clone, Debug)]
pub struct TypeParameterData {
    pub name: NodeIndex,
    pub constraint: NodeIndex,
    pub default: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct InterfaceData {
    pub name: NodeIndex,
    pub type_parameters: NodeIndex,
    pub extends: NodeList,
    pub body: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct SignatureData {
    /// `NONE` for a bare `FunctionType`.
    pub key: NodeIndex,
    pub type_parameters: NodeIndex,
    pub params: NodeList,
    pub return_type: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct EnumData {
    pub name: NodeIndex,
    pub members: NodeList,
}

#[derive(Clone, Debug)]
pub struct EnumMemberData {
    /// An `Identifier`, or a `StringLiteral` for string-named members.
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// Pooled node storage.
///
/// A frontend builds the tree bottom-up through the `add_*` methods (see
/// `node_arena`); the analyzer reads it through `get` and the typed
/// accessors below.
#[derive(Debug, Default)]
pub struct NodeArena {
    pub(crate) nodes: Vec<Node>,
    pub(crate) interner: Interner,

    pub(crate) identifiers: Vec<IdentifierData>,
    pub(crate) literals: Vec<LiteralData>,
    pub(crate) lists: Vec<ListData>,
    pub(crate) wrappers: Vec<WrapperData>,
    pub(crate) pairs: Vec<PairData>,
    pub(crate) unary_exprs: Vec<UnaryExprData>,
    pub(crate) binary_exprs: Vec<BinaryExprData>,
    pub(crate) assignment_exprs: Vec<AssignmentExprData>,
    pub(crate) conditionals: Vec<ConditionalData>,
    pub(crate) call_exprs: Vec<CallExprData>,
    pub(crate) member_exprs: Vec<MemberExprData>,
    pub(crate) properties: Vec<PropertyData>,
    pub(crate) functions: Vec<FunctionData>,
    pub(crate) classes: Vec<ClassData>,
    pub(crate) class_members: Vec<ClassMemberData>,
    pub(crate) variable_declarations: Vec<VariableDeclarationData>,
    pub(crate) declarators: Vec<VariableDeclaratorData>,
    pub(crate) patterns: Vec<PatternData>,
    pub(crate) loops: Vec<LoopData>,
    pub(crate) for_in_of: Vec<ForInOfData>,
    pub(crate) switches: Vec<SwitchData>,
    pub(crate) switch_cases: Vec<SwitchCaseData>,
    pub(crate) tries: Vec<TryData>,
    pub(crate) catch_clauses: Vec<CatchClauseData>,
    pub(crate) imports: Vec<ImportData>,
    pub(crate) exports: Vec<ExportData>,
    pub(crate) type_refs: Vec<TypeReferenceData>,
    pub(crate) type_params: Vec<TypeParameterData>,
    pub(crate) interfaces: Vec<InterfaceData>,
    pub(crate) signatures: Vec<SignatureData>,
    pub(crate) enums: Vec<EnumData>,
    pub(crate) enum_members: Vec<EnumMemberData>,
}

macro_rules! pool_accessors {
    ($get:ident, $get_at:ident, $pool:ident, $data:ty, [$($kind:pat),+ $(,)?]) => {
        pub fn $get(&self, node: &Node) -> Option<&$data> {
            match node.kind {
                $($kind)|+ => self.$pool.get(node.data as usize),
                _ => None,
            }
        }

        pub fn $get_at(&self, idx: NodeIndex) -> Option<&$data> {
            self.get(idx).and_then(|node| self.$get(node))
        }
    };
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Get a reference to the interner.
    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    pub fn interner_mut(&mut self) -> &mut Interner {
        &mut self.interner
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Fetch a node by index. `NONE` and out-of-range indices yield `None`.
    #[inline]
    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        if idx.is_none() {
            return None;
        }
        self.nodes.get(idx.0 as usize)
    }

    /// The kind of a node, if the index is live.
    #[inline]
    pub fn kind(&self, idx: NodeIndex) -> Option<SyntaxKind> {
        self.get(idx).map(|node| node.kind)
    }

    /// The span of a node, if the index is live.
    #[inline]
    pub fn span(&self, idx: NodeIndex) -> Option<Span> {
        self.get(idx).map(|node| node.span)
    }

    /// Resolve an identifier node to its interned atom.
    pub fn identifier_atom(&self, idx: NodeIndex) -> Option<Atom> {
        self.get_identifier_at(idx).map(|data| data.atom)
    }

    /// Resolve an identifier node to its text.
    pub fn identifier_text(&self, idx: NodeIndex) -> Option<&str> {
        self.identifier_atom(idx)
            .map(|atom| self.interner.resolve(atom))
    }

    pool_accessors!(get_identifier, get_identifier_at, identifiers, IdentifierData, [
        SyntaxKind::Identifier,
    ]);
    pool_accessors!(get_literal, get_literal_at, literals, LiteralData, [
        SyntaxKind::NumericLiteral,
        SyntaxKind::StringLiteral,
        SyntaxKind::BooleanLiteral,
        SyntaxKind::NullLiteral,
    ]);
    pool_accessors!(get_list, get_list_at, lists, ListData, [
        SyntaxKind::SourceFile,
        SyntaxKind::Block,
        SyntaxKind::ClassBody,
        SyntaxKind::ArrayExpression,
        SyntaxKind::ObjectExpression,
        SyntaxKind::SequenceExpression,
        SyntaxKind::TemplateLiteral,
        SyntaxKind::TypeParameterDeclaration,
        SyntaxKind::InterfaceBody,
        SyntaxKind::UnionType,
    ]);
    pool_accessors!(get_wrapper, get_wrapper_at, wrappers, WrapperData, [
        SyntaxKind::ExpressionStatement,
        SyntaxKind::ReturnStatement,
        SyntaxKind::ThrowStatement,
        SyntaxKind::SpreadElement,
        SyntaxKind::RestElement,
        SyntaxKind::AwaitExpression,
        SyntaxKind::BreakStatement,
        SyntaxKind::ContinueStatement,
        SyntaxKind::ExportDefaultDeclaration,
        SyntaxKind::ImportDefaultSpecifier,
        SyntaxKind::ImportNamespaceSpecifier,
        SyntaxKind::TypeAnnotation,
        SyntaxKind::ArrayType,
    ]);
    pool_accessors!(get_pair, get_pair_at, pairs, PairData, [
        SyntaxKind::AssignmentPattern,
        SyntaxKind::WithStatement,
        SyntaxKind::LabeledStatement,
        SyntaxKind::QualifiedName,
        SyntaxKind::ImportSpecifier,
        SyntaxKind::ExportSpecifier,
        SyntaxKind::PropertySignature,
    ]);
    pool_accessors!(get_unary, get_unary_at, unary_exprs, UnaryExprData, [
        SyntaxKind::UnaryExpression,
        SyntaxKind::UpdateExpression,
    ]);
    pool_accessors!(get_binary, get_binary_at, binary_exprs, BinaryExprData, [
        SyntaxKind::BinaryExpression,
        SyntaxKind::LogicalExpression,
    ]);
    pool_accessors!(get_assignment, get_assignment_at, assignment_exprs, AssignmentExprData, [
        SyntaxKind::AssignmentExpression,
    ]);
    pool_accessors!(get_conditional, get_conditional_at, conditionals, ConditionalData, [
        SyntaxKind::ConditionalExpression,
        SyntaxKind::IfStatement,
    ]);
    pool_accessors!(get_call, get_call_at, call_exprs, CallExprData, [
        SyntaxKind::CallExpression,
        SyntaxKind::NewExpression,
    ]);
    pool_accessors!(get_member, get_member_at, member_exprs, MemberExprData, [
        SyntaxKind::MemberExpression,
    ]);
    pool_accessors!(get_property, get_property_at, properties, PropertyData, [
        SyntaxKind::Property,
    ]);
    pool_accessors!(get_function, get_function_at, functions, FunctionData, [
        SyntaxKind::FunctionDeclaration,
        SyntaxKind::FunctionExpression,
        SyntaxKind::ArrowFunctionExpression,
        SyntaxKind::EmptyBodyFunctionExpression,
    ]);
    pool_accessors!(get_class, get_class_at, classes, ClassData, [
        SyntaxKind::ClassDeclaration,
        SyntaxKind::ClassExpression,
    ]);
    pool_accessors!(get_class_member, get_class_member_at, class_members, ClassMemberData, [
        SyntaxKind::MethodDefinition,
        SyntaxKind::PropertyDefinition,
    ]);
    pool_accessors!(
        get_variable_declaration,
        get_variable_declaration_at,
        variable_declarations,
        VariableDeclarationData,
        [SyntaxKind::VariableDeclaration]
    );
    pool_accessors!(get_declarator, get_declarator_at, declarators, VariableDeclaratorData, [
        SyntaxKind::VariableDeclarator,
    ]);
    pool_accessors!(get_pattern, get_pattern_at, patterns, PatternData, [
        SyntaxKind::ArrayPattern,
        SyntaxKind::ObjectPattern,
    ]);
    pool_accessors!(get_loop, get_loop_at, loops, LoopData, [
        SyntaxKind::ForStatement,
        SyntaxKind::WhileStatement,
        SyntaxKind::DoWhileStatement,
    ]);
    pool_accessors!(get_for_in_of, get_for_in_of_at, for_in_of, ForInOfData, [
        SyntaxKind::ForInStatement,
        SyntaxKind::ForOfStatement,
    ]);
    pool_accessors!(get_switch, get_switch_at, switches, SwitchData, [
        SyntaxKind::SwitchStatement,
    ]);
    pool_accessors!(get_switch_case, get_switch_case_at, switch_cases, SwitchCaseData, [
        SyntaxKind::SwitchCase,
    ]);
    pool_accessors!(get_try, get_try_at, tries, TryData, [SyntaxKind::TryStatement]);
    pool_accessors!(get_catch_clause, get_catch_clause_at, catch_clauses, CatchClauseData, [
        SyntaxKind::CatchClause,
    ]);
    pool_accessors!(get_import, get_import_at, imports, ImportData, [
        SyntaxKind::ImportDeclaration,
    ]);
    pool_accessors!(get_export, get_export_at, exports, ExportData, [
        SyntaxKind::ExportNamedDeclaration,
        SyntaxKind::ExportAllDeclaration,
    ]);
    pool_accessors!(get_type_ref, get_type_ref_at, type_refs, TypeReferenceData, [
        SyntaxKind::TypeReference,
        SyntaxKind::TypeQuery,
    ]);
    pool_accessors!(get_type_param, get_type_param_at, type_params, TypeParameterData, [
        SyntaxKind::TypeParameter,
    ]);
    pool_accessors!(get_interface, get_interface_at, interfaces, InterfaceData, [
        SyntaxKind::InterfaceDeclaration,
    ]);
    pool_accessors!(get_signature, get_signature_at, signatures, SignatureData, [
        SyntaxKind::MethodSignature,
        SyntaxKind::FunctionType,
    ]);
    pool_accessors!(get_enum, get_enum_at, enums, EnumData, [SyntaxKind::EnumDeclaration]);
    pool_accessors!(get_enum_member, get_enum_member_at, enum_members, EnumMemberData, [
        SyntaxKind::EnumMember,
    ]);
}
