//! Per-kind child slots.
//!
//! `each_child` enumerates every child of a node in source order. This is
//! the generic-traversal contract: any consumer that has no dedicated
//! handling for a node kind can still walk through it without knowing its
//! shape. Every `SyntaxKind` must be covered here, including the type-only
//! constructs; a kind falling through to the empty arm must genuinely be a
//! leaf.

use crate::base::NodeIndex;
use crate::kind::SyntaxKind;
use crate::node::NodeArena;

/// Invoke `f` once per present child of `idx`, in source order. Absent
/// optional slots and array-pattern holes are skipped.
pub fn each_child(arena: &NodeArena, idx: NodeIndex, f: &mut impl FnMut(NodeIndex)) {
    let Some(node) = arena.get(idx) else {
        return;
    };

    let one = |slot: NodeIndex, f: &mut dyn FnMut(NodeIndex)| {
        if slot.is_some() {
            f(slot);
        }
    };

    match node.kind {
        SyntaxKind::SourceFile
        | SyntaxKind::Block
        | SyntaxKind::ClassBody
        | SyntaxKind::ArrayExpression
        | SyntaxKind::ObjectExpression
        | SyntaxKind::SequenceExpression
        | SyntaxKind::TemplateLiteral
        | SyntaxKind::TypeParameterDeclaration
        | SyntaxKind::InterfaceBody
        | SyntaxKind::UnionType => {
            if let Some(list) = arena.get_list(node) {
                for &child in &list.nodes {
                    one(child, f);
                }
            }
        }

        SyntaxKind::Identifier => {
            if let Some(data) = arena.get_identifier(node) {
                one(data.type_annotation, f);
            }
        }

        SyntaxKind::NumericLiteral
        | SyntaxKind::StringLiteral
        | SyntaxKind::BooleanLiteral
        | SyntaxKind::NullLiteral
        | SyntaxKind::ThisExpression
        | SyntaxKind::EmptyStatement
        | SyntaxKind::DebuggerStatement
        | SyntaxKind::KeywordType => {}

        SyntaxKind::ExpressionStatement
        | SyntaxKind::ReturnStatement
        | SyntaxKind::ThrowStatement
        | SyntaxKind::SpreadElement
        | SyntaxKind::RestElement
        | SyntaxKind::AwaitExpression
        | SyntaxKind::BreakStatement
        | SyntaxKind::ContinueStatement
        | SyntaxKind::ExportDefaultDeclaration
        | SyntaxKind::ImportDefaultSpecifier
        | SyntaxKind::ImportNamespaceSpecifier
        | SyntaxKind::TypeAnnotation
        | SyntaxKind::ArrayType => {
            if let Some(data) = arena.get_wrapper(node) {
                one(data.inner, f);
            }
        }

        SyntaxKind::AssignmentPattern
        | SyntaxKind::WithStatement
        | SyntaxKind::LabeledStatement
        | SyntaxKind::QualifiedName
        | SyntaxKind::ImportSpecifier
        | SyntaxKind::ExportSpecifier
        | SyntaxKind::PropertySignature => {
            if let Some(data) = arena.get_pair(node) {
                one(data.left, f);
                one(data.right, f);
            }
        }

        SyntaxKind::UnaryExpression | SyntaxKind::UpdateExpression => {
            if let Some(data) = arena.get_unary(node) {
                one(data.operand, f);
            }
        }

        SyntaxKind::BinaryExpression | SyntaxKind::LogicalExpression => {
            if let Some(data) = arena.get_binary(node) {
                one(data.left, f);
                one(data.right, f);
            }
        }

        SyntaxKind::AssignmentExpression => {
            if let Some(data) = arena.get_assignment(node) {
                one(data.left, f);
                one(data.right, f);
            }
        }

        SyntaxKind::ConditionalExpression | SyntaxKind::IfStatement => {
            if let Some(data) = arena.get_conditional(node) {
                one(data.test, f);
                one(data.consequent, f);
                one(data.alternate, f);
            }
        }

        SyntaxKind::CallExpression | SyntaxKind::NewExpression => {
            if let Some(data) = arena.get_call(node) {
                one(data.callee, f);
                for &arg in &data.type_arguments {
                    one(arg, f);
                }
                for &arg in &data.arguments {
                    one(arg, f);
                }
            }
        }

        SyntaxKind::MemberExpression => {
            if let Some(data) = arena.get_member(node) {
                one(data.object, f);
                one(data.property, f);
            }
        }

        SyntaxKind::Property => {
            if let Some(data) = arena.get_property(node) {
                one(data.key, f);
                one(data.value, f);
            }
        }

        SyntaxKind::FunctionDeclaration
        | SyntaxKind::FunctionExpression
        | SyntaxKind::ArrowFunctionExpression
        | SyntaxKind::EmptyBodyFunctionExpression => {
            if let Some(data) = arena.get_function(node) {
                one(data.name, f);
                one(data.type_parameters, f);
                for &param in &data.params {
                    one(param, f);
                }
                one(data.return_type, f);
                one(data.body, f);
            }
        }

        SyntaxKind::ClassDeclaration | SyntaxKind::ClassExpression => {
            if let Some(data) = arena.get_class(node) {
                one(data.name, f);
                one(data.type_parameters, f);
                one(data.super_class, f);
                for &implemented in &data.implements {
                    one(implemented, f);
                }
                one(data.body, f);
            }
        }

        SyntaxKind::MethodDefinition | SyntaxKind::PropertyDefinition => {
            if let Some(data) = arena.get_class_member(node) {
                one(data.key, f);
                one(data.type_annotation, f);
                one(data.value, f);
            }
        }

        SyntaxKind::VariableDeclaration => {
            if let Some(data) = arena.get_variable_declaration(node) {
                for &decl in &data.declarations {
                    one(decl, f);
                }
            }
        }

        SyntaxKind::VariableDeclarator => {
            if let Some(data) = arena.get_declarator(node) {
                one(data.name, f);
                one(data.init, f);
            }
        }

        SyntaxKind::ArrayPattern | SyntaxKind::ObjectPattern => {
            if let Some(data) = arena.get_pattern(node) {
                for &element in &data.elements {
                    one(element, f);
                }
                one(data.type_annotation, f);
            }
        }

        SyntaxKind::ForStatement | SyntaxKind::WhileStatement => {
            if let Some(data) = arena.get_loop(node) {
                one(data.initializer, f);
                one(data.test, f);
                one(data.update, f);
                one(data.body, f);
            }
        }

        // do/while runs its body before its test.
        SyntaxKind::DoWhileStatement => {
            if let Some(data) = arena.get_loop(node) {
                one(data.body, f);
                one(data.test, f);
            }
        }

        SyntaxKind::ForInStatement | SyntaxKind::ForOfStatement => {
            if let Some(data) = arena.get_for_in_of(node) {
                one(data.left, f);
                one(data.right, f);
                one(data.body, f);
            }
        }

        SyntaxKind::SwitchStatement => {
            if let Some(data) = arena.get_switch(node) {
                one(data.discriminant, f);
                for &case in &data.cases {
                    one(case, f);
                }
            }
        }

        SyntaxKind::SwitchCase => {
            if let Some(data) = arena.get_switch_case(node) {
                one(data.test, f);
                for &stmt in &data.statements {
                    one(stmt, f);
                }
            }
        }

        SyntaxKind::TryStatement => {
            if let Some(data) = arena.get_try(node) {
                one(data.block, f);
                one(data.handler, f);
                one(data.finalizer, f);
            }
        }

        SyntaxKind::CatchClause => {
            if let Some(data) = arena.get_catch_clause(node) {
                one(data.param, f);
                one(data.body, f);
            }
        }

        SyntaxKind::ImportDeclaration => {
            if let Some(data) = arena.get_import(node) {
                for &specifier in &data.specifiers {
                    one(specifier, f);
                }
                one(data.source, f);
            }
        }

        SyntaxKind::ExportNamedDeclaration | SyntaxKind::ExportAllDeclaration => {
            if let Some(data) = arena.get_export(node) {
                one(data.declaration, f);
                for &specifier in &data.specifiers {
                    one(specifier, f);
                }
                one(data.source, f);
            }
        }

        SyntaxKind::TypeReference | SyntaxKind::TypeQuery => {
            if let Some(data) = arena.get_type_ref(node) {
                one(data.type_name, f);
                for &arg in &data.type_arguments {
                    one(arg, f);
                }
            }
        }

        SyntaxKind::TypeParameter => {
            if let Some(data) = arena.get_type_param(node) {
                one(data.name, f);
                one(data.constraint, f);
                one(data.default, f);
            }
        }

        SyntaxKind::InterfaceDeclaration => {
            if let Some(data) = arena.get_interface(node) {
                one(data.name, f);
                one(data.type_parameters, f);
                for &extended in &data.extends {
                    one(extended, f);
                }
                one(data.body, f);
            }
        }

        SyntaxKind::MethodSignature | SyntaxKind::FunctionType => {
            if let Some(data) = arena.get_signature(node) {
                one(data.key, f);
                one(data.type_parameters, f);
                for &param in &data.params {
                    one(param, f);
                }
                one(data.return_type, f);
            }
        }

        SyntaxKind::EnumDeclaration => {
            if let Some(data) = arena.get_enum(node) {
                one(data.name, f);
                for &member in &data.members {
                    one(member, f);
                }
            }
        }

        SyntaxKind::EnumMember => {
            if let Some(data) = arena.get_enum_member(node) {
                one(data.name, f);
                one(data.initializer, f);
            }
        }
    }
}

/// Collect the children of a node into a vector.
pub fn child_nodes(arena: &NodeArena, idx: NodeIndex) -> Vec<NodeIndex> {
    let mut out = Vec::new();
    each_child(arena, idx, &mut |child| out.push(child));
    out
}
