//! The tree walker driving scope analysis.
//!
//! `AnalyzerState` visits every node once. Each node kind either declares a
//! binding, records a reference, opens/closes a scope, toggles type mode,
//! or falls through to the generic child-slot walk. Handlers are split
//! across `state_declarations`, `state_expressions` and `state_types`.

use crate::error::AnalyzeError;
use crate::manager::ScopeManager;
use crate::pattern::{self, PatternBindInfo};
use crate::scopes::{ScopeKind, ScopeTree};
use crate::{AnalyzeOptions, SourceType};
use tscope_syntax::child_slots::child_nodes;
use tscope_syntax::{NodeArena, NodeIndex, SyntaxKind};

pub struct AnalyzerState {
    pub(crate) manager: ScopeManager,
    /// When set, plain identifiers are type names, not value references.
    /// Suspended inside `typeof` type queries, whose operands are values.
    pub(crate) type_mode: bool,
    /// Whether the function currently being visited is a method body.
    pub(crate) inner_method_definition: bool,
}

impl AnalyzerState {
    pub fn new(options: AnalyzeOptions) -> AnalyzerState {
        AnalyzerState {
            manager: ScopeManager::new(options),
            type_mode: false,
            inner_method_definition: false,
        }
    }

    /// Run the walk over `root` and return the completed scope tree.
    pub fn analyze_source_file(
        mut self,
        arena: &NodeArena,
        root: NodeIndex,
    ) -> Result<ScopeTree, AnalyzeError> {
        if arena.kind(root) == Some(SyntaxKind::SourceFile) {
            self.visit(arena, root)?;
        } else {
            // Tolerate fragment roots: analyze inside a synthetic global
            // scope so references still have somewhere to land.
            self.manager.push_scope(arena, ScopeKind::Global, root);
            self.visit(arena, root)?;
            self.manager.close(arena, root);
        }
        Ok(self.manager.finish(arena))
    }

    pub(crate) fn visit(&mut self, arena: &NodeArena, idx: NodeIndex) -> Result<(), AnalyzeError> {
        let Some(node) = arena.get(idx) else {
            return Ok(());
        };
        match node.kind {
            SyntaxKind::SourceFile => self.visit_source_file(arena, idx),
            SyntaxKind::Identifier => self.visit_identifier(arena, idx),

            SyntaxKind::VariableDeclaration => self.visit_variable_declaration(arena, idx),
            kind if kind.is_function_like() => self.visit_function(arena, idx),
            SyntaxKind::ClassDeclaration | SyntaxKind::ClassExpression => {
                self.visit_class(arena, idx)
            }
            SyntaxKind::MethodDefinition | SyntaxKind::PropertyDefinition => {
                self.visit_class_member(arena, idx)
            }
            SyntaxKind::ImportDeclaration => self.visit_import_declaration(arena, idx),
            SyntaxKind::ExportNamedDeclaration => self.visit_export_named(arena, idx),
            SyntaxKind::ExportDefaultDeclaration => self.visit_export_default(arena, idx),
            SyntaxKind::ExportAllDeclaration => Ok(()),

            SyntaxKind::Property => self.visit_property(arena, idx),
            SyntaxKind::MemberExpression => self.visit_member_expression(arena, idx),
            SyntaxKind::AssignmentExpression => self.visit_assignment_expression(arena, idx),
            SyntaxKind::UpdateExpression => self.visit_update_expression(arena, idx),

            SyntaxKind::Block => self.visit_block(arena, idx),
            SyntaxKind::SwitchStatement => self.visit_switch_statement(arena, idx),
            SyntaxKind::CatchClause => self.visit_catch_clause(arena, idx),
            SyntaxKind::WithStatement => self.visit_with_statement(arena, idx),
            SyntaxKind::ForStatement => self.visit_for_statement(arena, idx),
            SyntaxKind::ForInStatement | SyntaxKind::ForOfStatement => {
                self.visit_for_in_of(arena, idx)
            }
            SyntaxKind::LabeledStatement => self.visit_labeled_statement(arena, idx),
            // Labels are not references.
            SyntaxKind::BreakStatement | SyntaxKind::ContinueStatement => Ok(()),

            SyntaxKind::InterfaceDeclaration
            | SyntaxKind::TypeAnnotation
            | SyntaxKind::TypeParameterDeclaration
            | SyntaxKind::TypeReference => self.visit_type_construct(arena, idx),
            SyntaxKind::TypeQuery => self.visit_type_query(arena, idx),
            SyntaxKind::QualifiedName => self.visit_qualified_name(arena, idx),
            SyntaxKind::EnumDeclaration => self.visit_enum_declaration(arena, idx),
            SyntaxKind::EnumMember => self.visit_enum_member(arena, idx),

            _ => self.visit_children(arena, idx),
        }
    }

    /// Generic fallback: visit every child slot in source order.
    pub(crate) fn visit_children(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        for child in child_nodes(arena, idx) {
            self.visit(arena, child)?;
        }
        Ok(())
    }

    /// Visit a child slot that may be absent.
    pub(crate) fn visit_opt(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        if idx.is_some() {
            self.visit(arena, idx)?;
        }
        Ok(())
    }

    /// Decompose a binding pattern. `f` runs once per bound identifier
    /// with the scope manager borrowed; the returned right-hand nodes
    /// (annotations, defaults, computed keys) are for the caller to visit.
    pub(crate) fn bind_pattern(
        &mut self,
        arena: &NodeArena,
        node: NodeIndex,
        mut f: impl FnMut(&mut ScopeManager, NodeIndex, &PatternBindInfo<'_>),
    ) -> Result<Vec<NodeIndex>, AnalyzeError> {
        let manager = &mut self.manager;
        pattern::visit_binding_pattern(arena, node, &mut |identifier, info| {
            f(manager, identifier, info)
        })
    }

    fn visit_source_file(&mut self, arena: &NodeArena, idx: NodeIndex) -> Result<(), AnalyzeError> {
        self.manager.push_scope(arena, ScopeKind::Global, idx);
        if self.manager.options().global_return {
            // The whole program is treated as a function body (CommonJS-
            // style hosts): `var` and `return` behave as in a function.
            self.manager.push_function_scope(arena, idx, false);
        }
        if self.manager.options().source_type == SourceType::Module {
            self.manager.push_scope(arena, ScopeKind::Module, idx);
        }
        self.visit_children(arena, idx)?;
        self.manager.close(arena, idx);
        Ok(())
    }
}
