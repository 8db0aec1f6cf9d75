//! Declaration, scope-opening and module handlers.

use crate::error::AnalyzeError;
use crate::references::reference_flags;
use crate::scopes::ScopeKind;
use crate::state::AnalyzerState;
use crate::variables::{Definition, DefinitionKind};
use tscope_syntax::{NodeArena, NodeIndex, SyntaxKind, VariableDeclKind};

impl AnalyzerState {
    pub(crate) fn visit_variable_declaration(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        let Some(node) = arena.get(idx) else {
            return Ok(());
        };
        let Some(decl) = arena.get_variable_declaration(node) else {
            return Ok(());
        };

        // A type alias declares no values; its body is walked only to find
        // `typeof` queries.
        if decl.kind == VariableDeclKind::Type {
            return self.visit_type_construct(arena, idx);
        }

        if decl.declarations.is_empty() {
            return Err(AnalyzeError::empty_declaration(node.span));
        }

        // `var` hoists into the owning function scope; `let`/`const` bind
        // in the innermost scope.
        let target = if decl.kind == VariableDeclKind::Var {
            self.manager.current_variable_scope()
        } else {
            self.manager.current()
        };

        for &declarator in &decl.declarations {
            let Some(d) = arena.get_declarator_at(declarator) else {
                continue;
            };
            let init = d.init;
            let right_hand = self.bind_pattern(arena, d.name, |manager, pattern, info| {
                if let Some(target) = target {
                    manager.define_variable(
                        arena,
                        target,
                        Definition::with_parent(DefinitionKind::Variable, pattern, declarator, idx),
                    );
                }
                manager.record_default_value_references(arena, pattern, info.assignments, true);
                if init.is_some() {
                    manager.record_reference(arena, pattern, reference_flags::WRITE, init, true);
                }
            })?;
            for node in right_hand {
                self.visit(arena, node)?;
            }
            self.visit_opt(arena, init)?;
        }
        Ok(())
    }

    /// Functions of every flavor. Scope-opening order: function-expression
    /// name scope (named expressions only), type parameters in the
    /// enclosing scope, then the function scope with its parameters,
    /// return type and body. Ambient/overload signatures have no body but
    /// still open the scope so their parameter types are walked.
    pub(crate) fn visit_function(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        let Some(node) = arena.get(idx) else {
            return Ok(());
        };
        let Some(func) = arena.get_function(node) else {
            return Ok(());
        };

        match node.kind {
            SyntaxKind::FunctionDeclaration if func.name.is_some() => {
                // Declared before the function's own scope opens, so the
                // function can reference itself and siblings can reference
                // it.
                if let Some(current) = self.manager.current() {
                    self.manager.define_variable(
                        arena,
                        current,
                        Definition::new(DefinitionKind::FunctionName, func.name, idx),
                    );
                }
            }
            SyntaxKind::FunctionExpression | SyntaxKind::EmptyBodyFunctionExpression
                if func.name.is_some() =>
            {
                self.manager.push_function_expression_name_scope(arena, idx);
            }
            _ => {}
        }

        self.visit_opt(arena, func.type_parameters)?;

        self.manager
            .push_function_scope(arena, idx, self.inner_method_definition);

        for (i, &param) in func.params.iter().enumerate() {
            let right_hand = self.bind_pattern(arena, param, |manager, pattern, info| {
                if let Some(scope) = manager.current() {
                    manager.define_variable(
                        arena,
                        scope,
                        Definition::parameter(pattern, idx, i as u32, info.rest),
                    );
                }
                manager.record_default_value_references(arena, pattern, info.assignments, true);
            })?;
            // Parameter type annotations and default values belong to the
            // function scope.
            for node in right_hand {
                self.visit(arena, node)?;
            }
        }

        self.visit_opt(arena, func.return_type)?;

        if func.body.is_some() {
            if arena.kind(func.body) == Some(SyntaxKind::Block) {
                // The body block is the function scope itself; opening a
                // nested block scope would be redundant.
                self.visit_children(arena, func.body)?;
            } else {
                self.visit(arena, func.body)?;
            }
        }

        self.manager.close(arena, idx);
        Ok(())
    }

    pub(crate) fn visit_class(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        let Some(node) = arena.get(idx) else {
            return Ok(());
        };
        let Some(class) = arena.get_class(node) else {
            return Ok(());
        };

        if node.kind == SyntaxKind::ClassDeclaration
            && class.name.is_some()
            && let Some(current) = self.manager.current()
        {
            self.manager.define_variable(
                arena,
                current,
                Definition::new(DefinitionKind::ClassName, class.name, idx),
            );
        }

        // The superclass expression is evaluated outside the class scope.
        self.visit_opt(arena, class.super_class)?;

        self.manager.push_scope(arena, ScopeKind::Class, idx);
        if class.name.is_some()
            && let Some(current) = self.manager.current()
        {
            // The class name is visible inside its own body, for both
            // declarations and expressions.
            self.manager.define_variable(
                arena,
                current,
                Definition::new(DefinitionKind::ClassName, class.name, idx),
            );
        }
        self.visit_opt(arena, class.type_parameters)?;
        for &implemented in &class.implements {
            self.visit(arena, implemented)?;
        }
        self.visit_opt(arena, class.body)?;
        self.manager.close(arena, idx);
        Ok(())
    }

    pub(crate) fn visit_class_member(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        let Some(node) = arena.get(idx) else {
            return Ok(());
        };
        let Some(member) = arena.get_class_member(node) else {
            return Ok(());
        };
        if member.computed {
            self.visit(arena, member.key)?;
        }
        self.visit_opt(arena, member.type_annotation)?;
        if node.kind == SyntaxKind::MethodDefinition {
            let previous = self.inner_method_definition;
            self.inner_method_definition = true;
            let result = self.visit_opt(arena, member.value);
            self.inner_method_definition = previous;
            result
        } else {
            self.visit_opt(arena, member.value)
        }
    }

    pub(crate) fn visit_block(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        self.manager.push_scope(arena, ScopeKind::Block, idx);
        self.visit_children(arena, idx)?;
        self.manager.close(arena, idx);
        Ok(())
    }

    pub(crate) fn visit_switch_statement(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        let Some(switch) = arena.get_switch_at(idx) else {
            return Ok(());
        };
        self.visit(arena, switch.discriminant)?;
        self.manager.push_scope(arena, ScopeKind::Switch, idx);
        for &case in &switch.cases {
            self.visit(arena, case)?;
        }
        self.manager.close(arena, idx);
        Ok(())
    }

    pub(crate) fn visit_catch_clause(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        let Some(catch) = arena.get_catch_clause_at(idx) else {
            return Ok(());
        };
        let (param, body) = (catch.param, catch.body);
        self.manager.push_scope(arena, ScopeKind::Catch, idx);
        if param.is_some() {
            let right_hand = self.bind_pattern(arena, param, |manager, pattern, info| {
                if let Some(scope) = manager.current() {
                    manager.define_variable(
                        arena,
                        scope,
                        Definition::new(DefinitionKind::CatchBinding, pattern, idx),
                    );
                }
                manager.record_default_value_references(arena, pattern, info.assignments, true);
            })?;
            for node in right_hand {
                self.visit(arena, node)?;
            }
        }
        self.visit(arena, body)?;
        self.manager.close(arena, idx);
        Ok(())
    }

    pub(crate) fn visit_with_statement(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        let Some(with) = arena.get_pair_at(idx) else {
            return Ok(());
        };
        let (object, body) = (with.left, with.right);
        self.visit(arena, object)?;
        self.manager.push_scope(arena, ScopeKind::With, idx);
        self.visit(arena, body)?;
        self.manager.close(arena, idx);
        Ok(())
    }

    pub(crate) fn visit_for_statement(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        let Some(data) = arena.get_loop_at(idx) else {
            return Ok(());
        };
        if let Some(init) = arena.get_variable_declaration_at(data.initializer)
            && init.kind.is_block_scoped()
        {
            // `for (let i = ...)` bindings live in a per-loop scope.
            self.manager.push_scope(arena, ScopeKind::For, idx);
        }
        self.visit_children(arena, idx)?;
        self.manager.close(arena, idx);
        Ok(())
    }

    pub(crate) fn visit_for_in_of(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        let Some(data) = arena.get_for_in_of_at(idx) else {
            return Ok(());
        };
        let (left, right, body) = (data.left, data.right, data.body);

        if let Some(decl) = arena.get_variable_declaration_at(left) {
            if decl.kind.is_block_scoped() {
                self.manager.push_scope(arena, ScopeKind::For, idx);
            }
            self.visit(arena, left)?;
            // The loop writes each iteration value into the binding.
            if let Some(&first) = decl.declarations.nodes.first()
                && let Some(declarator) = arena.get_declarator_at(first)
            {
                self.bind_pattern(arena, declarator.name, |manager, pattern, _info| {
                    manager.record_reference(arena, pattern, reference_flags::WRITE, right, true);
                })?;
            }
        } else {
            let right_hand = self.bind_pattern(arena, left, |manager, pattern, info| {
                manager.record_default_value_references(arena, pattern, info.assignments, false);
                manager.record_reference(arena, pattern, reference_flags::WRITE, right, false);
            })?;
            for node in right_hand {
                self.visit(arena, node)?;
            }
        }

        self.visit(arena, right)?;
        self.visit(arena, body)?;
        self.manager.close(arena, idx);
        Ok(())
    }

    pub(crate) fn visit_labeled_statement(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        let Some(labeled) = arena.get_pair_at(idx) else {
            return Ok(());
        };
        // The label itself is not a reference.
        self.visit(arena, labeled.right)
    }

    pub(crate) fn visit_import_declaration(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        let Some(import) = arena.get_import_at(idx) else {
            return Ok(());
        };
        for &specifier in &import.specifiers {
            let local = match arena.kind(specifier) {
                Some(SyntaxKind::ImportSpecifier) => {
                    arena.get_pair_at(specifier).map(|pair| pair.right)
                }
                Some(
                    SyntaxKind::ImportDefaultSpecifier | SyntaxKind::ImportNamespaceSpecifier,
                ) => arena.get_wrapper_at(specifier).map(|wrapper| wrapper.inner),
                _ => None,
            };
            if let Some(local) = local
                && let Some(current) = self.manager.current()
            {
                self.manager.define_variable(
                    arena,
                    current,
                    Definition::with_parent(DefinitionKind::ImportBinding, local, specifier, idx),
                );
            }
        }
        Ok(())
    }

    pub(crate) fn visit_export_named(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        let Some(export) = arena.get_export_at(idx) else {
            return Ok(());
        };
        if export.declaration.is_some() {
            return self.visit(arena, export.declaration);
        }
        // Re-exports (`export { x } from "m"`) reference the other module's
        // bindings, not this scope's.
        if export.source.is_some() {
            return Ok(());
        }
        for &specifier in &export.specifiers {
            if let Some(pair) = arena.get_pair_at(specifier) {
                let local = pair.left;
                self.manager.record_reference(
                    arena,
                    local,
                    reference_flags::READ,
                    NodeIndex::NONE,
                    false,
                );
            }
        }
        Ok(())
    }

    pub(crate) fn visit_export_default(
        &mut self,
        arena: &NodeArena,
        idx: NodeIndex,
    ) -> Result<(), AnalyzeError> {
        let Some(export) = arena.get_wrapper_at(idx) else {
            return Ok(());
        };
        self.visit_opt(arena, export.inner)
    }
}
