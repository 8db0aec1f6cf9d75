//! Shared test fixtures: a small AST builder standing in for the syntax
//! frontend, plus lookup helpers over analysis results.

#![allow(dead_code)]

use tscope_analyzer::{
    AnalyzeOptions, Reference, ScopeId, ScopeKind, ScopeTree, SourceType, VariableId, analyze,
};
use tscope_common::{Atom, Span};
use tscope_syntax::{NodeArena, NodeIndex, VariableDeclKind};

/// Builds trees the way a frontend would: bottom-up, with spans advancing
/// in creation order. Create nodes in source order and positional rules
/// (directive prologues, parameter regions) hold; use `at` to pin exact
/// positions where a test depends on them.
pub struct AstBuilder {
    pub arena: NodeArena,
    cursor: u32,
}

impl AstBuilder {
    pub fn new() -> AstBuilder {
        AstBuilder {
            arena: NodeArena::new(),
            cursor: 0,
        }
    }

    /// Pin the span cursor to a byte position.
    pub fn at(&mut self, position: u32) {
        self.cursor = position;
    }

    pub fn span(&mut self) -> Span {
        let start = self.cursor;
        self.cursor += 4;
        Span::new(start, start + 3)
    }

    pub fn ident(&mut self, name: &str) -> NodeIndex {
        let span = self.span();
        self.arena.add_identifier(name, span)
    }

    pub fn typed_ident(&mut self, name: &str, annotation: NodeIndex) -> NodeIndex {
        let span = self.span();
        self.arena.add_typed_identifier(name, annotation, span)
    }

    pub fn num(&mut self, text: &str) -> NodeIndex {
        let span = self.span();
        self.arena.add_numeric_literal(text, span)
    }

    pub fn string(&mut self, text: &str) -> NodeIndex {
        let span = self.span();
        self.arena.add_string_literal(text, span)
    }

    pub fn expr_stmt(&mut self, expression: NodeIndex) -> NodeIndex {
        let span = self.span();
        self.arena.add_expression_statement(expression, span)
    }

    pub fn block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        let span = self.span();
        self.arena.add_block(statements, span)
    }

    pub fn source(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        let span = self.span();
        self.arena.add_source_file(statements, span)
    }

    pub fn declarator(&mut self, name: NodeIndex, init: NodeIndex) -> NodeIndex {
        let span = self.span();
        self.arena.add_variable_declarator(name, init, span)
    }

    /// A one-declarator declaration binding a plain identifier.
    pub fn decl(&mut self, kind: VariableDeclKind, name: &str, init: NodeIndex) -> NodeIndex {
        let name = self.ident(name);
        self.decl_pattern(kind, name, init)
    }

    /// A one-declarator declaration binding an arbitrary pattern.
    pub fn decl_pattern(
        &mut self,
        kind: VariableDeclKind,
        pattern: NodeIndex,
        init: NodeIndex,
    ) -> NodeIndex {
        let declarator = self.declarator(pattern, init);
        let span = self.span();
        self.arena.add_variable_declaration(kind, vec![declarator], span)
    }

    pub fn func_decl(
        &mut self,
        name: &str,
        params: Vec<NodeIndex>,
        body_statements: Vec<NodeIndex>,
    ) -> NodeIndex {
        let name = self.ident(name);
        let body = self.block(body_statements);
        let span = self.span();
        self.arena.add_function_declaration(
            name,
            NodeIndex::NONE,
            params,
            NodeIndex::NONE,
            body,
            span,
        )
    }

    pub fn call(&mut self, callee: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        let span = self.span();
        self.arena.add_call_expression(callee, vec![], arguments, span)
    }

    pub fn binary(&mut self, op: &str, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        let span = self.span();
        self.arena.add_binary_expression(op, left, right, span)
    }

    pub fn ret(&mut self, argument: NodeIndex) -> NodeIndex {
        let span = self.span();
        self.arena.add_return_statement(argument, span)
    }
}

/// A completed analysis bundled with the arena the tree points into.
pub struct Analysis {
    pub arena: NodeArena,
    pub tree: ScopeTree,
}

pub fn analyze_script(builder: AstBuilder, root: NodeIndex) -> Analysis {
    analyze_with(builder, root, AnalyzeOptions::default())
}

pub fn analyze_module(builder: AstBuilder, root: NodeIndex) -> Analysis {
    analyze_with(builder, root, AnalyzeOptions {
        source_type: SourceType::Module,
        ..AnalyzeOptions::default()
    })
}

pub fn analyze_with(builder: AstBuilder, root: NodeIndex, options: AnalyzeOptions) -> Analysis {
    let tree = analyze(&builder.arena, root, options).expect("analysis should succeed");
    Analysis {
        arena: builder.arena,
        tree,
    }
}

impl Analysis {
    pub fn atom(&self, name: &str) -> Atom {
        self.arena
            .interner()
            .lookup(name)
            .unwrap_or_else(|| panic!("name {name:?} was never interned"))
    }

    pub fn global(&self) -> ScopeId {
        self.tree.global
    }

    /// The first scope of `kind`, in creation order.
    pub fn scope_of_kind(&self, kind: ScopeKind) -> ScopeId {
        self.tree
            .scopes
            .iter()
            .position(|scope| scope.kind == kind)
            .map(|i| ScopeId(i as u32))
            .unwrap_or_else(|| panic!("no {kind:?} scope in {:?}", self.kinds()))
    }

    pub fn kinds(&self) -> Vec<ScopeKind> {
        self.tree.scopes.iter().map(|scope| scope.kind).collect()
    }

    pub fn var_in(&self, scope: ScopeId, name: &str) -> VariableId {
        self.try_var_in(scope, name)
            .unwrap_or_else(|| panic!("variable {name:?} not declared in scope {scope:?}"))
    }

    pub fn try_var_in(&self, scope: ScopeId, name: &str) -> Option<VariableId> {
        let atom = self.arena.interner().lookup(name)?;
        self.tree.variable_named(scope, atom)
    }

    /// Declared names of a scope, in insertion order.
    pub fn names_in(&self, scope: ScopeId) -> Vec<&str> {
        self.tree
            .scope(scope)
            .variables
            .keys()
            .map(|&atom| self.arena.interner().resolve(atom))
            .collect()
    }

    pub fn reference_to(&self, identifier: NodeIndex) -> &Reference {
        self.try_reference_to(identifier)
            .expect("no reference was recorded for this identifier")
    }

    pub fn try_reference_to(&self, identifier: NodeIndex) -> Option<&Reference> {
        self.tree
            .references
            .iter()
            .find(|reference| reference.identifier == identifier)
    }

    /// The variable an identifier occurrence resolved to, if any.
    pub fn resolved_to(&self, identifier: NodeIndex) -> Option<VariableId> {
        self.try_reference_to(identifier)
            .and_then(|reference| reference.resolved)
    }

    /// Names of references that escaped the global scope, in order.
    pub fn unresolved_names(&self) -> Vec<&str> {
        self.tree
            .unresolved()
            .iter()
            .map(|&id| {
                self.arena
                    .identifier_text(self.tree.reference(id).identifier)
                    .unwrap_or("<non-identifier>")
            })
            .collect()
    }
}
