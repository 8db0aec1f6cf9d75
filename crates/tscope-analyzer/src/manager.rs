//! Scope creation, declaration, and bottom-up reference resolution.

use crate::references::{Reference, ReferenceId, reference_flags};
use crate::scopes::{Scope, ScopeId, ScopeKind, ScopeTree};
use crate::variables::{Definition, DefinitionKind, Variable, VariableId};
use crate::AnalyzeOptions;
use tracing::debug;
use tscope_syntax::{NodeArena, NodeIndex, SyntaxKind};

/// Owns the scope tree while it is being built: pushes scopes as the walk
/// enters scoping constructs, and resolves references bottom-up as each
/// scope closes. Handed out as an immutable `ScopeTree` by `finish`.
pub struct ScopeManager {
    options: AnalyzeOptions,
    tree: ScopeTree,
    stack: Vec<ScopeId>,
}

impl ScopeManager {
    pub fn new(options: AnalyzeOptions) -> ScopeManager {
        ScopeManager {
            options,
            tree: ScopeTree::new(),
            stack: Vec::new(),
        }
    }

    pub fn options(&self) -> AnalyzeOptions {
        self.options
    }

    /// The innermost open scope.
    pub fn current(&self) -> Option<ScopeId> {
        self.stack.last().copied()
    }

    /// The scope `var` declarations in the current position hoist into.
    pub fn current_variable_scope(&self) -> Option<ScopeId> {
        self.current().map(|id| self.tree.scope(id).variable_scope)
    }

    /// Open a scope of `kind` over `node` as a child of the current scope.
    /// The very first push produces the global scope.
    pub fn push_scope(&mut self, arena: &NodeArena, kind: ScopeKind, node: NodeIndex) -> ScopeId {
        let parent = self.current();
        let id = ScopeId(self.tree.scopes.len() as u32);
        let parent_strict = parent.is_some_and(|p| self.tree.scope(p).is_strict);
        let is_strict = self.compute_strictness(arena, kind, node, parent_strict);
        let variable_scope = if kind.is_variable_scope() {
            id
        } else {
            parent.map_or(id, |p| self.tree.scope(p).variable_scope)
        };

        self.tree.scopes.push(Scope {
            kind,
            node,
            parent,
            variable_scope,
            is_strict,
            function_expression_scope: false,
            variables: crate::scopes::FxIndexMap::default(),
            references: Vec::new(),
            through: Vec::new(),
            child_scopes: Vec::new(),
            left: Vec::new(),
        });
        if let Some(parent) = parent {
            self.tree.scope_mut(parent).child_scopes.push(id);
        } else {
            self.tree.global = id;
        }
        self.tree.node_scopes.entry(node.0).or_default().push(id);
        self.stack.push(id);
        debug!(?kind, node = node.0, scope = id.0, "enter scope");
        id
    }

    /// Open a function scope. Method bodies are strict regardless of
    /// directives; non-arrow functions implicitly bind `arguments`.
    pub fn push_function_scope(
        &mut self,
        arena: &NodeArena,
        node: NodeIndex,
        is_method: bool,
    ) -> ScopeId {
        let parent_strict = self.current().is_some_and(|p| self.tree.scope(p).is_strict);
        let id = self.push_scope(arena, ScopeKind::Function, node);
        if is_method && !parent_strict {
            self.tree.scope_mut(id).is_strict = true;
        }
        let is_arrow = arena.kind(node) == Some(SyntaxKind::ArrowFunctionExpression);
        if !is_arrow
            && let Some(arguments) = arena.interner().lookup("arguments")
        {
            self.declare_implicit(id, arguments);
        }
        id
    }

    /// Open the one-variable scope holding a named function expression's
    /// own name. The name is visible inside the function (including its
    /// parameter defaults), not in the enclosing scope.
    pub fn push_function_expression_name_scope(
        &mut self,
        arena: &NodeArena,
        node: NodeIndex,
    ) -> ScopeId {
        let id = self.push_scope(arena, ScopeKind::FunctionExpressionName, node);
        self.tree.scope_mut(id).function_expression_scope = true;
        if let Some(func) = arena.get_function_at(node)
            && func.name.is_some()
        {
            let name = func.name;
            self.define_variable(arena, id, Definition::new(DefinitionKind::FunctionName, name, node));
        }
        id
    }

    /// Close every open scope rooted at `node`, innermost first. Closing a
    /// scope resolves its pending references; the ones that stay
    /// unresolved go to its `through` list and are re-offered to the
    /// parent.
    pub fn close(&mut self, arena: &NodeArena, node: NodeIndex) {
        while let Some(&top) = self.stack.last() {
            if self.tree.scope(top).node != node {
                break;
            }
            self.close_current(arena);
        }
    }

    fn close_current(&mut self, arena: &NodeArena) {
        let Some(id) = self.stack.pop() else {
            return;
        };
        let left = std::mem::take(&mut self.tree.scope_mut(id).left);
        let parent = self.tree.scope(id).parent;
        let mut unresolved = 0usize;
        for ref_id in left {
            if self.try_resolve(arena, id, ref_id) {
                continue;
            }
            self.tree.scope_mut(id).through.push(ref_id);
            if let Some(parent) = parent {
                self.tree.scope_mut(parent).left.push(ref_id);
            }
            unresolved += 1;
        }
        debug!(scope = id.0, unresolved, "close scope");
    }

    fn try_resolve(&mut self, arena: &NodeArena, scope_id: ScopeId, ref_id: ReferenceId) -> bool {
        let identifier = self.tree.reference(ref_id).identifier;
        let Some(name) = arena.identifier_atom(identifier) else {
            return false;
        };
        let Some(var_id) = self.tree.variable_named(scope_id, name) else {
            return false;
        };
        if !self.is_valid_resolution(arena, scope_id, ref_id, var_id) {
            return false;
        }
        self.tree.reference_mut(ref_id).resolved = Some(var_id);
        self.tree.variable_mut(var_id).references.push(ref_id);
        true
    }

    /// A reference in a function's parameter region (default values,
    /// annotations) must not resolve to a variable whose definitions all
    /// sit inside the body: `function f(a = b) { var b; }` leaves `a`'s
    /// default referencing an outer (or undeclared) `b`.
    fn is_valid_resolution(
        &self,
        arena: &NodeArena,
        scope_id: ScopeId,
        ref_id: ReferenceId,
        var_id: VariableId,
    ) -> bool {
        let scope = self.tree.scope(scope_id);
        if scope.kind != ScopeKind::Function {
            return true;
        }
        // A global-return scope spans the whole program; there is no
        // parameter region.
        let Some(func) = arena.get_function_at(scope.node) else {
            return true;
        };
        let Some(body) = arena.get(func.body) else {
            return true;
        };
        if body.kind != SyntaxKind::Block {
            return true;
        }
        let body_start = body.span.start;

        let variable = self.tree.variable(var_id);
        if variable.scope != scope_id || variable.defs.is_empty() {
            return true;
        }
        let reference = self.tree.reference(ref_id);
        let Some(ref_span) = arena.span(reference.identifier) else {
            return true;
        };
        if ref_span.start >= body_start {
            return true;
        }
        !variable.defs.iter().all(|def| {
            arena
                .span(def.name)
                .is_some_and(|span| span.start >= body_start)
        })
    }

    /// Insert (or extend) the variable for `def`'s name in `scope`.
    /// Non-identifier names (string-literal enum members) bind nothing.
    pub fn define_variable(&mut self, arena: &NodeArena, scope: ScopeId, def: Definition) {
        let Some(name) = arena.identifier_atom(def.name) else {
            return;
        };
        let var_id = match self.tree.variable_named(scope, name) {
            Some(existing) => existing,
            None => {
                let id = VariableId(self.tree.variables.len() as u32);
                self.tree.variables.push(Variable {
                    name,
                    scope,
                    defs: Vec::new(),
                    identifiers: Vec::new(),
                    references: Vec::new(),
                });
                self.tree.scope_mut(scope).variables.insert(name, id);
                id
            }
        };
        let name_node = def.name;
        self.tree.variable_mut(var_id).defs.push(def);
        self.tree.variable_mut(var_id).identifiers.push(name_node);
        debug!(
            scope = scope.0,
            name = arena.interner().resolve(name),
            kind = ?def.kind,
            "declare variable"
        );
    }

    /// Declare a definition-less binding (`arguments`).
    fn declare_implicit(&mut self, scope: ScopeId, name: tscope_common::Atom) {
        if self.tree.variable_named(scope, name).is_some() {
            return;
        }
        let id = VariableId(self.tree.variables.len() as u32);
        self.tree.variables.push(Variable {
            name,
            scope,
            defs: Vec::new(),
            identifiers: Vec::new(),
            references: Vec::new(),
        });
        self.tree.scope_mut(scope).variables.insert(name, id);
    }

    /// Record a use of `identifier` in the current scope. Non-identifier
    /// nodes are ignored, matching how destructuring targets funnel
    /// arbitrary nodes through here.
    pub fn record_reference(
        &mut self,
        arena: &NodeArena,
        identifier: NodeIndex,
        flags: u32,
        write_expr: NodeIndex,
        init: bool,
    ) {
        let Some(from) = self.current() else {
            return;
        };
        if arena.kind(identifier) != Some(SyntaxKind::Identifier) {
            return;
        }
        let id = ReferenceId(self.tree.references.len() as u32);
        self.tree.references.push(Reference {
            identifier,
            from,
            flags,
            write_expr,
            init,
            resolved: None,
        });
        let scope = self.tree.scope_mut(from);
        scope.references.push(id);
        scope.left.push(id);
    }

    /// Record the write reference a default value implies for its binding:
    /// `(a = expr)` writes `expr` into `a`.
    pub fn record_default_value_references(
        &mut self,
        arena: &NodeArena,
        pattern: NodeIndex,
        assignments: &[NodeIndex],
        init: bool,
    ) {
        for &assignment in assignments {
            if let Some(pair) = arena.get_pair_at(assignment) {
                let right = pair.right;
                self.record_reference(arena, pattern, reference_flags::WRITE, right, init);
            }
        }
    }

    /// Finish the build and hand the tree to the caller. A well-formed
    /// walk has closed every scope already; stragglers are closed here so
    /// the result is always fully resolved.
    pub fn finish(mut self, arena: &NodeArena) -> ScopeTree {
        while !self.stack.is_empty() {
            self.close_current(arena);
        }
        self.tree
    }

    fn compute_strictness(
        &self,
        arena: &NodeArena,
        kind: ScopeKind,
        node: NodeIndex,
        parent_strict: bool,
    ) -> bool {
        if parent_strict {
            return true;
        }
        match kind {
            ScopeKind::Module | ScopeKind::Class => true,
            ScopeKind::Function => body_has_use_strict(arena, node),
            ScopeKind::Global => self.options.implied_strict || body_has_use_strict(arena, node),
            _ => false,
        }
    }
}

/// Whether the statement body of `node` (a source file, or a function with
/// a block body) starts with a `"use strict"` directive prologue entry.
fn body_has_use_strict(arena: &NodeArena, node: NodeIndex) -> bool {
    let statements = match arena.kind(node) {
        Some(SyntaxKind::SourceFile) => arena.get_list_at(node),
        Some(kind) if kind.is_function_like() => arena
            .get_function_at(node)
            .and_then(|func| arena.get_list_at(func.body)),
        _ => None,
    };
    let Some(statements) = statements else {
        return false;
    };
    for &stmt in &statements.nodes {
        let Some(expr) = arena
            .get_wrapper_at(stmt)
            .filter(|_| arena.kind(stmt) == Some(SyntaxKind::ExpressionStatement))
            .map(|wrapper| wrapper.inner)
        else {
            // End of the directive prologue.
            return false;
        };
        if arena.kind(expr) != Some(SyntaxKind::StringLiteral) {
            return false;
        }
        if let Some(literal) = arena.get_literal_at(expr)
            && arena.interner().resolve(literal.atom) == "use strict"
        {
            return true;
        }
    }
    false
}
