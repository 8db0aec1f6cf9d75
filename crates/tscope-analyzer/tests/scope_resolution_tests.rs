//! Core resolution behavior: shadowing, hoisting, function scopes, and the
//! fate of references that never find a declaration.

mod common;

use common::{AstBuilder, analyze_script, analyze_with};
use tscope_analyzer::{AnalyzeOptions, DefinitionKind, ScopeKind, analyze};
use tscope_syntax::{NodeIndex, VariableDeclKind};

#[test]
fn test_undeclared_global_stays_in_through() {
    let mut b = AstBuilder::new();
    let x = b.ident("x");
    let stmt = b.expr_stmt(x);
    let root = b.source(vec![stmt]);

    let a = analyze_script(b, root);
    assert_eq!(a.unresolved_names(), vec!["x"]);
    assert_eq!(a.reference_to(x).resolved, None);
    assert!(a.reference_to(x).is_read_only());
}

#[test]
fn test_shadowing_resolves_to_nearest_declaration() {
    // let x = 1; { let x = 2; x; } x;
    let mut b = AstBuilder::new();
    let outer_decl = b.decl(VariableDeclKind::Let, "x", NodeIndex::NONE);
    let inner_decl = b.decl(VariableDeclKind::Let, "x", NodeIndex::NONE);
    let inner_ref = b.ident("x");
    let inner_stmt = b.expr_stmt(inner_ref);
    let block = b.block(vec![inner_decl, inner_stmt]);
    let outer_ref = b.ident("x");
    let outer_stmt = b.expr_stmt(outer_ref);
    let root = b.source(vec![outer_decl, block, outer_stmt]);

    let a = analyze_script(b, root);
    let block_scope = a.scope_of_kind(ScopeKind::Block);
    let inner_var = a.var_in(block_scope, "x");
    let outer_var = a.var_in(a.global(), "x");
    assert_ne!(inner_var, outer_var);
    assert_eq!(a.resolved_to(inner_ref), Some(inner_var));
    assert_eq!(a.resolved_to(outer_ref), Some(outer_var));
    assert!(a.unresolved_names().is_empty());
}

#[test]
fn test_var_hoists_out_of_blocks_to_function_scope() {
    // function f() { a; { var a = 1; } }
    let mut b = AstBuilder::new();
    let early_ref = b.ident("a");
    let early_stmt = b.expr_stmt(early_ref);
    let one = b.num("1");
    let decl = b.decl(VariableDeclKind::Var, "a", one);
    let block = b.block(vec![decl]);
    let func = b.func_decl("f", vec![], vec![early_stmt, block]);
    let root = b.source(vec![func]);

    let a = analyze_script(b, root);
    let function_scope = a.scope_of_kind(ScopeKind::Function);
    let block_scope = a.scope_of_kind(ScopeKind::Block);

    // The binding lives in the function scope, not the block.
    let var = a.var_in(function_scope, "a");
    assert!(a.try_var_in(block_scope, "a").is_none());
    // The textually-earlier reference still resolves.
    assert_eq!(a.resolved_to(early_ref), Some(var));
    assert!(a.unresolved_names().is_empty());
}

#[test]
fn test_block_scoped_declaration_does_not_hoist() {
    // function f() { a; { let a = 1; } }
    let mut b = AstBuilder::new();
    let early_ref = b.ident("a");
    let early_stmt = b.expr_stmt(early_ref);
    let one = b.num("1");
    let decl = b.decl(VariableDeclKind::Let, "a", one);
    let block = b.block(vec![decl]);
    let func = b.func_decl("f", vec![], vec![early_stmt, block]);
    let root = b.source(vec![func]);

    let a = analyze_script(b, root);
    let block_scope = a.scope_of_kind(ScopeKind::Block);
    assert!(a.try_var_in(block_scope, "a").is_some());
    // The function-scope reference never meets the block-scoped binding.
    assert_eq!(a.unresolved_names(), vec!["a"]);
    assert_eq!(a.resolved_to(early_ref), None);
}

#[test]
fn test_round_trip_default_parameter() {
    // function f(a, b = a) { return a + b; }
    let mut b = AstBuilder::new();
    let param_a = b.ident("a");
    let param_b = b.ident("b");
    let default_ref = b.ident("a");
    let sp = b.span();
    let b_with_default = b.arena.add_assignment_pattern(param_b, default_ref, sp);
    let body_a = b.ident("a");
    let body_b = b.ident("b");
    let sum = b.binary("+", body_a, body_b);
    let ret = b.ret(sum);
    let func = b.func_decl("f", vec![param_a, b_with_default], vec![ret]);
    let root = b.source(vec![func]);

    let a = analyze_script(b, root);
    let function_scope = a.scope_of_kind(ScopeKind::Function);
    assert_eq!(a.names_in(function_scope), vec!["arguments", "a", "b"]);

    let var_a = a.var_in(function_scope, "a");
    let var_b = a.var_in(function_scope, "b");
    assert_eq!(a.tree.variable(var_a).defs[0].kind, DefinitionKind::Parameter);
    assert_eq!(a.tree.variable(var_b).defs[0].index, Some(1));

    // The default value reads the earlier parameter...
    assert_eq!(a.resolved_to(default_ref), Some(var_a));
    // ...and implies an initializing write of `b`.
    let default_write = a.reference_to(param_b);
    assert!(default_write.is_write_only());
    assert!(default_write.init);
    assert_eq!(default_write.write_expr, default_ref);

    assert_eq!(a.resolved_to(body_a), Some(var_a));
    assert_eq!(a.resolved_to(body_b), Some(var_b));
    assert!(a.unresolved_names().is_empty());
}

#[test]
fn test_function_name_visible_to_self_and_siblings() {
    // function f() { f(); } f();
    let mut b = AstBuilder::new();
    let inner_ref = b.ident("f");
    let inner_call = b.call(inner_ref, vec![]);
    let inner_stmt = b.expr_stmt(inner_call);
    let func = b.func_decl("f", vec![], vec![inner_stmt]);
    let outer_ref = b.ident("f");
    let outer_call = b.call(outer_ref, vec![]);
    let outer_stmt = b.expr_stmt(outer_call);
    let root = b.source(vec![func, outer_stmt]);

    let a = analyze_script(b, root);
    let var = a.var_in(a.global(), "f");
    assert_eq!(a.tree.variable(var).defs[0].kind, DefinitionKind::FunctionName);
    assert_eq!(a.resolved_to(inner_ref), Some(var));
    assert_eq!(a.resolved_to(outer_ref), Some(var));
}

#[test]
fn test_function_expression_name_scope() {
    // const g = function f() { f(); }; f;
    let mut b = AstBuilder::new();
    let name = b.ident("f");
    let inner_ref = b.ident("f");
    let inner_call = b.call(inner_ref, vec![]);
    let inner_stmt = b.expr_stmt(inner_call);
    let body = b.block(vec![inner_stmt]);
    let sp = b.span();
    let func_expr = b.arena.add_function_expression(
        name,
        NodeIndex::NONE,
        vec![],
        NodeIndex::NONE,
        body,
        sp,
    );
    let decl = b.decl(VariableDeclKind::Const, "g", func_expr);
    let outer_ref = b.ident("f");
    let outer_stmt = b.expr_stmt(outer_ref);
    let root = b.source(vec![decl, outer_stmt]);

    let a = analyze_script(b, root);
    let name_scope = a.scope_of_kind(ScopeKind::FunctionExpressionName);
    assert!(a.tree.scope(name_scope).function_expression_scope);

    // The name is visible inside the expression, not outside of it.
    let var = a.var_in(name_scope, "f");
    assert_eq!(a.resolved_to(inner_ref), Some(var));
    assert_eq!(a.unresolved_names(), vec!["f"]);
    assert_eq!(a.resolved_to(outer_ref), None);
}

#[test]
fn test_var_redeclaration_accumulates_definitions() {
    // var a = 1; var a = 2;
    let mut b = AstBuilder::new();
    let one = b.num("1");
    let first = b.decl(VariableDeclKind::Var, "a", one);
    let two = b.num("2");
    let second = b.decl(VariableDeclKind::Var, "a", two);
    let root = b.source(vec![first, second]);

    let a = analyze_script(b, root);
    assert_eq!(a.names_in(a.global()), vec!["a"]);
    let var = a.var_in(a.global(), "a");
    assert_eq!(a.tree.variable(var).defs.len(), 2);
    assert_eq!(a.tree.variable(var).identifiers.len(), 2);
}

#[test]
fn test_parameter_region_cannot_see_body_vars() {
    // function f(a = b) { var b; b; }
    //          9^  11^  18^ body    (byte positions matter here)
    let mut b = AstBuilder::new();
    b.at(9);
    let name = b.ident("f");
    b.at(11);
    let param_a = b.ident("a");
    b.at(15);
    let default_ref = b.ident("b");
    let sp = b.span();
    let pattern = b.arena.add_assignment_pattern(param_a, default_ref, sp);
    b.at(24);
    let body_decl = b.decl(VariableDeclKind::Var, "b", NodeIndex::NONE);
    b.at(32);
    let body_ref = b.ident("b");
    let body_stmt = b.expr_stmt(body_ref);
    b.at(18);
    let body = b.block(vec![body_decl, body_stmt]);
    b.at(0);
    let sp = b.span();
    let func = b.arena.add_function_declaration(
        name,
        NodeIndex::NONE,
        vec![pattern],
        NodeIndex::NONE,
        body,
        sp,
    );
    let root = b.source(vec![func]);

    let a = analyze_script(b, root);
    let function_scope = a.scope_of_kind(ScopeKind::Function);
    let var_b = a.var_in(function_scope, "b");

    // The default value cannot reach the body-hoisted `var b`...
    assert_eq!(a.resolved_to(default_ref), None);
    assert_eq!(a.unresolved_names(), vec!["b"]);
    // ...but body references resolve as usual.
    assert_eq!(a.resolved_to(body_ref), Some(var_b));
}

#[test]
fn test_arguments_is_implicitly_bound() {
    // function f() { arguments; }
    let mut b = AstBuilder::new();
    let args_ref = b.ident("arguments");
    let stmt = b.expr_stmt(args_ref);
    let func = b.func_decl("f", vec![], vec![stmt]);
    let root = b.source(vec![func]);

    let a = analyze_script(b, root);
    let function_scope = a.scope_of_kind(ScopeKind::Function);
    let var = a.var_in(function_scope, "arguments");
    assert!(a.tree.variable(var).defs.is_empty());
    assert_eq!(a.resolved_to(args_ref), Some(var));
    assert!(a.unresolved_names().is_empty());
}

#[test]
fn test_global_return_wraps_program_in_function_scope() {
    // var a = 1; with globalReturn: the top level is a function body.
    let mut b = AstBuilder::new();
    let one = b.num("1");
    let decl = b.decl(VariableDeclKind::Var, "a", one);
    let root = b.source(vec![decl]);

    let a = analyze_with(b, root, AnalyzeOptions {
        global_return: true,
        ..AnalyzeOptions::default()
    });
    let function_scope = a.scope_of_kind(ScopeKind::Function);
    assert!(a.try_var_in(a.global(), "a").is_none());
    assert!(a.try_var_in(function_scope, "a").is_some());
    // Both scopes hang off the same root node; acquire returns the inner.
    assert_eq!(a.tree.scopes_for(root).len(), 2);
    assert_eq!(a.tree.acquire(root), Some(function_scope));
}

#[test]
fn test_acquire_finds_scope_by_node() {
    let mut b = AstBuilder::new();
    let func = b.func_decl("f", vec![], vec![]);
    let root = b.source(vec![func]);

    let a = analyze_script(b, root);
    let function_scope = a.scope_of_kind(ScopeKind::Function);
    assert_eq!(a.tree.acquire(func), Some(function_scope));
    assert_eq!(a.tree.acquire(root), Some(a.global()));
}

#[test]
fn test_use_strict_directive_sets_strictness() {
    // "use strict"; function f() {}
    let mut b = AstBuilder::new();
    let directive_str = b.string("use strict");
    let directive = b.expr_stmt(directive_str);
    let func = b.func_decl("f", vec![], vec![]);
    let root = b.source(vec![directive, func]);

    let a = analyze_script(b, root);
    assert!(a.tree.global_scope().is_strict);
    // Strictness inherits downward.
    let function_scope = a.scope_of_kind(ScopeKind::Function);
    assert!(a.tree.scope(function_scope).is_strict);
}

#[test]
fn test_non_strict_by_default() {
    let mut b = AstBuilder::new();
    let func = b.func_decl("f", vec![], vec![]);
    let root = b.source(vec![func]);

    let a = analyze_script(b, root);
    assert!(!a.tree.global_scope().is_strict);
    let function_scope = a.scope_of_kind(ScopeKind::Function);
    assert!(!a.tree.scope(function_scope).is_strict);
}

#[test]
fn test_idempotence_over_the_same_tree() {
    let mut b = AstBuilder::new();
    let param_a = b.ident("a");
    let body_a = b.ident("a");
    let missing = b.ident("missing");
    let sum = b.binary("+", body_a, missing);
    let ret = b.ret(sum);
    let func = b.func_decl("f", vec![param_a], vec![ret]);
    let root = b.source(vec![func]);

    let first = analyze(&b.arena, root, AnalyzeOptions::default()).expect("first run");
    let second = analyze(&b.arena, root, AnalyzeOptions::default()).expect("second run");
    let first = serde_json::to_value(&first).expect("serialize first");
    let second = serde_json::to_value(&second).expect("serialize second");
    assert_eq!(first, second);
}
