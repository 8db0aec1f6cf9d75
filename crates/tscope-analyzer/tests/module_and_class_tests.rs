//! Module scopes and import/export bindings; class, catch, with, switch,
//! for and labeled-statement scoping.

mod common;

use common::{AstBuilder, analyze_module, analyze_script};
use tscope_analyzer::{DefinitionKind, ScopeKind};
use tscope_syntax::{NodeIndex, VariableDeclKind};

#[test]
fn test_module_scope_is_nested_and_strict() {
    let mut b = AstBuilder::new();
    let decl = b.decl(VariableDeclKind::Const, "x", NodeIndex::NONE);
    let root = b.source(vec![decl]);

    let a = analyze_module(b, root);
    let module_scope = a.scope_of_kind(ScopeKind::Module);
    assert_eq!(a.tree.scope(module_scope).parent, Some(a.global()));
    assert!(a.tree.scope(module_scope).is_strict);
    assert!(!a.tree.global_scope().is_strict);
    // Top-level bindings land in the module scope, not the global one.
    assert!(a.try_var_in(a.global(), "x").is_none());
    assert!(a.try_var_in(module_scope, "x").is_some());
}

#[test]
fn test_import_bindings() {
    // import d, { a as b }, * as ns from "m";
    let mut b = AstBuilder::new();
    let d_local = b.ident("d");
    let sp = b.span();
    let default_spec = b.arena.add_import_default_specifier(d_local, sp);
    let imported_a = b.ident("a");
    let local_b = b.ident("b");
    let sp = b.span();
    let named_spec = b.arena.add_import_specifier(imported_a, local_b, sp);
    let ns_local = b.ident("ns");
    let sp = b.span();
    let ns_spec = b.arena.add_import_namespace_specifier(ns_local, sp);
    let source = b.string("m");
    let sp = b.span();
    let import = b
        .arena
        .add_import_declaration(vec![default_spec, named_spec, ns_spec], source, sp);
    let root = b.source(vec![import]);

    let a = analyze_module(b, root);
    let module_scope = a.scope_of_kind(ScopeKind::Module);
    assert_eq!(a.names_in(module_scope), vec!["d", "b", "ns"]);
    for name in ["d", "b", "ns"] {
        let var = a.var_in(module_scope, name);
        assert_eq!(
            a.tree.variable(var).defs[0].kind,
            DefinitionKind::ImportBinding
        );
    }
    // The imported name `a` is not a local binding or reference.
    assert!(a.try_var_in(module_scope, "a").is_none());
    assert!(a.try_reference_to(imported_a).is_none());
    assert!(a.unresolved_names().is_empty());
}

#[test]
fn test_export_specifier_reads_local_binding() {
    // const x = 1; export { x };
    let mut b = AstBuilder::new();
    let one = b.num("1");
    let decl = b.decl(VariableDeclKind::Const, "x", one);
    let local = b.ident("x");
    let exported = b.ident("x");
    let sp = b.span();
    let spec = b.arena.add_export_specifier(local, exported, sp);
    let sp = b.span();
    let export = b.arena.add_export_named_declaration(
        NodeIndex::NONE,
        vec![spec],
        NodeIndex::NONE,
        sp,
    );
    let root = b.source(vec![decl, export]);

    let a = analyze_module(b, root);
    let module_scope = a.scope_of_kind(ScopeKind::Module);
    let var = a.var_in(module_scope, "x");
    let read = a.reference_to(local);
    assert!(read.is_read_only());
    assert_eq!(read.resolved, Some(var));
    // The exported alias position is not a reference.
    assert!(a.try_reference_to(exported).is_none());
}

#[test]
fn test_reexport_references_nothing() {
    // export { x } from "m";
    let mut b = AstBuilder::new();
    let local = b.ident("x");
    let exported = b.ident("x");
    let sp = b.span();
    let spec = b.arena.add_export_specifier(local, exported, sp);
    let source = b.string("m");
    let sp = b.span();
    let export = b
        .arena
        .add_export_named_declaration(NodeIndex::NONE, vec![spec], source, sp);
    let root = b.source(vec![export]);

    let a = analyze_module(b, root);
    assert!(a.tree.references.is_empty());
    assert!(a.unresolved_names().is_empty());
}

#[test]
fn test_exported_declaration_binds_normally() {
    // export const x = 1; x;
    let mut b = AstBuilder::new();
    let one = b.num("1");
    let decl = b.decl(VariableDeclKind::Const, "x", one);
    let sp = b.span();
    let export = b
        .arena
        .add_export_named_declaration(decl, vec![], NodeIndex::NONE, sp);
    let x_ref = b.ident("x");
    let stmt = b.expr_stmt(x_ref);
    let root = b.source(vec![export, stmt]);

    let a = analyze_module(b, root);
    let module_scope = a.scope_of_kind(ScopeKind::Module);
    assert_eq!(a.resolved_to(x_ref), Some(a.var_in(module_scope, "x")));
}

#[test]
fn test_export_default_expression_is_a_reference() {
    // const x = 1; export default x;
    let mut b = AstBuilder::new();
    let one = b.num("1");
    let decl = b.decl(VariableDeclKind::Const, "x", one);
    let x_ref = b.ident("x");
    let sp = b.span();
    let export = b.arena.add_export_default_declaration(x_ref, sp);
    let root = b.source(vec![decl, export]);

    let a = analyze_module(b, root);
    let module_scope = a.scope_of_kind(ScopeKind::Module);
    assert_eq!(a.resolved_to(x_ref), Some(a.var_in(module_scope, "x")));
}

#[test]
fn test_class_name_is_visible_inside_its_own_scope() {
    // class C { m() { C; } } C;
    let mut b = AstBuilder::new();
    let name = b.ident("C");
    let key_m = b.ident("m");
    let inner_ref = b.ident("C");
    let inner_stmt = b.expr_stmt(inner_ref);
    let method_body = b.block(vec![inner_stmt]);
    let sp = b.span();
    let method_fn = b.arena.add_function_expression(
        NodeIndex::NONE,
        NodeIndex::NONE,
        vec![],
        NodeIndex::NONE,
        method_body,
        sp,
    );
    let sp = b.span();
    let method = b.arena.add_method_definition(key_m, method_fn, false, false, sp);
    let sp = b.span();
    let body = b.arena.add_class_body(vec![method], sp);
    let sp = b.span();
    let class = b.arena.add_class_declaration(
        name,
        NodeIndex::NONE,
        NodeIndex::NONE,
        vec![],
        body,
        sp,
    );
    let outer_ref = b.ident("C");
    let outer_stmt = b.expr_stmt(outer_ref);
    let root = b.source(vec![class, outer_stmt]);

    let a = analyze_script(b, root);
    let class_scope = a.scope_of_kind(ScopeKind::Class);
    let inner_var = a.var_in(class_scope, "C");
    let outer_var = a.var_in(a.global(), "C");
    assert_ne!(inner_var, outer_var);
    assert_eq!(a.resolved_to(inner_ref), Some(inner_var));
    assert_eq!(a.resolved_to(outer_ref), Some(outer_var));
    // Both bindings are class-name definitions on the same class node.
    for var in [inner_var, outer_var] {
        assert_eq!(a.tree.variable(var).defs[0].kind, DefinitionKind::ClassName);
        assert_eq!(a.tree.variable(var).defs[0].node, class);
    }
    // Class scopes and method bodies are strict.
    assert!(a.tree.scope(class_scope).is_strict);
    let function_scope = a.scope_of_kind(ScopeKind::Function);
    assert!(a.tree.scope(function_scope).is_strict);
}

#[test]
fn test_class_expression_name_stays_internal() {
    // const k = class C {}; C;
    let mut b = AstBuilder::new();
    let name = b.ident("C");
    let sp = b.span();
    let body = b.arena.add_class_body(vec![], sp);
    let sp = b.span();
    let class = b.arena.add_class_expression(
        name,
        NodeIndex::NONE,
        NodeIndex::NONE,
        vec![],
        body,
        sp,
    );
    let decl = b.decl(VariableDeclKind::Const, "k", class);
    let outer_ref = b.ident("C");
    let outer_stmt = b.expr_stmt(outer_ref);
    let root = b.source(vec![decl, outer_stmt]);

    let a = analyze_script(b, root);
    let class_scope = a.scope_of_kind(ScopeKind::Class);
    assert!(a.try_var_in(class_scope, "C").is_some());
    assert!(a.try_var_in(a.global(), "C").is_none());
    assert_eq!(a.unresolved_names(), vec!["C"]);
}

#[test]
fn test_catch_binding_scoped_to_handler() {
    // try {} catch (e) { e; } e;
    let mut b = AstBuilder::new();
    let try_block = b.block(vec![]);
    let param = b.ident("e");
    let inner_ref = b.ident("e");
    let inner_stmt = b.expr_stmt(inner_ref);
    let catch_body = b.block(vec![inner_stmt]);
    let sp = b.span();
    let handler = b.arena.add_catch_clause(param, catch_body, sp);
    let sp = b.span();
    let try_stmt = b
        .arena
        .add_try_statement(try_block, handler, NodeIndex::NONE, sp);
    let outer_ref = b.ident("e");
    let outer_stmt = b.expr_stmt(outer_ref);
    let root = b.source(vec![try_stmt, outer_stmt]);

    let a = analyze_script(b, root);
    let catch_scope = a.scope_of_kind(ScopeKind::Catch);
    assert_eq!(a.resolved_to(inner_ref), Some(a.var_in(catch_scope, "e")));
    assert_eq!(a.resolved_to(outer_ref), None);
    assert_eq!(a.unresolved_names(), vec!["e"]);
}

#[test]
fn test_with_statement_opens_a_scope() {
    // with (o) { x; }
    let mut b = AstBuilder::new();
    let o_ref = b.ident("o");
    let x_ref = b.ident("x");
    let x_stmt = b.expr_stmt(x_ref);
    let body = b.block(vec![x_stmt]);
    let sp = b.span();
    let with_stmt = b.arena.add_with_statement(o_ref, body, sp);
    let root = b.source(vec![with_stmt]);

    let a = analyze_script(b, root);
    let with_scope = a.scope_of_kind(ScopeKind::With);
    // The object is read outside the with scope.
    assert_eq!(a.reference_to(o_ref).from, a.global());
    // `x` passed through the with scope unresolved.
    assert!(a.tree.scope(with_scope).through.contains(
        &a.tree.scope(a.global()).through[1]
    ));
    assert_eq!(a.unresolved_names(), vec!["o", "x"]);
}

#[test]
fn test_switch_cases_share_one_scope() {
    // switch (v) { case 1: let y = 2; default: y; }
    let mut b = AstBuilder::new();
    let v_ref = b.ident("v");
    let one = b.num("1");
    let two = b.num("2");
    let decl = b.decl(VariableDeclKind::Let, "y", two);
    let sp = b.span();
    let case_one = b.arena.add_switch_case(one, vec![decl], sp);
    let y_ref = b.ident("y");
    let y_stmt = b.expr_stmt(y_ref);
    let sp = b.span();
    let default_case = b.arena.add_switch_case(NodeIndex::NONE, vec![y_stmt], sp);
    let sp = b.span();
    let switch_stmt = b
        .arena
        .add_switch_statement(v_ref, vec![case_one, default_case], sp);
    let root = b.source(vec![switch_stmt]);

    let a = analyze_script(b, root);
    let switch_scope = a.scope_of_kind(ScopeKind::Switch);
    assert_eq!(a.resolved_to(y_ref), Some(a.var_in(switch_scope, "y")));
    assert_eq!(a.unresolved_names(), vec!["v"]);
}

#[test]
fn test_for_let_head_gets_its_own_scope() {
    // for (let i = 0; i; i++) { i; }
    let mut b = AstBuilder::new();
    let zero = b.num("0");
    let init = b.decl(VariableDeclKind::Let, "i", zero);
    let test_ref = b.ident("i");
    let update_ref = b.ident("i");
    let sp = b.span();
    let update = b.arena.add_update_expression("++", update_ref, sp);
    let body_ref = b.ident("i");
    let body_stmt = b.expr_stmt(body_ref);
    let body = b.block(vec![body_stmt]);
    let sp = b.span();
    let for_stmt = b.arena.add_for_statement(init, test_ref, update, body, sp);
    let root = b.source(vec![for_stmt]);

    let a = analyze_script(b, root);
    let for_scope = a.scope_of_kind(ScopeKind::For);
    let var = a.var_in(for_scope, "i");
    assert!(a.try_var_in(a.global(), "i").is_none());
    for reference in [test_ref, update_ref, body_ref] {
        assert_eq!(a.resolved_to(reference), Some(var));
    }
    assert!(a.reference_to(update_ref).is_read_write());
    assert!(a.unresolved_names().is_empty());
}

#[test]
fn test_for_var_head_hoists_to_function_scope() {
    // function f() { for (var i = 0; ;) {} }
    let mut b = AstBuilder::new();
    let zero = b.num("0");
    let init = b.decl(VariableDeclKind::Var, "i", zero);
    let body = b.block(vec![]);
    let sp = b.span();
    let for_stmt = b
        .arena
        .add_for_statement(init, NodeIndex::NONE, NodeIndex::NONE, body, sp);
    let func = b.func_decl("f", vec![], vec![for_stmt]);
    let root = b.source(vec![func]);

    let a = analyze_script(b, root);
    let function_scope = a.scope_of_kind(ScopeKind::Function);
    assert!(a.try_var_in(function_scope, "i").is_some());
    // No for scope materializes for a var head.
    assert!(!a.kinds().contains(&ScopeKind::For));
}

#[test]
fn test_for_of_writes_the_iteration_binding() {
    // for (const x of xs) {}
    let mut b = AstBuilder::new();
    let init = b.decl(VariableDeclKind::Const, "x", NodeIndex::NONE);
    let xs_ref = b.ident("xs");
    let body = b.block(vec![]);
    let sp = b.span();
    let for_of = b.arena.add_for_of_statement(init, xs_ref, body, sp);
    let root = b.source(vec![for_of]);

    let a = analyze_script(b, root);
    let for_scope = a.scope_of_kind(ScopeKind::For);
    let var = a.var_in(for_scope, "x");
    let write = a
        .tree
        .variable(var)
        .references
        .iter()
        .map(|&id| a.tree.reference(id))
        .find(|r| r.is_write())
        .expect("iteration write");
    assert!(write.init);
    assert_eq!(write.write_expr, xs_ref);
    assert_eq!(a.unresolved_names(), vec!["xs"]);
}

#[test]
fn test_labels_are_not_references() {
    // outer: { break outer; }
    let mut b = AstBuilder::new();
    let label = b.ident("outer");
    let break_label = b.ident("outer");
    let sp = b.span();
    let brk = b.arena.add_break_statement(break_label, sp);
    let body = b.block(vec![brk]);
    let sp = b.span();
    let labeled = b.arena.add_labeled_statement(label, body, sp);
    let root = b.source(vec![labeled]);

    let a = analyze_script(b, root);
    assert!(a.tree.references.is_empty());
    assert!(a.unresolved_names().is_empty());
}

#[test]
fn test_method_scope_has_arguments_but_arrow_does_not() {
    // const f = () => {}; class C { m() {} }
    let mut b = AstBuilder::new();
    let arrow_body = b.block(vec![]);
    let sp = b.span();
    let arrow = b
        .arena
        .add_arrow_function(NodeIndex::NONE, vec![], NodeIndex::NONE, arrow_body, sp);
    let decl = b.decl(VariableDeclKind::Const, "f", arrow);

    let name = b.ident("C");
    let key_m = b.ident("m");
    let method_body = b.block(vec![]);
    let sp = b.span();
    let method_fn = b.arena.add_function_expression(
        NodeIndex::NONE,
        NodeIndex::NONE,
        vec![],
        NodeIndex::NONE,
        method_body,
        sp,
    );
    let sp = b.span();
    let method = b.arena.add_method_definition(key_m, method_fn, false, false, sp);
    let sp = b.span();
    let body = b.arena.add_class_body(vec![method], sp);
    let sp = b.span();
    let class = b.arena.add_class_declaration(
        name,
        NodeIndex::NONE,
        NodeIndex::NONE,
        vec![],
        body,
        sp,
    );
    let root = b.source(vec![decl, class]);

    let a = analyze_script(b, root);
    let arrow_scope = a.tree.acquire(arrow).expect("arrow scope");
    let method_scope = a.tree.acquire(method_fn).expect("method scope");
    assert!(a.try_var_in(arrow_scope, "arguments").is_none());
    assert!(a.try_var_in(method_scope, "arguments").is_some());
}
