//! NodeArena creation methods (add_* methods).
//!
//! The syntax frontend lowers its parse tree bottom-up through these
//! methods: children are created before parents, every method returns the
//! new node's stable `NodeIndex`. Spans are byte offsets into whatever the
//! frontend parsed.

use crate::base::{NodeIndex, NodeList};
use crate::kind::{SyntaxKind, VariableDeclKind};
use crate::node::*;
use tscope_common::Span;

impl NodeArena {
    #[inline]
    fn push_node(&mut self, kind: SyntaxKind, span: Span, data: u32) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node { kind, span, data });
        idx
    }

    fn push_list(&mut self, kind: SyntaxKind, nodes: Vec<NodeIndex>, span: Span) -> NodeIndex {
        let data = self.lists.len() as u32;
        self.lists.push(ListData {
            nodes: NodeList::from_nodes(nodes),
        });
        self.push_node(kind, span, data)
    }

    fn push_wrapper(&mut self, kind: SyntaxKind, inner: NodeIndex, span: Span) -> NodeIndex {
        let data = self.wrappers.len() as u32;
        self.wrappers.push(WrapperData { inner });
        self.push_node(kind, span, data)
    }

    fn push_pair(
        &mut self,
        kind: SyntaxKind,
        left: NodeIndex,
        right: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.pairs.len() as u32;
        self.pairs.push(PairData { left, right });
        self.push_node(kind, span, data)
    }

    fn push_literal(&mut self, kind: SyntaxKind, text: &str, span: Span) -> NodeIndex {
        let atom = self.interner.intern(text);
        let data = self.literals.len() as u32;
        self.literals.push(LiteralData { atom });
        self.push_node(kind, span, data)
    }

    // ==== Top level ====

    pub fn add_source_file(&mut self, statements: Vec<NodeIndex>, span: Span) -> NodeIndex {
        self.push_list(SyntaxKind::SourceFile, statements, span)
    }

    // ==== Names and literals ====

    pub fn add_identifier(&mut self, name: &str, span: Span) -> NodeIndex {
        self.add_typed_identifier(name, NodeIndex::NONE, span)
    }

    /// An identifier in a binding position carrying a type annotation.
    pub fn add_typed_identifier(
        &mut self,
        name: &str,
        type_annotation: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let atom = self.interner.intern(name);
        let data = self.identifiers.len() as u32;
        self.identifiers.push(IdentifierData {
            atom,
            type_annotation,
        });
        self.push_node(SyntaxKind::Identifier, span, data)
    }

    pub fn add_numeric_literal(&mut self, text: &str, span: Span) -> NodeIndex {
        self.push_literal(SyntaxKind::NumericLiteral, text, span)
    }

    pub fn add_string_literal(&mut self, text: &str, span: Span) -> NodeIndex {
        self.push_literal(SyntaxKind::StringLiteral, text, span)
    }

    pub fn add_boolean_literal(&mut self, value: bool, span: Span) -> NodeIndex {
        self.push_literal(
            SyntaxKind::BooleanLiteral,
            if value { "true" } else { "false" },
            span,
        )
    }

    pub fn add_null_literal(&mut self, span: Span) -> NodeIndex {
        self.push_literal(SyntaxKind::NullLiteral, "null", span)
    }

    pub fn add_this_expression(&mut self, span: Span) -> NodeIndex {
        self.push_node(SyntaxKind::ThisExpression, span, DATA_NONE)
    }

    // ==== Expressions ====

    pub fn add_array_expression(&mut self, elements: Vec<NodeIndex>, span: Span) -> NodeIndex {
        self.push_list(SyntaxKind::ArrayExpression, elements, span)
    }

    pub fn add_object_expression(&mut self, properties: Vec<NodeIndex>, span: Span) -> NodeIndex {
        self.push_list(SyntaxKind::ObjectExpression, properties, span)
    }

    pub fn add_property(
        &mut self,
        key: NodeIndex,
        value: NodeIndex,
        computed: bool,
        shorthand: bool,
        span: Span,
    ) -> NodeIndex {
        let data = self.properties.len() as u32;
        self.properties.push(PropertyData {
            key,
            value,
            computed,
            shorthand,
        });
        self.push_node(SyntaxKind::Property, span, data)
    }

    pub fn add_spread_element(&mut self, argument: NodeIndex, span: Span) -> NodeIndex {
        self.push_wrapper(SyntaxKind::SpreadElement, argument, span)
    }

    pub fn add_binary_expression(
        &mut self,
        op: &str,
        left: NodeIndex,
        right: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let op = self.interner.intern(op);
        let data = self.binary_exprs.len() as u32;
        self.binary_exprs.push(BinaryExprData { op, left, right });
        self.push_node(SyntaxKind::BinaryExpression, span, data)
    }

    pub fn add_logical_expression(
        &mut self,
        op: &str,
        left: NodeIndex,
        right: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let op = self.interner.intern(op);
        let data = self.binary_exprs.len() as u32;
        self.binary_exprs.push(BinaryExprData { op, left, right });
        self.push_node(SyntaxKind::LogicalExpression, span, data)
    }

    pub fn add_assignment_expression(
        &mut self,
        op: AssignmentOperator,
        left: NodeIndex,
        right: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.assignment_exprs.len() as u32;
        self.assignment_exprs
            .push(AssignmentExprData { op, left, right });
        self.push_node(SyntaxKind::AssignmentExpression, span, data)
    }

    pub fn add_unary_expression(&mut self, op: &str, operand: NodeIndex, span: Span) -> NodeIndex {
        let op = self.interner.intern(op);
        let data = self.unary_exprs.len() as u32;
        self.unary_exprs.push(UnaryExprData { op, operand });
        self.push_node(SyntaxKind::UnaryExpression, span, data)
    }

    pub fn add_update_expression(&mut self, op: &str, operand: NodeIndex, span: Span) -> NodeIndex {
        let op = self.interner.intern(op);
        let data = self.unary_exprs.len() as u32;
        self.unary_exprs.push(UnaryExprData { op, operand });
        self.push_node(SyntaxKind::UpdateExpression, span, data)
    }

    pub fn add_await_expression(&mut self, argument: NodeIndex, span: Span) -> NodeIndex {
        self.push_wrapper(SyntaxKind::AwaitExpression, argument, span)
    }

    pub fn add_conditional_expression(
        &mut self,
        test: NodeIndex,
        consequent: NodeIndex,
        alternate: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.conditionals.len() as u32;
        self.conditionals.push(ConditionalData {
            test,
            consequent,
            alternate,
        });
        self.push_node(SyntaxKind::ConditionalExpression, span, data)
    }

    pub fn add_call_expression(
        &mut self,
        callee: NodeIndex,
        type_arguments: Vec<NodeIndex>,
        arguments: Vec<NodeIndex>,
        span: Span,
    ) -> NodeIndex {
        let data = self.call_exprs.len() as u32;
        self.call_exprs.push(CallExprData {
            callee,
            type_arguments: NodeList::from_nodes(type_arguments),
            arguments: NodeList::from_nodes(arguments),
        });
        self.push_node(SyntaxKind::CallExpression, span, data)
    }

    pub fn add_new_expression(
        &mut self,
        callee: NodeIndex,
        type_arguments: Vec<NodeIndex>,
        arguments: Vec<NodeIndex>,
        span: Span,
    ) -> NodeIndex {
        let data = self.call_exprs.len() as u32;
        self.call_exprs.push(CallExprData {
            callee,
            type_arguments: NodeList::from_nodes(type_arguments),
            arguments: NodeList::from_nodes(arguments),
        });
        self.push_node(SyntaxKind::NewExpression, span, data)
    }

    pub fn add_member_expression(
        &mut self,
        object: NodeIndex,
        property: NodeIndex,
        computed: bool,
        span: Span,
    ) -> NodeIndex {
        let data = self.member_exprs.len() as u32;
        self.member_exprs.push(MemberExprData {
            object,
            property,
            computed,
        });
        self.push_node(SyntaxKind::MemberExpression, span, data)
    }

    pub fn add_sequence_expression(
        &mut self,
        expressions: Vec<NodeIndex>,
        span: Span,
    ) -> NodeIndex {
        self.push_list(SyntaxKind::SequenceExpression, expressions, span)
    }

    pub fn add_template_literal(&mut self, expressions: Vec<NodeIndex>, span: Span) -> NodeIndex {
        self.push_list(SyntaxKind::TemplateLiteral, expressions, span)
    }

    // ==== Functions and classes ====

    fn push_function(
        &mut self,
        kind: SyntaxKind,
        name: NodeIndex,
        type_parameters: NodeIndex,
        params: Vec<NodeIndex>,
        return_type: NodeIndex,
        body: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.functions.len() as u32;
        self.functions.push(FunctionData {
            name,
            type_parameters,
            params: NodeList::from_nodes(params),
            return_type,
            body,
            is_async: false,
            is_generator: false,
        });
        self.push_node(kind, span, data)
    }

    pub fn add_function_declaration(
        &mut self,
        name: NodeIndex,
        type_parameters: NodeIndex,
        params: Vec<NodeIndex>,
        return_type: NodeIndex,
        body: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        self.push_function(
            SyntaxKind::FunctionDeclaration,
            name,
            type_parameters,
            params,
            return_type,
            body,
            span,
        )
    }

    pub fn add_function_expression(
        &mut self,
        name: NodeIndex,
        type_parameters: NodeIndex,
        params: Vec<NodeIndex>,
        return_type: NodeIndex,
        body: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        self.push_function(
            SyntaxKind::FunctionExpression,
            name,
            type_parameters,
            params,
            return_type,
            body,
            span,
        )
    }

    pub fn add_arrow_function(
        &mut self,
        type_parameters: NodeIndex,
        params: Vec<NodeIndex>,
        return_type: NodeIndex,
        body: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        self.push_function(
            SyntaxKind::ArrowFunctionExpression,
            NodeIndex::NONE,
            type_parameters,
            params,
            return_type,
            body,
            span,
        )
    }

    /// An ambient declaration or overload signature: parameters and types,
    /// no body.
    pub fn add_empty_body_function(
        &mut self,
        name: NodeIndex,
        type_parameters: NodeIndex,
        params: Vec<NodeIndex>,
        return_type: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        self.push_function(
            SyntaxKind::EmptyBodyFunctionExpression,
            name,
            type_parameters,
            params,
            return_type,
            NodeIndex::NONE,
            span,
        )
    }

    /// Mark the most recently added function as async and/or generator.
    pub fn set_function_modifiers(&mut self, idx: NodeIndex, is_async: bool, is_generator: bool) {
        if let Some(node) = self.get(idx).copied()
            && node.kind.is_function_like()
            && let Some(func) = self.functions.get_mut(node.data as usize)
        {
            func.is_async = is_async;
            func.is_generator = is_generator;
        }
    }

    fn push_class(
        &mut self,
        kind: SyntaxKind,
        name: NodeIndex,
        type_parameters: NodeIndex,
        super_class: NodeIndex,
        implements: Vec<NodeIndex>,
        body: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.classes.len() as u32;
        self.classes.push(ClassData {
            name,
            type_parameters,
            super_class,
            implements: NodeList::from_nodes(implements),
            body,
        });
        self.push_node(kind, span, data)
    }

    pub fn add_class_declaration(
        &mut self,
        name: NodeIndex,
        type_parameters: NodeIndex,
        super_class: NodeIndex,
        implements: Vec<NodeIndex>,
        body: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        self.push_class(
            SyntaxKind::ClassDeclaration,
            name,
            type_parameters,
            super_class,
            implements,
            body,
            span,
        )
    }

    pub fn add_class_expression(
        &mut self,
        name: NodeIndex,
        type_parameters: NodeIndex,
        super_class: NodeIndex,
        implements: Vec<NodeIndex>,
        body: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        self.push_class(
            SyntaxKind::ClassExpression,
            name,
            type_parameters,
            super_class,
            implements,
            body,
            span,
        )
    }

    pub fn add_class_body(&mut self, members: Vec<NodeIndex>, span: Span) -> NodeIndex {
        self.push_list(SyntaxKind::ClassBody, members, span)
    }

    pub fn add_method_definition(
        &mut self,
        key: NodeIndex,
        value: NodeIndex,
        computed: bool,
        is_static: bool,
        span: Span,
    ) -> NodeIndex {
        let data = self.class_members.len() as u32;
        self.class_members.push(ClassMemberData {
            key,
            value,
            type_annotation: NodeIndex::NONE,
            computed,
            is_static,
        });
        self.push_node(SyntaxKind::MethodDefinition, span, data)
    }

    pub fn add_property_definition(
        &mut self,
        key: NodeIndex,
        value: NodeIndex,
        type_annotation: NodeIndex,
        computed: bool,
        is_static: bool,
        span: Span,
    ) -> NodeIndex {
        let data = self.class_members.len() as u32;
        self.class_members.push(ClassMemberData {
            key,
            value,
            type_annotation,
            computed,
            is_static,
        });
        self.push_node(SyntaxKind::PropertyDefinition, span, data)
    }

    // ==== Declarations and binding patterns ====

    pub fn add_variable_declaration(
        &mut self,
        kind: VariableDeclKind,
        declarations: Vec<NodeIndex>,
        span: Span,
    ) -> NodeIndex {
        let data = self.variable_declarations.len() as u32;
        self.variable_declarations.push(VariableDeclarationData {
            kind,
            declarations: NodeList::from_nodes(declarations),
        });
        self.push_node(SyntaxKind::VariableDeclaration, span, data)
    }

    pub fn add_variable_declarator(
        &mut self,
        name: NodeIndex,
        init: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.declarators.len() as u32;
        self.declarators.push(VariableDeclaratorData { name, init });
        self.push_node(SyntaxKind::VariableDeclarator, span, data)
    }

    pub fn add_array_pattern(
        &mut self,
        elements: Vec<NodeIndex>,
        type_annotation: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.patterns.len() as u32;
        self.patterns.push(PatternData {
            elements: NodeList::from_nodes(elements),
            type_annotation,
        });
        self.push_node(SyntaxKind::ArrayPattern, span, data)
    }

    pub fn add_object_pattern(
        &mut self,
        properties: Vec<NodeIndex>,
        type_annotation: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.patterns.len() as u32;
        self.patterns.push(PatternData {
            elements: NodeList::from_nodes(properties),
            type_annotation,
        });
        self.push_node(SyntaxKind::ObjectPattern, span, data)
    }

    pub fn add_assignment_pattern(
        &mut self,
        left: NodeIndex,
        right: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        self.push_pair(SyntaxKind::AssignmentPattern, left, right, span)
    }

    pub fn add_rest_element(&mut self, argument: NodeIndex, span: Span) -> NodeIndex {
        self.push_wrapper(SyntaxKind::RestElement, argument, span)
    }

    // ==== Statements ====

    pub fn add_block(&mut self, statements: Vec<NodeIndex>, span: Span) -> NodeIndex {
        self.push_list(SyntaxKind::Block, statements, span)
    }

    pub fn add_expression_statement(&mut self, expression: NodeIndex, span: Span) -> NodeIndex {
        self.push_wrapper(SyntaxKind::ExpressionStatement, expression, span)
    }

    pub fn add_if_statement(
        &mut self,
        test: NodeIndex,
        consequent: NodeIndex,
        alternate: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.conditionals.len() as u32;
        self.conditionals.push(ConditionalData {
            test,
            consequent,
            alternate,
        });
        self.push_node(SyntaxKind::IfStatement, span, data)
    }

    pub fn add_for_statement(
        &mut self,
        initializer: NodeIndex,
        test: NodeIndex,
        update: NodeIndex,
        body: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.loops.len() as u32;
        self.loops.push(LoopData {
            initializer,
            test,
            update,
            body,
        });
        self.push_node(SyntaxKind::ForStatement, span, data)
    }

    pub fn add_while_statement(&mut self, test: NodeIndex, body: NodeIndex, span: Span) -> NodeIndex {
        let data = self.loops.len() as u32;
        self.loops.push(LoopData {
            initializer: NodeIndex::NONE,
            test,
            update: NodeIndex::NONE,
            body,
        });
        self.push_node(SyntaxKind::WhileStatement, span, data)
    }

    pub fn add_do_while_statement(
        &mut self,
        body: NodeIndex,
        test: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.loops.len() as u32;
        self.loops.push(LoopData {
            initializer: NodeIndex::NONE,
            test,
            update: NodeIndex::NONE,
            body,
        });
        self.push_node(SyntaxKind::DoWhileStatement, span, data)
    }

    pub fn add_for_in_statement(
        &mut self,
        left: NodeIndex,
        right: NodeIndex,
        body: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.for_in_of.len() as u32;
        self.for_in_of.push(ForInOfData { left, right, body });
        self.push_node(SyntaxKind::ForInStatement, span, data)
    }

    pub fn add_for_of_statement(
        &mut self,
        left: NodeIndex,
        right: NodeIndex,
        body: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.for_in_of.len() as u32;
        self.for_in_of.push(ForInOfData { left, right, body });
        self.push_node(SyntaxKind::ForOfStatement, span, data)
    }

    pub fn add_switch_statement(
        &mut self,
        discriminant: NodeIndex,
        cases: Vec<NodeIndex>,
        span: Span,
    ) -> NodeIndex {
        let data = self.switches.len() as u32;
        self.switches.push(SwitchData {
            discriminant,
            cases: NodeList::from_nodes(cases),
        });
        self.push_node(SyntaxKind::SwitchStatement, span, data)
    }

    pub fn add_switch_case(
        &mut self,
        test: NodeIndex,
        statements: Vec<NodeIndex>,
        span: Span,
    ) -> NodeIndex {
        let data = self.switch_cases.len() as u32;
        self.switch_cases.push(SwitchCaseData {
            test,
            statements: NodeList::from_nodes(statements),
        });
        self.push_node(SyntaxKind::SwitchCase, span, data)
    }

    pub fn add_return_statement(&mut self, argument: NodeIndex, span: Span) -> NodeIndex {
        self.push_wrapper(SyntaxKind::ReturnStatement, argument, span)
    }

    pub fn add_throw_statement(&mut self, argument: NodeIndex, span: Span) -> NodeIndex {
        self.push_wrapper(SyntaxKind::ThrowStatement, argument, span)
    }

    pub fn add_try_statement(
        &mut self,
        block: NodeIndex,
        handler: NodeIndex,
        finalizer: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.tries.len() as u32;
        self.tries.push(TryData {
            block,
            handler,
            finalizer,
        });
        self.push_node(SyntaxKind::TryStatement, span, data)
    }

    pub fn add_catch_clause(&mut self, param: NodeIndex, body: NodeIndex, span: Span) -> NodeIndex {
        let data = self.catch_clauses.len() as u32;
        self.catch_clauses.push(CatchClauseData { param, body });
        self.push_node(SyntaxKind::CatchClause, span, data)
    }

    pub fn add_with_statement(&mut self, object: NodeIndex, body: NodeIndex, span: Span) -> NodeIndex {
        self.push_pair(SyntaxKind::WithStatement, object, body, span)
    }

    pub fn add_labeled_statement(
        &mut self,
        label: NodeIndex,
        body: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        self.push_pair(SyntaxKind::LabeledStatement, label, body, span)
    }

    pub fn add_break_statement(&mut self, label: NodeIndex, span: Span) -> NodeIndex {
        self.push_wrapper(SyntaxKind::BreakStatement, label, span)
    }

    pub fn add_continue_statement(&mut self, label: NodeIndex, span: Span) -> NodeIndex {
        self.push_wrapper(SyntaxKind::ContinueStatement, label, span)
    }

    pub fn add_empty_statement(&mut self, span: Span) -> NodeIndex {
        self.push_node(SyntaxKind::EmptyStatement, span, DATA_NONE)
    }

    pub fn add_debugger_statement(&mut self, span: Span) -> NodeIndex {
        self.push_node(SyntaxKind::DebuggerStatement, span, DATA_NONE)
    }

    // ==== Modules ====

    pub fn add_import_declaration(
        &mut self,
        specifiers: Vec<NodeIndex>,
        source: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.imports.len() as u32;
        self.imports.push(ImportData {
            specifiers: NodeList::from_nodes(specifiers),
            source,
        });
        self.push_node(SyntaxKind::ImportDeclaration, span, data)
    }

    pub fn add_import_specifier(
        &mut self,
        imported: NodeIndex,
        local: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        self.push_pair(SyntaxKind::ImportSpecifier, imported, local, span)
    }

    pub fn add_import_default_specifier(&mut self, local: NodeIndex, span: Span) -> NodeIndex {
        self.push_wrapper(SyntaxKind::ImportDefaultSpecifier, local, span)
    }

    pub fn add_import_namespace_specifier(&mut self, local: NodeIndex, span: Span) -> NodeIndex {
        self.push_wrapper(SyntaxKind::ImportNamespaceSpecifier, local, span)
    }

    pub fn add_export_named_declaration(
        &mut self,
        declaration: NodeIndex,
        specifiers: Vec<NodeIndex>,
        source: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.exports.len() as u32;
        self.exports.push(ExportData {
            declaration,
            specifiers: NodeList::from_nodes(specifiers),
            source,
        });
        self.push_node(SyntaxKind::ExportNamedDeclaration, span, data)
    }

    pub fn add_export_default_declaration(
        &mut self,
        declaration: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        self.push_wrapper(SyntaxKind::ExportDefaultDeclaration, declaration, span)
    }

    pub fn add_export_all_declaration(&mut self, source: NodeIndex, span: Span) -> NodeIndex {
        let data = self.exports.len() as u32;
        self.exports.push(ExportData {
            declaration: NodeIndex::NONE,
            specifiers: NodeList::new(),
            source,
        });
        self.push_node(SyntaxKind::ExportAllDeclaration, span, data)
    }

    pub fn add_export_specifier(
        &mut self,
        local: NodeIndex,
        exported: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        self.push_pair(SyntaxKind::ExportSpecifier, local, exported, span)
    }

    // ==== Type space ====

    pub fn add_type_annotation(&mut self, type_node: NodeIndex, span: Span) -> NodeIndex {
        self.push_wrapper(SyntaxKind::TypeAnnotation, type_node, span)
    }

    pub fn add_type_reference(
        &mut self,
        type_name: NodeIndex,
        type_arguments: Vec<NodeIndex>,
        span: Span,
    ) -> NodeIndex {
        let data = self.type_refs.len() as u32;
        self.type_refs.push(TypeReferenceData {
            type_name,
            type_arguments: NodeList::from_nodes(type_arguments),
        });
        self.push_node(SyntaxKind::TypeReference, span, data)
    }

    /// A `typeof` type query. `expr_name` is an `Identifier` or
    /// `QualifiedName` naming a value.
    pub fn add_type_query(
        &mut self,
        expr_name: NodeIndex,
        type_arguments: Vec<NodeIndex>,
        span: Span,
    ) -> NodeIndex {
        let data = self.type_refs.len() as u32;
        self.type_refs.push(TypeReferenceData {
            type_name: expr_name,
            type_arguments: NodeList::from_nodes(type_arguments),
        });
        self.push_node(SyntaxKind::TypeQuery, span, data)
    }

    pub fn add_qualified_name(&mut self, left: NodeIndex, right: NodeIndex, span: Span) -> NodeIndex {
        self.push_pair(SyntaxKind::QualifiedName, left, right, span)
    }

    pub fn add_type_parameter_declaration(
        &mut self,
        params: Vec<NodeIndex>,
        span: Span,
    ) -> NodeIndex {
        self.push_list(SyntaxKind::TypeParameterDeclaration, params, span)
    }

    pub fn add_type_parameter(
        &mut self,
        name: NodeIndex,
        constraint: NodeIndex,
        default: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.type_params.len() as u32;
        self.type_params.push(TypeParameterData {
            name,
            constraint,
            default,
        });
        self.push_node(SyntaxKind::TypeParameter, span, data)
    }

    pub fn add_interface_declaration(
        &mut self,
        name: NodeIndex,
        type_parameters: NodeIndex,
        extends: Vec<NodeIndex>,
        body: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.interfaces.len() as u32;
        self.interfaces.push(InterfaceData {
            name,
            type_parameters,
            extends: NodeList::from_nodes(extends),
            body,
        });
        self.push_node(SyntaxKind::InterfaceDeclaration, span, data)
    }

    pub fn add_interface_body(&mut self, members: Vec<NodeIndex>, span: Span) -> NodeIndex {
        self.push_list(SyntaxKind::InterfaceBody, members, span)
    }

    pub fn add_property_signature(
        &mut self,
        key: NodeIndex,
        type_annotation: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        self.push_pair(SyntaxKind::PropertySignature, key, type_annotation, span)
    }

    pub fn add_method_signature(
        &mut self,
        key: NodeIndex,
        type_parameters: NodeIndex,
        params: Vec<NodeIndex>,
        return_type: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.signatures.len() as u32;
        self.signatures.push(SignatureData {
            key,
            type_parameters,
            params: NodeList::from_nodes(params),
            return_type,
        });
        self.push_node(SyntaxKind::MethodSignature, span, data)
    }

    pub fn add_function_type(
        &mut self,
        type_parameters: NodeIndex,
        params: Vec<NodeIndex>,
        return_type: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.signatures.len() as u32;
        self.signatures.push(SignatureData {
            key: NodeIndex::NONE,
            type_parameters,
            params: NodeList::from_nodes(params),
            return_type,
        });
        self.push_node(SyntaxKind::FunctionType, span, data)
    }

    pub fn add_keyword_type(&mut self, span: Span) -> NodeIndex {
        self.push_node(SyntaxKind::KeywordType, span, DATA_NONE)
    }

    pub fn add_array_type(&mut self, element: NodeIndex, span: Span) -> NodeIndex {
        self.push_wrapper(SyntaxKind::ArrayType, element, span)
    }

    pub fn add_union_type(&mut self, types: Vec<NodeIndex>, span: Span) -> NodeIndex {
        self.push_list(SyntaxKind::UnionType, types, span)
    }

    pub fn add_enum_declaration(
        &mut self,
        name: NodeIndex,
        members: Vec<NodeIndex>,
        span: Span,
    ) -> NodeIndex {
        let data = self.enums.len() as u32;
        self.enums.push(EnumData {
            name,
            members: NodeList::from_nodes(members),
        });
        self.push_node(SyntaxKind::EnumDeclaration, span, data)
    }

    pub fn add_enum_member(
        &mut self,
        name: NodeIndex,
        initializer: NodeIndex,
        span: Span,
    ) -> NodeIndex {
        let data = self.enum_members.len() as u32;
        self.enum_members.push(EnumMemberData { name, initializer });
        self.push_node(SyntaxKind::EnumMember, span, data)
    }
}
