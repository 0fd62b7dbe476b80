use tracing::debug;

use esphp_ast::{
    ClassDeclaration, Function, MethodDefinition, Node, NodeKind, ReturnStatement,
    VariableDeclaration, VariableDeclarator,
};
use esphp_binder::FunctionKind;

use super::expressions::binary_text;
use super::{Fragment, Printer};
use crate::context::EmitContext;
use crate::normalize::{FunctionLike, Parameter};

impl<'a> Printer<'a> {
    // =========================================================================
    // Variables
    // =========================================================================

    /// Each declarator is emitted on its own, so `let a = 1, b = 2` yields
    /// two statements.
    pub(super) fn emit_variable_declaration(&mut self, decl: &VariableDeclaration) -> Fragment {
        let ctx = EmitContext::child_of(NodeKind::VariableDeclaration);
        let mut text = String::new();
        for declarator in &decl.declarations {
            text.push_str(&self.emit(declarator, ctx));
        }
        Fragment::inline(text)
    }

    /// `$name;` or `$name = <init>;`. Loop heads read the text without the
    /// terminator.
    pub(super) fn emit_variable_declarator(&mut self, decl: &VariableDeclarator) -> Fragment {
        let ctx = EmitContext::child_of(NodeKind::VariableDeclarator);
        let binding = self.emit(&decl.id, ctx);
        match &decl.init {
            Some(init) => {
                let init = self.emit(init, ctx);
                Fragment::statement(format!("{binding} = {init}"))
            }
            None => Fragment::statement(binding),
        }
    }

    // =========================================================================
    // Functions
    // =========================================================================

    pub(super) fn emit_function_declaration(&mut self, function: &Function) -> Fragment {
        self.emit_function_like(&FunctionLike::from_declaration(function))
    }

    pub(super) fn emit_function_expression(&mut self, function: &Function) -> Fragment {
        self.emit_function_like(&FunctionLike::from_expression(function))
    }

    /// `function <name>(<params>) { <body> }`
    ///
    /// The scope recorder hears about the function after its parameters and
    /// before its body. Expressions close without a newline so that an
    /// enclosing statement reads `};`.
    fn emit_function_like(&mut self, function: &FunctionLike<'_>) -> Fragment {
        let mut params = Vec::with_capacity(function.params.len());
        for param in &function.params {
            params.push(self.emit_parameter(param));
        }

        self.scopes.on_function_entered(&function.entry());

        let body = self.emit(function.body, EmitContext::child_of(NodeKind::FunctionDeclaration));
        let mut text = format!(
            "function {}({}) {{\n{body}}}",
            function.name,
            params.join(", ")
        );
        if function.kind != FunctionKind::Expression {
            text.push('\n');
        }
        Fragment::inline(text)
    }

    /// Defaults render as an assignment, `$param = <default>`.
    fn emit_parameter(&mut self, param: &Parameter<'_>) -> String {
        let Some(default) = param.default else {
            return self.emit(param.binding, EmitContext::child_of(NodeKind::FunctionDeclaration));
        };
        let ctx = EmitContext::child_of(NodeKind::AssignmentExpression);
        let left = self.emit(param.binding, ctx);
        let right = self.emit(default, ctx);
        binary_text(&left, "=", &right)
    }

    pub(super) fn emit_return(&mut self, stmt: &ReturnStatement) -> Fragment {
        match &stmt.argument {
            Some(argument) => {
                let argument = self.emit(argument, EmitContext::child_of(NodeKind::ReturnStatement));
                Fragment::statement(format!("return {argument}"))
            }
            None => Fragment::statement("return".to_string()),
        }
    }

    // =========================================================================
    // Classes
    // =========================================================================

    pub(super) fn emit_class(&mut self, class: &ClassDeclaration) -> Fragment {
        let ctx = EmitContext::child_of(NodeKind::ClassDeclaration);
        let name = self.emit_type_name(&class.id, ctx);
        let mut text = format!("class {name}");

        if let Some(super_class) = &class.super_class {
            let super_name = self.emit_type_name(super_class, ctx);
            text.push_str(" extends ");
            text.push_str(&super_name);
        }

        let body = self.emit(&class.body, ctx);
        text.push_str("\n{\n");
        text.push_str(&body);
        text.push_str("\n}\n");
        Fragment::inline(text)
    }

    /// Class names render bare, like any static-style name.
    fn emit_type_name(&mut self, node: &Node, ctx: EmitContext<'_>) -> String {
        self.emit(node, ctx.with_static(true))
    }

    /// Every method is public; `constructor` becomes `__construct`.
    pub(super) fn emit_method(&mut self, method: &MethodDefinition, ctx: EmitContext<'_>) -> Fragment {
        let mut text = String::from("public ");
        if method.is_static {
            text.push_str("static ");
        }
        if !method.kind.is_empty() && method.kind != "method" && method.kind != "constructor" {
            debug!(kind = %method.kind, "accessor emitted as a plain method");
        }

        match method.value.as_ref() {
            Node::FunctionExpression(function) => {
                let function = FunctionLike::from_method(&method.key, function);
                text.push_str(&self.emit_function_like(&function).finish());
            }
            other => {
                let value = self.emit(other, EmitContext::child_of(NodeKind::MethodDefinition));
                text.push_str(&value);
            }
        }

        if !ctx.is_last {
            text.push('\n');
        }
        Fragment::inline(text)
    }
}
