//! The PHP printer: one recursive dispatcher with a case per node kind.
//!
//! Each case produces a [`Fragment`]: its text plus whether it is a complete
//! statement that owes a terminator. The terminator is appended once, at the
//! boundary of [`Printer::emit`]; cases that embed a child inline never see
//! a terminator on it because only statement positions set the flag.

mod declarations;
mod expressions;
mod modules;
mod statements;

use tracing::{debug_span, trace, warn};

use esphp_ast::{Node, NodeKind, UnsupportedNode};
use esphp_binder::ScopeRecorder;
use esphp_common::limits::{STACK_GROWTH, STACK_RED_ZONE};
use esphp_common::{Diagnostic, Location, diagnostic_codes};

use crate::context::EmitContext;

/// PHP open marker that starts every translated file.
pub const OPEN_TAG: &str = "<?php\n";

/// Statement terminator.
pub const TERMINATOR: &str = ";\n";

/// Printer options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrinterOptions {
    /// Prefix the output with [`OPEN_TAG`].
    pub open_tag: bool,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self { open_tag: true }
    }
}

/// Text emitted for one node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Fragment {
    pub text: String,
    pub needs_terminator: bool,
}

impl Fragment {
    pub(crate) const fn inline(text: String) -> Self {
        Self {
            text,
            needs_terminator: false,
        }
    }

    pub(crate) const fn statement(text: String) -> Self {
        Self {
            text,
            needs_terminator: true,
        }
    }

    pub(crate) const fn empty() -> Self {
        Self::inline(String::new())
    }

    /// Apply the terminator policy and return the final text.
    pub(crate) fn finish(self) -> String {
        let mut text = self.text;
        if self.needs_terminator && !ends_with_terminator(&text) {
            text.push_str(TERMINATOR);
        }
        text
    }
}

fn ends_with_terminator(text: &str) -> bool {
    text.ends_with(';') || text.ends_with(TERMINATOR)
}

/// Translates a tree into PHP text.
///
/// The printer holds no per-node state; everything a node needs about its
/// position comes in through [`EmitContext`].
pub struct Printer<'a> {
    scopes: &'a mut dyn ScopeRecorder,
    options: PrinterOptions,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Printer<'a> {
    pub fn new(scopes: &'a mut dyn ScopeRecorder, options: PrinterOptions) -> Self {
        Self {
            scopes,
            options,
            diagnostics: Vec::new(),
        }
    }

    /// Translate a whole tree, prefixed with the open marker when enabled.
    pub fn print(&mut self, root: &Node) -> String {
        let _span = debug_span!("print", root = root.kind_name()).entered();
        let mut output = String::new();
        if self.options.open_tag {
            output.push_str(OPEN_TAG);
        }
        output.push_str(&self.emit(root, EmitContext::root()));
        output
    }

    /// Emit one node and apply the terminator policy.
    pub fn emit(&mut self, node: &Node, ctx: EmitContext<'_>) -> String {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || {
            self.emit_fragment(node, ctx).finish()
        })
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    pub(crate) fn emit_fragment(&mut self, node: &Node, ctx: EmitContext<'_>) -> Fragment {
        trace!(kind = node.kind_name(), parent = ?ctx.parent, "emit");

        match node {
            Node::Program(program) => self.emit_sequence(&program.body, NodeKind::Program),
            Node::BlockStatement(block) => self.emit_sequence(&block.body, NodeKind::BlockStatement),
            Node::ClassBody(block) => self.emit_sequence(&block.body, NodeKind::ClassBody),
            Node::VariableDeclaration(decl) => self.emit_variable_declaration(decl),
            Node::VariableDeclarator(decl) => self.emit_variable_declarator(decl),
            Node::Identifier(ident) => self.emit_identifier(&ident.name, ctx),
            Node::Punctuator(punct) => Fragment::inline(punct.value.clone()),
            Node::Literal(lit) => Fragment::inline(lit.text().into_owned()),
            Node::BinaryExpression(binary)
            | Node::LogicalExpression(binary)
            | Node::AssignmentExpression(binary) => self.emit_binary(binary, node.kind()),
            Node::ExpressionStatement(stmt) => self.emit_expression_statement(stmt),
            Node::CallExpression(call) => self.emit_call(call, ctx),
            Node::NewExpression(call) => self.emit_new(call),
            Node::MemberExpression(member) => self.emit_member(member),
            Node::FunctionDeclaration(function) => self.emit_function_declaration(function),
            Node::FunctionExpression(function) => self.emit_function_expression(function),
            Node::ObjectExpression(object) => self.emit_object(object),
            Node::ArrayExpression(array) => self.emit_array(array),
            Node::Property(property) => self.emit_property(property),
            Node::ReturnStatement(stmt) => self.emit_return(stmt),
            Node::ClassDeclaration(class) => self.emit_class(class),
            Node::MethodDefinition(method) => self.emit_method(method, ctx),
            Node::ThisExpression => Fragment::inline("$this".to_string()),
            Node::IfStatement(stmt) => self.emit_if(stmt),
            Node::ForStatement(stmt) => self.emit_for(stmt),
            Node::ForInStatement(stmt) => self.emit_for_in(stmt),
            Node::UpdateExpression(update) => self.emit_update(update),
            Node::SwitchStatement(stmt) => self.emit_switch(stmt),
            Node::SwitchCase(case) => self.emit_switch_case(case),
            Node::BreakStatement(stmt) => self.emit_break(stmt),
            Node::ModuleDeclaration(module) => self.emit_module(module),
            Node::ExportDeclaration(export) => self.emit_export(export),
            Node::ImportDeclaration(import) => self.emit_import(import),
            Node::ImportSpecifier(spec) => self.emit_import_specifier(spec, ctx),
            Node::Unsupported(unsupported) => self.report_unsupported(unsupported),
        }
    }

    /// Statements of a program, block or class body, in order.
    fn emit_sequence(&mut self, body: &[Node], parent: NodeKind) -> Fragment {
        let mut text = String::new();
        let last = body.len().saturating_sub(1);
        for (i, stmt) in body.iter().enumerate() {
            let ctx = EmitContext::child_of(parent).at_position(i == last);
            text.push_str(&self.emit(stmt, ctx));
        }
        Fragment::inline(text)
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    fn report_unsupported(&mut self, node: &UnsupportedNode) -> Fragment {
        warn!(kind = %node.kind, "'{}' not implemented", node.kind);
        let (start, length) = node
            .range
            .map_or((0, 0), |[start, end]| (start, end.saturating_sub(start)));
        let location = node.loc.map(|loc| Location {
            line: loc.start.line,
            column: loc.start.column,
        });
        self.diagnostics.push(
            Diagnostic::from_code(
                diagnostic_codes::NODE_KIND_NOT_IMPLEMENTED,
                start,
                length,
                &[node.kind.as_str()],
            )
            .with_location(location),
        );
        Fragment::empty()
    }

    /// Report a supported kind used in a shape the printer cannot translate.
    pub(crate) fn report(&mut self, code: u32, args: &[&str]) -> Fragment {
        let diagnostic = Diagnostic::from_code(code, 0, 0, args);
        warn!(code, "{}", diagnostic.message_text);
        self.diagnostics.push(diagnostic);
        Fragment::empty()
    }
}

#[cfg(test)]
#[path = "../tests/printer_tests.rs"]
mod printer_tests;
