use tracing::debug;

use esphp_ast::{
    BreakStatement, ForInStatement, ForStatement, IfStatement, Node, NodeKind, SwitchCase,
    SwitchStatement,
};

use super::{Fragment, Printer};
use crate::context::EmitContext;

/// Throwaway value binding of a translated `for...in` loop.
pub const FOREACH_VALUE_TEMP: &str = "$___";

impl<'a> Printer<'a> {
    // =========================================================================
    // Control flow
    // =========================================================================

    pub(super) fn emit_if(&mut self, stmt: &IfStatement) -> Fragment {
        let mut text = self.emit_if_chain(stmt);
        text.push('\n');
        Fragment::inline(text)
    }

    /// `if (...) {...} else ...` without the trailing newline, so that
    /// `else if` chains stay on one line.
    fn emit_if_chain(&mut self, stmt: &IfStatement) -> String {
        let ctx = EmitContext::child_of(NodeKind::IfStatement);
        let test = self.emit(&stmt.test, ctx);
        let consequent = self.emit(&stmt.consequent, ctx);
        let mut text = format!("if ({test}) {{\n{consequent}}}");

        if let Some(alternate) = &stmt.alternate {
            text.push_str(" else ");
            match alternate.as_ref() {
                Node::IfStatement(nested) => {
                    let nested = self.emit_if_chain(nested);
                    text.push_str(&nested);
                }
                Node::BlockStatement(_) => {
                    let block = self.emit(alternate, ctx);
                    text.push_str(&format!("{{\n{block}}}"));
                }
                other => {
                    let single = self.emit(other, ctx);
                    text.push_str(&format!("{{\n{single}}}"));
                }
            }
        }
        text
    }

    pub(super) fn emit_for(&mut self, stmt: &ForStatement) -> Fragment {
        let ctx = EmitContext::child_of(NodeKind::ForStatement);
        let init = match &stmt.init {
            Some(init) => self.emit_loop_binding(init, ctx),
            None => String::new(),
        };
        let test = match &stmt.test {
            Some(test) => self.emit(test, ctx),
            None => String::new(),
        };
        let update = match &stmt.update {
            Some(update) => self.emit(update, ctx),
            None => String::new(),
        };
        let body = self.emit(&stmt.body, ctx);
        Fragment::inline(format!("for ({init}; {test}; {update}) {{\n{body}}}\n"))
    }

    /// `for (k in o)` iterates `o`, exposing each key as `$k`.
    pub(super) fn emit_for_in(&mut self, stmt: &ForInStatement) -> Fragment {
        let ctx = EmitContext::child_of(NodeKind::ForInStatement);
        let collection = self.emit(&stmt.right, ctx);
        let key = self.emit_loop_binding(&stmt.left, ctx);
        let body = self.emit(&stmt.body, ctx);
        Fragment::inline(format!(
            "foreach ({collection} as {key} => {FOREACH_VALUE_TEMP}) {{\n{body}}}\n"
        ))
    }

    /// Loop heads take declarations inline: declarators are comma-joined and
    /// carry no terminators.
    fn emit_loop_binding(&mut self, node: &Node, ctx: EmitContext<'_>) -> String {
        let Node::VariableDeclaration(decl) = node else {
            return self.emit(node, ctx);
        };
        let declarator_ctx = EmitContext::child_of(NodeKind::VariableDeclaration);
        let mut declarators = Vec::with_capacity(decl.declarations.len());
        for declarator in &decl.declarations {
            declarators.push(self.emit_fragment(declarator, declarator_ctx).text);
        }
        declarators.join(", ")
    }

    pub(super) fn emit_switch(&mut self, stmt: &SwitchStatement) -> Fragment {
        let ctx = EmitContext::child_of(NodeKind::SwitchStatement);
        let discriminant = self.emit(&stmt.discriminant, ctx);
        let mut text = format!("switch ({discriminant}) {{\n");
        for case in &stmt.cases {
            let case = self.emit(case, ctx);
            text.push_str(&case);
            if !case.ends_with('\n') {
                text.push('\n');
            }
        }
        text.push_str("}\n");
        Fragment::inline(text)
    }

    pub(super) fn emit_switch_case(&mut self, case: &SwitchCase) -> Fragment {
        let ctx = EmitContext::child_of(NodeKind::SwitchCase);
        let mut text = match &case.test {
            Some(test) => {
                let test = self.emit(test, ctx);
                format!("case {test}:\n")
            }
            None => "default:\n".to_string(),
        };
        let last = case.consequent.len().saturating_sub(1);
        for (i, stmt) in case.consequent.iter().enumerate() {
            text.push_str(&self.emit(stmt, ctx.at_position(i == last)));
        }
        Fragment::inline(text)
    }

    /// Labels have no PHP counterpart and are dropped.
    pub(super) fn emit_break(&mut self, stmt: &BreakStatement) -> Fragment {
        if let Some(label) = stmt.label.as_deref().and_then(Node::identifier_name) {
            debug!(label, "dropping break label");
        }
        Fragment::statement("break".to_string())
    }
}
