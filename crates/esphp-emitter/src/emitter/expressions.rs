use tracing::debug;

use esphp_ast::{
    ArrayExpression, Binary, Call, ExpressionStatement, Member, Node, NodeKind, ObjectExpression,
    Property, UpdateExpression,
};

use super::{Fragment, Printer};
use crate::casing::classify_member;
use crate::context::EmitContext;
use crate::normalize::{CallLike, MemberLike};
use crate::overrides::{OverrideCall, lookup_override};

impl<'a> Printer<'a> {
    // =========================================================================
    // Expressions
    // =========================================================================

    /// `$name` for variable references; bare `name` for callees, member
    /// properties and static-style names.
    pub(super) fn emit_identifier(&mut self, name: &str, ctx: EmitContext<'_>) -> Fragment {
        if ctx.renders_bare_identifier() {
            Fragment::inline(name.to_string())
        } else {
            Fragment::inline(format!("${name}"))
        }
    }

    pub(super) fn emit_binary(&mut self, binary: &Binary, kind: NodeKind) -> Fragment {
        let ctx = EmitContext::child_of(kind);
        let left = self.emit(&binary.left, ctx);
        let right = self.emit(&binary.right, ctx);
        Fragment::inline(binary_text(&left, &binary.operator, &right))
    }

    pub(super) fn emit_expression_statement(&mut self, stmt: &ExpressionStatement) -> Fragment {
        let ctx = EmitContext::child_of(NodeKind::ExpressionStatement);
        let text = self.emit(&stmt.expression, ctx);
        if text.is_empty() {
            return Fragment::empty();
        }
        Fragment::statement(text)
    }

    pub(super) fn emit_call(&mut self, call: &Call, ctx: EmitContext<'_>) -> Fragment {
        let fragment = self.emit_call_like(CallLike::from_call(call));
        // Only a call standing alone as a statement owes a terminator.
        if ctx.parent_is(NodeKind::ExpressionStatement) {
            Fragment::statement(fragment.text)
        } else {
            fragment
        }
    }

    /// `new` reuses call emission and prefixes the result.
    pub(super) fn emit_new(&mut self, call: &Call) -> Fragment {
        let inner = self.emit_call_like(CallLike::from_new(call)).finish();
        Fragment::inline(format!("new {inner}"))
    }

    fn emit_call_like(&mut self, call: CallLike<'_>) -> Fragment {
        if let Some((property, member)) = call.accessed_property()
            && let Some(rewrite) = lookup_override(property)
        {
            debug!(property, origin = %call.origin, "call rewritten by override");
            let target = OverrideCall {
                receiver: &member.object,
                property,
                arguments: call.arguments,
            };
            return Fragment::inline(rewrite(self, &target));
        }

        let callee_ctx = EmitContext::child_of(NodeKind::CallExpression).as_callee();
        let callee = self.emit(call.callee, callee_ctx);
        let args = self.emit_arguments(call.arguments);
        Fragment::inline(format!("{callee}({})", args.join(", ")))
    }

    /// Arguments of a call, each emitted as a call child.
    pub(crate) fn emit_arguments(&mut self, arguments: &[Node]) -> Vec<String> {
        let ctx = EmitContext::child_of(NodeKind::CallExpression);
        arguments.iter().map(|arg| self.emit(arg, ctx)).collect()
    }

    /// The object of a member access, rendered as it would be before a
    /// connective.
    pub(crate) fn emit_receiver(&mut self, receiver: &Node) -> String {
        let is_static = crate::casing::node_is_static_style(receiver);
        let ctx = EmitContext::child_of(NodeKind::MemberExpression).with_static(is_static);
        self.emit(receiver, ctx)
    }

    pub(super) fn emit_member(&mut self, member: &Member) -> Fragment {
        let view = MemberLike::from_member(member);
        let access = classify_member(&view);

        let object_ctx =
            EmitContext::child_of(NodeKind::MemberExpression).with_static(access.object_static);
        let object = self.emit(view.object, object_ctx);

        if view.computed {
            let property = self.emit(view.property, EmitContext::child_of(NodeKind::MemberExpression));
            return Fragment::inline(format!("{object}[{property}]"));
        }

        let property_ctx = EmitContext::child_of(NodeKind::MemberExpression)
            .as_member_property()
            .with_static(access.property_static);
        let property = self.emit(view.property, property_ctx);
        Fragment::inline(format!("{object}{}{property}", access.connective.as_str()))
    }

    pub(super) fn emit_object(&mut self, object: &ObjectExpression) -> Fragment {
        let ctx = EmitContext::child_of(NodeKind::ObjectExpression);
        let entries: Vec<String> = object
            .properties
            .iter()
            .map(|property| self.emit(property, ctx))
            .collect();
        Fragment::inline(format!("array({})", entries.join(", ")))
    }

    pub(super) fn emit_array(&mut self, array: &ArrayExpression) -> Fragment {
        let ctx = EmitContext::child_of(NodeKind::ArrayExpression);
        let elements: Vec<String> = array
            .elements
            .iter()
            .map(|element| match element {
                Some(element) => self.emit(element, ctx),
                None => "null".to_string(),
            })
            .collect();
        Fragment::inline(format!("array({})", elements.join(", ")))
    }

    /// `"key" => value`
    pub(super) fn emit_property(&mut self, property: &Property) -> Fragment {
        let ctx = EmitContext::child_of(NodeKind::Property);
        let key = match property.key.name_text() {
            Some(name) => name.into_owned(),
            None => self.emit(&property.key, ctx),
        };
        let value = self.emit(&property.value, ctx);
        Fragment::inline(format!("\"{}\" => {value}", escape_double_quoted(&key)))
    }

    /// Prefix and postfix forms both render as `<operand><operator>`.
    pub(super) fn emit_update(&mut self, update: &UpdateExpression) -> Fragment {
        let argument = self.emit(&update.argument, EmitContext::child_of(NodeKind::UpdateExpression));
        Fragment::inline(format!("{argument}{}", update.operator))
    }
}

pub(super) fn binary_text(left: &str, operator: &str, right: &str) -> String {
    format!("{left} {operator} {right}")
}

/// Escape text for a PHP double-quoted string.
fn escape_double_quoted(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' | '"' | '$' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}
