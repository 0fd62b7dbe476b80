//! Normalized views over structurally similar node kinds.
//!
//! Constructor calls share the call emission path and function expressions
//! and methods share the function-declaration path. Instead of rewriting
//! node kinds in place, each shape is converted into a borrowed view that
//! the emitter consumes.

use std::borrow::Cow;

use esphp_ast::{Call, Function, Member, Node, NodeKind};
use esphp_binder::{FunctionEntry, FunctionKind};

/// Conventional PHP constructor name.
pub const CONSTRUCTOR_NAME: &str = "__construct";

// =============================================================================
// Calls
// =============================================================================

/// A call or `new` expression.
#[derive(Clone, Copy, Debug)]
pub struct CallLike<'a> {
    pub callee: &'a Node,
    pub arguments: &'a [Node],
    /// Kind the view was built from.
    pub origin: NodeKind,
}

impl<'a> CallLike<'a> {
    #[must_use]
    pub fn from_call(call: &'a Call) -> Self {
        Self {
            callee: &call.callee,
            arguments: &call.arguments,
            origin: NodeKind::CallExpression,
        }
    }

    #[must_use]
    pub fn from_new(call: &'a Call) -> Self {
        Self {
            callee: &call.callee,
            arguments: &call.arguments,
            origin: NodeKind::NewExpression,
        }
    }

    /// `receiver.name(...)`: the accessed property name and the member node,
    /// when the callee is a non-computed member access on an identifier name.
    #[must_use]
    pub fn accessed_property(&self) -> Option<(&'a str, &'a Member)> {
        let Node::MemberExpression(member) = self.callee else {
            return None;
        };
        if member.computed {
            return None;
        }
        member.property.identifier_name().map(|name| (name, member))
    }
}

// =============================================================================
// Member access
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct MemberLike<'a> {
    pub object: &'a Node,
    pub property: &'a Node,
    pub computed: bool,
    /// Object/property pair of the object when it is itself a non-computed
    /// member access.
    pub collapsed: Option<(&'a Node, &'a Node)>,
}

impl<'a> MemberLike<'a> {
    #[must_use]
    pub fn from_member(member: &'a Member) -> Self {
        let collapsed = match member.object.as_ref() {
            Node::MemberExpression(inner) if !inner.computed => {
                Some((inner.object.as_ref(), inner.property.as_ref()))
            }
            _ => None,
        };
        Self {
            object: &member.object,
            property: &member.property,
            computed: member.computed,
            collapsed,
        }
    }
}

// =============================================================================
// Functions
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct Parameter<'a> {
    pub binding: &'a Node,
    pub default: Option<&'a Node>,
}

/// A function declaration, function expression or method body.
#[derive(Clone, Debug)]
pub struct FunctionLike<'a> {
    /// Empty for anonymous function expressions.
    pub name: Cow<'a, str>,
    pub params: Vec<Parameter<'a>>,
    pub body: &'a Node,
    pub kind: FunctionKind,
}

impl<'a> FunctionLike<'a> {
    #[must_use]
    pub fn from_declaration(function: &'a Function) -> Self {
        Self::build(function_name(function), function, FunctionKind::Declaration)
    }

    #[must_use]
    pub fn from_expression(function: &'a Function) -> Self {
        Self::build(function_name(function), function, FunctionKind::Expression)
    }

    /// Method bodies take their name from the method key; `constructor`
    /// becomes [`CONSTRUCTOR_NAME`].
    #[must_use]
    pub fn from_method(key: &'a Node, function: &'a Function) -> Self {
        let name = match key.name_text() {
            Some(name) if name == "constructor" => Cow::Borrowed(CONSTRUCTOR_NAME),
            Some(name) => name,
            None => Cow::Borrowed(""),
        };
        Self::build(name, function, FunctionKind::Method)
    }

    fn build(name: Cow<'a, str>, function: &'a Function, kind: FunctionKind) -> Self {
        let params = function
            .params
            .iter()
            .enumerate()
            .map(|(i, binding)| Parameter {
                binding,
                default: function.defaults.get(i).and_then(Option::as_ref),
            })
            .collect();
        Self {
            name,
            params,
            body: &function.body,
            kind,
        }
    }

    /// What the scope recorder learns about this function.
    #[must_use]
    pub fn entry(&self) -> FunctionEntry<'_> {
        FunctionEntry {
            name: &self.name,
            parameters: self
                .params
                .iter()
                .filter_map(|param| param.binding.identifier_name())
                .collect(),
            kind: self.kind,
        }
    }
}

fn function_name(function: &Function) -> Cow<'_, str> {
    function
        .id
        .as_deref()
        .and_then(Node::identifier_name)
        .map_or(Cow::Borrowed(""), Cow::Borrowed)
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod normalize_tests;
