//! Casing heuristic and member-access classification.
//!
//! The input carries no type information, so whether `a.b` reads a
//! namespace, a static member or an instance member is inferred from the
//! casing of the names involved: a leading uppercase letter marks a name as
//! static-style.
//!
//! | object static | property static | connective |
//! |---|---|---|
//! | yes | yes | `\` (namespace) |
//! | yes | no | `::` (static member) |
//! | no | any | `->` (instance member) |
//!
//! When the object is itself a non-computed member access, one level is
//! collapsed: its own object/property pair is classified instead. That pair
//! decides the inner join (`A.B` in `A.B.c`); the outer join stays a
//! namespace separator only while the chain keeps naming namespaces
//! (`A.B.C` -> `A\B\C`) and falls back to instance access otherwise
//! (`A.B.c` -> `A\B->c`).

use esphp_ast::Node;

use crate::normalize::MemberLike;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connective {
    Namespace,
    Static,
    Instance,
}

impl Connective {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Namespace => "\\",
            Self::Static => "::",
            Self::Instance => "->",
        }
    }

    /// The classification table for a plain `object.property` pair.
    #[must_use]
    pub const fn for_pair(object_static: bool, property_static: bool) -> Self {
        match (object_static, property_static) {
            (true, true) => Self::Namespace,
            (true, false) => Self::Static,
            (false, _) => Self::Instance,
        }
    }
}

/// Leading uppercase letter.
#[must_use]
pub fn is_static_style(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Only identifiers carry a name the heuristic can look at.
#[must_use]
pub fn node_is_static_style(node: &Node) -> bool {
    node.identifier_name().is_some_and(is_static_style)
}

/// Outcome of classifying one member access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemberAccess {
    /// Render the immediate object as a bare static-style name.
    pub object_static: bool,
    /// Render the immediate property as a static-style name.
    pub property_static: bool,
    pub connective: Connective,
}

#[must_use]
pub fn classify_member(member: &MemberLike<'_>) -> MemberAccess {
    let property_static = node_is_static_style(member.property);

    match member.collapsed {
        Some((inner_object, inner_property)) => {
            let inner = Connective::for_pair(
                node_is_static_style(inner_object),
                node_is_static_style(inner_property),
            );
            let connective = if inner == Connective::Namespace && property_static {
                Connective::Namespace
            } else {
                Connective::Instance
            };
            MemberAccess {
                object_static: false,
                property_static,
                connective,
            }
        }
        None => {
            let object_static = node_is_static_style(member.object);
            MemberAccess {
                object_static,
                property_static,
                connective: Connective::for_pair(object_static, property_static),
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/casing_tests.rs"]
mod casing_tests;
