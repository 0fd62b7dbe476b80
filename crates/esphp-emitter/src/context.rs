//! Structural context threaded through every `emit` call.

use esphp_ast::NodeKind;

/// Where a node sits in its parent's shape.
///
/// The emitter never stores anything on the nodes it visits; whatever a
/// child needs to know about its surroundings travels in this value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmitContext<'a> {
    /// Kind of the enclosing node; `None` for the root.
    pub parent: Option<NodeKind>,
    /// The node is the callee of a call or `new` expression.
    pub is_callee: bool,
    /// The node is the non-computed property of a member access.
    pub is_member_property: bool,
    /// The casing heuristic classified the node as static-style.
    pub is_static: bool,
    /// The node is the last element of a statement sequence.
    pub is_last: bool,
    /// Capitalised namespace of the enclosing import declaration.
    pub import_source: Option<&'a str>,
}

impl<'a> EmitContext<'a> {
    #[must_use]
    pub const fn root() -> Self {
        Self {
            parent: None,
            is_callee: false,
            is_member_property: false,
            is_static: false,
            is_last: false,
            import_source: None,
        }
    }

    /// Fresh context for a direct child of a `parent` node.
    #[must_use]
    pub const fn child_of(parent: NodeKind) -> Self {
        Self {
            parent: Some(parent),
            ..Self::root()
        }
    }

    #[must_use]
    pub const fn as_callee(mut self) -> Self {
        self.is_callee = true;
        self
    }

    #[must_use]
    pub const fn as_member_property(mut self) -> Self {
        self.is_member_property = true;
        self
    }

    #[must_use]
    pub const fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    #[must_use]
    pub const fn at_position(mut self, is_last: bool) -> Self {
        self.is_last = is_last;
        self
    }

    #[must_use]
    pub const fn with_import_source(mut self, source: &'a str) -> Self {
        self.import_source = Some(source);
        self
    }

    /// Identifiers in this position render without the `$` sigil.
    #[must_use]
    pub const fn renders_bare_identifier(&self) -> bool {
        self.is_static || self.is_callee || self.is_member_property
    }

    #[must_use]
    pub fn parent_is(&self, kind: NodeKind) -> bool {
        self.parent == Some(kind)
    }
}
