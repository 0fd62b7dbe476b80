//! ESTree-to-PHP emitter.
//!
//! [`translate`] runs a single pass over a loaded tree and returns the PHP
//! text, the diagnostics for every construct that could not be translated,
//! and the scopes recorded along the way. [`Printer`] is the lower-level
//! entry point for callers that bring their own [`ScopeRecorder`].
//!
//! Member access is classified by identifier casing (see [`casing`]) and a
//! fixed table of method-name rewrites (see [`overrides`]) replaces the
//! default call emission for well-known JavaScript builtins.

pub mod casing;
pub mod context;
pub mod emitter;
pub mod normalize;
pub mod overrides;

pub use casing::{Connective, MemberAccess, classify_member, is_static_style};
pub use context::EmitContext;
pub use emitter::{OPEN_TAG, Printer, PrinterOptions, TERMINATOR};
pub use overrides::{OverrideCall, RewriteFn, is_override, lookup_override};

use esphp_ast::Node;
use esphp_binder::ScopeTable;
pub use esphp_binder::{NoopScopeRecorder, ScopeRecorder};
use esphp_common::Diagnostic;

/// Result of one translation run.
#[derive(Debug)]
pub struct Translation {
    pub code: String,
    pub diagnostics: Vec<Diagnostic>,
    pub scopes: ScopeTable,
}

impl Translation {
    /// True when every node in the tree had a translation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Translate `root` with a fresh scope table.
#[must_use]
pub fn translate(root: &Node, options: PrinterOptions) -> Translation {
    let mut scopes = ScopeTable::new();
    let (code, diagnostics) = {
        let mut printer = Printer::new(&mut scopes, options);
        let code = printer.print(root);
        (code, printer.take_diagnostics())
    };
    Translation {
        code,
        diagnostics,
        scopes,
    }
}
