//! Scope recording for esphp.
//!
//! The emitter does not read scopes back; it only announces each function it
//! enters through [`ScopeRecorder`]. [`ScopeTable`] is the recorder the
//! driver uses, [`NoopScopeRecorder`] the one for callers that do not care.

pub mod scope;
pub use scope::{FunctionEntry, FunctionKind, Scope, ScopeId, ScopeTable};

/// Capability the emitter depends on but does not own.
///
/// Called exactly once per function-like node, before its body is emitted.
pub trait ScopeRecorder {
    fn on_function_entered(&mut self, function: &FunctionEntry<'_>);
}

/// Recorder that ignores every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopScopeRecorder;

impl ScopeRecorder for NoopScopeRecorder {
    fn on_function_entered(&mut self, _function: &FunctionEntry<'_>) {}
}
