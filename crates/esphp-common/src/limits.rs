//! Limits and stack sizes for the recursive parts of the translator.
//!
//! Loading and emission both recurse once per level of tree nesting. Instead
//! of capping the tree at the serde_json default of 128 levels, the loader
//! accepts trees up to [`MAX_TREE_DEPTH`] and runs on a stack sized for the
//! depth it measured; the emitter grows its stack on demand.

// =============================================================================
// Depth Limits
// =============================================================================

/// Maximum JSON nesting depth accepted by the loader.
///
/// Counted in `[`/`{` levels of the input text, so one expression level
/// is usually one or two JSON levels. A left-nested `a + b + ...` chain of
/// a thousand terms sits near 1000.
pub const MAX_TREE_DEPTH: usize = 4096;

// =============================================================================
// Stack Sizes
// =============================================================================

/// Stack reserved per JSON level while loading.
pub const LOAD_STACK_PER_LEVEL: usize = 16 * 1024;

/// Fixed stack reserved for a load on top of the per-level share.
pub const LOAD_STACK_BASE: usize = 1024 * 1024;

/// Remaining stack below which a recursive step switches to a new segment.
pub const STACK_RED_ZONE: usize = 128 * 1024;

/// Size of each stack segment allocated when the red zone is reached.
pub const STACK_GROWTH: usize = 4 * 1024 * 1024;

/// Stack to reserve for loading a tree `depth` levels deep.
#[must_use]
pub const fn load_stack_size(depth: usize) -> usize {
    LOAD_STACK_BASE + depth * LOAD_STACK_PER_LEVEL
}
