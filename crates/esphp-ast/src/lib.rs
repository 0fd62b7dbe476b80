//! Typed ESTree input model for esphp.
//!
//! The tree arrives as JSON produced by an esprima-compatible parser. Each
//! supported `type` tag maps to a struct; anything else is kept as
//! [`Node::Unsupported`] so the emitter can report it and carry on.

pub mod node;
pub use node::*;

// JSON loading and the structural error type
pub mod load;
pub use load::AstError;
