//! Common types and utilities for the esphp translator.
//!
//! This crate provides foundational types used across all esphp crates:
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, message templates)
//! - Recursion limits shared by the loader and the emitter
//! - Name utilities shared by the emitter and the driver

// Diagnostics reported while translating a program
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, Location, diagnostic_codes, format_message,
    get_diagnostic_message,
};

// Depth limits and stack sizes for loading and emission
pub mod limits;

// Pure string transforms on identifier text
pub mod names;
pub use names::capitalise_first_letter;
