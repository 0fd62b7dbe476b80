//! Diagnostic types and message lookup for the translator.
//!
//! Diagnostics never abort a translation. The emitter collects them while it
//! walks the tree and the driver decides how to report them.

use serde::Serialize;

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    /// Warnings are raised to errors when the run fails on untranslated input.
    Error = 1,
}

impl DiagnosticCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// One-based line and zero-based column, as carried by ESTree `loc` data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

/// A translation diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    /// Source position when the input tree carried `loc` data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

impl Diagnostic {
    /// Build a diagnostic from a registered code, filling the template's placeholders.
    ///
    /// Unknown codes fall back to the joined arguments so nothing is lost.
    #[must_use]
    pub fn from_code(code: u32, start: u32, length: u32, args: &[&str]) -> Self {
        let (category, message) = match get_diagnostic_message(code) {
            Some(definition) => (definition.category, format_message(definition.message, args)),
            None => (DiagnosticCategory::Warning, args.join(" ")),
        };
        Self {
            file: String::new(),
            start,
            length,
            location: None,
            message_text: message,
            category,
            code,
        }
    }

    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: Option<Location>) -> Self {
        self.location = location;
        self
    }

    /// Same code and message, reported as an error.
    #[must_use]
    pub fn into_error(mut self) -> Self {
        self.category = DiagnosticCategory::Error;
        self
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

// =============================================================================
// Message Data
// =============================================================================

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    pub const NODE_KIND_NOT_IMPLEMENTED: u32 = 9001;
    pub const EXPORT_WITHOUT_DECLARATION: u32 = 9002;
    pub const IMPORT_SPECIFIER_OUTSIDE_IMPORT: u32 = 9003;
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::NODE_KIND_NOT_IMPLEMENTED,
        category: DiagnosticCategory::Warning,
        message: "'{0}' not implemented.",
    },
    DiagnosticMessage {
        code: diagnostic_codes::EXPORT_WITHOUT_DECLARATION,
        category: DiagnosticCategory::Warning,
        message: "Export declarations without a wrapped declaration are not supported.",
    },
    DiagnosticMessage {
        code: diagnostic_codes::IMPORT_SPECIFIER_OUTSIDE_IMPORT,
        category: DiagnosticCategory::Warning,
        message: "Import specifier '{0}' appears outside of an import declaration.",
    },
];

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}

#[cfg(test)]
#[path = "tests/diagnostics_tests.rs"]
mod diagnostics_tests;
