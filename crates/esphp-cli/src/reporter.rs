use colored::Colorize;

use esphp_common::{Diagnostic, DiagnosticCategory};

/// Prefix of rendered diagnostic codes.
pub const CODE_PREFIX: &str = "ES";

/// Renders diagnostics as `file(line,col): category ESnnnn: message`.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// One line per diagnostic, each ending in a newline.
    pub fn render(&self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for diagnostic in diagnostics {
            out.push_str(&self.format_diagnostic(diagnostic));
            out.push('\n');
        }
        out
    }

    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let mut output = self.format_location(diagnostic);
        output.push_str(": ");
        output.push_str(&self.format_category(diagnostic.category));

        let code = self.format_code(diagnostic.code);
        if !code.is_empty() {
            output.push(' ');
            output.push_str(&code);
        }
        output.push_str(": ");
        output.push_str(&diagnostic.message_text);
        output
    }

    /// Columns in the tree are 0-based; rendered columns are 1-based.
    fn format_location(&self, diagnostic: &Diagnostic) -> String {
        let file = if diagnostic.file.is_empty() {
            "<unknown>"
        } else {
            diagnostic.file.as_str()
        };
        let location = match diagnostic.location {
            Some(location) => format!("{file}({},{})", location.line, location.column + 1),
            None => file.to_string(),
        };
        if self.color {
            location.cyan().to_string()
        } else {
            location
        }
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = category.as_str();

        if !self.color {
            return label.to_string();
        }

        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
        }
    }

    fn format_code(&self, code: u32) -> String {
        if code == 0 {
            return String::new();
        }

        let label = format!("{CODE_PREFIX}{code}");
        if self.color {
            label.bright_blue().to_string()
        } else {
            label
        }
    }
}
