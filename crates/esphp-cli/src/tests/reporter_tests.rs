use super::reporter::Reporter;
use esphp_common::{Diagnostic, Location, diagnostic_codes};

fn not_implemented(kind: &str) -> Diagnostic {
    Diagnostic::from_code(diagnostic_codes::NODE_KIND_NOT_IMPLEMENTED, 0, 0, &[kind])
}

#[test]
fn formats_location_category_and_code() {
    let diagnostic = not_implemented("WhileStatement")
        .with_file("app.json")
        .with_location(Some(Location { line: 3, column: 4 }));

    let reporter = Reporter::new(false);
    assert_eq!(
        reporter.format_diagnostic(&diagnostic),
        "app.json(3,5): warning ES9001: 'WhileStatement' not implemented."
    );
}

#[test]
fn raised_diagnostics_render_as_errors() {
    let diagnostic = not_implemented("WhileStatement")
        .with_file("app.json")
        .with_location(Some(Location { line: 3, column: 4 }))
        .into_error();

    let reporter = Reporter::new(false);
    assert_eq!(
        reporter.format_diagnostic(&diagnostic),
        "app.json(3,5): error ES9001: 'WhileStatement' not implemented."
    );
}

#[test]
fn omits_position_when_unknown() {
    let diagnostic = not_implemented("TryStatement").with_file("<stdin>");
    let reporter = Reporter::new(false);
    assert_eq!(
        reporter.format_diagnostic(&diagnostic),
        "<stdin>: warning ES9001: 'TryStatement' not implemented."
    );
}

#[test]
fn unnamed_file_is_marked_unknown() {
    let reporter = Reporter::new(false);
    assert!(reporter
        .format_diagnostic(&not_implemented("X"))
        .starts_with("<unknown>: "));
}

#[test]
fn render_ends_every_line() {
    let reporter = Reporter::new(false);
    let rendered = reporter.render(&[
        not_implemented("A").with_file("f"),
        not_implemented("B").with_file("f"),
    ]);
    assert_eq!(rendered.lines().count(), 2);
    assert!(rendered.ends_with('\n'));
    assert_eq!(reporter.render(&[]), "");
}

#[test]
fn color_keeps_the_message_text() {
    let reporter = Reporter::new(true);
    let rendered = reporter.format_diagnostic(&not_implemented("WithStatement").with_file("f"));
    assert!(rendered.contains("'WithStatement' not implemented."));
}
