use clap::Parser;
use std::path::{Path, PathBuf};

use super::args::CliArgs;
use super::tracing_config::LogFormat;

#[test]
fn parses_defaults() {
    let args = CliArgs::try_parse_from(["esphp"]).expect("default args should parse");

    assert!(args.reads_stdin());
    assert!(args.config.is_none());
    assert!(args.out_file.is_none());
    assert!(args.scopes.is_none());
    assert!(!args.no_open_tag);
    assert!(!args.fail_on_unsupported);
    assert_eq!(args.pretty, None);
    assert!(args.log.is_none());
    assert!(args.log_format.is_none());
}

#[test]
fn parses_all_flags() {
    let args = CliArgs::try_parse_from([
        "esphp",
        "--config",
        "conf/esphp.json",
        "-o",
        "out/app.php",
        "--no-open-tag",
        "--scopes",
        "scopes.json",
        "--fail-on-unsupported",
        "--pretty",
        "false",
        "ast/app.json",
    ])
    .expect("flagged args should parse");

    assert!(!args.reads_stdin());
    assert_eq!(args.input, PathBuf::from("ast/app.json"));
    assert_eq!(args.config.as_deref(), Some(Path::new("conf/esphp.json")));
    assert_eq!(args.out_file.as_deref(), Some(Path::new("out/app.php")));
    assert_eq!(args.scopes.as_deref(), Some(Path::new("scopes.json")));
    assert!(args.no_open_tag);
    assert!(args.fail_on_unsupported);
    assert_eq!(args.pretty, Some(false));
}

#[test]
fn accepts_camel_case_aliases() {
    let args = CliArgs::try_parse_from(["esphp", "--outFile", "a.php", "--noOpenTag", "-"])
        .expect("aliases should parse");

    assert!(args.reads_stdin());
    assert_eq!(args.out_file.as_deref(), Some(Path::new("a.php")));
    assert!(args.no_open_tag);
}

#[test]
fn parses_logging_flags() {
    let args = CliArgs::try_parse_from([
        "esphp",
        "--log",
        "esphp_emitter=trace",
        "--log-format",
        "tree",
        "app.json",
    ])
    .expect("logging flags should parse");

    assert_eq!(args.log.as_deref(), Some("esphp_emitter=trace"));
    assert_eq!(args.log_format, Some(LogFormat::Tree));
}

#[test]
fn rejects_unknown_log_format() {
    let err = CliArgs::try_parse_from(["esphp", "--log-format", "xml"])
        .expect_err("unknown format should be rejected");
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}
