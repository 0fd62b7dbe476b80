use clap::Parser;

use super::args::CliArgs;
use super::tracing_config::{
    LOG_ENV, LOG_FORMAT_ENV, LogFormat, LogSettings, RUST_LOG_ENV, init_tracing,
};

fn args(extra: &[&str]) -> CliArgs {
    let mut argv = vec!["esphp"];
    argv.extend_from_slice(extra);
    CliArgs::try_parse_from(argv).expect("args should parse")
}

fn env_of(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    let pairs = pairs.to_vec();
    move |name| {
        pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| (*value).to_string())
    }
}

#[test]
fn logging_is_off_without_a_filter() {
    let settings = LogSettings::resolve(&args(&[]), env_of(&[(LOG_FORMAT_ENV, "json")]));
    assert!(!settings.enabled());
    assert_eq!(settings.format, LogFormat::Json);
    assert!(init_tracing(&settings).is_ok());
}

#[test]
fn esphp_log_wins_over_rust_log() {
    let settings = LogSettings::resolve(
        &args(&[]),
        env_of(&[(LOG_ENV, "esphp_emitter=trace"), (RUST_LOG_ENV, "warn")]),
    );
    assert_eq!(settings.filter.as_deref(), Some("esphp_emitter=trace"));

    let settings = LogSettings::resolve(&args(&[]), env_of(&[(RUST_LOG_ENV, "warn")]));
    assert_eq!(settings.filter.as_deref(), Some("warn"));
}

#[test]
fn flags_win_over_environment() {
    let settings = LogSettings::resolve(
        &args(&["--log", "debug", "--log-format", "text"]),
        env_of(&[(LOG_ENV, "trace"), (LOG_FORMAT_ENV, "tree")]),
    );
    assert_eq!(
        settings,
        LogSettings {
            filter: Some("debug".to_string()),
            format: LogFormat::Text,
        }
    );
}

#[test]
fn blank_filter_counts_as_unset() {
    let settings = LogSettings::resolve(&args(&[]), env_of(&[(LOG_ENV, "  ")]));
    assert!(!settings.enabled());
}

#[test]
fn environment_format_is_lenient() {
    assert_eq!(LogFormat::parse(" Tree "), LogFormat::Tree);
    assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::parse("pretty"), LogFormat::Text);
    assert_eq!(LogFormat::default(), LogFormat::Text);
}
