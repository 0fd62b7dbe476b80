//! Tracing configuration for debugging translations.
//!
//! Logging is off unless a filter is given, either with `--log` or through
//! the environment:
//!
//! ```bash
//! esphp --log debug --log-format tree app.json
//! ESPHP_LOG="esphp_emitter=trace" ESPHP_LOG_FORMAT=json esphp app.json
//! ```
//!
//! Command-line flags win over `ESPHP_LOG` / `ESPHP_LOG_FORMAT`, which win
//! over `RUST_LOG`. Every format writes to stderr so log lines never mix
//! with PHP written to stdout.

use clap::ValueEnum;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Registry, fmt};

use crate::args::CliArgs;

/// Filter variable, checked before `RUST_LOG`.
pub const LOG_ENV: &str = "ESPHP_LOG";
/// Output format variable.
pub const LOG_FORMAT_ENV: &str = "ESPHP_LOG_FORMAT";
/// Fallback filter variable.
pub const RUST_LOG_ENV: &str = "RUST_LOG";

/// Tracing output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Flat text lines.
    #[default]
    Text,
    /// Indented span tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Lenient parse for environment values; unknown names are `Text`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Logging choices for one process, resolved from flags and environment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogSettings {
    /// `EnvFilter` directives; `None` leaves logging off.
    pub filter: Option<String>,
    pub format: LogFormat,
}

impl LogSettings {
    /// Resolve against the process environment.
    #[must_use]
    pub fn from_env(args: &CliArgs) -> Self {
        Self::resolve(args, |name| std::env::var(name).ok())
    }

    /// Resolve with `env` standing in for the environment lookup.
    pub fn resolve(args: &CliArgs, env: impl Fn(&str) -> Option<String>) -> Self {
        let filter = args
            .log
            .clone()
            .or_else(|| env(LOG_ENV))
            .or_else(|| env(RUST_LOG_ENV))
            .filter(|directives| !directives.trim().is_empty());
        let format = args
            .log_format
            .or_else(|| env(LOG_FORMAT_ENV).map(|value| LogFormat::parse(&value)))
            .unwrap_or_default();
        Self { filter, format }
    }

    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.filter.is_some()
    }
}

/// Install the global subscriber described by `settings`.
///
/// Does nothing when no filter was given. Fails only if a subscriber is
/// already installed.
pub fn init_tracing(settings: &LogSettings) -> Result<(), TryInitError> {
    let Some(directives) = settings.filter.as_deref() else {
        return Ok(());
    };
    let filter = EnvFilter::builder().parse_lossy(directives);
    let registry = Registry::default().with(filter);

    match settings.format {
        LogFormat::Tree => registry
            .with(
                tracing_tree::HierarchicalLayer::default()
                    .with_indent_amount(2)
                    .with_indent_lines(true)
                    .with_deferred_spans(true)
                    .with_span_retrace(true)
                    .with_targets(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    }
}
