use clap::Parser;
use std::path::PathBuf;

use crate::tracing_config::LogFormat;

/// CLI arguments for the esphp binary.
#[derive(Parser, Debug)]
#[command(
    name = "esphp",
    version,
    about = "Translate ESTree JSON into PHP source"
)]
pub struct CliArgs {
    /// ESTree JSON file to translate, or `-` to read standard input.
    #[arg(default_value = "-")]
    pub input: PathBuf,

    // ==================== Configuration ====================
    /// Path to an esphp.json configuration file.
    #[arg(short = 'p', long = "config")]
    pub config: Option<PathBuf>,

    // ==================== Emit ====================
    /// Write the PHP output to this file instead of standard output.
    #[arg(short = 'o', long = "out-file", alias = "outFile")]
    pub out_file: Option<PathBuf>,

    /// Omit the `<?php` open marker.
    #[arg(long = "no-open-tag", alias = "noOpenTag")]
    pub no_open_tag: bool,

    /// Write the recorded function scopes to this file as JSON.
    #[arg(long)]
    pub scopes: Option<PathBuf>,

    // ==================== Diagnostics ====================
    /// Exit with status 1 when any construct could not be translated.
    #[arg(long = "fail-on-unsupported", alias = "failOnUnsupported")]
    pub fail_on_unsupported: bool,

    /// Color diagnostics. Defaults to whether stderr is a terminal.
    #[arg(long)]
    pub pretty: Option<bool>,

    // ==================== Logging ====================
    /// Tracing filter directives, e.g. `debug` or `esphp_emitter=trace`.
    /// Overrides `ESPHP_LOG` and `RUST_LOG`.
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,

    /// Tracing output format. Overrides `ESPHP_LOG_FORMAT`.
    #[arg(long = "log-format", value_enum, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,
}

impl CliArgs {
    /// True when the input is standard input.
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}
