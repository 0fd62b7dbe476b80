#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Write};

use esphp_cli::args::CliArgs;
use esphp_cli::driver::{self, EXIT_FAILURE};
use esphp_cli::reporter::Reporter;
use esphp_cli::tracing_config::{LogSettings, init_tracing};

fn main() {
    let args = CliArgs::parse();
    if let Err(err) = init_tracing(&LogSettings::from_env(&args)) {
        eprintln!("warning: logging disabled: {err}");
    }

    match run(&args) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn run(args: &CliArgs) -> Result<i32> {
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let result = driver::run(args, &cwd)?;

    if result.options.out_file.is_none() {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(result.translation.code.as_bytes())
            .context("failed to write standard output")?;
        stdout.flush().context("failed to flush standard output")?;
    }

    if !result.translation.diagnostics.is_empty() {
        let pretty = args
            .pretty
            .unwrap_or_else(|| std::io::stderr().is_terminal());
        let reporter = Reporter::new(pretty);
        // render() already ends every line with a newline
        eprint!("{}", reporter.render(&result.translation.diagnostics));
    }

    Ok(result.exit_code())
}
