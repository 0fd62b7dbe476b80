//! One translation run: read, load, translate, write.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span};

use crate::args::CliArgs;
use crate::config::{ResolvedOptions, find_config, resolve_options};
use esphp_ast::Node;
use esphp_common::Diagnostic;
use esphp_emitter::{PrinterOptions, Translation, translate};

/// Name diagnostics carry when the tree came from standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Exit status when translation succeeded.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status when constructs went untranslated and the run was asked to fail on them.
pub const EXIT_UNSUPPORTED: i32 = 1;
/// Exit status for load, config and I/O failures.
pub const EXIT_FAILURE: i32 = 2;

#[derive(Debug)]
pub struct RunResult {
    /// Display name of the input, as used in diagnostics.
    pub input_name: String,
    pub options: ResolvedOptions,
    pub translation: Translation,
    /// Files written during the run, in order.
    pub written: Vec<PathBuf>,
}

impl RunResult {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.options.fail_on_unsupported && !self.translation.is_complete() {
            EXIT_UNSUPPORTED
        } else {
            EXIT_SUCCESS
        }
    }
}

/// Load `source` as ESTree JSON and translate it.
///
/// Diagnostics come back tagged with `input_name`.
pub fn translate_source(source: &str, input_name: &str, options: PrinterOptions) -> Result<Translation> {
    let root = Node::from_json(source)
        .with_context(|| format!("failed to load ESTree JSON from {input_name}"))?;
    let mut translation = translate(&root, options);
    translation.diagnostics = std::mem::take(&mut translation.diagnostics)
        .into_iter()
        .map(|diagnostic| diagnostic.with_file(input_name))
        .collect();
    Ok(translation)
}

pub fn run(args: &CliArgs, cwd: &Path) -> Result<RunResult> {
    let config = find_config(args, cwd)?;
    let options = resolve_options(
        args,
        config.as_ref().map(|(config, base)| (config, base.as_path())),
        cwd,
    );
    debug!(?options, "resolved options");

    let (source, input_name) = read_input(args, cwd)?;
    let _span = info_span!("translate", input = %input_name).entered();

    let mut translation = translate_source(&source, &input_name, options.printer_options())?;
    if options.fail_on_unsupported {
        raise_to_errors(&mut translation);
    }
    info!(
        diagnostics = translation.diagnostics.len(),
        scopes = translation.scopes.len(),
        "translated"
    );

    let mut written = Vec::new();
    if let Some(out_file) = &options.out_file {
        std::fs::write(out_file, &translation.code)
            .with_context(|| format!("failed to write output: {}", out_file.display()))?;
        written.push(out_file.clone());
    }
    if let Some(scopes) = &args.scopes {
        let path = cwd.join(scopes);
        let json = serde_json::to_string_pretty(&translation.scopes)
            .context("failed to serialize scope table")?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write scopes: {}", path.display()))?;
        written.push(path);
    }

    Ok(RunResult {
        input_name,
        options,
        translation,
        written,
    })
}

/// A run that fails on untranslated input reports its diagnostics as errors.
fn raise_to_errors(translation: &mut Translation) {
    translation.diagnostics = std::mem::take(&mut translation.diagnostics)
        .into_iter()
        .map(Diagnostic::into_error)
        .collect();
}

fn read_input(args: &CliArgs, cwd: &Path) -> Result<(String, String)> {
    if args.reads_stdin() {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read standard input")?;
        return Ok((source, STDIN_NAME.to_string()));
    }

    let path = cwd.join(&args.input);
    let source = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read input: {}", path.display()))?;
    Ok((source, args.input.display().to_string()))
}
