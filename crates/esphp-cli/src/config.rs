use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::args::CliArgs;
use esphp_emitter::PrinterOptions;

/// Name of the configuration file looked up in the working directory when
/// `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "esphp.json";

/// Contents of an `esphp.json` file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EsphpConfig {
    #[serde(default)]
    pub open_tag: Option<bool>,
    #[serde(default)]
    pub fail_on_unsupported: Option<bool>,
    #[serde(default)]
    pub out_file: Option<PathBuf>,
}

/// Settings after merging the config file with command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub open_tag: bool,
    pub fail_on_unsupported: bool,
    pub out_file: Option<PathBuf>,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            open_tag: true,
            fail_on_unsupported: false,
            out_file: None,
        }
    }
}

impl ResolvedOptions {
    #[must_use]
    pub const fn printer_options(&self) -> PrinterOptions {
        PrinterOptions {
            open_tag: self.open_tag,
        }
    }
}

pub fn parse_config(source: &str) -> Result<EsphpConfig> {
    let config = serde_json::from_str(source).context("failed to parse esphp config JSON")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<EsphpConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// The explicit `--config` file, or `esphp.json` in `cwd` when present.
///
/// Paths inside the file are relative to the file's directory.
pub fn find_config(args: &CliArgs, cwd: &Path) -> Result<Option<(EsphpConfig, PathBuf)>> {
    let path = match &args.config {
        Some(path) => cwd.join(path),
        None => {
            let candidate = cwd.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                return Ok(None);
            }
            candidate
        }
    };
    let config = load_config(&path)?;
    let base = path.parent().map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
    Ok(Some((config, base)))
}

/// Flags override the file; the file overrides the defaults.
#[must_use]
pub fn resolve_options(args: &CliArgs, config: Option<(&EsphpConfig, &Path)>, cwd: &Path) -> ResolvedOptions {
    let mut resolved = ResolvedOptions::default();

    if let Some((config, base)) = config {
        if let Some(open_tag) = config.open_tag {
            resolved.open_tag = open_tag;
        }
        if let Some(fail) = config.fail_on_unsupported {
            resolved.fail_on_unsupported = fail;
        }
        if let Some(out_file) = &config.out_file {
            resolved.out_file = Some(base.join(out_file));
        }
    }

    if args.no_open_tag {
        resolved.open_tag = false;
    }
    if args.fail_on_unsupported {
        resolved.fail_on_unsupported = true;
    }
    if let Some(out_file) = &args.out_file {
        resolved.out_file = Some(cwd.join(out_file));
    }

    resolved
}
