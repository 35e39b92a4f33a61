//! Check command implementation.
//!
//! Lints filter files and optionally writes fixes back.

use std::path::{Path, PathBuf};

use filterlint_core::{Catalog, Document, LineParser, LineResult, LintReport, LintSettings};
use tracing::{debug, info};

use super::config::Config;
use super::{CommandContext, CommandError, Result};
use crate::output::{format_check_json, format_check_text};

/// Options for the check command.
#[derive(Debug, Default)]
pub struct CheckOptions {
    /// Files to lint.
    pub files: Vec<PathBuf>,
    /// Apply fixes and colour rewrites to the files.
    pub fix: bool,
    /// Suppress block trailing-text warnings.
    pub no_warnings: bool,
    /// Catalog file overriding the configured one.
    pub catalog: Option<PathBuf>,
}

/// The outcome of linting one file.
#[derive(Debug)]
pub struct CheckedFile {
    /// The path as given on the command line.
    pub path: PathBuf,
    /// Per-line results, after fixes when `--fix` was given.
    pub results: Vec<LineResult>,
    /// Diagnostic counts for `results`.
    pub report: LintReport,
    /// Number of fixes written to the file.
    pub fixed: usize,
    /// Whether the file on disk was rewritten.
    pub saved: bool,
}

/// Builds the catalog from the override, the configured file or the built-in
/// names, then adds the configured whitelist.
pub fn build_catalog(config: &Config, override_path: Option<&Path>) -> Result<Catalog> {
    let path = override_path.or(config.linter.catalog.as_deref());
    let mut catalog = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading catalog");
            Catalog::load(path)?
        }
        None => Catalog::builtin(),
    };
    catalog.whitelist(&config.whitelist.classes, &config.whitelist.bases);
    Ok(catalog)
}

/// Returns the lint settings from flags and configuration.
pub fn lint_settings(config: &Config, opts: &CheckOptions) -> LintSettings {
    LintSettings {
        enable_warnings: !opts.no_warnings && config.linter.enable_warnings.unwrap_or(true),
    }
}

/// Lints every file in `opts`, writing fixes when requested.
pub fn lint_files(config: &Config, opts: &CheckOptions) -> Result<Vec<CheckedFile>> {
    let catalog = build_catalog(config, opts.catalog.as_deref())?;
    let parser = LineParser::new(&catalog).with_settings(lint_settings(config, opts));

    opts.files
        .iter()
        .map(|path| lint_file(&parser, path, opts.fix))
        .collect()
}

fn lint_file(parser: &LineParser<'_>, path: &Path, fix: bool) -> Result<CheckedFile> {
    let mut document = Document::open(path)?;
    let original = document.contents();
    let mut results = document.lint(parser)?;

    let mut fixed = 0;
    let mut saved = false;
    if fix {
        fixed = document.apply_fixes(&results)?;
        if fixed > 0 {
            results = document.lint(parser)?;
        }
        if document.contents() != original {
            document.save()?;
            saved = true;
            info!(path = %path.display(), fixed, "wrote fixes");
        }
    }

    let report = LintReport::from_results(&results);
    Ok(CheckedFile {
        path: path.to_path_buf(),
        results,
        report,
        fixed,
        saved,
    })
}

/// Executes the check command.
///
/// # Errors
///
/// Returns [`CommandError::LintFailed`] when any error diagnostic remains.
pub fn execute(ctx: &CommandContext, config: &Config, opts: &CheckOptions) -> Result<()> {
    let files = lint_files(config, opts)?;

    let mut total = LintReport::default();
    for file in &files {
        total.merge(file.report);
    }

    if ctx.json_output {
        println!("{}", format_check_json(&files, &total)?);
    } else {
        let text = format_check_text(&files, &total, ctx.use_colors, ctx.verbose, ctx.quiet);
        if !text.is_empty() {
            print!("{text}");
        }
    }

    if total.has_errors() {
        return Err(CommandError::LintFailed {
            errors: total.errors,
        });
    }
    Ok(())
}
