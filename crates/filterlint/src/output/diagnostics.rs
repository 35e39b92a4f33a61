//! Check command output formatting.

use filterlint_core::{Diagnostic, LintReport};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::commands::check::CheckedFile;

use super::helpers::{format_location, format_severity, indent, pluralize};

/// JSON output structure for the check command.
#[derive(Serialize)]
pub struct CheckOutput<'a> {
    pub files: Vec<FileOutput<'a>>,
    pub summary: &'a LintReport,
}

/// JSON output structure for one checked file.
#[derive(Serialize)]
pub struct FileOutput<'a> {
    pub path: String,
    pub diagnostics: Vec<&'a Diagnostic>,
    pub report: &'a LintReport,
    pub fixed: usize,
    pub saved: bool,
}

/// Formats check results as JSON.
pub fn format_check_json(
    files: &[CheckedFile],
    total: &LintReport,
) -> Result<String, serde_json::Error> {
    let files = files
        .iter()
        .map(|file| FileOutput {
            path: file.path.display().to_string(),
            diagnostics: file.results.iter().flat_map(|r| &r.diagnostics).collect(),
            report: &file.report,
            fixed: file.fixed,
            saved: file.saved,
        })
        .collect();

    serde_json::to_string_pretty(&CheckOutput {
        files,
        summary: total,
    })
}

/// Formats one diagnostic as `path:line:col: severity: excerpt`.
pub fn format_diagnostic(path: &str, diagnostic: &Diagnostic, use_colors: bool) -> String {
    let location = format_location(path, &diagnostic.range);
    let severity = format_severity(diagnostic.severity, use_colors);
    let mut line = if use_colors {
        format!("{}: {}: {}", location.bold(), severity, diagnostic.excerpt)
    } else {
        format!("{}: {}: {}", location, severity, diagnostic.excerpt)
    };

    if let Some(fix) = &diagnostic.fix {
        let hint = format!("[fix: {}]", fix.title);
        line.push(' ');
        if use_colors {
            line.push_str(&hint.dimmed().to_string());
        } else {
            line.push_str(&hint);
        }
    }

    line
}

/// Formats check results as text.
///
/// Quiet mode prints errors only and no summary. Verbose mode adds the long
/// description and documentation link of each diagnostic.
pub fn format_check_text(
    files: &[CheckedFile],
    total: &LintReport,
    use_colors: bool,
    verbose: bool,
    quiet: bool,
) -> String {
    let mut output = String::new();

    for file in files {
        let path = file.path.display().to_string();
        for diagnostic in file.results.iter().flat_map(|r| &r.diagnostics) {
            if quiet && !diagnostic.is_error() {
                continue;
            }
            output.push_str(&format_diagnostic(&path, diagnostic, use_colors));
            output.push('\n');

            if verbose {
                if let Some(description) = &diagnostic.description {
                    output.push_str(&indent(description, 4));
                    output.push('\n');
                }
                if let Some(url) = &diagnostic.url {
                    output.push_str(&format!("    see {url}\n"));
                }
            }
        }
    }

    if quiet {
        return output;
    }

    let fixed: usize = files.iter().map(|f| f.fixed).sum();
    let mut summary = format!(
        "Checked {}: {}, {}",
        pluralize(files.len(), "file"),
        pluralize(total.errors, "error"),
        pluralize(total.warnings, "warning"),
    );
    if fixed > 0 {
        summary.push_str(&format!(", {} applied", pluralize(fixed, "fix")));
    }

    if use_colors {
        if total.has_errors() {
            output.push_str(&format!("{}\n", summary.red()));
        } else {
            output.push_str(&format!("{}\n", summary.green()));
        }
    } else {
        output.push_str(&summary);
        output.push('\n');
    }

    output
}
