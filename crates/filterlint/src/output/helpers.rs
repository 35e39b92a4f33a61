//! Common helper functions for output formatting.

use filterlint_core::{Range, Severity};
use owo_colors::OwoColorize;

/// Formats a severity label for display.
pub fn format_severity(severity: Severity, use_colors: bool) -> String {
    let label = match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    };

    if use_colors {
        match severity {
            Severity::Error => label.red().bold().to_string(),
            Severity::Warning => label.yellow().bold().to_string(),
        }
    } else {
        label.to_string()
    }
}

/// Formats `path:line:col` with 1-based line and column numbers.
pub fn format_location(path: &str, range: &Range) -> String {
    format!("{}:{}:{}", path, range.line + 1, range.start + 1)
}

/// Formats a count with a singular or plural noun.
pub fn pluralize(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

/// Indents every line of `text` by `width` spaces.
pub fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
