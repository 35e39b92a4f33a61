//! Command implementations for the filterlint CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod check;
pub mod completions;
pub mod config;
pub mod keywords;
pub mod parse;

use std::env;

use crate::cli::Cli;
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Catalog loading error.
    #[error("catalog error: {0}")]
    Catalog(#[from] filterlint_core::CatalogError),

    /// Document read, edit or write error.
    #[error("document error: {0}")]
    Document(#[from] filterlint_core::DocumentError),

    /// A line handed to the classifier was not a single line.
    #[error("parse error: {0}")]
    Cursor(#[from] filterlint_core::CursorError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Linting finished and found errors.
    #[error("found {errors} error(s)")]
    LintFailed {
        /// Number of error diagnostics.
        errors: usize,
    },
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and configuration.
    ///
    /// Colors are disabled by `--no-color`, `output.color = false` or a
    /// non-empty `NO_COLOR` environment variable.
    pub fn from_cli(cli: &Cli, config: &Config) -> Self {
        let no_color_env = env::var("NO_COLOR").is_ok_and(|v| !v.is_empty());
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && !no_color_env && config.output.color.unwrap_or(true),
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}
