//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the filterlint CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// filterlint - A linter for item filter files
#[derive(Parser, Debug)]
#[command(name = "filterlint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lint filter files
    #[command(alias = "c")]
    Check {
        /// Filter files to lint
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Apply fixes and hex colour rewrites to the files
        #[arg(long)]
        fix: bool,

        /// Do not warn about ignored text after Show/Hide
        #[arg(long)]
        no_warnings: bool,

        /// Catalog JSON file to use instead of the configured one
        #[arg(long, env = "FILTERLINT_CATALOG")]
        catalog: Option<PathBuf>,
    },

    /// Classify a single line and print the result as JSON
    Parse {
        /// The line to classify
        line: String,
    },

    /// List the recognised filter keywords
    Keywords,

    /// View and edit configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Write a default config file
    Init,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. linter.enable_warnings)
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}
