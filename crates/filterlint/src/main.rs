use clap::Parser;
use std::process::ExitCode;
use tracing::Level;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands, ConfigCommands};
use commands::check::CheckOptions;
use commands::config::{load_config, ConfigSetOptions};
use commands::{CommandContext, CommandError};
use filterlint_core::DocumentError;

/// Environment variable that raises logging to trace level.
const LOG_ENV: &str = "FILTERLINT_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        // The diagnostics have already been printed.
        Err(CommandError::LintFailed { .. }) if !cli.json => ExitCode::from(1),
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                match serde_json::to_string_pretty(&error_json) {
                    Ok(json) => eprintln!("{json}"),
                    Err(_) => eprintln!("Error: {e}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

/// Returns the log level for the given flags and `FILTERLINT_LOG` value.
fn log_level(cli: &Cli, env_value: Option<&str>) -> Level {
    if env_value.is_some_and(|v| v.eq_ignore_ascii_case("trace")) {
        Level::TRACE
    } else if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    }
}

/// Installs the stderr log subscriber.
fn init_tracing(cli: &Cli) {
    let env_value = std::env::var(LOG_ENV).ok();
    let level = log_level(cli, env_value.as_deref());
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn run(cli: &Cli) -> commands::Result<()> {
    // A broken config file must not prevent inspecting or replacing it.
    let config = match &cli.command {
        Commands::Config { .. } => load_config().unwrap_or_default(),
        _ => load_config()?,
    };
    let ctx = CommandContext::from_cli(cli, &config);

    match &cli.command {
        Commands::Check {
            files,
            fix,
            no_warnings,
            catalog,
        } => {
            let opts = CheckOptions {
                files: files.clone(),
                fix: *fix,
                no_warnings: *no_warnings,
                catalog: catalog.clone(),
            };
            commands::check::execute(&ctx, &config, &opts)
        }
        Commands::Parse { line } => commands::parse::execute(&config, line),
        Commands::Keywords => commands::keywords::execute(&ctx),
        Commands::Config { command } => match command {
            None | Some(ConfigCommands::Show) => commands::config::execute_show(&ctx),
            Some(ConfigCommands::Init) => commands::config::execute_init(&ctx),
            Some(ConfigCommands::Set { key, value }) => {
                let opts = ConfigSetOptions {
                    key: key.clone(),
                    value: value.clone(),
                };
                commands::config::execute_set(&ctx, &opts)
            }
            Some(ConfigCommands::Path) => commands::config::execute_path(&ctx),
        },
        Commands::Completions { shell } => Ok(commands::completions::execute(shell)?),
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Catalog(_) => "CATALOG_ERROR",
        CommandError::Document(_) => "DOCUMENT_ERROR",
        CommandError::Cursor(_) => "PARSE_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
        CommandError::LintFailed { .. } => "LINT_FAILED",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::LintFailed { .. } => ExitCode::from(1),
        CommandError::Cursor(_) => ExitCode::from(1),
        CommandError::Json(_) => ExitCode::from(1),
        CommandError::Document(DocumentError::ReadError { .. }) => ExitCode::from(3),
        CommandError::Document(DocumentError::WriteError { .. }) => ExitCode::from(3),
        CommandError::Document(_) => ExitCode::from(1),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Catalog(_) => ExitCode::from(5),
        CommandError::Config(_) => ExitCode::from(5),
    }
}
