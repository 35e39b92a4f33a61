//! Parse command implementation.
//!
//! Classifies a single line and prints the result as JSON. This is the
//! shape editor integrations consume.

use filterlint_core::{LineLocation, LineParser, LineResult};

use super::check::{build_catalog, lint_settings, CheckOptions};
use super::config::Config;
use super::Result;

/// Classifies `line` with the configured catalog and settings.
pub fn parse_line(config: &Config, line: &str) -> Result<LineResult> {
    let catalog = build_catalog(config, None)?;
    let parser =
        LineParser::new(&catalog).with_settings(lint_settings(config, &CheckOptions::default()));
    Ok(parser.parse(line, LineLocation::default())?)
}

/// Executes the parse command.
pub fn execute(config: &Config, line: &str) -> Result<()> {
    let result = parse_line(config, line)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
