//! Keywords command implementation.
//!
//! Lists every keyword the linter recognises.

use super::{CommandContext, Result};
use crate::output::{format_keywords_json, format_keywords_table};

/// Executes the keywords command.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    if ctx.json_output {
        println!("{}", format_keywords_json()?);
    } else {
        print!("{}", format_keywords_table(ctx.use_colors));
    }
    Ok(())
}
