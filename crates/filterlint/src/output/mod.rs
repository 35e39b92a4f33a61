//! Output formatting utilities for the filterlint CLI.
//!
//! - [`diagnostics`] - Check command output (text and JSON)
//! - [`keywords`] - Keyword table output
//! - [`helpers`] - Common formatting utilities (severity, locations, counts)

mod diagnostics;
mod helpers;
mod keywords;

pub use diagnostics::{format_check_json, format_check_text};
pub use keywords::{format_keywords_json, format_keywords_table};
