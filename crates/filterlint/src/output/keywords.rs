//! Keyword table output formatting.

use filterlint_core::{Category, Keyword};
use owo_colors::OwoColorize;
use serde::Serialize;

/// JSON output structure for one keyword.
#[derive(Serialize)]
pub struct KeywordOutput {
    pub keyword: Keyword,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub trailing_comment: bool,
}

fn keyword_output(keyword: Keyword) -> KeywordOutput {
    let category = keyword.category();
    KeywordOutput {
        keyword,
        kind: if category.is_some() { "rule" } else { "block" },
        category,
        trailing_comment: keyword.allows_trailing_comment(),
    }
}

/// Formats the keyword table as JSON.
pub fn format_keywords_json() -> Result<String, serde_json::Error> {
    let keywords: Vec<_> = Keyword::ALL.into_iter().map(keyword_output).collect();
    serde_json::to_string_pretty(&keywords)
}

/// Formats the keyword table.
pub fn format_keywords_table(use_colors: bool) -> String {
    let mut output = String::new();

    let header = format!("{:<20} {:<6} {:<10} {}", "Keyword", "Kind", "Category", "Comment");
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for keyword in Keyword::ALL {
        let row = keyword_output(keyword);
        let comment = if row.trailing_comment { "yes" } else { "" };
        let category = row
            .category
            .map_or_else(|| "-".to_string(), |c| c.to_string());
        let line = format!(
            "{:<20} {:<6} {:<10} {}",
            keyword.as_str(),
            row.kind,
            category,
            comment
        );
        output.push_str(&line);
        output.push('\n');
    }

    output
}
