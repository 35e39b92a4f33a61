//! `Show` and `Hide` block openers.

use super::RuleOutcome;
use crate::cursor::Cursor;
use crate::diagnostic::{LineContext, FILTER_URL};
use crate::token::Span;

/// Checks what follows a block keyword.
///
/// A comment is captured. Any other text is ignored by the game, so it is
/// only reported as a warning, and only when warnings are enabled.
pub(crate) fn block_rule(
    cursor: &mut Cursor,
    ctx: &LineContext<'_>,
    enable_warnings: bool,
) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();

    if let Some(comment) = cursor.parse_comment() {
        outcome.trailing_comment = Some(comment);
        return outcome;
    }

    if cursor.is_ignored() || !enable_warnings {
        return outcome;
    }

    let span = Span::new(cursor.offset(), cursor.original_len());
    outcome.diagnostics.push(
        ctx.warning(
            span,
            format!("Trailing text for a \"{}\" block will be ignored.", ctx.keyword),
        )
        .with_description(
            "Path of Exile will not consider this an error, however the text will be completely ignored.\n\n\
             Commenting this text with a '#' will remove this warning.",
        )
        .with_url(FILTER_URL)
        .with_fix(ctx.comment_out_fix(cursor.text(), span)),
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;

    fn run(line: &str, enable_warnings: bool) -> RuleOutcome {
        let mut cursor = Cursor::new(line).unwrap();
        let keyword = cursor.next_word().unwrap();
        let ctx = LineContext {
            file: None,
            line: 3,
            keyword: &keyword.value,
        };
        block_rule(&mut cursor, &ctx, enable_warnings)
    }

    #[test]
    fn test_plain_block() {
        let outcome = run("Show", true);
        assert!(outcome.diagnostics.is_empty());
        assert!(outcome.trailing_comment.is_none());
    }

    #[test]
    fn test_block_comment_is_captured() {
        let outcome = run("Hide # junk", true);
        assert!(outcome.diagnostics.is_empty());
        let comment = outcome.trailing_comment.unwrap();
        assert_eq!(comment.value, "# junk");
        assert_eq!(comment.span, Span::new(5, 11));
    }

    #[test]
    fn test_trailing_text_warns_with_fix() {
        let outcome = run("Show extra", true);
        assert!(!outcome.invalid);
        assert_eq!(outcome.diagnostics.len(), 1);

        let d = &outcome.diagnostics[0];
        assert_eq!(d.severity, Severity::Warning);
        assert_eq!(d.excerpt, "Trailing text for a \"Show\" block will be ignored.");
        assert_eq!(d.range.line, 3);
        assert_eq!(d.range.span(), Span::new(4, 10));

        let fix = d.fix.as_ref().unwrap();
        assert_eq!(fix.old_text, " extra");
        assert_eq!(fix.new_text, " # extra");
    }

    #[test]
    fn test_trailing_text_silent_without_warnings() {
        let outcome = run("Show extra", false);
        assert!(outcome.diagnostics.is_empty());
        assert!(!outcome.invalid);
    }

    #[test]
    fn test_trailing_whitespace_is_not_text() {
        let outcome = run("Hide   ", true);
        assert!(outcome.diagnostics.is_empty());
    }
}
