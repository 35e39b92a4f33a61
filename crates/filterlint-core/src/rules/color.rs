//! RGBA colour rules and hex literal normalisation.
//!
//! The game only understands decimal channels, so a `#RRGGBB[AA]` literal is
//! rewritten into `R G B [A]`. [`HexExpansion`] computes the rewrite without
//! touching any buffer; the validator splices it into its cursor and emits a
//! [`TextEdit`] that the owner of the text applies afterwards.

use tracing::debug;

use super::{capture_trailing_comment, expect_equality, format_error, value_error, RuleOutcome};
use crate::cursor::Cursor;
use crate::diagnostic::{LineContext, TextEdit, ACTIONS_URL};
use crate::token::{Span, Token};

/// Valid colour channel values.
const CHANNEL: std::ops::RangeInclusive<i64> = 0..=255;

/// Decimal rewrite of a hex colour literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexExpansion {
    /// Columns of the hex literal in the original line.
    pub span: Span,
    /// The hex literal, including `#`.
    pub original: String,
    /// Space separated decimal channels.
    pub replacement: String,
}

impl HexExpansion {
    /// Computes the decimal rewrite of a scanned `#RRGGBB[AA]` token.
    ///
    /// Returns `None` if the token is not a well-formed hex colour.
    pub fn new(token: &Token<String>) -> Option<Self> {
        let digits = token.value.strip_prefix('#')?;
        if !matches!(digits.len(), 6 | 8) {
            return None;
        }

        let channels = (0..digits.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok())
            .collect::<Option<Vec<_>>>()?;
        let replacement = channels
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        Some(Self {
            span: token.span,
            original: token.value.clone(),
            replacement,
        })
    }

    /// Returns the change in line length caused by the rewrite.
    pub fn delta(&self) -> isize {
        self.replacement.len() as isize - self.original.len() as isize
    }
}

/// A hex literal or three or four decimal channels, each 0-255.
pub(super) fn color_rule(cursor: &mut Cursor, ctx: &LineContext<'_>) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    if !expect_equality(cursor, ctx, &mut outcome) {
        return outcome;
    }

    if let Some(expansion) = cursor.next_hex().as_ref().and_then(HexExpansion::new) {
        debug!(
            line = ctx.line,
            hex = %expansion.original,
            channels = %expansion.replacement,
            "normalising hex colour"
        );
        cursor.splice(expansion.span, &expansion.replacement);
        outcome.edits.push(TextEdit {
            range: ctx.range(expansion.span),
            old_text: expansion.original,
            new_text: expansion.replacement,
        });
    }

    let red = cursor.next_number();
    let green = cursor.next_number();
    let blue = cursor.next_number();
    let alpha = cursor.next_number();

    let (Some(red), Some(green), Some(blue)) = (red, green, blue) else {
        outcome.error(format_error(
            cursor,
            ctx,
            "<Red> <Green> <Blue> [Alpha]",
            ACTIONS_URL,
        ));
        return outcome;
    };

    let channels: Vec<Token<i64>> = [Some(red), Some(green), Some(blue), alpha]
        .into_iter()
        .flatten()
        .collect();
    for channel in &channels {
        if !CHANNEL.contains(&channel.value) {
            outcome.error(value_error(ctx, channel.span, "0-255", ACTIONS_URL));
        }
    }

    if !outcome.invalid {
        for channel in channels {
            outcome.value(channel);
        }
    }

    capture_trailing_comment(cursor, &mut outcome);
    outcome
}
