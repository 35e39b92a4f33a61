//! Per-keyword argument validators.
//!
//! Every validator consumes the cursor positioned right after the keyword and
//! returns a [`RuleOutcome`]. Diagnostics are accumulated rather than
//! returned early wherever later checks are independent of earlier ones.

mod block;
mod color;
mod numeric;
mod text;

pub use color::HexExpansion;

pub(crate) use block::block_rule;

use crate::catalog::Catalog;
use crate::cursor::Cursor;
use crate::diagnostic::{Diagnostic, LineContext, TextEdit, FILTER_URL};
use crate::keyword::Validator;
use crate::token::{Operator, Span, Token, Value};

/// Everything a validator learned about a rule's arguments.
#[derive(Debug, Default)]
pub(crate) struct RuleOutcome {
    /// Set once an error-severity diagnostic has been recorded.
    pub invalid: bool,
    pub diagnostics: Vec<Diagnostic>,
    pub values: Vec<Token<Value>>,
    pub operator: Option<Token<Operator>>,
    /// Comment captured as data (comment-tolerant keywords only).
    pub trailing_comment: Option<Token<String>>,
    /// Rewrites the caller must apply to its buffer.
    pub edits: Vec<TextEdit>,
}

impl RuleOutcome {
    /// Records an error and marks the rule invalid.
    pub fn error(&mut self, diagnostic: Diagnostic) {
        self.invalid = true;
        self.diagnostics.push(diagnostic);
    }

    /// Records a value.
    pub fn value(&mut self, token: Token<impl Into<Value>>) {
        self.values.push(token.map(Into::into));
    }
}

/// Runs the validator for a rule keyword.
pub(crate) fn validate(
    validator: Validator,
    cursor: &mut Cursor,
    ctx: &LineContext<'_>,
    catalog: &Catalog,
) -> RuleOutcome {
    match validator {
        Validator::Range { min, max, operator } => {
            numeric::range_rule(cursor, ctx, min, max, operator)
        }
        Validator::OperatorNumber(allowed) => numeric::operator_number_rule(cursor, ctx, allowed),
        Validator::AlertSound => numeric::alert_sound_rule(cursor, ctx),
        Validator::Boolean => text::boolean_rule(cursor, ctx),
        Validator::OneOf(allowed) => text::one_of_rule(cursor, ctx, allowed),
        Validator::SocketGroup => text::socket_group_rule(cursor, ctx),
        Validator::CatalogList(set) => text::catalog_list_rule(cursor, ctx, catalog.set(set)),
        Validator::Color => color::color_rule(cursor, ctx),
    }
}

/// Accepts only the `=` operator.
///
/// Returns false after recording an error if any other operator is present.
/// Callers stop parsing the rule in that case.
fn expect_equality(cursor: &mut Cursor, ctx: &LineContext<'_>, outcome: &mut RuleOutcome) -> bool {
    match cursor.next_operator() {
        Some(op) if op.value != Operator::Equal => {
            outcome.error(
                ctx.error(
                    op.span,
                    format!(
                        "Invalid operator for \"{}\". Only the '=' operator is supported for this rule.",
                        ctx.keyword
                    ),
                )
                .with_description(
                    "Path of Exile allows an operator to appear for most rule types, however for\n\
                     some rules only the '=' operator is allowed. Any other operators will result in an error.",
                )
                .with_url(FILTER_URL),
            );
            false
        }
        op => {
            outcome.operator = op;
            true
        }
    }
}

/// Reports a comment after the arguments of a rule that does not allow one.
fn report_trailing_comment(cursor: &mut Cursor, ctx: &LineContext<'_>, outcome: &mut RuleOutcome) {
    let Some(comment) = cursor.parse_comment() else {
        return;
    };

    let span = Span::new(comment.span.start, cursor.original_len());
    outcome.error(
        ctx.error(
            span,
            format!(
                "A trailing comment for a \"{}\" rule will result in an error.",
                ctx.keyword
            ),
        )
        .with_description(
            "Path of Exile only allows for comments to trail the following rule types:\
             \n\n\tSetBorderColor\n\tSetTextColor\n\tSetBackgroundColor\n\tPlayAlertSound\n\n\
             Any other rule types with a trailing comment will result in an error.",
        )
        .with_url(FILTER_URL),
    );
}

/// Captures a comment after the arguments of a comment-tolerant rule.
fn capture_trailing_comment(cursor: &mut Cursor, outcome: &mut RuleOutcome) {
    if let Some(comment) = cursor.parse_comment() {
        outcome.trailing_comment = Some(comment);
    }
}

/// Builds the "Invalid format" error covering the whole rule.
fn format_error(cursor: &Cursor, ctx: &LineContext<'_>, usage: &str, url: &str) -> Diagnostic {
    ctx.error(
        Span::new(cursor.text_start(), cursor.original_len()),
        format!("Invalid format. Expected \"{} {usage}\".", ctx.keyword),
    )
    .with_url(url)
}

/// Builds the "Invalid value ... Expected <what>." error for one token.
fn value_error(ctx: &LineContext<'_>, span: Span, expected: impl std::fmt::Display, url: &str) -> Diagnostic {
    ctx.error(
        span,
        format!(
            "Invalid value for rule \"{}\". Expected {expected}.",
            ctx.keyword
        ),
    )
    .with_url(url)
}

/// Scans a string argument, refusing to treat a comment as one.
fn next_argument(cursor: &mut Cursor) -> Option<Token<String>> {
    if cursor.is_commented() {
        return None;
    }
    cursor.next_string()
}
