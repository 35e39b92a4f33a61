//! Classified line results.

use serde::Serialize;

use crate::diagnostic::{Diagnostic, Fix, Range, Severity, TextEdit};
use crate::keyword::{Category, Keyword};
use crate::token::{Operator, Value};

/// The outcome of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineResult {
    /// What the line is, with its extracted data.
    pub kind: LineKind,
    /// Every problem found on the line, in discovery order.
    pub diagnostics: Vec<Diagnostic>,
    /// True iff at least one diagnostic is an error.
    pub invalid: bool,
    /// Colour rewrites to apply to the line, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub edits: Vec<TextEdit>,
}

impl LineResult {
    pub(crate) fn new(kind: LineKind, diagnostics: Vec<Diagnostic>, edits: Vec<TextEdit>) -> Self {
        let invalid = diagnostics.iter().any(Diagnostic::is_error);
        Self {
            kind,
            diagnostics,
            invalid,
            edits,
        }
    }

    /// Returns the recognised keyword of a block or rule line.
    pub fn keyword(&self) -> Option<Keyword> {
        match &self.kind {
            LineKind::Block(block) => Some(block.keyword.keyword),
            LineKind::Rule(rule) => Some(rule.keyword.keyword),
            _ => None,
        }
    }

    /// Returns the error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// Returns the warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Returns every fix attached to the line's diagnostics.
    pub fn fixes(&self) -> impl Iterator<Item = &Fix> {
        self.diagnostics.iter().filter_map(|d| d.fix.as_ref())
    }
}

/// Line classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum LineKind {
    Comment(CommentLine),
    Empty,
    Block(BlockLine),
    Rule(RuleLine),
    Unknown(UnknownLine),
}

impl LineKind {
    /// Returns the variant name.
    pub fn name(&self) -> &'static str {
        match self {
            LineKind::Comment(_) => "comment",
            LineKind::Empty => "empty",
            LineKind::Block(_) => "block",
            LineKind::Rule(_) => "rule",
            LineKind::Unknown(_) => "unknown",
        }
    }
}

/// A line holding only a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentLine {
    /// Comment body without the `#`, trimmed.
    pub text: String,
    /// The trimmed comment.
    pub range: Range,
}

/// The keyword of a block or rule line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordToken {
    pub keyword: Keyword,
    pub range: Range,
}

/// A comment that follows a block header or a comment-tolerant rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrailingComment {
    /// Comment body without the `#`, trimmed.
    pub text: String,
    /// The comment, including the `#`.
    pub range: Range,
}

/// A `Show` or `Hide` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockLine {
    pub keyword: KeywordToken,
    /// The trimmed line.
    pub range: Range,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_comment: Option<TrailingComment>,
}

/// The comparison operator of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperatorToken {
    pub operator: Operator,
    pub range: Range,
}

/// One accepted argument of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleValue {
    pub value: Value,
    pub range: Range,
}

/// A condition or action line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleLine {
    pub keyword: KeywordToken,
    /// The trimmed line, after any colour rewrite.
    pub range: Range,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<OperatorToken>,
    /// Accepted values. Empty when the arguments are invalid.
    pub values: Vec<RuleValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_comment: Option<TrailingComment>,
}

impl RuleLine {
    /// Returns the numeric values in order.
    pub fn numbers(&self) -> Vec<i64> {
        self.values.iter().filter_map(|v| v.value.as_number()).collect()
    }
}

/// A line whose keyword is missing or unrecognised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownLine {
    /// The trimmed line text.
    pub text: String,
    pub range: Range,
}

/// Strips the `#` from a comment and trims the body.
pub(crate) fn comment_body(comment: &str) -> String {
    comment
        .trim()
        .strip_prefix('#')
        .unwrap_or(comment)
        .trim()
        .to_string()
}
