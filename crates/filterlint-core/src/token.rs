//! Token values produced by the cursor.

use std::fmt;

use serde::Serialize;

/// A half-open column span within a single line.
///
/// Columns are byte offsets from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// First column of the span (inclusive).
    pub start: usize,
    /// Last column of the span (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the number of columns covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no columns.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A scanned token and the columns it occupies.
///
/// A token that was not found is represented by `None` at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<T> {
    /// The parsed value.
    pub value: T,
    /// Where the token sits in the line.
    pub span: Span,
}

impl<T> Token<T> {
    /// Creates a new token.
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }

    /// Maps the token value, keeping its span.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Token<U> {
        Token {
            value: f(self.value),
            span: self.span,
        }
    }
}

/// A comparison operator preceding a rule value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    /// `=`
    #[serde(rename = "=")]
    Equal,
    /// `<`
    #[serde(rename = "<")]
    Less,
    /// `>`
    #[serde(rename = ">")]
    Greater,
    /// `<=`
    #[serde(rename = "<=")]
    LessEqual,
    /// `>=`
    #[serde(rename = ">=")]
    GreaterEqual,
}

impl Operator {
    /// All operators, two-character forms first so that scanning never
    /// truncates `<=` into `<`.
    pub const ALL: [Operator; 5] = [
        Operator::LessEqual,
        Operator::GreaterEqual,
        Operator::Equal,
        Operator::Less,
        Operator::Greater,
    ];

    /// Returns the operator's source text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::Less => "<",
            Operator::Greater => ">",
            Operator::LessEqual => "<=",
            Operator::GreaterEqual => ">=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed value captured from a rule's arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// An integer argument (levels, sizes, colour channels, sound ids).
    Number(i64),
    /// A `True`/`False` argument.
    Boolean(bool),
    /// A string argument (rarities, socket groups, class and base names).
    Text(String),
}

impl Value {
    /// Returns the number, if this is a numeric value.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}
