//! Diagnostics, fixes and the helpers that build them.

use serde::Serialize;

use crate::token::Span;

/// Documentation page for the filter language.
pub(crate) const FILTER_URL: &str = "http://pathofexile.gamepedia.com/Item_filter";

/// Documentation section for condition rules.
pub(crate) const CONDITIONS_URL: &str = "http://pathofexile.gamepedia.com/Item_filter#Conditions";

/// Documentation section for action rules.
pub(crate) const ACTIONS_URL: &str = "http://pathofexile.gamepedia.com/Item_filter#Actions";

/// Documentation for general filter structure.
pub(crate) const GUIDE_URL: &str = "http://pathofexile.gamepedia.com/Item_filter_guide";

/// Title used by every fix that comments text out.
pub const COMMENT_FIX_TITLE: &str = "Comment This Text";

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The game will reject the filter.
    Error,
    /// The game accepts the line but something is probably wrong.
    Warning,
}

/// A column span anchored to a 0-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    /// 0-based line number.
    pub line: usize,
    /// First column (inclusive).
    pub start: usize,
    /// Last column (exclusive).
    pub end: usize,
}

impl Range {
    /// Creates a range on `line` covering `span`.
    pub fn new(line: usize, span: Span) -> Self {
        Self {
            line,
            start: span.start,
            end: span.end,
        }
    }

    /// Returns the column span of this range.
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// A text replacement within one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEdit {
    /// The replaced columns.
    pub range: Range,
    /// The text expected in `range` before the edit.
    pub old_text: String,
    /// The replacement.
    pub new_text: String,
}

/// A suggested autofix attached to a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    /// The replaced columns.
    pub range: Range,
    /// The text currently in `range`.
    pub old_text: String,
    /// The replacement.
    pub new_text: String,
    /// Human readable description of the fix.
    pub title: String,
}

impl Fix {
    /// Returns the plain edit this fix performs.
    pub fn edit(&self) -> TextEdit {
        TextEdit {
            range: self.range,
            old_text: self.old_text.clone(),
            new_text: self.new_text.clone(),
        }
    }
}

/// A single lint message for a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Error or warning.
    pub severity: Severity,
    /// Identifier of the file the line came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Where the problem is.
    pub range: Range,
    /// Short message.
    pub excerpt: String,
    /// Long-form explanation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Documentation link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Suggested fix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

impl Diagnostic {
    /// Returns true for error-severity diagnostics.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Attaches a long-form description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches a documentation link.
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    /// Attaches a fix.
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }
}

/// Location and keyword of the line being validated.
///
/// Validators only deal in column spans; the context stamps them with the
/// line number and file identifier.
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    /// Identifier of the originating file, if any.
    pub file: Option<&'a str>,
    /// 0-based line number.
    pub line: usize,
    /// The rule keyword as written.
    pub keyword: &'a str,
}

impl<'a> LineContext<'a> {
    /// Anchors a span to this line.
    pub fn range(&self, span: Span) -> Range {
        Range::new(self.line, span)
    }

    /// Builds a diagnostic of the given severity.
    pub fn diagnostic(&self, severity: Severity, span: Span, excerpt: impl Into<String>) -> Diagnostic {
        Diagnostic {
            severity,
            file: self.file.map(str::to_string),
            range: self.range(span),
            excerpt: excerpt.into(),
            description: None,
            url: None,
            fix: None,
        }
    }

    /// Builds an error diagnostic.
    pub fn error(&self, span: Span, excerpt: impl Into<String>) -> Diagnostic {
        self.diagnostic(Severity::Error, span, excerpt)
    }

    /// Builds a warning diagnostic.
    pub fn warning(&self, span: Span, excerpt: impl Into<String>) -> Diagnostic {
        self.diagnostic(Severity::Warning, span, excerpt)
    }

    fn replace_fix(
        &self,
        line_text: &str,
        span: Span,
        new_text: impl Into<String>,
        title: impl Into<String>,
    ) -> Fix {
        Fix {
            range: self.range(span),
            old_text: line_text.get(span.start..span.end).unwrap_or_default().to_string(),
            new_text: new_text.into(),
            title: title.into(),
        }
    }

    /// Builds a fix that turns `span` of `line_text` into a comment.
    pub fn comment_out_fix(&self, line_text: &str, span: Span) -> Fix {
        let old_text = line_text.get(span.start..span.end).unwrap_or_default();
        self.replace_fix(line_text, span, format!(" #{old_text}"), COMMENT_FIX_TITLE)
    }
}
