//! Line classifier.
//!
//! Each line is classified on its own as a comment, an empty line, a block
//! header, a rule or an unknown line. Classification never fails for
//! single-line input: every problem becomes a [`Diagnostic`] on the result.
//!
//! # Example
//!
//! ```
//! use filterlint_core::{Catalog, LineKind, LineLocation, LineParser};
//!
//! let catalog = Catalog::builtin();
//! let parser = LineParser::new(&catalog);
//! let result = parser.parse("ItemLevel >= 85", LineLocation::default()).unwrap();
//! assert!(!result.invalid);
//! assert!(matches!(result.kind, LineKind::Rule(_)));
//! ```

mod result;

pub use result::{
    BlockLine, CommentLine, KeywordToken, LineKind, LineResult, OperatorToken, RuleLine,
    RuleValue, TrailingComment, UnknownLine,
};

use tracing::trace;

use crate::catalog::Catalog;
use crate::cursor::Cursor;
use crate::diagnostic::{Diagnostic, LineContext, Range, GUIDE_URL};
use crate::error::CursorResult;
use crate::keyword::{Category, Keyword, KeywordKind, Validator};
use crate::rules::{self, RuleOutcome};
use crate::token::{Span, Token};
use result::comment_body;

/// Settings that change what the classifier reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintSettings {
    /// Report ignored text after `Show` and `Hide`.
    pub enable_warnings: bool,
}

impl Default for LintSettings {
    fn default() -> Self {
        Self {
            enable_warnings: true,
        }
    }
}

/// Where a line comes from. Only used to stamp diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineLocation<'a> {
    /// Identifier of the originating file.
    pub file: Option<&'a str>,
    /// 0-based line number.
    pub line: usize,
}

impl<'a> LineLocation<'a> {
    /// Creates a location.
    pub fn new(file: Option<&'a str>, line: usize) -> Self {
        Self { file, line }
    }

    fn context(self, keyword: &'a str) -> LineContext<'a> {
        LineContext {
            file: self.file,
            line: self.line,
            keyword,
        }
    }
}

/// Classifies lines against a catalog.
///
/// The parser holds no per-line state, so one instance may classify any
/// number of lines, from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct LineParser<'c> {
    catalog: &'c Catalog,
    settings: LintSettings,
}

impl<'c> LineParser<'c> {
    /// Creates a parser with default settings.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            settings: LintSettings::default(),
        }
    }

    /// Replaces the settings.
    pub fn with_settings(mut self, settings: LintSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the catalog used for `Class` and `BaseType`.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Returns the active settings.
    pub fn settings(&self) -> LintSettings {
        self.settings
    }

    /// Classifies one line.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::MultipleLines`](crate::CursorError::MultipleLines)
    /// if `text` contains a line break.
    pub fn parse(&self, text: &str, location: LineLocation<'_>) -> CursorResult<LineResult> {
        let mut cursor = Cursor::new(text)?;
        let result = self.classify(&mut cursor, location);
        trace!(
            line = location.line,
            kind = result.kind.name(),
            invalid = result.invalid,
            diagnostics = result.diagnostics.len(),
            "classified line"
        );
        Ok(result)
    }

    fn classify(&self, cursor: &mut Cursor, location: LineLocation<'_>) -> LineResult {
        let content = cursor.content_span();

        if cursor.is_commented() {
            let text = comment_body(&cursor.text()[content.start..content.end]);
            let range = Range::new(location.line, content);
            return LineResult::new(LineKind::Comment(CommentLine { text, range }), vec![], vec![]);
        }

        if cursor.is_empty() {
            return LineResult::new(LineKind::Empty, vec![], vec![]);
        }

        let Some(word) = cursor.next_word() else {
            let ctx = location.context("");
            let diagnostic = ctx
                .error(
                    Span::new(cursor.text_start(), cursor.original_len()),
                    "Unreadable keyword, likely due to a stray character.",
                )
                .with_url(GUIDE_URL);
            return unknown_line(cursor, location, diagnostic);
        };

        let ctx = location.context(&word.value);
        match Keyword::from_name(&word.value).map(|k| (k, k.kind())) {
            Some((keyword, KeywordKind::Block)) => self.block(cursor, &ctx, keyword, word.span),
            Some((keyword, KeywordKind::Rule(category, validator))) => {
                self.rule(cursor, &ctx, keyword, word.span, category, validator)
            }
            None => {
                let diagnostic = unknown_keyword(&ctx, &word);
                unknown_line(cursor, location, diagnostic)
            }
        }
    }

    fn block(
        &self,
        cursor: &mut Cursor,
        ctx: &LineContext<'_>,
        keyword: Keyword,
        keyword_span: Span,
    ) -> LineResult {
        let outcome = rules::block_rule(cursor, ctx, self.settings.enable_warnings);
        let block = BlockLine {
            keyword: KeywordToken {
                keyword,
                range: ctx.range(keyword_span),
            },
            range: ctx.range(cursor.content_span()),
            trailing_comment: trailing_comment(ctx, outcome.trailing_comment),
        };
        LineResult::new(LineKind::Block(block), outcome.diagnostics, outcome.edits)
    }

    fn rule(
        &self,
        cursor: &mut Cursor,
        ctx: &LineContext<'_>,
        keyword: Keyword,
        keyword_span: Span,
        category: Category,
        validator: Validator,
    ) -> LineResult {
        let mut outcome = rules::validate(validator, cursor, ctx, self.catalog);
        if !outcome.invalid && !cursor.is_empty() {
            report_trailing_text(cursor, ctx, &mut outcome);
        }

        let rule = RuleLine {
            keyword: KeywordToken {
                keyword,
                range: ctx.range(keyword_span),
            },
            range: ctx.range(cursor.content_span()),
            category,
            operator: outcome.operator.map(|op| OperatorToken {
                operator: op.value,
                range: ctx.range(op.span),
            }),
            values: outcome
                .values
                .into_iter()
                .map(|v| RuleValue {
                    value: v.value,
                    range: ctx.range(v.span),
                })
                .collect(),
            trailing_comment: trailing_comment(ctx, outcome.trailing_comment),
        };
        LineResult::new(LineKind::Rule(rule), outcome.diagnostics, outcome.edits)
    }
}

/// Reports unparsed text after a rule's arguments.
fn report_trailing_text(cursor: &Cursor, ctx: &LineContext<'_>, outcome: &mut RuleOutcome) {
    let span = Span::new(cursor.offset(), cursor.text_end());
    outcome.error(
        ctx.error(span, "Trailing text for a filter rule.")
            .with_description("Path of Exile will consider this an error.")
            .with_url(GUIDE_URL)
            .with_fix(ctx.comment_out_fix(cursor.text(), span)),
    );
}

/// Builds the "Unknown filter keyword" error, naming a close keyword if one exists.
///
/// The suggestion carries no fix. Replacing the word could turn a rule into a
/// block header and change what the filter matches.
fn unknown_keyword(ctx: &LineContext<'_>, word: &Token<String>) -> Diagnostic {
    let diagnostic = ctx
        .error(word.span, "Unknown filter keyword.")
        .with_url(GUIDE_URL);

    match Keyword::suggest(&word.value) {
        Some(suggestion) => diagnostic.with_description(format!("Did you mean '{suggestion}'?")),
        None => diagnostic,
    }
}

fn unknown_line(cursor: &Cursor, location: LineLocation<'_>, diagnostic: Diagnostic) -> LineResult {
    let content = cursor.content_span();
    let unknown = UnknownLine {
        text: cursor.text()[content.start..content.end].to_string(),
        range: Range::new(location.line, content),
    };
    LineResult::new(LineKind::Unknown(unknown), vec![diagnostic], vec![])
}

fn trailing_comment(ctx: &LineContext<'_>, comment: Option<Token<String>>) -> Option<TrailingComment> {
    comment.map(|c| TrailingComment {
        text: comment_body(&c.value),
        range: ctx.range(c.span),
    })
}
