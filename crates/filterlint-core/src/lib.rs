//! Line tokenizer and validator for item filter files.
//!
//! An item filter is a text file of `Show`/`Hide` blocks, each followed by
//! condition and action rules, one keyword per line. This crate classifies
//! a line at a time, validates the arguments of every known keyword and
//! reports problems as [`Diagnostic`]s with exact column ranges and optional
//! fixes.
//!
//! # Quick Start
//!
//! ```
//! use filterlint_core::{Catalog, Document, LineParser, LintReport};
//!
//! let catalog = Catalog::builtin();
//! let parser = LineParser::new(&catalog);
//!
//! let mut document = Document::parse("Show\n  ItemLevel >= 150\n  SetTextColor #FF0000\n");
//! let results = document.lint(&parser).unwrap();
//!
//! let report = LintReport::from_results(&results);
//! assert_eq!(report.errors, 1);
//! assert_eq!(document.lines()[2], "  SetTextColor 255 0 0");
//! ```

pub mod catalog;
pub mod cursor;
pub mod diagnostic;
pub mod document;
pub mod error;
pub mod keyword;
pub mod line;
mod rules;
pub mod token;

pub use catalog::{Catalog, CatalogData, NameSet};
pub use cursor::Cursor;
pub use diagnostic::{Diagnostic, Fix, Range, Severity, TextEdit};
pub use document::{lint_buffer, Document, LineEnding, LintReport, TextBuffer};
pub use error::{
    CatalogError, CatalogResult, CursorError, CursorResult, DocumentError, DocumentResult,
};
pub use keyword::{Category, Keyword, KeywordKind, Validator};
pub use line::{
    BlockLine, CommentLine, KeywordToken, LineKind, LineLocation, LineParser, LineResult,
    LintSettings, OperatorToken, RuleLine, RuleValue, TrailingComment, UnknownLine,
};
pub use rules::HexExpansion;
pub use token::{Operator, Span, Token, Value};
