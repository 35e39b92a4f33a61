//! Filter documents and text buffer editing.
//!
//! [`TextBuffer`] is the seam between the classifier and whatever holds the
//! text (an editor buffer, a file on disk). [`Document`] is the file-backed
//! implementation used by the command line linter.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::diagnostic::{Range, TextEdit};
use crate::error::{DocumentError, DocumentResult};
use crate::line::{LineLocation, LineParser, LineResult};

/// Line-addressed access to editable text.
pub trait TextBuffer {
    /// Returns the number of lines.
    fn line_count(&self) -> usize;

    /// Returns the text of a line without its line ending.
    fn line_text(&self, line: usize) -> Option<&str>;

    /// Returns the text covered by `range`.
    fn text_in_range(&self, range: Range) -> DocumentResult<&str> {
        self.line_text(range.line)
            .and_then(|text| text.get(range.start..range.end))
            .ok_or_else(|| DocumentError::out_of_range(range.line, range.start, range.end))
    }

    /// Replaces the text covered by `range`.
    fn set_text_in_range(&mut self, range: Range, text: &str) -> DocumentResult<()>;

    /// Applies an edit after checking the buffer still holds its old text.
    fn apply_edit(&mut self, edit: &TextEdit) -> DocumentResult<()> {
        let found = self.text_in_range(edit.range)?;
        if found != edit.old_text {
            return Err(DocumentError::stale_edit(
                edit.range.line,
                edit.old_text.as_str(),
                found,
            ));
        }
        self.set_text_in_range(edit.range, &edit.new_text)
    }
}

/// Classifies every line of `buffer` in order.
///
/// Colour rewrites found on a line are applied to the buffer before the next
/// line is read, so edits to one buffer are never interleaved.
pub fn lint_buffer<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    parser: &LineParser<'_>,
    file: Option<&str>,
) -> DocumentResult<Vec<LineResult>> {
    let mut results = Vec::with_capacity(buffer.line_count());

    for line in 0..buffer.line_count() {
        let text = buffer
            .line_text(line)
            .ok_or_else(|| DocumentError::out_of_range(line, 0, 0))?;
        let result = parser.parse(text, LineLocation::new(file, line))?;
        for edit in &result.edits {
            buffer.apply_edit(edit)?;
        }
        results.push(result);
    }

    Ok(results)
}

/// Line ending style of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Returns the line terminator.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// A filter file held in memory as lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    path: Option<PathBuf>,
    lines: Vec<String>,
    line_ending: LineEnding,
    final_newline: bool,
}

impl Document {
    /// Splits text into a document.
    ///
    /// The line ending style is taken from the first line break.
    pub fn parse(contents: &str) -> Self {
        let line_ending = match contents.find('\n') {
            Some(i) if contents[..i].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        };

        Self {
            path: None,
            lines: contents.lines().map(str::to_string).collect(),
            line_ending,
            final_newline: contents.ends_with('\n'),
        }
    }

    /// Reads a document from disk.
    pub fn open(path: impl AsRef<Path>) -> DocumentResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| DocumentError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let mut document = Self::parse(&contents);
        document.path = Some(path.to_path_buf());
        debug!(path = %path.display(), lines = document.lines.len(), "opened document");
        Ok(document)
    }

    /// Returns the file the document was read from.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the lines of the document.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the line ending style.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Returns the document text with its original line endings.
    pub fn contents(&self) -> String {
        let mut contents = self.lines.join(self.line_ending.as_str());
        if self.final_newline && !self.lines.is_empty() {
            contents.push_str(self.line_ending.as_str());
        }
        contents
    }

    /// Writes the document back to the file it was read from.
    pub fn save(&self) -> DocumentResult<()> {
        let path = self.path.as_deref().ok_or(DocumentError::NoPath)?;
        self.save_to(path)
    }

    /// Writes the document to `path`.
    pub fn save_to(&self, path: impl AsRef<Path>) -> DocumentResult<()> {
        let path = path.as_ref();
        fs::write(path, self.contents()).map_err(|source| DocumentError::WriteError {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "saved document");
        Ok(())
    }

    /// Classifies every line, normalising hex colours in place.
    pub fn lint(&mut self, parser: &LineParser<'_>) -> DocumentResult<Vec<LineResult>> {
        let file = self.path.as_ref().map(|p| p.display().to_string());
        let results = lint_buffer(self, parser, file.as_deref())?;

        let report = LintReport::from_results(&results);
        debug!(
            file = file.as_deref().unwrap_or("<buffer>"),
            lines = results.len(),
            errors = report.errors,
            warnings = report.warnings,
            "linted document"
        );
        Ok(results)
    }

    /// Applies every fix attached to `results`.
    ///
    /// Fixes on one line are applied right to left; a fix overlapping one
    /// already applied is skipped. Returns the number of fixes applied.
    pub fn apply_fixes(&mut self, results: &[LineResult]) -> DocumentResult<usize> {
        let mut applied = 0;

        for result in results {
            let mut fixes: Vec<_> = result.fixes().collect();
            fixes.sort_by(|a, b| b.range.start.cmp(&a.range.start));

            let mut boundary = usize::MAX;
            for fix in fixes {
                if fix.range.end > boundary {
                    debug!(line = fix.range.line, title = %fix.title, "skipping overlapping fix");
                    continue;
                }
                self.apply_edit(&fix.edit())?;
                boundary = fix.range.start;
                applied += 1;
            }
        }

        Ok(applied)
    }
}

impl TextBuffer for Document {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_text(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }

    fn set_text_in_range(&mut self, range: Range, text: &str) -> DocumentResult<()> {
        let out_of_range = || DocumentError::out_of_range(range.line, range.start, range.end);
        let line = self.lines.get_mut(range.line).ok_or_else(out_of_range)?;
        if line.get(range.start..range.end).is_none() {
            return Err(out_of_range());
        }
        line.replace_range(range.start..range.end, text);
        Ok(())
    }
}

/// Diagnostic counts for a set of line results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LintReport {
    pub lines: usize,
    pub errors: usize,
    pub warnings: usize,
    pub invalid_lines: usize,
}

impl LintReport {
    /// Counts diagnostics across `results`.
    pub fn from_results(results: &[LineResult]) -> Self {
        results.iter().fold(
            Self {
                lines: results.len(),
                ..Self::default()
            },
            |mut report, result| {
                report.errors += result.errors().count();
                report.warnings += result.warnings().count();
                report.invalid_lines += usize::from(result.invalid);
                report
            },
        )
    }

    /// Adds another report's counts to this one.
    pub fn merge(&mut self, other: LintReport) {
        self.lines += other.lines;
        self.errors += other.errors;
        self.warnings += other.warnings;
        self.invalid_lines += other.invalid_lines;
    }

    /// Returns true if any error was reported.
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::token::Span;

    fn lint(document: &mut Document) -> Vec<LineResult> {
        let catalog = Catalog::builtin();
        document.lint(&LineParser::new(&catalog)).unwrap()
    }

    #[test]
    fn test_parse_preserves_crlf_and_final_newline() {
        let text = "Show\r\n  ItemLevel > 5\r\n";
        let document = Document::parse(text);
        assert_eq!(document.lines(), &["Show", "  ItemLevel > 5"]);
        assert_eq!(document.line_ending(), LineEnding::CrLf);
        assert_eq!(document.contents(), text);
    }

    #[test]
    fn test_parse_without_final_newline() {
        let text = "Show\nHide";
        assert_eq!(Document::parse(text).contents(), text);
    }

    #[test]
    fn test_empty_document() {
        let document = Document::parse("");
        assert_eq!(document.line_count(), 0);
        assert_eq!(document.contents(), "");
    }

    #[test]
    fn test_text_in_range_bounds() {
        let document = Document::parse("Show extra");
        let range = Range::new(0, Span::new(5, 10));
        assert_eq!(document.text_in_range(range).unwrap(), "extra");
        assert!(matches!(
            document.text_in_range(Range::new(0, Span::new(5, 11))),
            Err(DocumentError::OutOfRange { .. })
        ));
        assert!(document.text_in_range(Range::new(1, Span::new(0, 0))).is_err());
    }

    #[test]
    fn test_apply_edit_rejects_stale_text() {
        let mut document = Document::parse("SetTextColor #FFFFFF");
        let edit = TextEdit {
            range: Range::new(0, Span::new(13, 20)),
            old_text: "#000000".to_string(),
            new_text: "0 0 0".to_string(),
        };
        assert!(matches!(
            document.apply_edit(&edit),
            Err(DocumentError::StaleEdit { .. })
        ));
        assert_eq!(document.lines()[0], "SetTextColor #FFFFFF");
    }

    #[test]
    fn test_lint_rewrites_hex_colours() {
        let mut document = Document::parse("Show\n  SetTextColor #FF8000 # orange\n");
        let results = lint(&mut document);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| !r.invalid));
        assert_eq!(document.lines()[1], "  SetTextColor 255 128 0 # orange");
    }

    #[test]
    fn test_lint_stamps_line_numbers() {
        let mut document = Document::parse("Show\n\nQuality 50");
        let results = lint(&mut document);
        assert_eq!(results[2].diagnostics[0].range.line, 2);
    }

    #[test]
    fn test_lint_rejects_stray_carriage_return() {
        let mut document = Document::parse("Show\rHide\n");
        let catalog = Catalog::builtin();
        assert!(matches!(
            document.lint(&LineParser::new(&catalog)),
            Err(DocumentError::Cursor(_))
        ));
    }

    #[test]
    fn test_apply_fixes_comments_out_trailing_text() {
        let mut document = Document::parse("Show extra\nItemLevel 5 junk\nItemLevel 6\n");
        let results = lint(&mut document);
        let applied = document.apply_fixes(&results).unwrap();
        assert_eq!(applied, 2);
        assert_eq!(
            document.contents(),
            "Show # extra\nItemLevel 5 # junk\nItemLevel 6\n"
        );

        let report = LintReport::from_results(&lint(&mut document));
        assert_eq!(report.warnings, 0);
    }

    #[test]
    fn test_apply_fixes_skips_overlaps() {
        let mut document = Document::parse("Show extra");
        let mut results = lint(&mut document);
        let duplicate = results[0].diagnostics[0].clone();
        results[0].diagnostics.push(duplicate);

        assert_eq!(document.apply_fixes(&results).unwrap(), 1);
        assert_eq!(document.lines()[0], "Show # extra");
    }

    #[test]
    fn test_apply_fixes_leaves_unknown_keywords_alone() {
        let text = "Show\nGlow 5\nWide 2\nFrob\n";
        let mut document = Document::parse(text);
        let results = lint(&mut document);
        assert!(results[1..].iter().all(|r| r.invalid));

        assert_eq!(document.apply_fixes(&results).unwrap(), 0);
        assert_eq!(document.contents(), text);
    }

    #[test]
    fn test_report_counts() {
        let mut document = Document::parse("Show extra\nQuality 99\nPlayAlertSound 0 400\n");
        let report = LintReport::from_results(&lint(&mut document));
        assert_eq!(report.lines, 3);
        assert_eq!(report.errors, 3);
        assert_eq!(report.warnings, 1);
        assert_eq!(report.invalid_lines, 2);
        assert!(report.has_errors());
    }

    #[test]
    fn test_save_without_path() {
        assert!(matches!(
            Document::parse("Show").save(),
            Err(DocumentError::NoPath)
        ));
    }

    #[test]
    fn test_open_and_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loot.filter");
        fs::write(&path, "Show\r\n\tSetBackgroundColor #000000\r\n").unwrap();

        let mut document = Document::open(&path).unwrap();
        assert_eq!(document.path(), Some(path.as_path()));
        lint(&mut document);
        document.save().unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Show\r\n\tSetBackgroundColor 0 0 0\r\n"
        );
    }

    #[test]
    fn test_open_missing_file() {
        let err = Document::open("/nonexistent/loot.filter").unwrap_err();
        assert!(matches!(err, DocumentError::ReadError { .. }));
    }
}
