//! Error types for the filter linter.
//!
//! Lint problems are never errors: they are reported as
//! [`Diagnostic`](crate::Diagnostic)s on the line result. The types here cover
//! caller contract violations and I/O around catalogs and documents.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized Result type for cursor construction.
pub type CursorResult<T> = Result<T, CursorError>;

/// A specialized Result type for catalog loading.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// A specialized Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors raised when a [`Cursor`](crate::Cursor) is built from invalid input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CursorError {
    /// The text contains a line break. The cursor only scans a single line.
    #[error("line text contains a line break at byte {position}")]
    MultipleLines {
        /// Byte offset of the first `\r` or `\n`.
        position: usize,
    },
}

/// Errors that can occur while loading an item catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read the catalog file.
    #[error("failed to read catalog file '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The catalog JSON is malformed.
    #[error("failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Errors that can occur while reading, editing or writing a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read the document from disk.
    #[error("failed to read '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write the document to disk.
    #[error("failed to write '{path}': {source}")]
    WriteError {
        /// The path that failed to write.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The document was created from a string and has no path to save to.
    #[error("document has no file path")]
    NoPath,

    /// An edit addressed a line or column range outside the buffer.
    #[error("edit range {start}..{end} is outside line {line}")]
    OutOfRange {
        /// 0-based line number of the edit.
        line: usize,
        /// Start column of the edit.
        start: usize,
        /// End column of the edit.
        end: usize,
    },

    /// The buffer no longer holds the text an edit expected to replace.
    #[error("stale edit on line {line}: expected '{expected}', found '{found}'")]
    StaleEdit {
        /// 0-based line number of the edit.
        line: usize,
        /// Text the edit expected to find.
        expected: String,
        /// Text actually present in the buffer.
        found: String,
    },

    /// A line of the document could not be scanned.
    #[error(transparent)]
    Cursor(#[from] CursorError),
}

impl DocumentError {
    /// Creates an out-of-range error for an edit.
    pub fn out_of_range(line: usize, start: usize, end: usize) -> Self {
        DocumentError::OutOfRange { line, start, end }
    }

    /// Creates a stale edit error.
    pub fn stale_edit(line: usize, expected: impl Into<String>, found: impl Into<String>) -> Self {
        DocumentError::StaleEdit {
            line,
            expected: expected.into(),
            found: found.into(),
        }
    }
}
