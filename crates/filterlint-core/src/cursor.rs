//! Single-line cursor (tokenizer) for item filter rules.
//!
//! The cursor owns one line of text and a consumed offset into it. Every
//! `next_*` method tries to match one token at the current position, skipping
//! leading whitespace. A token is only accepted when it is followed by
//! whitespace or the end of the line, so `Width10` never yields `Width`.
//! A failed match leaves the cursor untouched.

use crate::error::{CursorError, CursorResult};
use crate::token::{Operator, Span, Token};

/// Cursor over a single line of filter text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    /// The full line, including any rewritten colour channels.
    text: String,
    /// Column of the next unconsumed character.
    offset: usize,
    /// Column of the first non-whitespace character.
    text_start: usize,
    /// Column just past the last non-whitespace character.
    text_end: usize,
    /// True when no non-whitespace remains after `offset`.
    empty: bool,
}

impl Cursor {
    /// Creates a cursor over `text`.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::MultipleLines`] if `text` contains `\r` or `\n`.
    pub fn new(text: impl Into<String>) -> CursorResult<Self> {
        let text = text.into();
        if let Some(position) = text.find(|c: char| c == '\r' || c == '\n') {
            return Err(CursorError::MultipleLines { position });
        }

        let (text_start, text_end) = content_bounds(&text);
        let empty = text_start == text_end;
        Ok(Self {
            text,
            offset: 0,
            text_start,
            text_end,
            empty,
        })
    }

    /// Returns the full line text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the text that has not been consumed yet.
    pub fn remaining(&self) -> &str {
        &self.text[self.offset..]
    }

    /// Returns the column of the next unconsumed character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the length of the whole line.
    pub fn original_len(&self) -> usize {
        self.text.len()
    }

    /// Returns the column of the first non-whitespace character.
    pub fn text_start(&self) -> usize {
        self.text_start
    }

    /// Returns the column just past the last non-whitespace character.
    pub fn text_end(&self) -> usize {
        self.text_end
    }

    /// Returns the trimmed content span of the line.
    pub fn content_span(&self) -> Span {
        Span::new(self.text_start, self.text_end)
    }

    /// Returns true when nothing but whitespace remains.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Returns true when the remaining text is a `#` comment.
    pub fn is_commented(&self) -> bool {
        self.remaining().trim_start().starts_with('#')
    }

    /// Returns true when the rest of the line carries no semantic content.
    pub fn is_ignored(&self) -> bool {
        self.empty || self.is_commented()
    }

    /// Scans a signed integer.
    pub fn next_number(&mut self) -> Option<Token<i64>> {
        self.scan(match_number)
    }

    /// Scans `true` or `false`, case-insensitively and optionally quoted.
    pub fn next_boolean(&mut self) -> Option<Token<bool>> {
        self.scan(match_boolean)
    }

    /// Scans one of `<= >= = < >`.
    pub fn next_operator(&mut self) -> Option<Token<Operator>> {
        self.scan(|s| {
            Operator::ALL
                .into_iter()
                .find(|op| s.starts_with(op.as_str()))
                .map(|op| (op.as_str().len(), op))
        })
    }

    /// Scans a bare alphabetic word.
    pub fn next_word(&mut self) -> Option<Token<String>> {
        self.scan(|s| {
            let len = s
                .find(|c: char| !(c.is_ascii_alphabetic() || c == 'ö'))
                .unwrap_or(s.len());
            Some((len, s[..len].to_string()))
        })
    }

    /// Scans a double-quoted string (quotes stripped) or a bare run of
    /// characters that excludes whitespace, quotes, `<`, `>` and `=`.
    pub fn next_string(&mut self) -> Option<Token<String>> {
        self.scan(match_string)
    }

    /// Scans a `#RRGGBB` or `#RRGGBBAA` colour literal.
    pub fn next_hex(&mut self) -> Option<Token<String>> {
        self.scan(|s| {
            let digits = s
                .strip_prefix('#')?
                .bytes()
                .take_while(u8::is_ascii_hexdigit)
                .count();
            matches!(digits, 6 | 8).then(|| (digits + 1, s[..digits + 1].to_string()))
        })
    }

    /// Consumes the rest of the line as a comment.
    ///
    /// The token value is the comment text including the leading `#`, with
    /// trailing whitespace removed.
    pub fn parse_comment(&mut self) -> Option<Token<String>> {
        if !self.is_commented() {
            return None;
        }
        self.scan(|s| {
            let len = s.trim_end().len();
            Some((len, s[..len].to_string()))
        })
    }

    /// Replaces an already consumed span with `replacement` and rewinds the
    /// cursor to the start of that span so the replacement is scanned next.
    ///
    /// Returns the change in line length.
    pub(crate) fn splice(&mut self, span: Span, replacement: &str) -> isize {
        debug_assert!(span.end <= self.offset, "splice over unconsumed text");
        let delta = replacement.len() as isize - span.len() as isize;

        self.text.replace_range(span.start..span.end, replacement);
        self.offset = span.start;
        self.text_end = self.text_end.saturating_add_signed(delta);
        self.empty = self.remaining().trim().is_empty();
        delta
    }

    /// Shared scanning step for every `next_*` method.
    ///
    /// `matcher` receives the remaining text with leading whitespace removed
    /// and returns the token length and value.
    fn scan<T>(&mut self, matcher: impl FnOnce(&str) -> Option<(usize, T)>) -> Option<Token<T>> {
        let (start, len, value) = {
            let rest = self.remaining();
            let leading = rest.len() - rest.trim_start().len();
            let candidate = &rest[leading..];
            let (len, value) = matcher(candidate)?;
            if len == 0 || !at_boundary(&candidate[len..]) {
                return None;
            }
            (self.offset + leading, len, value)
        };

        let end = start + len;
        self.offset = end;
        self.empty = self.remaining().trim().is_empty();
        Some(Token::new(value, Span::new(start, end)))
    }
}

/// Returns the bounds of the non-whitespace content of `text`.
fn content_bounds(text: &str) -> (usize, usize) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return (0, 0);
    }
    let start = text.len() - text.trim_start().len();
    (start, start + trimmed.len())
}

/// A token must be followed by whitespace or the end of the line.
fn at_boundary(after: &str) -> bool {
    after.chars().next().map_or(true, char::is_whitespace)
}

fn match_number(s: &str) -> Option<(usize, i64)> {
    let sign = usize::from(s.starts_with('-'));
    let digits = s[sign..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let len = sign + digits;
    // Digit runs too long for i64 saturate so range checks still see them.
    let value = s[..len]
        .parse()
        .unwrap_or(if sign == 1 { i64::MIN } else { i64::MAX });
    Some((len, value))
}

fn match_boolean(s: &str) -> Option<(usize, bool)> {
    let (quoted, body) = match s.strip_prefix('"') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    [("true", true), ("false", false)]
        .into_iter()
        .find_map(|(literal, value)| {
            let head = body.get(..literal.len())?;
            if !head.eq_ignore_ascii_case(literal) {
                return None;
            }
            if !quoted {
                return Some((literal.len(), value));
            }
            body[literal.len()..]
                .starts_with('"')
                .then_some((literal.len() + 2, value))
        })
}

fn match_string(s: &str) -> Option<(usize, String)> {
    if let Some(body) = s.strip_prefix('"') {
        let close = body.find('"')?;
        return Some((close + 2, body[..close].to_string()));
    }

    let len = s
        .find(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '='))
        .unwrap_or(s.len());
    Some((len, s[..len].to_string()))
}
