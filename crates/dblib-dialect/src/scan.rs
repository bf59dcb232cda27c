//! Minimal SQL text scanner.
//!
//! The pagination rewriter never does naive substring search: every clause
//! it locates goes through this scanner, which tracks single-quoted string
//! literals (with `''` escapes), bracket-quoted and double-quoted
//! identifiers, and parenthesis depth. Everything else is an opaque span.

use crate::error::{DialectError, Result};

/// Byte span of a located keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeywordSpan {
    /// Offset of the keyword's first character.
    pub start: usize,
    /// Offset one past the keyword's last character.
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Plain,
    SingleQuote,
    DoubleQuote,
    Bracket,
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'$' | b'#' | b'@')
}

/// Walk `sql` left to right, invoking `visit` with the offset of every byte
/// that sits outside literals, quoted identifiers, and parentheses.
///
/// Fails on unbalanced parentheses and unterminated quoting, which would
/// make any clause split unsafe.
fn scan_top_level(sql: &str, mut visit: impl FnMut(usize)) -> Result<()> {
    let bytes = sql.as_bytes();
    let mut mode = Mode::Plain;
    let mut depth: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match mode {
            Mode::Plain => match b {
                b'\'' => mode = Mode::SingleQuote,
                b'"' => mode = Mode::DoubleQuote,
                b'[' => mode = Mode::Bracket,
                b'(' => depth += 1,
                b')' => {
                    depth = depth.checked_sub(1).ok_or_else(|| {
                        DialectError::MalformedQuery("unbalanced parentheses".into())
                    })?;
                }
                _ => {
                    if depth == 0 {
                        visit(i);
                    }
                }
            },
            Mode::SingleQuote => {
                if b == b'\'' {
                    // '' is an escaped quote, still inside the literal
                    if bytes.get(i + 1) == Some(&b'\'') {
                        i += 1;
                    } else {
                        mode = Mode::Plain;
                    }
                }
            }
            Mode::DoubleQuote => {
                if b == b'"' {
                    mode = Mode::Plain;
                }
            }
            Mode::Bracket => {
                if b == b']' {
                    mode = Mode::Plain;
                }
            }
        }
        i += 1;
    }
    if mode != Mode::Plain {
        return Err(DialectError::MalformedQuery(
            "unterminated string literal or quoted identifier".into(),
        ));
    }
    if depth != 0 {
        return Err(DialectError::MalformedQuery("unbalanced parentheses".into()));
    }
    Ok(())
}

/// Verify that `sql` can be split safely.
pub(crate) fn ensure_balanced(sql: &str) -> Result<()> {
    scan_top_level(sql, |_| {})
}

/// Try to match the multi-word keyword `words` starting at `start`.
///
/// Words are matched case-insensitively, separated by at least one
/// whitespace character, and the keyword must end on a word boundary.
/// Returns the offset one past the last matched character.
fn match_keyword_at(sql: &str, start: usize, words: &[&str]) -> Option<usize> {
    let bytes = sql.as_bytes();
    let mut pos = start;
    for (idx, word) in words.iter().enumerate() {
        if idx > 0 {
            let ws_start = pos;
            while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
                pos += 1;
            }
            if pos == ws_start {
                return None;
            }
        }
        let end = pos + word.len();
        if end > bytes.len() || !bytes[pos..end].eq_ignore_ascii_case(word.as_bytes()) {
            return None;
        }
        pos = end;
    }
    if bytes.get(pos).is_some_and(|&b| is_ident_byte(b)) {
        return None;
    }
    Some(pos)
}

/// Find the first top-level occurrence of a (possibly multi-word) keyword.
pub(crate) fn find_keyword(sql: &str, words: &[&str]) -> Result<Option<KeywordSpan>> {
    let bytes = sql.as_bytes();
    let mut found = None;
    scan_top_level(sql, |i| {
        if found.is_some() {
            return;
        }
        if i > 0 && is_ident_byte(bytes[i - 1]) {
            return;
        }
        if !bytes[i].is_ascii_alphabetic() {
            return;
        }
        if let Some(end) = match_keyword_at(sql, i, words) {
            found = Some(KeywordSpan { start: i, end });
        }
    })?;
    Ok(found)
}

/// Split `span` on top-level commas, trimming each part.
pub(crate) fn split_commas(span: &str) -> Result<Vec<&str>> {
    let bytes = span.as_bytes();
    let mut cuts = Vec::new();
    scan_top_level(span, |i| {
        if bytes[i] == b',' {
            cuts.push(i);
        }
    })?;
    let mut parts = Vec::with_capacity(cuts.len() + 1);
    let mut last = 0;
    for cut in cuts {
        parts.push(span[last..cut].trim());
        last = cut + 1;
    }
    parts.push(span[last..].trim());
    Ok(parts)
}
