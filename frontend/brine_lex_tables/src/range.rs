//! Brace-range grammar: the interior of `{1..5}` / `{a..z}` expressions.

use crate::scan::Scan;

/// Token id for the brace-range grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RangeTag {
    /// Zero-length end-of-input marker.
    Eof,
    /// Optionally signed decimal integer endpoint.
    Int,
    /// Single ASCII letter endpoint.
    Char,
    /// `..` range operator.
    Dots,
    /// Single byte outside the range syntax; the grammar's no-match id.
    Other,
}

impl RangeTag {
    /// Human-readable description for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Eof => "end of input",
            Self::Int => "integer endpoint",
            Self::Char => "character endpoint",
            Self::Dots => "`..`",
            Self::Other => "unrecognized byte",
        }
    }
}

/// Longest brace-range token starting exactly at `start`.
///
/// A lone `-` or a single `.` is not range syntax and falls through to
/// [`RangeTag::Other`].
///
/// # Panics
///
/// If `start > src.len()`.
pub fn match_range_token(src: &[u8], start: usize) -> (RangeTag, usize) {
    assert!(
        start <= src.len(),
        "start position {start} out of range 0..={}",
        src.len()
    );
    let mut s = Scan::new(src, start);
    let Some(b) = s.current() else {
        return (RangeTag::Eof, start);
    };
    let tag = match b {
        b'0'..=b'9' => {
            s.eat_while(|b| b.is_ascii_digit());
            RangeTag::Int
        }
        b'-' if s.peek().is_some_and(|c| c.is_ascii_digit()) => {
            s.advance(); // consume '-'
            s.eat_while(|b| b.is_ascii_digit());
            RangeTag::Int
        }
        b'.' if s.peek() == Some(b'.') => {
            s.advance();
            s.advance();
            RangeTag::Dots
        }
        b'a'..=b'z' | b'A'..=b'Z' => {
            s.advance();
            RangeTag::Char
        }
        _ => {
            s.advance();
            RangeTag::Other
        }
    };
    (tag, s.pos())
}
