//! Glob pattern grammar: wildcard operators and literal runs.
//!
//! Literal runs are maximal: any stretch of bytes containing no wildcard,
//! bracket, or backslash is one [`GlobTag::Lit`] token, so `a1,b2` and the
//! `.txt` after a `*` each come back as a single token.

use crate::scan::Scan;

/// Token id for the glob grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GlobTag {
    /// Zero-length end-of-input marker.
    Eof,
    /// `*` wildcard.
    Star,
    /// `?` single-character wildcard.
    QMark,
    /// `[` opening a character class.
    LBracket,
    /// `]` closing a character class.
    RBracket,
    /// Backslash followed by the byte it quotes.
    EscapedChar,
    /// Trailing backslash with nothing to quote; the grammar's no-match id.
    BadBackslash,
    /// Maximal run of ordinary bytes.
    Lit,
}

impl GlobTag {
    /// Human-readable description for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Eof => "end of input",
            Self::Star => "`*`",
            Self::QMark => "`?`",
            Self::LBracket => "`[`",
            Self::RBracket => "`]`",
            Self::EscapedChar => "escaped character",
            Self::BadBackslash => "dangling backslash",
            Self::Lit => "literal characters",
        }
    }
}

/// Longest glob token starting exactly at `start`.
///
/// # Panics
///
/// If `start > src.len()`.
pub fn match_glob_token(src: &[u8], start: usize) -> (GlobTag, usize) {
    assert!(
        start <= src.len(),
        "start position {start} out of range 0..={}",
        src.len()
    );
    let mut s = Scan::new(src, start);
    let Some(b) = s.current() else {
        return (GlobTag::Eof, start);
    };
    let tag = match b {
        b'*' => {
            s.advance();
            GlobTag::Star
        }
        b'?' => {
            s.advance();
            GlobTag::QMark
        }
        b'[' => {
            s.advance();
            GlobTag::LBracket
        }
        b']' => {
            s.advance();
            GlobTag::RBracket
        }
        b'\\' => {
            s.advance(); // consume '\'
            if s.current().is_some() {
                s.advance();
                GlobTag::EscapedChar
            } else {
                GlobTag::BadBackslash
            }
        }
        _ => {
            s.eat_while(|b| !is_glob_special(b));
            GlobTag::Lit
        }
    };
    (tag, s.pos())
}

/// Bytes that terminate a literal run.
fn is_glob_special(b: u8) -> bool {
    matches!(b, b'*' | b'?' | b'[' | b']' | b'\\')
}
