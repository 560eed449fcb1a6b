//! Variable-name grammar: `[a-zA-Z_][a-zA-Z0-9_]*`.

use crate::scan::Scan;

/// Token id for the variable-name grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NameTag {
    /// Zero-length end-of-input marker.
    Eof,
    /// A well-formed name.
    Name,
    /// Single byte that cannot start a name; the grammar's no-match id.
    Other,
}

impl NameTag {
    /// Human-readable description for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Eof => "end of input",
            Self::Name => "variable name",
            Self::Other => "unrecognized byte",
        }
    }
}

/// First byte of a name.
pub(crate) fn is_name_start(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphabetic()
}

/// Subsequent bytes of a name.
pub(crate) fn is_name_continue(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

/// Longest variable-name token starting exactly at `start`.
///
/// # Panics
///
/// If `start > src.len()`.
pub fn match_name_token(src: &[u8], start: usize) -> (NameTag, usize) {
    assert!(
        start <= src.len(),
        "start position {start} out of range 0..={}",
        src.len()
    );
    let mut s = Scan::new(src, start);
    let Some(b) = s.current() else {
        return (NameTag::Eof, start);
    };
    let tag = if is_name_start(b) {
        s.advance();
        s.eat_while(is_name_continue);
        NameTag::Name
    } else {
        s.advance();
        NameTag::Other
    };
    (tag, s.pos())
}

#[cfg(test)]
mod tests;
