//! Echo-style escape grammar: backslash sequences in `echo -e` arguments.
//!
//! Escape forms are matched longest-first: `\0` octal and `\x`/`\u`/`\U`
//! digit forms win over the one-character escapes. A backslash that starts
//! no recognized escape is consumed alone as [`EchoTag::BadBackslash`]; the
//! caller decides whether to pass it through literally.

use crate::scan::Scan;

/// Token id for the echo-escape grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EchoTag {
    /// Zero-length end-of-input marker.
    Eof,
    /// `\c`: suppress all further output.
    Stop,
    /// One-character escape: `\a \b \e \E \f \n \r \t \v \\`.
    OneChar,
    /// `\0` followed by up to three octal digits.
    Octal,
    /// `\x` followed by one or two hex digits.
    Hex,
    /// `\u` followed by one to four hex digits.
    Unicode4,
    /// `\U` followed by one to eight hex digits.
    Unicode8,
    /// Backslash starting no recognized escape; the grammar's no-match id.
    BadBackslash,
    /// Maximal run of bytes containing no backslash.
    Lit,
}

impl EchoTag {
    /// Human-readable description for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Eof => "end of input",
            Self::Stop => "`\\c`",
            Self::OneChar => "character escape",
            Self::Octal => "octal escape",
            Self::Hex => "hex escape",
            Self::Unicode4 => "`\\u` escape",
            Self::Unicode8 => "`\\U` escape",
            Self::BadBackslash => "dangling backslash",
            Self::Lit => "literal characters",
        }
    }
}

/// Longest echo-escape token starting exactly at `start`.
///
/// # Panics
///
/// If `start > src.len()`.
pub fn match_echo_token(src: &[u8], start: usize) -> (EchoTag, usize) {
    assert!(
        start <= src.len(),
        "start position {start} out of range 0..={}",
        src.len()
    );
    let mut s = Scan::new(src, start);
    let Some(b) = s.current() else {
        return (EchoTag::Eof, start);
    };
    if b != b'\\' {
        s.eat_until(b'\\');
        return (EchoTag::Lit, s.pos());
    }
    s.advance(); // consume '\'
    let tag = match s.current() {
        Some(b'c') => {
            s.advance();
            EchoTag::Stop
        }
        Some(b'0') => {
            s.advance();
            eat_digits_max(&mut s, 3, is_octal);
            EchoTag::Octal
        }
        Some(b'x') if s.peek().is_some_and(is_hex) => {
            s.advance();
            eat_digits_max(&mut s, 2, is_hex);
            EchoTag::Hex
        }
        Some(b'u') if s.peek().is_some_and(is_hex) => {
            s.advance();
            eat_digits_max(&mut s, 4, is_hex);
            EchoTag::Unicode4
        }
        Some(b'U') if s.peek().is_some_and(is_hex) => {
            s.advance();
            eat_digits_max(&mut s, 8, is_hex);
            EchoTag::Unicode8
        }
        Some(b'a' | b'b' | b'e' | b'E' | b'f' | b'n' | b'r' | b't' | b'v' | b'\\') => {
            s.advance();
            EchoTag::OneChar
        }
        // Unrecognized or trailing: the backslash alone.
        _ => EchoTag::BadBackslash,
    };
    (tag, s.pos())
}

/// Consume at most `max` bytes matching `pred`.
fn eat_digits_max(s: &mut Scan<'_>, max: usize, pred: impl Fn(u8) -> bool) {
    let mut n = 0;
    while n < max && s.current().is_some_and(&pred) {
        s.advance();
        n += 1;
    }
}

fn is_octal(b: u8) -> bool {
    (b'0'..=b'7').contains(&b)
}

fn is_hex(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

#[cfg(test)]
mod tests;
