//! General source-token grammar, dispatched over [`LexMode`].
//!
//! One shared closed tag enumeration covers the command, double-quote, and
//! single-quote lexing modes. Dispatch is a single `match` over the current
//! byte per mode, with focused helpers for the multi-byte shapes. Error
//! conditions are tag variants ([`SourceTag::LitOther`],
//! [`SourceTag::LitBadBackslash`]), never a `Result`.

use crate::name::{is_name_continue, is_name_start};
use crate::scan::Scan;

/// Which source grammar mode to apply.
///
/// Mirrors the lexing contexts of the shell frontend: `Command` for
/// unquoted command position, `DQuote` inside `"…"`, `SQuote` inside `'…'`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexMode {
    /// Unquoted command position: operators, redirects, words, comments.
    Command,
    /// Inside a double-quoted string: substitutions and escapes are live.
    DQuote,
    /// Inside a single-quoted string: everything literal up to `'`.
    SQuote,
}

/// Token id for the general source grammar.
///
/// Closed set shared by all [`LexMode`] variants. Ids from other grammars
/// (range, glob, echo) never appear here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SourceTag {
    /// Zero-length end-of-input marker.
    Eof,

    // Words and literals
    /// Run of unquoted word characters (`[a-zA-Z0-9_/.-]+`).
    LitChars,
    /// Single byte no other rule recognized; the grammar's no-match id.
    LitOther,
    /// Backslash followed by the byte it quotes.
    LitEscapedChar,
    /// Backslash that quotes nothing (trailing, or dead inside `"…"`).
    LitBadBackslash,
    /// `$` that starts no substitution.
    LitDollar,

    // Trivia
    /// Run of spaces and tabs.
    WhiteSpace,
    /// `#` comment running to (not including) the newline.
    Comment,

    // Operators
    /// `\n`
    OpNewline,
    /// `&&`
    OpDAmp,
    /// `&`
    OpAmp,
    /// `||`
    OpDPipe,
    /// `|`
    OpPipe,
    /// `;;`
    OpDSemi,
    /// `;`
    OpSemi,
    /// `(`
    OpLParen,
    /// `)`
    OpRParen,

    // Redirects
    /// `>>`
    RedirDGreat,
    /// `>`
    RedirGreat,
    /// `<<`
    RedirDLess,
    /// `<`
    RedirLess,

    // Substitutions
    /// `$NAME`
    VSubName,
    /// `$0` through `$9`
    VSubNumber,
    /// `$?`
    VSubQMark,
    /// `$@`
    VSubAt,
    /// `$#`
    VSubPound,
    /// `$(`
    LeftDollarParen,
    /// `${`
    LeftDollarBrace,

    // Quote delimiters
    /// Opening `'`
    LeftSingleQuote,
    /// Opening `"`
    LeftDoubleQuote,
    /// `` ` `` opening a command substitution
    LeftBacktick,
    /// Closing `"` (double-quote mode)
    RightDoubleQuote,
    /// Closing `'` (single-quote mode)
    RightSingleQuote,
}

impl SourceTag {
    /// Human-readable description for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Eof => "end of input",
            Self::LitChars => "word characters",
            Self::LitOther => "unrecognized byte",
            Self::LitEscapedChar => "escaped character",
            Self::LitBadBackslash => "dangling backslash",
            Self::LitDollar => "`$`",
            Self::WhiteSpace => "whitespace",
            Self::Comment => "comment",
            Self::OpNewline => "newline",
            Self::OpDAmp => "`&&`",
            Self::OpAmp => "`&`",
            Self::OpDPipe => "`||`",
            Self::OpPipe => "`|`",
            Self::OpDSemi => "`;;`",
            Self::OpSemi => "`;`",
            Self::OpLParen => "`(`",
            Self::OpRParen => "`)`",
            Self::RedirDGreat => "`>>`",
            Self::RedirGreat => "`>`",
            Self::RedirDLess => "`<<`",
            Self::RedirLess => "`<`",
            Self::VSubName => "variable substitution",
            Self::VSubNumber => "positional parameter",
            Self::VSubQMark => "`$?`",
            Self::VSubAt => "`$@`",
            Self::VSubPound => "`$#`",
            Self::LeftDollarParen => "`$(`",
            Self::LeftDollarBrace => "`${`",
            Self::LeftSingleQuote => "opening `'`",
            Self::LeftDoubleQuote => "opening `\"`",
            Self::LeftBacktick => "backtick",
            Self::RightDoubleQuote => "closing `\"`",
            Self::RightSingleQuote => "closing `'`",
        }
    }
}

/// Longest source token of `mode` starting exactly at `start`.
///
/// Pure and deterministic. `start == src.len()` yields a zero-length
/// [`SourceTag::Eof`]; every other result consumes at least one byte.
///
/// # Panics
///
/// If `start > src.len()`.
pub fn match_source_token(mode: LexMode, src: &[u8], start: usize) -> (SourceTag, usize) {
    assert!(
        start <= src.len(),
        "start position {start} out of range 0..={}",
        src.len()
    );
    let mut s = Scan::new(src, start);
    let Some(b) = s.current() else {
        return (SourceTag::Eof, start);
    };
    let tag = match mode {
        LexMode::Command => command_token(&mut s, b),
        LexMode::DQuote => dquote_token(&mut s, b),
        LexMode::SQuote => squote_token(&mut s, b),
    };
    (tag, s.pos())
}

fn command_token(s: &mut Scan<'_>, b: u8) -> SourceTag {
    match b {
        b' ' | b'\t' => {
            s.eat_while(|b| b == b' ' || b == b'\t');
            SourceTag::WhiteSpace
        }
        b'\n' => {
            s.advance();
            SourceTag::OpNewline
        }
        b'#' => {
            s.advance();
            s.eat_until(b'\n');
            SourceTag::Comment
        }
        b'&' => double_or_single(s, b'&', SourceTag::OpDAmp, SourceTag::OpAmp),
        b'|' => double_or_single(s, b'|', SourceTag::OpDPipe, SourceTag::OpPipe),
        b';' => double_or_single(s, b';', SourceTag::OpDSemi, SourceTag::OpSemi),
        b'>' => double_or_single(s, b'>', SourceTag::RedirDGreat, SourceTag::RedirGreat),
        b'<' => double_or_single(s, b'<', SourceTag::RedirDLess, SourceTag::RedirLess),
        b'(' => {
            s.advance();
            SourceTag::OpLParen
        }
        b')' => {
            s.advance();
            SourceTag::OpRParen
        }
        b'$' => dollar(s),
        b'\'' => {
            s.advance();
            SourceTag::LeftSingleQuote
        }
        b'"' => {
            s.advance();
            SourceTag::LeftDoubleQuote
        }
        b'`' => {
            s.advance();
            SourceTag::LeftBacktick
        }
        b'\\' => {
            s.advance(); // consume '\'
            if s.current().is_some() {
                s.advance();
                SourceTag::LitEscapedChar
            } else {
                SourceTag::LitBadBackslash
            }
        }
        _ if is_lit_char(b) => {
            s.eat_while(is_lit_char);
            SourceTag::LitChars
        }
        _ => {
            s.advance();
            SourceTag::LitOther
        }
    }
}

fn dquote_token(s: &mut Scan<'_>, b: u8) -> SourceTag {
    match b {
        b'"' => {
            s.advance();
            SourceTag::RightDoubleQuote
        }
        b'$' => dollar(s),
        b'`' => {
            s.advance();
            SourceTag::LeftBacktick
        }
        b'\\' => {
            s.advance(); // consume '\'
            match s.current() {
                // Only these are escapable inside double quotes.
                Some(b'$' | b'"' | b'\\' | b'`' | b'\n') => {
                    s.advance();
                    SourceTag::LitEscapedChar
                }
                _ => SourceTag::LitBadBackslash,
            }
        }
        _ => {
            s.eat_until4(b'"', b'$', b'\\', b'`');
            SourceTag::LitChars
        }
    }
}

fn squote_token(s: &mut Scan<'_>, b: u8) -> SourceTag {
    if b == b'\'' {
        s.advance();
        SourceTag::RightSingleQuote
    } else {
        s.eat_until(b'\'');
        SourceTag::LitChars
    }
}

/// Two-byte operator if the next byte matches, else the one-byte form.
fn double_or_single(s: &mut Scan<'_>, second: u8, double: SourceTag, single: SourceTag) -> SourceTag {
    s.advance();
    if s.current() == Some(second) {
        s.advance();
        double
    } else {
        single
    }
}

/// Everything starting with `$`, shared by command and double-quote modes.
fn dollar(s: &mut Scan<'_>) -> SourceTag {
    s.advance(); // consume '$'
    match s.current() {
        Some(b'(') => {
            s.advance();
            SourceTag::LeftDollarParen
        }
        Some(b'{') => {
            s.advance();
            SourceTag::LeftDollarBrace
        }
        Some(b'?') => {
            s.advance();
            SourceTag::VSubQMark
        }
        Some(b'@') => {
            s.advance();
            SourceTag::VSubAt
        }
        Some(b'#') => {
            s.advance();
            SourceTag::VSubPound
        }
        Some(b'0'..=b'9') => {
            s.advance();
            SourceTag::VSubNumber
        }
        Some(c) if is_name_start(c) => {
            s.advance();
            s.eat_while(is_name_continue);
            SourceTag::VSubName
        }
        _ => SourceTag::LitDollar,
    }
}

/// Unquoted word characters.
fn is_lit_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'/' | b'.' | b'-')
}
