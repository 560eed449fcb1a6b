//! Stateless one-shot matching for the general source-token modes.

use brine_lex_tables::{match_source_token, LexMode, SourceTag};

/// Longest token of the `mode` grammar starting exactly at `start`.
///
/// Pure and side-effect-free, so repeated and out-of-order calls are fine;
/// this is the entry point parsers use for lookahead and speculative
/// re-lexing of the same span under a different mode. No-match is data
/// ([`SourceTag::LitOther`]), never a failure, and `start == src.len()`
/// yields a zero-length [`SourceTag::Eof`].
///
/// # Panics
///
/// If `start > src.len()` — a caller error, not a lexing outcome.
pub fn one_token(mode: LexMode, src: &[u8], start: usize) -> (SourceTag, usize) {
    match_source_token(mode, src, start)
}

#[cfg(test)]
mod tests;
