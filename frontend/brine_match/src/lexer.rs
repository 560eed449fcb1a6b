//! Forward-only incremental lexer over a borrowed byte buffer.

use brine_lex_tables::{
    match_echo_token, match_glob_token, match_range_token, EchoTag, GlobTag, RangeTag,
};

/// Pure longest-match function: `(src, start)` to `(id, end)`.
///
/// Must satisfy the table contract: deterministic, `start < end <=
/// src.len()` for `start < src.len()`, and a zero-length `Eof` only at the
/// very end.
pub type MatchFn<T> = fn(&[u8], usize) -> (T, usize);

/// One lexical unit: a grammar-specific id plus an owned copy of the
/// consumed bytes.
///
/// The text is freshly allocated and never aliases the source buffer, so a
/// token stays valid after the buffer and the lexer that produced it are
/// gone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<T> {
    /// Grammar-specific token id.
    pub id: T,
    /// Owned copy of the consumed span.
    pub text: Vec<u8>,
}

/// Stateful, forward-only token iterator: one buffer, one matcher, one
/// monotonically advancing position.
///
/// A single instance is one traversal; it is not restartable. To re-lex
/// from another offset, construct a fresh instance. The lexer holds only a
/// read-only view of the buffer and keeps no token history, so any number
/// of instances may scan the same bytes independently.
pub struct SimpleLexer<'a, T> {
    match_fn: MatchFn<T>,
    src: &'a [u8],
    pos: usize,
}

impl<'a, T> SimpleLexer<'a, T> {
    /// Lexer bound to `match_fn` and `src`, starting at position 0.
    pub fn new(match_fn: MatchFn<T>, src: &'a [u8]) -> Self {
        Self {
            match_fn,
            src,
            pos: 0,
        }
    }

    /// Produce the next token, or `None` once the buffer is exhausted.
    ///
    /// Each call consumes exactly one longest-match token and copies its
    /// span out of the buffer. Calling again after `None` keeps returning
    /// `None`.
    ///
    /// # Panics
    ///
    /// If the matcher reports zero progress or an end past the buffer.
    /// Either would mean a broken table, not a lexable input; failing fast
    /// here is what keeps `next_token` loops terminating.
    pub fn next_token(&mut self) -> Option<Token<T>> {
        if self.pos >= self.src.len() {
            return None;
        }
        let (id, end) = (self.match_fn)(self.src, self.pos);
        assert!(
            end > self.pos,
            "matcher made no progress at byte {}",
            self.pos
        );
        assert!(
            end <= self.src.len(),
            "matcher ran past the buffer: {end} > {}",
            self.src.len()
        );
        let text = self.src[self.pos..end].to_vec();
        self.pos = end;
        Some(Token { id, text })
    }

    /// Current byte offset; the sum of the lengths of all produced tokens.
    pub fn pos(&self) -> usize {
        self.pos
    }
}

impl<T> Iterator for SimpleLexer<'_, T> {
    type Item = Token<T>;

    fn next(&mut self) -> Option<Token<T>> {
        self.next_token()
    }
}

/// Lexer over the brace-range grammar (`{1..5}` style range bodies).
pub fn brace_range_lexer(src: &[u8]) -> SimpleLexer<'_, RangeTag> {
    SimpleLexer::new(match_range_token, src)
}

/// Lexer over the glob grammar (wildcard and literal pattern tokens).
pub fn glob_lexer(src: &[u8]) -> SimpleLexer<'_, GlobTag> {
    SimpleLexer::new(match_glob_token, src)
}

/// Lexer over the echo-escape grammar (backslash escape sequences).
pub fn echo_lexer(src: &[u8]) -> SimpleLexer<'_, EchoTag> {
    SimpleLexer::new(match_echo_token, src)
}
