//! Longest-match tokenizer driver for the brine shell frontend.
//!
//! Thin, stateful-and-stateless drivers over the pure grammar tables in
//! `brine_lex_tables`:
//!
//! - [`one_token`] — stateless, random-access matching for the general
//!   source-token modes; parsers use it for lookahead and speculative
//!   re-lexing.
//! - [`SimpleLexer`] — a forward-only incremental token iterator over a
//!   borrowed buffer, bound to one matcher; [`brace_range_lexer`],
//!   [`glob_lexer`], and [`echo_lexer`] bind it to the three small
//!   grammars.
//! - [`is_valid_var_name`] / [`match_option`] — single-shot, whole-input
//!   validators.
//!
//! Everything here is synchronous and pure: no I/O, no shared state, and
//! termination in time proportional to the consumed span. Recognized-grammar
//! failures come back as ordinary tag values; only caller misuse (an
//! out-of-range start position, or a matcher that breaks the
//! forward-progress contract) panics.

mod lexer;
mod oneshot;
mod validate;

pub use brine_lex_tables::{EchoTag, GlobTag, LexMode, NameTag, OptionId, RangeTag, SourceTag};
pub use lexer::{brace_range_lexer, echo_lexer, glob_lexer, MatchFn, SimpleLexer, Token};
pub use oneshot::one_token;
pub use validate::{is_valid_var_name, match_option};
