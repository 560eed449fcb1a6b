//! Longest-match scanning tables for the brine shell frontend.
//!
//! One pure function per grammar family, each with the same shape:
//!
//! ```text
//! fn match_*(src: &[u8], start: usize) -> (Tag, usize)
//! ```
//!
//! The returned pair is the id of the longest token recognized starting
//! exactly at `start`, and the position one past its last byte.
//!
//! # Contract
//!
//! Every matcher is deterministic and total over `start <= src.len()`:
//!
//! - `start == src.len()` returns the grammar's `Eof` tag with `end == start`
//!   (the only zero-length result).
//! - Otherwise `start < end <= src.len()` — strictly positive progress. A
//!   position where no rule applies yields the grammar's designated
//!   fallback id consuming exactly one byte, never an error.
//! - `start > src.len()` is a caller bug and panics.
//!
//! Tag enumerations are closed per grammar; no id is shared between
//! grammars. The driver crate (`brine_match`) builds its incremental lexer
//! and validators on top of these functions and relies on the progress
//! guarantee for termination.

mod scan;

pub mod echo;
pub mod glob;
pub mod name;
pub mod option;
pub mod range;
pub mod source;

pub use echo::{match_echo_token, EchoTag};
pub use glob::{match_glob_token, GlobTag};
pub use name::{match_name_token, NameTag};
pub use option::{classify_option, OptionId};
pub use range::{match_range_token, RangeTag};
pub use source::{match_source_token, LexMode, SourceTag};
