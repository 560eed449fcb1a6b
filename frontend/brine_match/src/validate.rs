//! Single-shot, whole-input classification built on the matcher tables.

use brine_lex_tables::{classify_option, match_name_token, NameTag, OptionId};

/// True only if the entire input is one well-formed variable name.
///
/// No partial-prefix acceptance: `a-b` starts with a valid name but is not
/// one. Empty input is not a name.
pub fn is_valid_var_name(src: &[u8]) -> bool {
    if src.is_empty() {
        return false;
    }
    match_name_token(src, 0) == (NameTag::Name, src.len())
}

/// Classify the entire input against the recognized option-name set.
///
/// Returns the option's id, or [`OptionId::Unknown`] for anything outside
/// the set. Stateless and pure.
pub fn match_option(src: &[u8]) -> OptionId {
    classify_option(src)
}
