use super::*;
use pretty_assertions::assert_eq;

#[test]
fn repeated_calls_are_identical() {
    let src = b"ls | wc";
    let first = one_token(LexMode::Command, src, 3);
    for _ in 0..3 {
        assert_eq!(one_token(LexMode::Command, src, 3), first);
    }
}

#[test]
fn out_of_order_calls_are_independent() {
    let src = b"a && b";
    let at_2 = one_token(LexMode::Command, src, 2);
    let at_0 = one_token(LexMode::Command, src, 0);
    let at_2_again = one_token(LexMode::Command, src, 2);
    assert_eq!(at_0, (SourceTag::LitChars, 1));
    assert_eq!(at_2, (SourceTag::OpDAmp, 4));
    assert_eq!(at_2, at_2_again);
}

#[test]
fn speculative_relex_under_another_mode() {
    // The same offset can be matched under different modes; spans and ids
    // may diverge.
    let src = b"$x\"";
    assert_eq!(one_token(LexMode::Command, src, 0), (SourceTag::VSubName, 2));
    assert_eq!(one_token(LexMode::SQuote, src, 0), (SourceTag::LitChars, 3));
}

#[test]
fn eof_at_len_is_zero_length() {
    assert_eq!(one_token(LexMode::DQuote, b"ab", 2), (SourceTag::Eof, 2));
}

#[test]
fn no_match_is_data_not_failure() {
    assert_eq!(one_token(LexMode::Command, b"\x01", 0), (SourceTag::LitOther, 1));
}

#[test]
#[should_panic(expected = "out of range")]
fn start_past_end_is_a_caller_error() {
    let _ = one_token(LexMode::Command, b"ab", 3);
}
