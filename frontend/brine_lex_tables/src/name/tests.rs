use super::*;
use pretty_assertions::assert_eq;

#[test]
fn simple_names() {
    assert_eq!(match_name_token(b"foo", 0), (NameTag::Name, 3));
    assert_eq!(match_name_token(b"_x9", 0), (NameTag::Name, 3));
    assert_eq!(match_name_token(b"A", 0), (NameTag::Name, 1));
}

#[test]
fn name_stops_at_non_name_byte() {
    assert_eq!(match_name_token(b"a-b", 0), (NameTag::Name, 1));
    assert_eq!(match_name_token(b"x=1", 0), (NameTag::Name, 1));
}

#[test]
fn leading_digit_is_not_a_name() {
    assert_eq!(match_name_token(b"9lives", 0), (NameTag::Other, 1));
}

#[test]
fn digits_allowed_after_first_byte() {
    assert_eq!(match_name_token(b"v2_beta", 0), (NameTag::Name, 7));
}

#[test]
fn non_name_bytes_are_other() {
    assert_eq!(match_name_token(b"-", 0), (NameTag::Other, 1));
    assert_eq!(match_name_token(&[0xC3], 0), (NameTag::Other, 1));
}

#[test]
fn mid_slice_start() {
    assert_eq!(match_name_token(b"1abc", 1), (NameTag::Name, 4));
}

#[test]
fn eof_is_zero_length() {
    assert_eq!(match_name_token(b"", 0), (NameTag::Eof, 0));
    assert_eq!(match_name_token(b"x", 1), (NameTag::Eof, 1));
}

#[test]
#[should_panic(expected = "out of range")]
fn start_past_end_panics() {
    let _ = match_name_token(b"x", 2);
}
