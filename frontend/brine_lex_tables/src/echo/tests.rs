use super::*;
use pretty_assertions::assert_eq;

fn tile(src: &[u8]) -> Vec<(EchoTag, usize, usize)> {
    let mut out = Vec::new();
    let mut pos = 0;
    while pos < src.len() {
        let (tag, end) = match_echo_token(src, pos);
        out.push((tag, pos, end));
        assert!(end > pos, "no progress at {pos}");
        pos = end;
    }
    out
}

#[test]
fn plain_text_is_one_literal() {
    assert_eq!(tile(b"hello world"), vec![(EchoTag::Lit, 0, 11)]);
}

#[test]
fn one_char_escapes() {
    assert_eq!(tile(b"\\n"), vec![(EchoTag::OneChar, 0, 2)]);
    assert_eq!(tile(b"\\t"), vec![(EchoTag::OneChar, 0, 2)]);
    assert_eq!(tile(b"\\\\"), vec![(EchoTag::OneChar, 0, 2)]);
    assert_eq!(
        tile(b"a\\nb"),
        vec![
            (EchoTag::Lit, 0, 1),
            (EchoTag::OneChar, 1, 3),
            (EchoTag::Lit, 3, 4),
        ]
    );
}

#[test]
fn stop_escape() {
    assert_eq!(
        tile(b"hi\\cignored"),
        vec![
            (EchoTag::Lit, 0, 2),
            (EchoTag::Stop, 2, 4),
            (EchoTag::Lit, 4, 11),
        ]
    );
}

#[test]
fn octal_escape_takes_up_to_three_digits() {
    assert_eq!(tile(b"\\0101"), vec![(EchoTag::Octal, 0, 5)]);
    assert_eq!(tile(b"\\07"), vec![(EchoTag::Octal, 0, 3)]);
    // \0 alone is a NUL escape.
    assert_eq!(tile(b"\\0"), vec![(EchoTag::Octal, 0, 2)]);
    // Fourth digit is left for the following literal.
    assert_eq!(
        tile(b"\\01234"),
        vec![(EchoTag::Octal, 0, 5), (EchoTag::Lit, 5, 6)]
    );
    // Non-octal digit ends the escape.
    assert_eq!(
        tile(b"\\08"),
        vec![(EchoTag::Octal, 0, 2), (EchoTag::Lit, 2, 3)]
    );
}

#[test]
fn hex_escape_takes_up_to_two_digits() {
    assert_eq!(tile(b"\\x4"), vec![(EchoTag::Hex, 0, 3)]);
    assert_eq!(tile(b"\\x41"), vec![(EchoTag::Hex, 0, 4)]);
    assert_eq!(
        tile(b"\\x414"),
        vec![(EchoTag::Hex, 0, 4), (EchoTag::Lit, 4, 5)]
    );
}

#[test]
fn hex_escape_requires_a_digit() {
    // \x with no hex digit is not an escape; backslash passes through.
    assert_eq!(
        tile(b"\\xg"),
        vec![(EchoTag::BadBackslash, 0, 1), (EchoTag::Lit, 1, 3)]
    );
}

#[test]
fn unicode_escapes() {
    assert_eq!(tile(b"\\u03bb"), vec![(EchoTag::Unicode4, 0, 6)]);
    assert_eq!(tile(b"\\U0001F600"), vec![(EchoTag::Unicode8, 0, 10)]);
    // Digit limits: the ninth hex digit is literal.
    assert_eq!(
        tile(b"\\u03bb7x"),
        vec![(EchoTag::Unicode4, 0, 6), (EchoTag::Lit, 6, 8)]
    );
}

#[test]
fn unknown_escape_keeps_backslash_alone() {
    assert_eq!(
        tile(b"\\q"),
        vec![(EchoTag::BadBackslash, 0, 1), (EchoTag::Lit, 1, 2)]
    );
}

#[test]
fn trailing_backslash() {
    assert_eq!(
        tile(b"ab\\"),
        vec![(EchoTag::Lit, 0, 2), (EchoTag::BadBackslash, 2, 3)]
    );
}

#[test]
fn eof_is_zero_length() {
    assert_eq!(match_echo_token(b"x", 1), (EchoTag::Eof, 1));
    assert_eq!(match_echo_token(b"", 0), (EchoTag::Eof, 0));
}

#[test]
#[should_panic(expected = "out of range")]
fn start_past_end_panics() {
    let _ = match_echo_token(b"x", 2);
}
