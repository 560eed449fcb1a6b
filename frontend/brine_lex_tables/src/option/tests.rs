use super::*;
use pretty_assertions::assert_eq;

/// Every recognized id paired with its canonical spelling.
fn recognized() -> Vec<(OptionId, &'static str)> {
    [
        OptionId::Errexit,
        OptionId::Nounset,
        OptionId::Pipefail,
        OptionId::Xtrace,
        OptionId::Verbose,
        OptionId::Noglob,
        OptionId::Noclobber,
        OptionId::Noexec,
        OptionId::Nolog,
        OptionId::Notify,
        OptionId::Ignoreeof,
        OptionId::Hashall,
        OptionId::Monitor,
        OptionId::Posix,
        OptionId::Vi,
        OptionId::Emacs,
        OptionId::Nullglob,
        OptionId::Failglob,
        OptionId::Dotglob,
        OptionId::Globstar,
        OptionId::Extglob,
        OptionId::Nocasematch,
        OptionId::InheritErrexit,
    ]
    .into_iter()
    .filter_map(|id| id.as_name().map(|name| (id, name)))
    .collect()
}

#[test]
fn every_name_round_trips_to_its_id() {
    for (id, name) in recognized() {
        assert_eq!(classify_option(name.as_bytes()), id, "for {name}");
    }
}

#[test]
fn no_two_names_collide() {
    let names = recognized();
    for (i, (id_a, name_a)) in names.iter().enumerate() {
        for (id_b, name_b) in &names[i + 1..] {
            assert_ne!(id_a, id_b, "{name_a} and {name_b} share an id");
        }
    }
}

#[test]
fn unknown_inputs_all_map_to_unknown() {
    for src in [
        b"".as_slice(),
        b"x",
        b"errexi",
        b"errexitt",
        b"ERREXIT",
        b"errexit ",
        b" errexit",
        b"no",
        b"inherit-errexit",
        b"some_very_long_option_name_indeed",
    ] {
        assert_eq!(classify_option(src), OptionId::Unknown, "for {src:?}");
    }
}

#[test]
fn unknown_has_no_name() {
    assert_eq!(OptionId::Unknown.as_name(), None);
}

#[test]
fn classification_is_byte_exact() {
    // Embedded NUL or trailing bytes break the match.
    assert_eq!(classify_option(b"errexit\0"), OptionId::Unknown);
    assert_eq!(classify_option(b"vi\n"), OptionId::Unknown);
}
