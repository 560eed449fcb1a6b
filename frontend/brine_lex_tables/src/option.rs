//! Option-name classification for `set -o` / `shopt` style option words.
//!
//! Whole-input classification, not a longest-match scan: the entire byte
//! string either names one recognized option or maps to
//! [`OptionId::Unknown`]. Lookup is length-bucketed so inputs outside the
//! 2–15 byte range are rejected without any comparison.

/// Recognized shell option, or `Unknown`.
///
/// Every distinct recognized name has its own id; every input outside the
/// set maps to the same `Unknown`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionId {
    Errexit,
    Nounset,
    Pipefail,
    Xtrace,
    Verbose,
    Noglob,
    Noclobber,
    Noexec,
    Nolog,
    Notify,
    Ignoreeof,
    Hashall,
    Monitor,
    Posix,
    Vi,
    Emacs,
    Nullglob,
    Failglob,
    Dotglob,
    Globstar,
    Extglob,
    Nocasematch,
    InheritErrexit,
    /// Not a recognized option name.
    Unknown,
}

impl OptionId {
    /// The option's canonical spelling, or `None` for `Unknown`.
    pub fn as_name(self) -> Option<&'static str> {
        match self {
            Self::Errexit => Some("errexit"),
            Self::Nounset => Some("nounset"),
            Self::Pipefail => Some("pipefail"),
            Self::Xtrace => Some("xtrace"),
            Self::Verbose => Some("verbose"),
            Self::Noglob => Some("noglob"),
            Self::Noclobber => Some("noclobber"),
            Self::Noexec => Some("noexec"),
            Self::Nolog => Some("nolog"),
            Self::Notify => Some("notify"),
            Self::Ignoreeof => Some("ignoreeof"),
            Self::Hashall => Some("hashall"),
            Self::Monitor => Some("monitor"),
            Self::Posix => Some("posix"),
            Self::Vi => Some("vi"),
            Self::Emacs => Some("emacs"),
            Self::Nullglob => Some("nullglob"),
            Self::Failglob => Some("failglob"),
            Self::Dotglob => Some("dotglob"),
            Self::Globstar => Some("globstar"),
            Self::Extglob => Some("extglob"),
            Self::Nocasematch => Some("nocasematch"),
            Self::InheritErrexit => Some("inherit_errexit"),
            Self::Unknown => None,
        }
    }
}

/// Classify the entire input against the recognized option set.
///
/// Stateless and pure; byte-exact matching (no case folding, no prefix
/// acceptance). Uses the input length as a first-pass filter, then matches
/// against the names of that length.
pub fn classify_option(src: &[u8]) -> OptionId {
    // All recognized names are 2-15 bytes.
    if !(2..=15).contains(&src.len()) {
        return OptionId::Unknown;
    }
    match src.len() {
        2 => match src {
            b"vi" => OptionId::Vi,
            _ => OptionId::Unknown,
        },
        5 => match src {
            b"emacs" => OptionId::Emacs,
            b"nolog" => OptionId::Nolog,
            b"posix" => OptionId::Posix,
            _ => OptionId::Unknown,
        },
        6 => match src {
            b"noexec" => OptionId::Noexec,
            b"noglob" => OptionId::Noglob,
            b"notify" => OptionId::Notify,
            b"xtrace" => OptionId::Xtrace,
            _ => OptionId::Unknown,
        },
        7 => match src {
            b"dotglob" => OptionId::Dotglob,
            b"errexit" => OptionId::Errexit,
            b"extglob" => OptionId::Extglob,
            b"hashall" => OptionId::Hashall,
            b"monitor" => OptionId::Monitor,
            b"nounset" => OptionId::Nounset,
            b"verbose" => OptionId::Verbose,
            _ => OptionId::Unknown,
        },
        8 => match src {
            b"failglob" => OptionId::Failglob,
            b"globstar" => OptionId::Globstar,
            b"nullglob" => OptionId::Nullglob,
            b"pipefail" => OptionId::Pipefail,
            _ => OptionId::Unknown,
        },
        9 => match src {
            b"ignoreeof" => OptionId::Ignoreeof,
            b"noclobber" => OptionId::Noclobber,
            _ => OptionId::Unknown,
        },
        11 => match src {
            b"nocasematch" => OptionId::Nocasematch,
            _ => OptionId::Unknown,
        },
        15 => match src {
            b"inherit_errexit" => OptionId::InheritErrexit,
            _ => OptionId::Unknown,
        },
        _ => OptionId::Unknown,
    }
}

#[cfg(test)]
mod tests;
