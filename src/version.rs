//! The closed registry of cipher versions.
//!
//! Every token names the version that produced it, and that tag alone decides
//! which cipher decrypts the payload. The set of versions is fixed per build:
//! adding a scheme means adding a variant here plus a cipher arm in
//! `cipher::cipher_for`. Existing variants keep their behavior forever so
//! old tokens stay readable.

use std::fmt;
use std::str::FromStr;

use crate::errors::PropsealError;

/// A registered cipher version, ordered oldest to newest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    /// Legacy DES-CBC scheme, kept for decrypting existing tokens.
    V1_0,
    /// AES-128-CBC scheme with a random per-call salt. Current default.
    V1_1,
}

impl Version {
    /// Every registered version, in registration order (oldest first).
    pub const ALL: [Version; 2] = [Version::V1_0, Version::V1_1];

    /// The wire tag stored in the token's `ver` field.
    pub fn as_tag(self) -> &'static str {
        match self {
            Version::V1_0 => "1.0",
            Version::V1_1 => "1.1",
        }
    }

    /// Reverse lookup over the registry. `None` for any unregistered tag.
    pub fn from_tag(tag: &str) -> Option<Version> {
        Self::ALL.iter().copied().find(|v| v.as_tag() == tag)
    }

    /// The newest registered version — the default for encryption.
    pub fn latest() -> Version {
        Self::ALL[Self::ALL.len() - 1]
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Version {
    type Err = PropsealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::from_tag(s).ok_or_else(|| PropsealError::UnsupportedVersion(s.to_string()))
    }
}

/// Whether `tag` is shaped like a version tag (`digits '.' digits`).
///
/// The token codec uses this to separate a malformed token (`Format`) from a
/// well-formed tag this build simply does not know (`UnsupportedVersion`).
pub fn is_version_syntax(tag: &str) -> bool {
    match tag.split_once('.') {
        Some((major, minor)) => is_digits(major) && is_digits(minor),
        None => false,
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_the_registry() {
        for v in Version::ALL {
            assert_eq!(Version::from_tag(v.as_tag()), Some(v));
        }
    }

    #[test]
    fn latest_is_the_newest_registered_version() {
        assert_eq!(Version::latest(), Version::V1_1);
    }

    #[test]
    fn unregistered_tags_resolve_to_none() {
        assert_eq!(Version::from_tag("9.9"), None);
        assert_eq!(Version::from_tag("1.2"), None);
        assert_eq!(Version::from_tag(""), None);
    }

    #[test]
    fn version_syntax_accepts_dotted_digits() {
        assert!(is_version_syntax("1.0"));
        assert!(is_version_syntax("9.9"));
        assert!(is_version_syntax("10.25"));
    }

    #[test]
    fn version_syntax_rejects_everything_else() {
        assert!(!is_version_syntax(""));
        assert!(!is_version_syntax("1"));
        assert!(!is_version_syntax("1."));
        assert!(!is_version_syntax(".1"));
        assert!(!is_version_syntax("1.0.0"));
        assert!(!is_version_syntax("v1.0"));
        assert!(!is_version_syntax("1.a"));
    }
}
