//! Version-specific cipher implementations.
//!
//! This module provides:
//! - the [`Cipher`] trait every registered version implements
//! - the legacy deterministic DES scheme (`v1`)
//! - the randomized AES scheme and current default (`v1_1`)
//! - the key derivations both schemes are built on (`kdf`)

pub mod kdf;
pub mod v1;
pub mod v1_1;

pub use v1::V1Cipher;
pub use v1_1::V1_1Cipher;

use crate::errors::Result;
use crate::version::Version;

/// A single version's encrypt/decrypt transform, keyed by a passphrase.
///
/// Implementations are stateless: every call is a pure function of its
/// arguments (plus fresh randomness where the version's scheme calls for
/// it), so a single instance may be shared across threads freely.
pub trait Cipher {
    /// Encrypt `plaintext` into this version's raw payload layout.
    fn encrypt(&self, plaintext: &[u8], passphrase: &str) -> Result<Vec<u8>>;

    /// Recover the plaintext from this version's raw payload layout.
    fn decrypt(&self, raw: &[u8], passphrase: &str) -> Result<Vec<u8>>;
}

/// Resolve the cipher bound to a registered version.
///
/// The match is exhaustive over [`Version`], so a token can only ever be
/// processed by the cipher its tag names — there is no path from a `1.0`
/// token to the `1.1` cipher or back.
pub fn cipher_for(version: Version) -> &'static dyn Cipher {
    match version {
        Version::V1_0 => &V1Cipher,
        Version::V1_1 => &V1_1Cipher,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_version_has_a_cipher_roundtrip() {
        for version in Version::ALL {
            let cipher = cipher_for(version);
            let raw = cipher.encrypt(b"some secret", "pass phrase").unwrap();
            let plaintext = cipher.decrypt(&raw, "pass phrase").unwrap();
            assert_eq!(plaintext, b"some secret", "version {version}");
        }
    }
}
