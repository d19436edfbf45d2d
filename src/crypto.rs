//! The public encrypt/decrypt surface.
//!
//! `encrypt` turns a plaintext string into a versioned token; `decrypt`
//! turns any token from any registered version back into the plaintext.
//! The token's own tag decides which cipher decrypts it; the current
//! encryption default never participates in that choice.

use crate::cipher::cipher_for;
use crate::envelope;
use crate::errors::{PropsealError, Result};
use crate::version::Version;

/// Encrypt `plaintext` under the newest registered version.
pub fn encrypt(plaintext: &str, passphrase: &str) -> Result<String> {
    encrypt_with_version(plaintext, passphrase, Version::latest())
}

/// Encrypt `plaintext` under an explicitly chosen version.
///
/// Pinning an old version is only useful for producing tokens a not yet
/// upgraded consumer can read; new tokens should use the default.
pub fn encrypt_with_version(
    plaintext: &str,
    passphrase: &str,
    version: Version,
) -> Result<String> {
    if plaintext.is_empty() {
        return Err(PropsealError::IllegalArgument("plaintext must not be empty"));
    }
    if passphrase.is_empty() {
        return Err(PropsealError::IllegalArgument(
            "passphrase must not be empty",
        ));
    }

    let raw = cipher_for(version).encrypt(plaintext.as_bytes(), passphrase)?;
    envelope::encode(version, &raw)
}

/// Decrypt a token produced by any registered version.
///
/// Failures keep their innermost kind: a token that will not parse is
/// `Format`, a well-formed tag this build does not know is
/// `UnsupportedVersion`, and a payload the resolved cipher cannot open is
/// `Decryption`. Nothing is retried or downgraded on the way out.
pub fn decrypt(token: &str, passphrase: &str) -> Result<String> {
    if passphrase.is_empty() {
        return Err(PropsealError::IllegalArgument(
            "passphrase must not be empty",
        ));
    }

    let (tag, raw) = envelope::decode(token)?;
    let version = Version::from_tag(&tag).ok_or(PropsealError::UnsupportedVersion(tag))?;
    let plaintext = cipher_for(version).decrypt(&raw, passphrase)?;

    String::from_utf8(plaintext)
        .map_err(|_| PropsealError::Decryption("recovered bytes are not valid UTF-8".into()))
}
