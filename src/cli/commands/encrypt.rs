//! `propseal encrypt` — encrypt a plaintext and print the token.

use crate::cli::{registered_tags, resolve_passphrase};
use crate::errors::{PropsealError, Result};
use crate::version::Version;

/// Execute the `encrypt` command.
pub fn execute(
    plaintext: &str,
    passphrase: Option<&str>,
    cipher_version: Option<&str>,
) -> Result<()> {
    let version = match cipher_version {
        Some(tag) => Version::from_tag(tag).ok_or_else(|| {
            PropsealError::CommandFailed(format!(
                "unknown cipher version \"{tag}\" — registered: {}",
                registered_tags()
            ))
        })?,
        None => Version::latest(),
    };

    let passphrase = resolve_passphrase(passphrase)?;
    let token = crate::crypto::encrypt_with_version(plaintext, &passphrase, version)?;

    // Bare token on stdout so it can be pasted into a property file.
    println!("{token}");
    Ok(())
}
