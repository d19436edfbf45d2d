//! `propseal decrypt` — decrypt a token and print the plaintext.

use std::path::Path;

use crate::cli::{read_passphrase_file, resolve_passphrase};
use crate::errors::Result;

/// Execute the `decrypt` command.
pub fn execute(
    token: &str,
    passphrase: Option<&str>,
    passphrase_file: Option<&Path>,
) -> Result<()> {
    let passphrase = match passphrase_file {
        Some(path) => read_passphrase_file(path)?,
        None => resolve_passphrase(passphrase)?,
    };

    let plaintext = crate::crypto::decrypt(token, &passphrase)?;
    println!("{plaintext}");
    Ok(())
}
