//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use clap::Parser;
use zeroize::Zeroizing;

use crate::errors::{PropsealError, Result};
use crate::version::Version;

/// Propseal CLI: versioned encryption for secrets in plain-text config files.
#[derive(Parser)]
#[command(
    name = "propseal",
    about = "Encrypt config secrets into versioned tokens, and back",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt a plaintext into a token (printed to stdout)
    Encrypt {
        /// Plaintext to encrypt
        plaintext: String,

        /// Passphrase (omit for interactive prompt)
        #[arg(short = 'k', long)]
        passphrase: Option<String>,

        /// Cipher version tag to encrypt with (default: newest; see `propseal versions`)
        #[arg(short = 'v', long)]
        cipher_version: Option<String>,
    },

    /// Decrypt a token and print the plaintext
    Decrypt {
        /// Token to decrypt
        token: String,

        /// Passphrase (omit for interactive prompt)
        #[arg(short = 'k', long)]
        passphrase: Option<String>,

        /// Read the passphrase from the first line of a file (mode 400 on Unix)
        #[arg(long, conflicts_with = "passphrase")]
        passphrase_file: Option<PathBuf>,
    },

    /// List registered cipher versions
    Versions,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the passphrase for a command, trying in order:
/// 1. The `--passphrase` flag
/// 2. `PROPSEAL_PASSPHRASE` env var (CI/CD)
/// 3. Interactive hidden prompt
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory on drop.
pub fn resolve_passphrase(flag: Option<&str>) -> Result<Zeroizing<String>> {
    if let Some(passphrase) = flag {
        return Ok(Zeroizing::new(passphrase.to_string()));
    }

    if let Ok(passphrase) = std::env::var("PROPSEAL_PASSPHRASE") {
        if !passphrase.is_empty() {
            return Ok(Zeroizing::new(passphrase));
        }
    }

    let passphrase = dialoguer::Password::new()
        .with_prompt("Passphrase")
        .interact()
        .map_err(|e| PropsealError::CommandFailed(format!("passphrase prompt: {e}")))?;
    Ok(Zeroizing::new(passphrase))
}

/// Read a passphrase from the first line of `path`.
///
/// On Unix the file must be readable by its owner and nobody else (mode
/// 400). Anything looser is refused before the file is even opened.
pub fn read_passphrase_file(path: &Path) -> Result<Zeroizing<String>> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mode = std::fs::metadata(path)?.permissions().mode() & 0o7777;
        if mode != 0o400 {
            return Err(PropsealError::CommandFailed(format!(
                "passphrase file must have mode 400 (owner read only), found {mode:o}"
            )));
        }
    }

    let contents = Zeroizing::new(std::fs::read_to_string(path)?);
    let passphrase = contents.lines().next().unwrap_or("").trim_end();
    if passphrase.is_empty() {
        return Err(PropsealError::CommandFailed(
            "passphrase file is empty".to_string(),
        ));
    }
    Ok(Zeroizing::new(passphrase.to_string()))
}

/// Comma-separated list of registered version tags, oldest first.
pub fn registered_tags() -> String {
    Version::ALL
        .iter()
        .map(|v| v.as_tag())
        .collect::<Vec<_>>()
        .join(", ")
}
