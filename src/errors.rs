use thiserror::Error;

/// All errors that can occur in Propseal.
///
/// Messages only carry structural facts: version tags, byte lengths, error
/// kinds. Passphrases, plaintexts, and recovered values are never formatted
/// into a message.
#[derive(Debug, Error)]
pub enum PropsealError {
    // --- Argument errors ---
    #[error("Invalid argument: {0}")]
    IllegalArgument(&'static str),

    // --- Token format errors ---
    #[error("Malformed token: {0}")]
    Format(String),

    /// The token carries a well-formed version tag that is not registered in
    /// this build (e.g. a token written by a newer release).
    #[error("Unsupported crypto version \"{0}\"")]
    UnsupportedVersion(String),

    // --- Cipher errors ---
    #[error("Decryption failed: {0}")]
    Decryption(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Propseal results.
pub type Result<T> = std::result::Result<T, PropsealError>;
