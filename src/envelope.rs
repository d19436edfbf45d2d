//! The self-describing token format.
//!
//! A token is two text-safe layers around the raw cipher bytes:
//!
//! ```text
//! token := base64( {"ver":"<tag>","val":"<base64(raw)>"} )
//! ```
//!
//! The inner base64 keeps binary cipher output safe inside a JSON record;
//! the outer base64 turns the whole record into a single opaque ASCII value
//! with no quotes, braces, or control characters, so it can sit in a
//! plain-text property file untouched. Both layers are deliberate and both
//! are required to read a token back.
//!
//! Decoding stops at the version *tag*; it does not resolve the tag against
//! the registry. That split lets the caller distinguish a malformed token
//! from a well-formed token of a version this build does not carry.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::errors::{PropsealError, Result};
use crate::version::{is_version_syntax, Version};

/// The JSON record between the two base64 layers. Field order matters only
/// cosmetically, but it matches what existing tokens look like.
#[derive(Debug, Serialize, Deserialize)]
struct TokenRecord {
    /// Version tag, e.g. `"1.0"`.
    ver: String,
    /// Raw cipher bytes, base64-encoded.
    val: String,
}

/// Wrap raw cipher bytes and the producing version into a token.
pub fn encode(version: Version, raw: &[u8]) -> Result<String> {
    let record = TokenRecord {
        ver: version.as_tag().to_string(),
        val: BASE64.encode(raw),
    };
    let json = serde_json::to_string(&record)
        .map_err(|e| PropsealError::Format(format!("token record: {e}")))?;
    Ok(BASE64.encode(json))
}

/// Unwrap a token into its version tag and raw cipher bytes.
///
/// Any decoding failure (outer base64, JSON parse, missing fields, inner
/// base64, or a tag that is not even shaped like a version) is a
/// [`PropsealError::Format`]. Resolving the tag against the registry is the
/// caller's job.
pub fn decode(token: &str) -> Result<(String, Vec<u8>)> {
    let json_bytes = BASE64
        .decode(token)
        .map_err(|e| PropsealError::Format(format!("outer encoding: {e}")))?;

    let record: TokenRecord = serde_json::from_slice(&json_bytes)
        .map_err(|e| PropsealError::Format(format!("token record: {e}")))?;

    if !is_version_syntax(&record.ver) {
        return Err(PropsealError::Format(format!(
            "\"{}\" is not a version tag",
            record.ver
        )));
    }

    let raw = BASE64
        .decode(&record.val)
        .map_err(|e| PropsealError::Format(format!("payload encoding: {e}")))?;

    Ok((record.ver, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_roundtrip() {
        let token = encode(Version::V1_1, b"\x00\x01binary\xff").unwrap();
        assert!(token.is_ascii());

        let (tag, raw) = decode(&token).unwrap();
        assert_eq!(tag, "1.1");
        assert_eq!(raw, b"\x00\x01binary\xff");
    }

    #[test]
    fn token_is_a_single_opaque_property_value() {
        let token = encode(Version::V1_0, &[0u8; 64]).unwrap();
        assert!(!token.contains(|c: char| c.is_whitespace() || c == '"' || c == '{'));
    }

    #[test]
    fn decode_rejects_invalid_outer_encoding() {
        let err = decode("not*base64*at*all").unwrap_err();
        assert!(matches!(err, PropsealError::Format(_)));
    }

    #[test]
    fn decode_rejects_non_json_contents() {
        let token = BASE64.encode("just some text");
        let err = decode(&token).unwrap_err();
        assert!(matches!(err, PropsealError::Format(_)));
    }

    #[test]
    fn decode_rejects_missing_fields() {
        let token = BASE64.encode(r#"{"ver":"1.0"}"#);
        let err = decode(&token).unwrap_err();
        assert!(matches!(err, PropsealError::Format(_)));
    }

    #[test]
    fn decode_rejects_malformed_version_tags() {
        for tag in ["", "1", "one.zero", "1.0.0"] {
            let token = BASE64.encode(format!(r#"{{"ver":"{tag}","val":"AAAA"}}"#));
            let err = decode(&token).unwrap_err();
            assert!(matches!(err, PropsealError::Format(_)), "tag {tag:?}");
        }
    }

    #[test]
    fn decode_passes_through_unregistered_but_well_formed_tags() {
        // Registry resolution is not this layer's job.
        let token = BASE64.encode(r#"{"ver":"9.9","val":"AAAA"}"#);
        let (tag, _raw) = decode(&token).unwrap();
        assert_eq!(tag, "9.9");
    }

    #[test]
    fn decode_rejects_bad_payload_encoding() {
        let token = BASE64.encode(r#"{"ver":"1.0","val":"///not base64"}"#);
        let err = decode(&token).unwrap_err();
        assert!(matches!(err, PropsealError::Format(_)));
    }
}
