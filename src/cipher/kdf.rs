//! Passphrase-based key derivation for the historical cipher schemes.
//!
//! Both derivations are fixed by the wire format and exist to keep old
//! tokens decryptable:
//! - PBKDF1 over MD5 (PKCS #5 v1.5) for the legacy DES scheme (`1.0`)
//! - the PKCS #12 derivation (RFC 7292, appendix B.2) over SHA-256 for the
//!   AES scheme (`1.1`)
//!
//! Neither is a recommendation; they are what the existing ciphertexts
//! were produced with.

use md5::{Digest, Md5};
use sha2::Sha256;

/// Iteration count for both derivations, fixed by the wire format.
const KDF_ITERATIONS: u32 = 1000;

/// PKCS #12 diversifier for key material.
pub const ID_KEY: u8 = 1;
/// PKCS #12 diversifier for the IV.
pub const ID_IV: u8 = 2;

/// SHA-256 input block size, the `v` parameter of the PKCS #12 scheme.
const PKCS12_BLOCK: usize = 64;

/// Derive 16 bytes of key material with PBKDF1-MD5.
///
/// `T1 = MD5(passphrase || salt)`, `Ti = MD5(Ti-1)`, 1000 rounds. The first
/// 8 bytes are the DES key, the next 8 the IV.
pub fn pbkdf1_md5(passphrase: &str, salt: &[u8]) -> [u8; 16] {
    let mut hasher = Md5::new();
    hasher.update(passphrase.as_bytes());
    hasher.update(salt);
    let mut digest = hasher.finalize();
    for _ in 1..KDF_ITERATIONS {
        digest = Md5::digest(digest);
    }

    digest.into()
}

/// Derive 16 bytes of key material (`id` = [`ID_KEY`]) or IV (`id` =
/// [`ID_IV`]) with the PKCS #12 scheme over SHA-256.
///
/// The passphrase enters the derivation as a BMPString: UTF-16BE code units
/// followed by a two-byte zero terminator. A single SHA-256 output already
/// covers the 16 bytes we need, so the multi-block expansion step of the
/// standard never runs here.
pub fn pkcs12_sha256(passphrase: &str, salt: &[u8], id: u8) -> [u8; 16] {
    let password = bmp_string(passphrase);
    let diversifier = [id; PKCS12_BLOCK];
    let salt_blocks = repeat_to_block_multiple(salt);
    let password_blocks = repeat_to_block_multiple(&password);

    let mut hasher = Sha256::new();
    hasher.update(diversifier);
    hasher.update(&salt_blocks);
    hasher.update(&password_blocks);
    let mut digest = hasher.finalize();
    for _ in 1..KDF_ITERATIONS {
        digest = Sha256::digest(digest);
    }

    let mut out = [0u8; 16];
    out.copy_from_slice(&digest[..16]);
    out
}

/// Encode a passphrase as a PKCS #12 BMPString (UTF-16BE, zero-terminated).
fn bmp_string(passphrase: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity((passphrase.len() + 1) * 2);
    for unit in passphrase.encode_utf16() {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    out.extend_from_slice(&[0, 0]);
    out
}

/// Repeat `input` until it fills a whole number of 64-byte blocks,
/// truncating the final copy. Empty input stays empty.
fn repeat_to_block_multiple(input: &[u8]) -> Vec<u8> {
    if input.is_empty() {
        return Vec::new();
    }
    let target = (input.len() + PKCS12_BLOCK - 1) / PKCS12_BLOCK * PKCS12_BLOCK;
    let mut out = Vec::with_capacity(target);
    while out.len() < target {
        let take = input.len().min(target - out.len());
        out.extend_from_slice(&input[..take]);
    }
    out
}
