//! AES-128-CBC cipher, version tag `1.1`. The current default.
//!
//! Layout of the raw payload:
//!   [ 16-byte random salt | AES-128-CBC ciphertext, PKCS #7 padded ]
//!
//! Key and IV both come from the PKCS #12 derivation over SHA-256, keyed by
//! the passphrase and the salt (diversifier 1 for the key, 2 for the IV).
//! The salt is drawn fresh on every call, so encrypting the same value twice
//! yields two different payloads that both decrypt back.

use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::RngCore;

use super::kdf::{pkcs12_sha256, ID_IV, ID_KEY};
use super::Cipher;
use crate::errors::{PropsealError, Result};

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// Salt prefix length in bytes.
const SALT_LEN: usize = 16;

/// AES block length in bytes.
const BLOCK_LEN: usize = 16;

/// The `1.1` cipher.
pub struct V1_1Cipher;

impl Cipher for V1_1Cipher {
    fn encrypt(&self, plaintext: &[u8], passphrase: &str) -> Result<Vec<u8>> {
        let mut salt = [0u8; SALT_LEN];
        rand::rng().fill_bytes(&mut salt);

        let key = pkcs12_sha256(passphrase, &salt, ID_KEY);
        let iv = pkcs12_sha256(passphrase, &salt, ID_IV);

        let ciphertext =
            Aes128CbcEnc::new(&key.into(), &iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext);

        let mut out = Vec::with_capacity(SALT_LEN + ciphertext.len());
        out.extend_from_slice(&salt);
        out.extend_from_slice(&ciphertext);
        Ok(out)
    }

    fn decrypt(&self, raw: &[u8], passphrase: &str) -> Result<Vec<u8>> {
        if raw.len() < SALT_LEN + BLOCK_LEN {
            return Err(PropsealError::Decryption(format!(
                "version 1.1 payload is {} bytes, expected at least {}",
                raw.len(),
                SALT_LEN + BLOCK_LEN
            )));
        }

        let (salt, ciphertext) = raw.split_at(SALT_LEN);
        if ciphertext.len() % BLOCK_LEN != 0 {
            return Err(PropsealError::Decryption(format!(
                "version 1.1 ciphertext is {} bytes, not a multiple of the {BLOCK_LEN} byte block",
                ciphertext.len()
            )));
        }

        let key = pkcs12_sha256(passphrase, salt, ID_KEY);
        let iv = pkcs12_sha256(passphrase, salt, ID_IV);

        Aes128CbcDec::new(&key.into(), &iv.into())
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| PropsealError::Decryption("bad block padding".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let raw = V1_1Cipher.encrypt(b"test", "test1234").unwrap();
        let plaintext = V1_1Cipher.decrypt(&raw, "test1234").unwrap();
        assert_eq!(plaintext, b"test");
    }

    #[test]
    fn encryption_is_randomized() {
        let first = V1_1Cipher.encrypt(b"test", "test1234").unwrap();
        let second = V1_1Cipher.encrypt(b"test", "test1234").unwrap();
        assert_ne!(first, second, "fresh salt must vary the payload");

        assert_eq!(V1_1Cipher.decrypt(&first, "test1234").unwrap(), b"test");
        assert_eq!(V1_1Cipher.decrypt(&second, "test1234").unwrap(), b"test");
    }

    #[test]
    fn one_block_plaintext_yields_thirty_two_byte_payload() {
        // 16-byte salt plus one padded AES block.
        let raw = V1_1Cipher.encrypt(b"test", "test1234").unwrap();
        assert_eq!(raw.len(), 32);
    }

    #[test]
    fn short_payload_is_rejected() {
        let err = V1_1Cipher.decrypt(&[0u8; 31], "test1234").unwrap_err();
        assert!(matches!(err, PropsealError::Decryption(_)));
    }

    #[test]
    fn misaligned_ciphertext_is_rejected() {
        let err = V1_1Cipher.decrypt(&[0u8; 40], "test1234").unwrap_err();
        assert!(matches!(err, PropsealError::Decryption(_)));
    }
}
