/*
    crypto.rs - Private-entry content encryption

    AES-256-GCM with a key derived from the author's wallet address via
    blake3's KDF under a fixed domain context. A nonce is generated per
    encryption and prepended to the ciphertext; the whole envelope is
    hex-encoded for transport through content-addressed storage.

    Decryption under any other address fails authentication.
*/

use super::errors::{ContentError, ContentResult};
use crate::core_store::model::Address;
use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;
use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};

/// Domain separation context for key derivation
const KDF_CONTEXT: &str = "soulchain 2024-01-01 entry content encryption";

/// Nonce length for AES-GCM
const NONCE_LEN: usize = 12;

/// Encrypts and decrypts entry content for one author
pub struct EntryCipher {
    cipher: Aes256Gcm,
}

impl EntryCipher {
    /// Derive the cipher for an author address
    pub fn for_address(address: &Address) -> Self {
        let key_bytes = blake3::derive_key(KDF_CONTEXT, address.as_str().as_bytes());
        let key = Key::<Aes256Gcm>::from_slice(&key_bytes);
        EntryCipher {
            cipher: Aes256Gcm::new(key),
        }
    }

    /// Encrypt plaintext; returns a hex-encoded nonce||ciphertext envelope
    pub fn encrypt(&self, plaintext: &str) -> ContentResult<String> {
        let mut nonce_bytes = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|e| ContentError::Encryption(e.to_string()))?;

        let mut envelope = nonce_bytes.to_vec();
        envelope.extend_from_slice(&ciphertext);
        Ok(hex::encode(envelope))
    }

    /// Decrypt a hex-encoded envelope produced by encrypt()
    pub fn decrypt(&self, envelope: &str) -> ContentResult<String> {
        let envelope =
            hex::decode(envelope).map_err(|e| ContentError::Corrupt(e.to_string()))?;
        if envelope.len() < NONCE_LEN {
            return Err(ContentError::Corrupt("envelope too short".to_string()));
        }

        let (nonce_bytes, ciphertext) = envelope.split_at(NONCE_LEN);
        let nonce = Nonce::from_slice(nonce_bytes);

        let plaintext = self
            .cipher
            .decrypt(nonce, ciphertext)
            .map_err(|e| ContentError::Decryption(e.to_string()))?;
        String::from_utf8(plaintext)
            .map_err(|e| ContentError::Corrupt(format!("not valid UTF-8: {}", e)))
    }
}
