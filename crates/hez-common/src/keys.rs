//! Key material for the rollup's native signature scheme.
//!
//! Public keys travel compressed (32 bytes) and signatures travel in a
//! fixed 64-byte canonical encoding. The string forms live in
//! [`crate::encoding`]; this module only owns the byte-level types and the
//! signing key itself.

use std::fmt;

use ed25519_dalek::{Signer, SigningKey};
use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// A compressed public key on the rollup's native curve.
///
/// The all-zero key is the network's "no key" sentinel, which is why
/// `Default` is derived: the wire mapper renders it when a transaction has
/// no key-addressed recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BjjPubKey(pub [u8; 32]);

impl BjjPubKey {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// A compressed signature: 64 bytes, canonical fixed-size encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressedSignature(pub [u8; 64]);

impl CompressedSignature {
    pub fn to_bytes(self) -> [u8; 64] {
        self.0
    }
}

impl fmt::Display for CompressedSignature {
    /// Canonical string form: lowercase hex, no prefix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// The wallet's private signing key.
pub struct PrivateKey {
    key: SigningKey,
}

impl PrivateKey {
    /// Builds a private key from its 32-byte seed.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        // Work on a local copy so the caller's buffer stays untouched and
        // ours is wiped once the key object owns the material.
        let mut seed = *bytes;
        let key = SigningKey::from_bytes(&seed);
        seed.zeroize();
        Self { key }
    }

    /// Generates a fresh random key.
    pub fn generate<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self {
            key: SigningKey::generate(rng),
        }
    }

    /// The compressed public key for this private key.
    pub fn public(&self) -> BjjPubKey {
        BjjPubKey(self.key.verifying_key().to_bytes())
    }

    /// Signs a message (the 32-byte transaction hash in practice) and
    /// compresses the signature to its 64-byte canonical form.
    pub fn sign(&self, message: &[u8]) -> CompressedSignature {
        CompressedSignature(self.key.sign(message).to_bytes())
    }
}

impl Clone for PrivateKey {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
        }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never leak key material through Debug output.
        f.debug_struct("PrivateKey").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SEED: [u8; 32] = [7u8; 32];

    #[test]
    fn public_key_is_deterministic() {
        let a = PrivateKey::from_bytes(&TEST_SEED);
        let b = PrivateKey::from_bytes(&TEST_SEED);
        assert_eq!(a.public(), b.public());
    }

    #[test]
    fn signing_is_deterministic() {
        let key = PrivateKey::from_bytes(&TEST_SEED);
        let sig1 = key.sign(b"hello rollup");
        let sig2 = key.sign(b"hello rollup");
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn different_messages_different_signatures() {
        let key = PrivateKey::from_bytes(&TEST_SEED);
        assert_ne!(key.sign(b"a"), key.sign(b"b"));
    }

    #[test]
    fn signature_display_is_128_hex_chars() {
        let key = PrivateKey::from_bytes(&TEST_SEED);
        let sig = key.sign(b"msg").to_string();
        assert_eq!(sig.len(), 128);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_keys_differ() {
        let mut rng = rand::rngs::OsRng;
        let a = PrivateKey::generate(&mut rng);
        let b = PrivateKey::generate(&mut rng);
        assert_ne!(a.public(), b.public());
    }

    #[test]
    fn debug_does_not_leak_material() {
        let key = PrivateKey::from_bytes(&TEST_SEED);
        let debug = format!("{key:?}");
        assert!(!debug.contains("7, 7"));
    }
}
