//! Hash-and-sign backend for pool transactions.
//!
//! The network's signing primitive is a black box with a narrow contract:
//! deterministic, collision-resistant, and bound to the chain id. The
//! [`SigningScheme`] trait is that seam; the transfer pipeline never looks
//! behind it, which lets tests drive the pipeline with a fixed-vector stub.

use sha3::{Digest, Keccak256};

use crate::error::HezError;
use crate::keys::{CompressedSignature, PrivateKey};
use crate::tx::L2Tx;

/// Domain tag mixed into every transaction hash.
const HASH_DOMAIN: &[u8] = b"hez-l2-tx-v1";

/// A 32-byte domain-separated transaction hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxHash(pub [u8; 32]);

impl TxHash {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// The hash-and-sign seam between the pipeline and the crypto backend.
pub trait SigningScheme {
    /// Computes the domain-separated hash of a normalized transaction,
    /// bound to the given chain id.
    ///
    /// Fails with [`HezError::HashComputationFailed`] if the record is
    /// structurally invalid.
    fn hash_to_sign(&self, tx: &L2Tx, chain_id: u16) -> Result<TxHash, HezError>;

    /// Signs a transaction hash, producing the compressed signature.
    fn sign(&self, key: &PrivateKey, hash: &TxHash) -> Result<CompressedSignature, HezError>;
}

/// The concrete backend: a Keccak-256 transcript over the transaction's
/// canonical field layout with the chain id mixed in, signed with the
/// rollup's native key pair (deterministic Ed25519, compressed to 64 bytes).
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeScheme;

impl SigningScheme for NativeScheme {
    fn hash_to_sign(&self, tx: &L2Tx, chain_id: u16) -> Result<TxHash, HezError> {
        tx.structure_check().map_err(HezError::HashComputationFailed)?;

        // Canonical field layout. Absent recipient representations hash as
        // their zero encodings so the layout stays fixed-width.
        let mut hasher = Keccak256::new();
        hasher.update(HASH_DOMAIN);
        hasher.update(chain_id.to_be_bytes());
        hasher.update(tx.from_idx.0.to_be_bytes());
        hasher.update(tx.to_idx.0.to_be_bytes());
        hasher.update(tx.to_eth_addr.unwrap_or_default().as_slice());
        hasher.update(tx.to_bjj.unwrap_or_default().as_bytes());
        hasher.update(tx.token_id.0.to_be_bytes());
        hasher.update(tx.amount.to_be_bytes::<32>());
        hasher.update([tx.fee.0]);
        hasher.update(tx.nonce.0.to_be_bytes());
        hasher.update(tx.tx_type.as_str().as_bytes());

        Ok(TxHash(hasher.finalize().into()))
    }

    fn sign(&self, key: &PrivateKey, hash: &TxHash) -> Result<CompressedSignature, HezError> {
        Ok(key.sign(hash.as_bytes()))
    }
}
