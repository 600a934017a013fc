//! Common rollup transaction primitives for the Hermez-style L2 network.
//!
//! This crate is the client-side counterpart of the network's common
//! transaction library: the compact integer index space, the canonical
//! `hez:`-prefixed string encodings (with their checksum schemes), the pool
//! transaction record, and the hash-and-sign backend that binds a
//! transaction to a chain id before signing with the rollup's native
//! key pair.

pub mod encoding;
pub mod error;
pub mod keys;
pub mod signing;
pub mod tx;

// Re-export key public types for ergonomic imports.
pub use encoding::{bjj_from_hez, bjj_to_hez, eth_addr_to_hez, idx_from_hez, idx_to_hez};
pub use error::HezError;
pub use keys::{BjjPubKey, CompressedSignature, PrivateKey};
pub use signing::{NativeScheme, SigningScheme, TxHash};
pub use tx::{FeeSelector, Idx, L2Tx, Nonce, TokenId, TxId, TxType};
