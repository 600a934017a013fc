//! The L2 pool transaction record and its normalization step.
//!
//! A transfer binds a sender index to exactly one recipient representation:
//! an internal index, an external chain address, or a compressed public key.
//! Normalization enforces that invariant, checks the declared transaction
//! type against the populated fields, and derives the transaction id.

use std::fmt;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::HezError;
use crate::keys::{BjjPubKey, CompressedSignature};

/// Type prefix byte for L2 transaction ids.
const TX_ID_PREFIX_L2: u8 = 0x02;

/// The rollup's internal compact identifier for an (account, token) pair.
///
/// Zero is the "no index resolved yet" sentinel: a transfer with a zero
/// `to_idx` pays to a recipient whose index the coordinator will create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Idx(pub u64);

impl fmt::Display for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Network-wide token identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TokenId(pub u32);

/// Per-account transaction counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Nonce(pub u64);

/// 8-bit code indexing the network's fixed fee table.
///
/// The selector is passed through uninterpreted; values outside the
/// recognized table are the coordinator's problem, not ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeeSelector(pub u8);

/// L2 transaction kinds understood by the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxType {
    Transfer,
    TransferToEthAddr,
    TransferToBjj,
    Exit,
}

impl TxType {
    /// Wire spelling used by the public API.
    pub fn as_str(&self) -> &'static str {
        match self {
            TxType::Transfer => "Transfer",
            TxType::TransferToEthAddr => "TransferToEthAddr",
            TxType::TransferToBjj => "TransferToBJJ",
            TxType::Exit => "Exit",
        }
    }
}

/// L2 transaction id: one type-prefix byte followed by 31 digest bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxId(pub [u8; 32]);

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// A pool L2 transaction.
///
/// Built by the transfer pipeline, normalized once, signed once, then
/// projected into the wire DTO and discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct L2Tx {
    pub from_idx: Idx,
    pub to_idx: Idx,
    pub to_eth_addr: Option<Address>,
    pub to_bjj: Option<BjjPubKey>,
    pub token_id: TokenId,
    pub amount: U256,
    pub fee: FeeSelector,
    pub nonce: Nonce,
    pub tx_type: TxType,
    pub tx_id: Option<TxId>,
    pub signature: Option<CompressedSignature>,
}

impl L2Tx {
    /// Checks that at most one recipient representation is populated and
    /// that the declared type matches the populated fields.
    ///
    /// [`SigningScheme`](crate::signing::SigningScheme) implementations run
    /// this before hashing; the error string describes what is wrong with
    /// the record.
    pub fn structure_check(&self) -> Result<(), String> {
        let recipients = usize::from(self.to_idx.0 > 0)
            + usize::from(self.to_eth_addr.is_some())
            + usize::from(self.to_bjj.is_some());
        if recipients > 1 {
            return Err(format!(
                "more than one recipient representation populated (to_idx={}, eth_addr={}, bjj={})",
                self.to_idx,
                self.to_eth_addr.is_some(),
                self.to_bjj.is_some()
            ));
        }

        let consistent = match self.tx_type {
            TxType::Transfer => self.to_eth_addr.is_none() && self.to_bjj.is_none(),
            TxType::TransferToEthAddr => self.to_eth_addr.is_some() && self.to_idx.0 == 0,
            TxType::TransferToBjj => self.to_bjj.is_some() && self.to_idx.0 == 0,
            TxType::Exit => {
                self.to_idx.0 == 1 && self.to_eth_addr.is_none() && self.to_bjj.is_none()
            }
        };
        if !consistent {
            return Err(format!(
                "tx type {} does not match populated recipient fields",
                self.tx_type.as_str()
            ));
        }

        Ok(())
    }

    /// Normalizes the record: validates the field combination and derives
    /// the transaction id. Performed once, before hashing and signing.
    pub fn normalize(mut self) -> Result<Self, HezError> {
        self.structure_check().map_err(HezError::TransactionBuild)?;
        self.tx_id = Some(self.compute_tx_id());
        Ok(self)
    }

    /// Derives the L2 transaction id: the `0x02` type prefix followed by
    /// the first 31 bytes of a SHA-256 over the binding fields.
    fn compute_tx_id(&self) -> TxId {
        let mut hasher = Sha256::new();
        hasher.update(self.from_idx.0.to_be_bytes());
        hasher.update(self.token_id.0.to_be_bytes());
        hasher.update(self.amount.to_be_bytes::<32>());
        hasher.update(self.nonce.0.to_be_bytes());
        hasher.update([self.fee.0]);
        let digest = hasher.finalize();

        let mut id = [0u8; 32];
        id[0] = TX_ID_PREFIX_L2;
        id[1..].copy_from_slice(&digest[..31]);
        TxId(id)
    }
}
