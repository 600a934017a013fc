//! Wire-format projection of a signed pool transaction.
//!
//! Every index, address, and key field is rendered through the canonical
//! `hez:` encodings; amounts travel as base-10 strings so arbitrary
//! precision survives transport.

use serde::{Deserialize, Serialize};

use hez_common::{bjj_to_hez, eth_addr_to_hez, idx_to_hez, L2Tx};

use crate::account::Token;

/// Placeholder recipient index when no internal index was resolved: the
/// coordinator interprets it as "create the index from the address".
const UNRESOLVED_TO_IDX: &str = "hez:ETH:0";

/// The transaction request as the public API expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiTx {
    #[serde(rename = "TxID")]
    pub tx_id: String,
    #[serde(rename = "Type")]
    pub tx_type: String,
    #[serde(rename = "TokenID")]
    pub token_id: u32,
    #[serde(rename = "FromIdx")]
    pub from_idx: String,
    #[serde(rename = "ToIdx")]
    pub to_idx: String,
    #[serde(rename = "ToEthAddr")]
    pub to_eth_addr: String,
    #[serde(rename = "ToBJJ")]
    pub to_bjj: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "Fee")]
    pub fee: u64,
    #[serde(rename = "Nonce")]
    pub nonce: u64,
    #[serde(rename = "Signature")]
    pub signature: String,
}

impl ApiTx {
    /// Projects a signed pool transaction into the wire shape.
    pub fn from_signed(tx: &L2Tx, token: &Token) -> Self {
        let to_idx = if tx.to_idx.0 > 0 {
            idx_to_hez(tx.to_idx, &token.symbol)
        } else {
            UNRESOLVED_TO_IDX.to_string()
        };
        let to_eth_addr = tx
            .to_eth_addr
            .as_ref()
            .map(eth_addr_to_hez)
            .unwrap_or_default();
        // The key field is always rendered; an absent key encodes as the
        // all-zero sentinel key.
        let to_bjj = bjj_to_hez(&tx.to_bjj.unwrap_or_default());

        Self {
            tx_id: tx.tx_id.map(|id| id.to_string()).unwrap_or_default(),
            tx_type: tx.tx_type.as_str().to_string(),
            token_id: token.id,
            from_idx: idx_to_hez(tx.from_idx, &token.symbol),
            to_idx,
            to_eth_addr,
            to_bjj,
            amount: tx.amount.to_string(),
            fee: u64::from(tx.fee.0),
            nonce: tx.nonce.0,
            signature: tx.signature.map(|s| s.to_string()).unwrap_or_default(),
        }
    }
}
