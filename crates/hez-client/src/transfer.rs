//! The transfer pipeline: resolve, assemble, sign, map.
//!
//! One call builds one request. Nothing is cached or retried here; a failed
//! resolution or signing step goes straight back to the caller with the
//! account and token context attached.

use alloy_primitives::U256;

use hez_common::{FeeSelector, L2Tx, NativeScheme, SigningScheme, TxType};

use crate::account::{resolve_recipient, resolve_sender, AccountListing, Token, Wallet};
use crate::api::ApiTx;
use crate::error::ClientError;

/// Builds a canonically encoded, signed transfer request.
///
/// `item_to_transfer` is the token symbol, matched case-insensitively
/// against both listings. The fee selector is passed through to the network
/// uninterpreted, and `chain_id` binds the signature to one deployment.
pub fn marshal_transaction(
    item_to_transfer: &str,
    sender: &AccountListing,
    recipient: &AccountListing,
    wallet: &Wallet,
    amount: U256,
    fee_selector: u8,
    chain_id: u16,
) -> Result<ApiTx, ClientError> {
    marshal_transaction_with(
        &NativeScheme,
        item_to_transfer,
        sender,
        recipient,
        wallet,
        amount,
        fee_selector,
        chain_id,
    )
}

/// Same pipeline with an injected hash-and-sign backend.
#[allow(clippy::too_many_arguments)]
pub fn marshal_transaction_with(
    scheme: &dyn SigningScheme,
    item_to_transfer: &str,
    sender: &AccountListing,
    recipient: &AccountListing,
    wallet: &Wallet,
    amount: U256,
    fee_selector: u8,
    chain_id: u16,
) -> Result<ApiTx, ClientError> {
    // Resolve both legs before touching any crypto.
    let resolved =
        resolve_sender(sender, item_to_transfer)?.ok_or_else(|| ClientError::NoAccountForToken {
            wallet: wallet.hez_bjj_address.clone(),
            symbol: item_to_transfer.to_string(),
        })?;
    let to_idx = resolve_recipient(recipient, item_to_transfer)?;

    // Assemble. This transfer flow addresses the recipient by index only;
    // the other two representations stay empty.
    let tx = L2Tx {
        from_idx: resolved.from_idx,
        to_idx,
        to_eth_addr: None,
        to_bjj: None,
        token_id: resolved.token_id,
        amount,
        fee: FeeSelector(fee_selector),
        nonce: resolved.nonce,
        tx_type: TxType::Transfer,
        tx_id: None,
        signature: None,
    };
    let mut tx = tx.normalize()?;

    // Sign the domain-separated hash and attach the compressed signature.
    let hash = scheme.hash_to_sign(&tx, chain_id)?;
    let signature = scheme.sign(&wallet.private_key, &hash)?;
    tx.signature = Some(signature);

    let token = Token {
        id: resolved.token_id.0,
        symbol: resolved.token_symbol,
    };
    Ok(ApiTx::from_signed(&tx, &token))
}

/// Convenience check used by callers that want to fail fast before fetching
/// the recipient's listing: does the sender hold the token at all?
pub fn sender_holds_token(sender: &AccountListing, symbol: &str) -> bool {
    sender
        .accounts
        .iter()
        .any(|account| account.token.symbol.eq_ignore_ascii_case(symbol))
}
