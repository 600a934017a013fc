//! Account listings, the sender wallet, and token resolution.
//!
//! Listings arrive already fetched and deserialized; resolution is a
//! first-match linear scan over them. If a user somehow holds several
//! accounts for one symbol, the first encountered wins — that is documented
//! behavior, not an error.

use serde::{Deserialize, Serialize};

use hez_common::{bjj_to_hez, idx_from_hez, Idx, Nonce, PrivateKey, TokenId};

use crate::error::ClientError;

/// A token as reported by the account listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: u32,
    pub symbol: String,
}

/// One account entry of a listing: the canonical index string, the token it
/// holds, and the current nonce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub account_index: String,
    pub token: Token,
    pub nonce: u64,
}

/// An ordered account listing for one user, as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountListing {
    pub accounts: Vec<Account>,
}

/// The sender's wallet: the private signing key plus its canonical
/// `hez:`-prefixed public key address.
#[derive(Debug, Clone)]
pub struct Wallet {
    pub private_key: PrivateKey,
    pub hez_bjj_address: String,
}

impl Wallet {
    /// Builds a wallet, deriving the canonical address from the key.
    pub fn new(private_key: PrivateKey) -> Self {
        let hez_bjj_address = bjj_to_hez(&private_key.public());
        Self {
            private_key,
            hez_bjj_address,
        }
    }
}

/// Sender-side resolution result: everything the assembler needs from the
/// matched account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSender {
    pub token_id: TokenId,
    pub token_symbol: String,
    pub from_idx: Idx,
    /// The matched account's nonce plus one: the nonce this transfer binds.
    pub nonce: Nonce,
}

/// Scans the sender's listing for the first account holding the requested
/// token symbol (case-insensitive).
///
/// Returns `Ok(None)` when no account matches; a malformed account index on
/// the matched entry is fatal.
pub fn resolve_sender(
    listing: &AccountListing,
    symbol: &str,
) -> Result<Option<ResolvedSender>, ClientError> {
    for account in &listing.accounts {
        if account.token.symbol.eq_ignore_ascii_case(symbol) {
            let from_idx = idx_from_hez(&account.account_index)?;
            return Ok(Some(ResolvedSender {
                token_id: TokenId(account.token.id),
                token_symbol: account.token.symbol.clone(),
                from_idx,
                nonce: Nonce(account.nonce + 1),
            }));
        }
    }
    Ok(None)
}

/// Scans the recipient's listing for the first account holding the requested
/// token symbol (case-insensitive).
///
/// A missing match is tolerated structurally and yields the zero index (the
/// "create new index via address" sentinel); callers decide whether that is
/// acceptable for their flow.
pub fn resolve_recipient(listing: &AccountListing, symbol: &str) -> Result<Idx, ClientError> {
    for account in &listing.accounts {
        if account.token.symbol.eq_ignore_ascii_case(symbol) {
            return Ok(idx_from_hez(&account.account_index)?);
        }
    }
    Ok(Idx(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hez_common::HezError;

    fn listing(entries: &[(&str, u32, &str, u64)]) -> AccountListing {
        AccountListing {
            accounts: entries
                .iter()
                .map(|(index, id, symbol, nonce)| Account {
                    account_index: (*index).to_string(),
                    token: Token {
                        id: *id,
                        symbol: (*symbol).to_string(),
                    },
                    nonce: *nonce,
                })
                .collect(),
        }
    }

    #[test]
    fn resolves_sender_index_and_bumps_nonce() {
        let sender = listing(&[("hez:ETH:5", 0, "ETH", 3)]);
        let resolved = resolve_sender(&sender, "ETH").unwrap().unwrap();
        assert_eq!(resolved.from_idx, Idx(5));
        assert_eq!(resolved.nonce, Nonce(4));
        assert_eq!(resolved.token_id, TokenId(0));
        assert_eq!(resolved.token_symbol, "ETH");
    }

    #[test]
    fn symbol_match_is_case_insensitive() {
        let sender = listing(&[("hez:Eth:7", 1, "Eth", 0)]);
        let resolved = resolve_sender(&sender, "ETH").unwrap().unwrap();
        assert_eq!(resolved.from_idx, Idx(7));
    }

    #[test]
    fn no_matching_sender_account_yields_none() {
        let sender = listing(&[("hez:BTC:9", 2, "BTC", 1)]);
        assert!(resolve_sender(&sender, "ETH").unwrap().is_none());
    }

    #[test]
    fn first_match_wins_on_duplicate_symbols() {
        let sender = listing(&[("hez:ETH:5", 0, "ETH", 3), ("hez:ETH:8", 0, "ETH", 6)]);
        let resolved = resolve_sender(&sender, "ETH").unwrap().unwrap();
        assert_eq!(resolved.from_idx, Idx(5));
        assert_eq!(resolved.nonce, Nonce(4));
    }

    #[test]
    fn malformed_sender_index_is_fatal() {
        let sender = listing(&[("hez:ETH", 0, "ETH", 3)]);
        let err = resolve_sender(&sender, "ETH").unwrap_err();
        assert!(matches!(
            err,
            ClientError::Common(HezError::MalformedAccountIndex(_))
        ));
    }

    #[test]
    fn recipient_resolves_to_index() {
        let recipient = listing(&[("hez:DAI:300", 4, "DAI", 0)]);
        assert_eq!(resolve_recipient(&recipient, "DAI").unwrap(), Idx(300));
    }

    #[test]
    fn missing_recipient_yields_zero_sentinel() {
        let recipient = listing(&[("hez:BTC:9", 2, "BTC", 1)]);
        assert_eq!(resolve_recipient(&recipient, "ETH").unwrap(), Idx(0));
    }

    #[test]
    fn wallet_address_is_canonical_hez_encoding() {
        let wallet = Wallet::new(PrivateKey::from_bytes(&[3u8; 32]));
        assert!(wallet.hez_bjj_address.starts_with("hez:"));
        assert_eq!(
            hez_common::bjj_from_hez(&wallet.hez_bjj_address).unwrap(),
            wallet.private_key.public()
        );
    }

    #[test]
    fn listing_deserializes_from_api_shape() {
        let json = r#"{
            "accounts": [
                {
                    "account_index": "hez:ETH:5",
                    "token": { "id": 0, "symbol": "ETH" },
                    "nonce": 3
                }
            ]
        }"#;
        let listing: AccountListing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.accounts.len(), 1);
        assert_eq!(listing.accounts[0].nonce, 3);
    }
}
