//! Canonical `hez:`-prefixed string encodings.
//!
//! Every numeric or byte field crossing the network boundary travels in a
//! self-describing string form: account indices as `hez:SYMBOL:N`, external
//! chain addresses as `hez:` plus their EIP-55 checksum form, and compressed
//! public keys as `hez:` plus base64url (no padding) of the 33-byte
//! key-plus-checksum buffer. The checksum byte is an 8-bit wraparound sum of
//! the key bytes, there to catch single-character transcription errors, not
//! to provide any cryptographic guarantee.

use alloy_primitives::Address;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::HezError;
use crate::keys::BjjPubKey;
use crate::tx::Idx;

/// Renders an account index in its canonical form: `hez:SYMBOL:N`.
///
/// The symbol charset is the caller's responsibility; no validation here.
pub fn idx_to_hez(idx: Idx, token_symbol: &str) -> String {
    format!("hez:{}:{}", token_symbol, idx)
}

/// Parses the index component out of a canonical `hez:SYMBOL:N` string.
///
/// The string must have exactly three colon-separated segments and the third
/// must parse as a non-negative integer. Anything else is corrupt
/// collaborator data and fails with [`HezError::MalformedAccountIndex`].
pub fn idx_from_hez(account_index: &str) -> Result<Idx, HezError> {
    let segments: Vec<&str> = account_index.split(':').collect();
    if segments.len() != 3 {
        return Err(HezError::MalformedAccountIndex(format!(
            "expected 3 colon-separated segments, got {} in {account_index:?}",
            segments.len()
        )));
    }

    let idx = segments[2].parse::<u64>().map_err(|e| {
        HezError::MalformedAccountIndex(format!(
            "index segment {:?} of {account_index:?} is not a non-negative integer: {e}",
            segments[2]
        ))
    })?;

    Ok(Idx(idx))
}

/// Renders an external chain address in its canonical form: `hez:` plus the
/// EIP-55 mixed-case checksum string.
///
/// Absent addresses are `Option::None` at the type level and render as the
/// empty string at the wire boundary; this function is never called for
/// them.
pub fn eth_addr_to_hez(addr: &Address) -> String {
    format!("hez:{}", addr.to_checksum(None))
}

/// Renders a compressed public key in its canonical form.
///
/// The 33-byte buffer (key plus checksum byte) is base64url-encoded without
/// padding and prefixed with `hez:`.
pub fn bjj_to_hez(pubkey: &BjjPubKey) -> String {
    let mut buf = [0u8; 33];
    buf[..32].copy_from_slice(pubkey.as_bytes());
    buf[32] = checksum_byte(pubkey.as_bytes());
    format!("hez:{}", URL_SAFE_NO_PAD.encode(buf))
}

/// Decodes a canonical `hez:`-prefixed compressed public key, verifying the
/// trailing checksum byte.
pub fn bjj_from_hez(encoded: &str) -> Result<BjjPubKey, HezError> {
    let body = encoded.strip_prefix("hez:").ok_or_else(|| {
        HezError::InvalidPublicKey(format!("missing hez: prefix in {encoded:?}"))
    })?;

    let bytes = URL_SAFE_NO_PAD
        .decode(body)
        .map_err(|e| HezError::InvalidPublicKey(format!("base64url decode failed: {e}")))?;

    if bytes.len() != 33 {
        return Err(HezError::InvalidPublicKey(format!(
            "expected 33 bytes (key + checksum), got {}",
            bytes.len()
        )));
    }

    let mut key = [0u8; 32];
    key.copy_from_slice(&bytes[..32]);

    let expected = checksum_byte(&key);
    if bytes[32] != expected {
        return Err(HezError::InvalidPublicKey(format!(
            "checksum mismatch: got {:#04x}, computed {:#04x}",
            bytes[32], expected
        )));
    }

    Ok(BjjPubKey(key))
}

/// 8-bit wraparound sum of the key bytes.
fn checksum_byte(key: &[u8; 32]) -> u8 {
    key.iter().fold(0u8, |sum, b| sum.wrapping_add(*b))
}
