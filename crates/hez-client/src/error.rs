use thiserror::Error;

use hez_common::HezError;

/// Transfer pipeline errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The sender holds no account for the requested token. Not retryable
    /// without user action (fund or create the account first).
    #[error("no account for wallet {wallet} holding token {symbol}")]
    NoAccountForToken { wallet: String, symbol: String },

    /// Anything the common transaction library signals: malformed account
    /// indices, build rejections, hash or signing failures.
    #[error(transparent)]
    Common(#[from] HezError),
}
