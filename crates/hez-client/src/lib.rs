//! L2 transfer construction for the Hermez-style rollup network.
//!
//! The pipeline is a pure, synchronous computation: resolve the sender and
//! recipient account listings into the network's internal index space,
//! assemble the pool transaction, hash and sign it, and project the result
//! into the wire-format API request. Fetching the listings, storing keys,
//! and submitting the request are external collaborators; this crate only
//! consumes their already-resolved outputs.

pub mod account;
pub mod api;
pub mod error;
pub mod transfer;

// Re-export key public types for ergonomic imports.
pub use account::{
    resolve_recipient, resolve_sender, Account, AccountListing, ResolvedSender, Token, Wallet,
};
pub use api::ApiTx;
pub use error::ClientError;
pub use transfer::{marshal_transaction, marshal_transaction_with, sender_holds_token};
