use thiserror::Error;

/// Rollup transaction primitive errors.
#[derive(Debug, Error)]
pub enum HezError {
    #[error("malformed account index: {0}")]
    MalformedAccountIndex(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("transaction build error: {0}")]
    TransactionBuild(String),

    #[error("hash computation failed: {0}")]
    HashComputationFailed(String),

    #[error("signing failed: {0}")]
    SigningFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_malformed_account_index() {
        let err = HezError::MalformedAccountIndex("hez:ETH".into());
        assert_eq!(err.to_string(), "malformed account index: hez:ETH");
    }

    #[test]
    fn display_hash_computation_failed() {
        let err = HezError::HashComputationFailed("two recipients".into());
        assert_eq!(err.to_string(), "hash computation failed: two recipients");
    }

    #[test]
    fn display_signing_failed() {
        let err = HezError::SigningFailed("bad key".into());
        assert_eq!(err.to_string(), "signing failed: bad key");
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> =
            Box::new(HezError::InvalidPublicKey("test".into()));
        assert!(err.to_string().contains("test"));
    }
}
