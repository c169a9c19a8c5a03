//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Required environment variable is not set
    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// Wallet keypair could not be loaded
    #[error("Failed to load wallet from {path}: {reason}")]
    Wallet { path: String, reason: String },

    /// Cluster string could not be parsed
    #[error("Invalid cluster: {0}")]
    InvalidCluster(String),

    /// Commitment string could not be parsed
    #[error("Invalid commitment: {0}")]
    InvalidCommitment(String),

    /// Pubkey string could not be parsed
    #[error("Invalid public key: {0}")]
    InvalidPubkey(String),

    /// Anchor client error
    #[error("Anchor client error: {0}")]
    AnchorClient(String),

    /// RPC error
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Account not found
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Deserialization error
    #[error("Failed to deserialize account: {0}")]
    Deserialization(String),
}

impl From<anchor_client::ClientError> for SdkError {
    fn from(err: anchor_client::ClientError) -> Self {
        SdkError::AnchorClient(err.to_string())
    }
}

pub type SdkResult<T> = Result<T, SdkError>;
