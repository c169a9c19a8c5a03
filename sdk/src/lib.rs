//! Client SDK for the custom token program
//!
//! Wraps an anchor-client `Program` handle configured the same way the
//! Anchor provider is: cluster and wallet come from `ANCHOR_PROVIDER_URL`
//! and `ANCHOR_WALLET`.
pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::CustomTokenClient;
pub use config::ProviderConfig;
pub use error::{SdkError, SdkResult};
pub use types::{MintInfo, TokenAccountInfo};
