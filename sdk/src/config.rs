use anchor_client::Cluster;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair},
};
use std::{path::PathBuf, str::FromStr};

use crate::error::{SdkError, SdkResult};

/// Cluster URL or moniker, same variable the Anchor provider reads
pub const PROVIDER_URL_ENV: &str = "ANCHOR_PROVIDER_URL";
/// Path to the payer keypair, same variable the Anchor provider reads
pub const WALLET_ENV: &str = "ANCHOR_WALLET";
/// Optional override of the declared program id
pub const PROGRAM_ID_ENV: &str = "CUSTOM_TOKEN_PROGRAM_ID";

/// Connection settings for talking to the custom token program
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    /// Cluster to connect to
    pub cluster: Cluster,

    /// Payer keypair file, `~` already expanded
    pub wallet_path: PathBuf,

    /// Transaction commitment level
    pub commitment: CommitmentConfig,

    /// Custom token program ID
    pub program_id: Pubkey,
}

impl ProviderConfig {
    pub fn new(cluster: &str, wallet_path: &str) -> SdkResult<Self> {
        Self::build(cluster, wallet_path, |key| std::env::var(key).ok())
    }

    /// Read the provider from `ANCHOR_PROVIDER_URL` and `ANCHOR_WALLET`
    pub fn from_env() -> SdkResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ProviderConfig::from_env`] with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> SdkResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cluster = lookup(PROVIDER_URL_ENV).ok_or(SdkError::MissingEnv(PROVIDER_URL_ENV))?;
        let wallet = lookup(WALLET_ENV).ok_or(SdkError::MissingEnv(WALLET_ENV))?;

        let mut config = Self::build(&cluster, &wallet, &lookup)?;
        if let Some(program_id) = lookup(PROGRAM_ID_ENV) {
            config.program_id = parse_pubkey(&program_id)?;
        }
        Ok(config)
    }

    fn build<F>(cluster: &str, wallet_path: &str, lookup: F) -> SdkResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cluster =
            Cluster::from_str(cluster).map_err(|e| SdkError::InvalidCluster(e.to_string()))?;

        Ok(Self {
            cluster,
            wallet_path: expand_home(wallet_path, lookup("HOME").as_deref()),
            commitment: CommitmentConfig::confirmed(),
            program_id: custom_token_program::ID,
        })
    }

    pub fn with_commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.commitment = commitment;
        self
    }

    pub fn with_program_id(mut self, program_id: Pubkey) -> Self {
        self.program_id = program_id;
        self
    }

    /// Load the payer keypair from `wallet_path`
    pub fn load_wallet(&self) -> SdkResult<Keypair> {
        read_keypair_file(&self.wallet_path).map_err(|e| SdkError::Wallet {
            path: self.wallet_path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Parse `processed`, `confirmed` or `finalized`
pub fn parse_commitment(value: &str) -> SdkResult<CommitmentConfig> {
    match value.to_lowercase().as_str() {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        _ => Err(SdkError::InvalidCommitment(value.to_string())),
    }
}

pub fn parse_pubkey(value: &str) -> SdkResult<Pubkey> {
    Pubkey::from_str(value).map_err(|_| SdkError::InvalidPubkey(value.to_string()))
}

fn expand_home(path: &str, home: Option<&str>) -> PathBuf {
    match (path.strip_prefix('~'), home) {
        (Some(rest), Some(home)) => PathBuf::from(format!("{home}{rest}")),
        _ => PathBuf::from(path),
    }
}
