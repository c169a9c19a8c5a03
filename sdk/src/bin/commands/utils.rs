// Shared connection flags and helpers for CLI commands

use anyhow::{Context, Result};
use clap::Args;
use custom_token_sdk::{
    config::{parse_commitment, parse_pubkey, PROGRAM_ID_ENV, PROVIDER_URL_ENV, WALLET_ENV},
    CustomTokenClient, ProviderConfig,
};
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;

#[derive(Args)]
pub struct ConnectionArgs {
    /// Cluster URL or moniker (localnet, devnet, mainnet, testnet)
    #[arg(long = "url", env = PROVIDER_URL_ENV, default_value = "localnet", global = true)]
    pub cluster: String,

    /// Path to wallet keypair file
    #[arg(long, env = WALLET_ENV, default_value = "~/.config/solana/id.json", global = true)]
    pub wallet: String,

    /// Program ID (defaults to declared program ID)
    #[arg(long, env = PROGRAM_ID_ENV, global = true)]
    pub program_id: Option<String>,

    /// Commitment level: processed, confirmed or finalized
    #[arg(long, default_value = "confirmed", global = true)]
    pub commitment: String,
}

impl ConnectionArgs {
    pub fn connect(&self) -> Result<CustomTokenClient> {
        let config = ProviderConfig::new(&self.cluster, &self.wallet)?
            .with_commitment(parse_commitment(&self.commitment)?)
            .with_program_id(self.program_id()?);

        tracing::debug!(cluster = config.cluster.url(), wallet = %config.wallet_path.display(), "connecting");
        CustomTokenClient::new(config).context("Failed to create custom token client")
    }

    /// `--program-id` if given, else the declared program id
    pub fn program_id(&self) -> Result<Pubkey> {
        match &self.program_id {
            Some(value) => pubkey_arg(value),
            None => Ok(custom_token_program::ID),
        }
    }
}

pub fn pubkey_arg(value: &str) -> Result<Pubkey> {
    parse_pubkey(value).with_context(|| format!("Invalid public key argument {value}"))
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
