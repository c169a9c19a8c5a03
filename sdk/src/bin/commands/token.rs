// Token mint and token account commands

use anyhow::{Context, Result};
use clap::Args;
use custom_token_sdk::CustomTokenClient;
use solana_sdk::signature::{read_keypair_file, Keypair, Signer};

use super::utils::{print_json, pubkey_arg};

#[derive(Args)]
pub struct CreateMintArgs {
    /// Number of decimals for the new mint
    #[arg(long, default_value = "9")]
    pub decimals: u8,

    /// Mint authority (defaults to wallet)
    #[arg(long)]
    pub mint_authority: Option<String>,

    /// Keypair file for the mint address (defaults to a fresh keypair)
    #[arg(long)]
    pub mint_keypair: Option<String>,
}

#[derive(Args)]
pub struct DelegateArgs {
    /// Token account owned by the wallet
    #[arg(long)]
    pub token_account: String,

    /// Account allowed to spend
    #[arg(long)]
    pub delegate: String,

    /// Amount in base units
    #[arg(long)]
    pub amount: u64,
}

#[derive(Args)]
pub struct FreezeThawArgs {
    /// Token account to freeze or thaw
    #[arg(long)]
    pub token_account: String,

    /// Mint of the token account
    #[arg(long)]
    pub mint: String,
}

#[derive(Args)]
pub struct AddressArgs {
    /// Account address
    pub address: String,
}

pub fn create_mint(client: &CustomTokenClient, args: CreateMintArgs) -> Result<()> {
    let mint = match &args.mint_keypair {
        Some(path) => read_keypair_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to load mint keypair from {}: {}", path, e))?,
        None => Keypair::new(),
    };
    let mint_authority = match &args.mint_authority {
        Some(addr) => pubkey_arg(addr)?,
        None => client.payer(),
    };

    client
        .create_token_mint(&mint, args.decimals, mint_authority)
        .context("Failed to create token mint")?;

    println!("{}", mint.pubkey());
    Ok(())
}

pub fn delegate(client: &CustomTokenClient, args: DelegateArgs) -> Result<()> {
    let token_account = pubkey_arg(&args.token_account)?;
    let delegate = pubkey_arg(&args.delegate)?;

    let signature = client
        .delegate_tokens(token_account, delegate, args.amount)
        .context("Failed to delegate tokens")?;

    println!("{signature}");
    Ok(())
}

pub fn freeze(client: &CustomTokenClient, args: FreezeThawArgs) -> Result<()> {
    let token_account = pubkey_arg(&args.token_account)?;
    let mint = pubkey_arg(&args.mint)?;

    let signature = client
        .freeze_token_account(token_account, mint)
        .context("Failed to freeze token account")?;

    println!("{signature}");
    Ok(())
}

pub fn thaw(client: &CustomTokenClient, args: FreezeThawArgs) -> Result<()> {
    let token_account = pubkey_arg(&args.token_account)?;
    let mint = pubkey_arg(&args.mint)?;

    let signature = client
        .thaw_token_account(token_account, mint)
        .context("Failed to thaw token account")?;

    println!("{signature}");
    Ok(())
}

pub fn mint_info(client: &CustomTokenClient, args: AddressArgs) -> Result<()> {
    let mint = pubkey_arg(&args.address)?;
    print_json(&client.mint_info(mint)?)
}

pub fn account_info(client: &CustomTokenClient, args: AddressArgs) -> Result<()> {
    let address = pubkey_arg(&args.address)?;
    print_json(&client.token_account_info(address)?)
}
