// Program-level commands

use anyhow::{Context, Result};
use custom_token_program::constants::find_program_authority;
use custom_token_sdk::CustomTokenClient;

use super::utils::ConnectionArgs;

pub fn execute(client: &CustomTokenClient) -> Result<()> {
    tracing::info!(program_id = %client.program_id(), "calling initialize");

    let signature = client
        .initialize()
        .context("Failed to send initialize transaction")?;

    // Plain stdout so scripts can capture the signature
    println!("{signature}");
    Ok(())
}

pub fn authority(connection: &ConnectionArgs) -> Result<()> {
    let program_id = connection.program_id()?;
    let (authority, bump) = find_program_authority(&program_id);
    tracing::debug!(%program_id, bump, "derived program authority");

    println!("{authority}");
    Ok(())
}
