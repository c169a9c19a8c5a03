use serde::Serialize;

/// Mint state as reported by the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MintInfo {
    pub address: String,
    pub decimals: u8,
    pub supply: u64,
    pub mint_authority: Option<String>,
    pub freeze_authority: Option<String>,
    /// Whether freeze/thaw go through the program authority
    pub program_controlled: bool,
}

/// Token account state as reported by the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenAccountInfo {
    pub address: String,
    pub mint: String,
    pub owner: String,
    pub amount: u64,
    pub delegate: Option<String>,
    pub delegated_amount: u64,
    pub frozen: bool,
}
