use anchor_lang::prelude::*;

#[event]
pub struct ProgramInitialized {
    pub payer: Pubkey,
    pub program_authority: Pubkey,
}

#[event]
pub struct TokenMintCreated {
    pub mint: Pubkey,
    pub mint_authority: Pubkey,
    pub freeze_authority: Pubkey,
    pub decimals: u8,
}

#[event]
pub struct TokensDelegated {
    pub token_account: Pubkey,
    pub delegate: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct TokenAccountFrozen {
    pub token_account: Pubkey,
    pub mint: Pubkey,
    pub admin: Pubkey,
}

#[event]
pub struct TokenAccountThawed {
    pub token_account: Pubkey,
    pub mint: Pubkey,
    pub admin: Pubkey,
}
