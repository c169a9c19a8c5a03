use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::{
    constants::{AUTHORITY_SEED, MAX_DECIMALS},
    error::CustomTokenError,
    events::TokenMintCreated,
};

#[derive(Accounts)]
#[instruction(decimals: u8, mint_authority: Pubkey)]
pub struct CreateTokenMint<'info> {
    /// New mint, freeze authority pinned to the program authority
    #[account(
        init,
        payer = payer,
        mint::decimals = decimals,
        mint::authority = mint_authority,
        mint::freeze_authority = program_authority.key()
    )]
    pub mint: Account<'info, Mint>,

    /// CHECK: PDA without data, verified by seeds
    #[account(
        seeds = [AUTHORITY_SEED],
        bump
    )]
    pub program_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn create_token_mint(
    ctx: Context<CreateTokenMint>,
    decimals: u8,
    mint_authority: Pubkey,
) -> Result<()> {
    // The mint is already initialized by the account constraints; failing
    // here reverts the whole transaction.
    require!(decimals <= MAX_DECIMALS, CustomTokenError::DecimalsTooLarge);

    let mint = ctx.accounts.mint.key();
    let freeze_authority = ctx.accounts.program_authority.key();
    msg!("Created mint {} with {} decimals", mint, decimals);

    emit!(TokenMintCreated {
        mint,
        mint_authority,
        freeze_authority,
        decimals,
    });

    Ok(())
}
