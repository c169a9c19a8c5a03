use anchor_lang::{prelude::*, solana_program::program_option::COption};
use anchor_spl::token::{self, FreezeAccount, Mint, ThawAccount, Token, TokenAccount};

use crate::{
    constants::AUTHORITY_SEED,
    error::CustomTokenError,
    events::{TokenAccountFrozen, TokenAccountThawed},
};

#[derive(Accounts)]
pub struct FreezeOrThawAccount<'info> {
    /// Must be the current mint authority of `mint`
    pub admin: Signer<'info>,

    #[account(mut)]
    pub token_account_to_process: Account<'info, TokenAccount>,

    #[account(
        constraint = mint.key() == token_account_to_process.mint @ CustomTokenError::MintMismatch
    )]
    pub mint: Account<'info, Mint>,

    /// CHECK: PDA without data, verified by seeds
    #[account(
        seeds = [AUTHORITY_SEED],
        bump,
        constraint = mint.freeze_authority == COption::Some(program_authority.key())
            @ CustomTokenError::FreezeAuthorityMismatch
    )]
    pub program_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

impl<'info> FreezeOrThawAccount<'info> {
    /// A mint with a revoked mint authority can no longer be administered
    fn require_mint_authority(&self) -> Result<()> {
        let mint_authority: Option<Pubkey> = self.mint.mint_authority.into();
        require!(
            mint_authority == Some(self.admin.key()),
            CustomTokenError::Unauthorized
        );
        Ok(())
    }
}

pub fn freeze_token_account(ctx: Context<FreezeOrThawAccount>) -> Result<()> {
    ctx.accounts.require_mint_authority()?;

    let authority_seeds: &[&[u8]] = &[AUTHORITY_SEED, &[ctx.bumps.program_authority]];
    let signer_seeds = &[authority_seeds];

    let cpi_accounts = FreezeAccount {
        account: ctx.accounts.token_account_to_process.to_account_info(),
        mint: ctx.accounts.mint.to_account_info(),
        authority: ctx.accounts.program_authority.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    token::freeze_account(CpiContext::new_with_signer(
        cpi_program,
        cpi_accounts,
        signer_seeds,
    ))?;

    emit!(TokenAccountFrozen {
        token_account: ctx.accounts.token_account_to_process.key(),
        mint: ctx.accounts.mint.key(),
        admin: ctx.accounts.admin.key(),
    });

    Ok(())
}

pub fn thaw_token_account(ctx: Context<FreezeOrThawAccount>) -> Result<()> {
    ctx.accounts.require_mint_authority()?;

    let authority_seeds: &[&[u8]] = &[AUTHORITY_SEED, &[ctx.bumps.program_authority]];
    let signer_seeds = &[authority_seeds];

    let cpi_accounts = ThawAccount {
        account: ctx.accounts.token_account_to_process.to_account_info(),
        mint: ctx.accounts.mint.to_account_info(),
        authority: ctx.accounts.program_authority.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    token::thaw_account(CpiContext::new_with_signer(
        cpi_program,
        cpi_accounts,
        signer_seeds,
    ))?;

    emit!(TokenAccountThawed {
        token_account: ctx.accounts.token_account_to_process.key(),
        mint: ctx.accounts.mint.key(),
        admin: ctx.accounts.admin.key(),
    });

    Ok(())
}
