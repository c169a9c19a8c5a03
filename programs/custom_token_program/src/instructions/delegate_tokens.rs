use anchor_lang::prelude::*;
use anchor_spl::token::{self, Approve, Token, TokenAccount};

use crate::{error::CustomTokenError, events::TokensDelegated};

#[derive(Accounts)]
pub struct DelegateTokens<'info> {
    #[account(mut)]
    pub token_account: Account<'info, TokenAccount>,

    /// CHECK: Any account may be a delegate
    pub delegate: UncheckedAccount<'info>,

    #[account(
        constraint = token_account.owner == owner.key() @ CustomTokenError::OwnerMismatch
    )]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn delegate_tokens(ctx: Context<DelegateTokens>, amount: u64) -> Result<()> {
    let cpi_accounts = Approve {
        to: ctx.accounts.token_account.to_account_info(),
        delegate: ctx.accounts.delegate.to_account_info(),
        authority: ctx.accounts.owner.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    token::approve(CpiContext::new(cpi_program, cpi_accounts), amount)?;

    emit!(TokensDelegated {
        token_account: ctx.accounts.token_account.key(),
        delegate: ctx.accounts.delegate.key(),
        owner: ctx.accounts.owner.key(),
        amount,
    });

    Ok(())
}
