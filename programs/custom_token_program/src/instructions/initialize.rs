use anchor_lang::prelude::*;

use crate::{constants::AUTHORITY_SEED, events::ProgramInitialized};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: PDA without data, verified by seeds
    #[account(
        seeds = [AUTHORITY_SEED],
        bump
    )]
    pub program_authority: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_program(ctx: Context<Initialize>) -> Result<()> {
    let program_authority = ctx.accounts.program_authority.key();
    msg!("Custom token program initialized, authority {}", program_authority);

    emit!(ProgramInitialized {
        payer: ctx.accounts.payer.key(),
        program_authority,
    });

    Ok(())
}
