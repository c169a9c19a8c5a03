//! Builds program instructions from plain pubkeys, for tests and off-chain callers
use anchor_lang::{
    prelude::*, solana_program::instruction::Instruction, system_program, InstructionData,
};
use anchor_spl::token;

use crate::constants::find_program_authority;

pub struct InstructionBuilder;

impl InstructionBuilder {
    /// Returns the instruction together with the program authority PDA
    pub fn initialize(payer: &Pubkey) -> (Instruction, Pubkey) {
        let program_id = crate::id();
        let (program_authority, _) = find_program_authority(&program_id);

        let accounts = crate::accounts::Initialize {
            payer: *payer,
            program_authority,
            system_program: system_program::ID,
        };

        let instruction = Instruction {
            program_id,
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::Initialize {}.data(),
        };

        (instruction, program_authority)
    }

    /// `mint` must also sign the transaction
    pub fn create_token_mint(
        payer: &Pubkey,
        mint: &Pubkey,
        decimals: u8,
        mint_authority: Pubkey,
    ) -> Instruction {
        let program_id = crate::id();
        let (program_authority, _) = find_program_authority(&program_id);

        let accounts = crate::accounts::CreateTokenMint {
            mint: *mint,
            program_authority,
            payer: *payer,
            system_program: system_program::ID,
            token_program: token::ID,
            rent: anchor_lang::solana_program::sysvar::rent::ID,
        };

        Instruction {
            program_id,
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::CreateTokenMint {
                decimals,
                mint_authority,
            }
            .data(),
        }
    }

    pub fn delegate_tokens(
        token_account: &Pubkey,
        delegate: &Pubkey,
        owner: &Pubkey,
        amount: u64,
    ) -> Instruction {
        let accounts = crate::accounts::DelegateTokens {
            token_account: *token_account,
            delegate: *delegate,
            owner: *owner,
            token_program: token::ID,
        };

        Instruction {
            program_id: crate::id(),
            accounts: accounts.to_account_metas(None),
            data: crate::instruction::DelegateTokens { amount }.data(),
        }
    }

    pub fn freeze_token_account(admin: &Pubkey, token_account: &Pubkey, mint: &Pubkey) -> Instruction {
        Instruction {
            program_id: crate::id(),
            accounts: Self::freeze_or_thaw_accounts(admin, token_account, mint),
            data: crate::instruction::FreezeTokenAccount {}.data(),
        }
    }

    pub fn thaw_token_account(admin: &Pubkey, token_account: &Pubkey, mint: &Pubkey) -> Instruction {
        Instruction {
            program_id: crate::id(),
            accounts: Self::freeze_or_thaw_accounts(admin, token_account, mint),
            data: crate::instruction::ThawTokenAccount {}.data(),
        }
    }

    fn freeze_or_thaw_accounts(
        admin: &Pubkey,
        token_account: &Pubkey,
        mint: &Pubkey,
    ) -> Vec<AccountMeta> {
        let (program_authority, _) = find_program_authority(&crate::id());

        crate::accounts::FreezeOrThawAccount {
            admin: *admin,
            token_account_to_process: *token_account,
            mint: *mint,
            program_authority,
            token_program: token::ID,
        }
        .to_account_metas(None)
    }
}
