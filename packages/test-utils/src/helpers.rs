use anchor_lang::prelude::*;
use anchor_spl::token::spl_token;
use solana_program_test::*;
use solana_sdk::{
    account::Account as SdkAccount,
    hash::Hash,
    instruction::{Instruction, InstructionError},
    program_pack::Pack,
    signature::{Keypair, Signature},
    signer::Signer,
    system_instruction,
    transaction::{Transaction, TransactionError},
};
use std::fs;

use crate::constants::DEFAULT_AIRDROP;

pub struct TestApp {
    pub banks_client: BanksClient,
    pub payer: Keypair,
    pub recent_blockhash: Hash,
}

impl TestApp {
    /// Start a bank with the program loaded from `program_path`.
    ///
    /// Panics when the compiled program cannot be read.
    pub async fn new_with_program(program_id: Pubkey, program_path: &str) -> Self {
        let program_data = fs::read(program_path)
            .expect("Failed to read program file. Make sure to run 'anchor build' first");

        let mut program_test = ProgramTest::default();
        program_test.add_account(
            program_id,
            SdkAccount {
                lamports: 1_000_000,
                data: program_data,
                owner: solana_sdk::bpf_loader::id(),
                executable: true,
                rent_epoch: 0,
            },
        );

        let (banks_client, payer, recent_blockhash) = program_test.start().await;
        tracing::debug!(%program_id, program_path, "program test bank started");
        Self {
            banks_client,
            payer,
            recent_blockhash,
        }
    }

    pub fn payer_pubkey(&self) -> Pubkey {
        self.payer.pubkey()
    }

    /// Send a single instruction paid and signed by the payer
    pub async fn process_instruction(
        &mut self,
        instruction: Instruction,
    ) -> std::result::Result<Signature, BanksClientError> {
        self.process_instruction_with_signers(instruction, &[]).await
    }

    /// Send a single instruction with extra signers besides the payer
    pub async fn process_instruction_with_signers(
        &mut self,
        instruction: Instruction,
        signers: &[&Keypair],
    ) -> std::result::Result<Signature, BanksClientError> {
        self.process_instructions(&[instruction], signers).await
    }

    pub async fn process_instructions(
        &mut self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> std::result::Result<Signature, BanksClientError> {
        self.recent_blockhash = self.banks_client.get_latest_blockhash().await?;

        let mut all_signers: Vec<&Keypair> = vec![&self.payer];
        all_signers.extend_from_slice(signers);

        let transaction = Transaction::new_signed_with_payer(
            instructions,
            Some(&self.payer.pubkey()),
            all_signers.as_slice(),
            self.recent_blockhash,
        );
        let signature = transaction.signatures[0];

        self.banks_client.process_transaction(transaction).await?;
        Ok(signature)
    }

    pub async fn get_account_data<T: AccountDeserialize>(&mut self, address: Pubkey) -> Result<T> {
        let account = self
            .get_account(address)
            .await
            .ok_or(ErrorCode::AccountNotInitialized)?;
        T::try_deserialize(&mut account.data.as_slice())
    }

    pub async fn get_account(&mut self, address: Pubkey) -> Option<SdkAccount> {
        self.banks_client
            .get_account(address)
            .await
            .expect("banks client get_account")
    }

    pub async fn airdrop(
        &mut self,
        to: &Pubkey,
        lamports: u64,
    ) -> std::result::Result<Signature, BanksClientError> {
        let instruction = system_instruction::transfer(&self.payer.pubkey(), to, lamports);
        self.process_instruction(instruction).await
    }

    /// Create a funded keypair
    pub async fn funded_keypair(&mut self) -> std::result::Result<Keypair, BanksClientError> {
        let keypair = Keypair::new();
        self.airdrop(&keypair.pubkey(), DEFAULT_AIRDROP).await?;
        Ok(keypair)
    }

    /// Create and initialize a classic SPL token account for `owner`
    pub async fn create_token_account(
        &mut self,
        mint: &Pubkey,
        owner: &Pubkey,
    ) -> std::result::Result<Pubkey, BanksClientError> {
        let token_account = Keypair::new();
        let rent = self.banks_client.get_rent().await?;
        let lamports = rent.minimum_balance(spl_token::state::Account::LEN);

        let instructions = [
            system_instruction::create_account(
                &self.payer.pubkey(),
                &token_account.pubkey(),
                lamports,
                spl_token::state::Account::LEN as u64,
                &spl_token::id(),
            ),
            spl_token::instruction::initialize_account3(
                &spl_token::id(),
                &token_account.pubkey(),
                mint,
                owner,
            )
            .expect("valid initialize_account3 instruction"),
        ];

        self.process_instructions(&instructions, &[&token_account])
            .await?;
        Ok(token_account.pubkey())
    }

    pub async fn mint_tokens(
        &mut self,
        mint: &Pubkey,
        token_account: &Pubkey,
        mint_authority: &Keypair,
        amount: u64,
    ) -> std::result::Result<Signature, BanksClientError> {
        let instruction = spl_token::instruction::mint_to(
            &spl_token::id(),
            mint,
            token_account,
            &mint_authority.pubkey(),
            &[],
            amount,
        )
        .expect("valid mint_to instruction");

        self.process_instruction_with_signers(instruction, &[mint_authority])
            .await
    }

    /// Create a classic SPL mint directly through the token program, bypassing
    /// the program under test
    pub async fn create_mint(
        &mut self,
        decimals: u8,
        mint_authority: &Pubkey,
        freeze_authority: Option<&Pubkey>,
    ) -> std::result::Result<Pubkey, BanksClientError> {
        let mint = Keypair::new();
        let rent = self.banks_client.get_rent().await?;
        let lamports = rent.minimum_balance(spl_token::state::Mint::LEN);

        let instructions = [
            system_instruction::create_account(
                &self.payer.pubkey(),
                &mint.pubkey(),
                lamports,
                spl_token::state::Mint::LEN as u64,
                &spl_token::id(),
            ),
            spl_token::instruction::initialize_mint2(
                &spl_token::id(),
                &mint.pubkey(),
                mint_authority,
                freeze_authority,
                decimals,
            )
            .expect("valid initialize_mint2 instruction"),
        ];

        self.process_instructions(&instructions, &[&mint]).await?;
        Ok(mint.pubkey())
    }

    /// Clear the mint authority of `mint`, leaving supply fixed
    pub async fn revoke_mint_authority(
        &mut self,
        mint: &Pubkey,
        mint_authority: &Keypair,
    ) -> std::result::Result<Signature, BanksClientError> {
        let instruction = spl_token::instruction::set_authority(
            &spl_token::id(),
            mint,
            None,
            spl_token::instruction::AuthorityType::MintTokens,
            &mint_authority.pubkey(),
            &[],
        )
        .expect("valid set_authority instruction");

        self.process_instruction_with_signers(instruction, &[mint_authority])
            .await
    }
}

/// Custom program error code carried by a failed transaction, if any
pub fn custom_error_code(err: &BanksClientError) -> Option<u32> {
    match err {
        BanksClientError::TransactionError(TransactionError::InstructionError(
            _,
            InstructionError::Custom(code),
        )) => Some(*code),
        BanksClientError::SimulationError {
            err: TransactionError::InstructionError(_, InstructionError::Custom(code)),
            ..
        } => Some(*code),
        _ => None,
    }
}
