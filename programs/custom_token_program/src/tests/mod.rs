pub mod delegate_tokens;
pub mod freeze_thaw;

use anchor_lang::prelude::Pubkey;
use custom_token_test_utils::{constants::PROGRAM_PATH, init_test_tracing, TestApp};
use solana_sdk::signature::{Keypair, Signer};

use crate::instruction_builder::InstructionBuilder;

pub const TEST_DECIMALS: u8 = 6;

/// Bank with the compiled program loaded
pub async fn start_app() -> TestApp {
    init_test_tracing();
    TestApp::new_with_program(crate::id(), PROGRAM_PATH).await
}

/// A mint created through the program plus one funded token account
pub struct MintFixture {
    pub mint: Keypair,
    pub mint_authority: Keypair,
    pub owner: Keypair,
    pub token_account: Pubkey,
}

pub async fn create_mint_fixture(app: &mut TestApp, initial_amount: u64) -> MintFixture {
    let payer = app.payer_pubkey();
    let mint = Keypair::new();
    let mint_authority = app.funded_keypair().await.unwrap();
    let owner = app.funded_keypair().await.unwrap();

    let instruction = InstructionBuilder::create_token_mint(
        &payer,
        &mint.pubkey(),
        TEST_DECIMALS,
        mint_authority.pubkey(),
    );
    app.process_instruction_with_signers(instruction, &[&mint])
        .await
        .unwrap();

    let token_account = app
        .create_token_account(&mint.pubkey(), &owner.pubkey())
        .await
        .unwrap();
    if initial_amount > 0 {
        app.mint_tokens(&mint.pubkey(), &token_account, &mint_authority, initial_amount)
            .await
            .unwrap();
    }

    MintFixture {
        mint,
        mint_authority,
        owner,
        token_account,
    }
}

pub fn error_code(error: crate::error::CustomTokenError) -> u32 {
    error as u32 + anchor_lang::error::ERROR_CODE_OFFSET
}
