use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::TokenAccount;
use custom_token_test_utils::custom_error_code;
use solana_sdk::signature::{Keypair, Signer};

use crate::{
    error::CustomTokenError,
    instruction_builder::InstructionBuilder,
    tests::{create_mint_fixture, error_code, start_app},
};

#[tokio::test]
async fn test_delegate_tokens_sets_delegate() {
    let mut app = start_app().await;
    let fixture = create_mint_fixture(&mut app, 1_000_000).await;
    let delegate = Keypair::new();

    let instruction = InstructionBuilder::delegate_tokens(
        &fixture.token_account,
        &delegate.pubkey(),
        &fixture.owner.pubkey(),
        250_000,
    );
    app.process_instruction_with_signers(instruction, &[&fixture.owner])
        .await
        .unwrap();

    let account: TokenAccount = app.get_account_data(fixture.token_account).await.unwrap();
    assert_eq!(account.delegate, COption::Some(delegate.pubkey()));
    assert_eq!(account.delegated_amount, 250_000);
    assert_eq!(account.amount, 1_000_000);
}

#[tokio::test]
async fn test_delegate_tokens_replaces_previous_delegate() {
    let mut app = start_app().await;
    let fixture = create_mint_fixture(&mut app, 1_000_000).await;
    let first = Keypair::new();
    let second = Keypair::new();

    for (delegate, amount) in [(&first, 100), (&second, 300)] {
        let instruction = InstructionBuilder::delegate_tokens(
            &fixture.token_account,
            &delegate.pubkey(),
            &fixture.owner.pubkey(),
            amount,
        );
        app.process_instruction_with_signers(instruction, &[&fixture.owner])
            .await
            .unwrap();
    }

    let account: TokenAccount = app.get_account_data(fixture.token_account).await.unwrap();
    assert_eq!(account.delegate, COption::Some(second.pubkey()));
    assert_eq!(account.delegated_amount, 300);
}

#[tokio::test]
async fn test_delegate_tokens_rejects_non_owner() {
    let mut app = start_app().await;
    let fixture = create_mint_fixture(&mut app, 1_000_000).await;
    let intruder = app.funded_keypair().await.unwrap();
    let delegate = Keypair::new();

    let instruction = InstructionBuilder::delegate_tokens(
        &fixture.token_account,
        &delegate.pubkey(),
        &intruder.pubkey(),
        500,
    );
    let err = app
        .process_instruction_with_signers(instruction, &[&intruder])
        .await
        .unwrap_err();

    assert_eq!(
        custom_error_code(&err),
        Some(error_code(CustomTokenError::OwnerMismatch))
    );

    let account: TokenAccount = app.get_account_data(fixture.token_account).await.unwrap();
    assert_eq!(account.delegate, COption::None);
}
