use anchor_spl::token::{Mint, TokenAccount};
use custom_token_test_utils::custom_error_code;
use solana_sdk::signature::Signer;

use crate::{
    error::CustomTokenError,
    instruction_builder::InstructionBuilder,
    tests::{create_mint_fixture, error_code, start_app, TEST_DECIMALS},
};

#[tokio::test]
async fn test_freeze_and_thaw_by_mint_authority() {
    let mut app = start_app().await;
    let fixture = create_mint_fixture(&mut app, 10).await;
    let admin = &fixture.mint_authority;

    let freeze = InstructionBuilder::freeze_token_account(
        &admin.pubkey(),
        &fixture.token_account,
        &fixture.mint.pubkey(),
    );
    app.process_instruction_with_signers(freeze, &[admin])
        .await
        .unwrap();

    let account: TokenAccount = app.get_account_data(fixture.token_account).await.unwrap();
    assert!(account.is_frozen());

    let thaw = InstructionBuilder::thaw_token_account(
        &admin.pubkey(),
        &fixture.token_account,
        &fixture.mint.pubkey(),
    );
    app.process_instruction_with_signers(thaw, &[admin])
        .await
        .unwrap();

    let account: TokenAccount = app.get_account_data(fixture.token_account).await.unwrap();
    assert!(!account.is_frozen());
    assert_eq!(account.amount, 10);
}

#[tokio::test]
async fn test_freeze_rejects_non_mint_authority() {
    let mut app = start_app().await;
    let fixture = create_mint_fixture(&mut app, 0).await;

    // The token owner is not the mint authority
    let instruction = InstructionBuilder::freeze_token_account(
        &fixture.owner.pubkey(),
        &fixture.token_account,
        &fixture.mint.pubkey(),
    );
    let err = app
        .process_instruction_with_signers(instruction, &[&fixture.owner])
        .await
        .unwrap_err();

    assert_eq!(
        custom_error_code(&err),
        Some(error_code(CustomTokenError::Unauthorized))
    );

    let account: TokenAccount = app.get_account_data(fixture.token_account).await.unwrap();
    assert!(!account.is_frozen());
}

#[tokio::test]
async fn test_thaw_rejects_non_mint_authority() {
    let mut app = start_app().await;
    let fixture = create_mint_fixture(&mut app, 0).await;
    let admin = &fixture.mint_authority;

    let freeze = InstructionBuilder::freeze_token_account(
        &admin.pubkey(),
        &fixture.token_account,
        &fixture.mint.pubkey(),
    );
    app.process_instruction_with_signers(freeze, &[admin])
        .await
        .unwrap();

    let thaw = InstructionBuilder::thaw_token_account(
        &fixture.owner.pubkey(),
        &fixture.token_account,
        &fixture.mint.pubkey(),
    );
    let err = app
        .process_instruction_with_signers(thaw, &[&fixture.owner])
        .await
        .unwrap_err();

    assert_eq!(
        custom_error_code(&err),
        Some(error_code(CustomTokenError::Unauthorized))
    );

    let account: TokenAccount = app.get_account_data(fixture.token_account).await.unwrap();
    assert!(account.is_frozen());
}

#[tokio::test]
async fn test_freeze_rejects_mismatched_mint() {
    let mut app = start_app().await;
    let fixture = create_mint_fixture(&mut app, 0).await;
    let other = create_mint_fixture(&mut app, 0).await;

    // Authority of the other mint, pointing at a token account of the first
    let admin = &other.mint_authority;
    let instruction = InstructionBuilder::freeze_token_account(
        &admin.pubkey(),
        &fixture.token_account,
        &other.mint.pubkey(),
    );
    let err = app
        .process_instruction_with_signers(instruction, &[admin])
        .await
        .unwrap_err();

    assert_eq!(
        custom_error_code(&err),
        Some(error_code(CustomTokenError::MintMismatch))
    );
}

#[tokio::test]
async fn test_freeze_rejects_mint_with_foreign_freeze_authority() {
    let mut app = start_app().await;
    let admin = app.funded_keypair().await.unwrap();
    let owner = app.funded_keypair().await.unwrap();

    // Mint created outside the program, its freeze authority is the admin
    let mint = app
        .create_mint(TEST_DECIMALS, &admin.pubkey(), Some(&admin.pubkey()))
        .await
        .unwrap();
    let token_account = app.create_token_account(&mint, &owner.pubkey()).await.unwrap();

    let instruction =
        InstructionBuilder::freeze_token_account(&admin.pubkey(), &token_account, &mint);
    let err = app
        .process_instruction_with_signers(instruction, &[&admin])
        .await
        .unwrap_err();

    assert_eq!(
        custom_error_code(&err),
        Some(error_code(CustomTokenError::FreezeAuthorityMismatch))
    );

    let account: TokenAccount = app.get_account_data(token_account).await.unwrap();
    assert!(!account.is_frozen());
}

#[tokio::test]
async fn test_freeze_rejects_revoked_mint_authority() {
    let mut app = start_app().await;
    let fixture = create_mint_fixture(&mut app, 5).await;
    let admin = &fixture.mint_authority;

    app.revoke_mint_authority(&fixture.mint.pubkey(), admin)
        .await
        .unwrap();
    let mint: Mint = app.get_account_data(fixture.mint.pubkey()).await.unwrap();
    assert!(mint.mint_authority.is_none());

    let instruction = InstructionBuilder::freeze_token_account(
        &admin.pubkey(),
        &fixture.token_account,
        &fixture.mint.pubkey(),
    );
    let err = app
        .process_instruction_with_signers(instruction, &[admin])
        .await
        .unwrap_err();

    assert_eq!(
        custom_error_code(&err),
        Some(error_code(CustomTokenError::Unauthorized))
    );

    let account: TokenAccount = app.get_account_data(fixture.token_account).await.unwrap();
    assert!(!account.is_frozen());
}

#[tokio::test]
async fn test_thaw_rejects_revoked_mint_authority() {
    let mut app = start_app().await;
    let fixture = create_mint_fixture(&mut app, 5).await;
    let admin = &fixture.mint_authority;

    let freeze = InstructionBuilder::freeze_token_account(
        &admin.pubkey(),
        &fixture.token_account,
        &fixture.mint.pubkey(),
    );
    app.process_instruction_with_signers(freeze, &[admin])
        .await
        .unwrap();

    app.revoke_mint_authority(&fixture.mint.pubkey(), admin)
        .await
        .unwrap();

    let thaw = InstructionBuilder::thaw_token_account(
        &admin.pubkey(),
        &fixture.token_account,
        &fixture.mint.pubkey(),
    );
    let err = app
        .process_instruction_with_signers(thaw, &[admin])
        .await
        .unwrap_err();

    assert_eq!(
        custom_error_code(&err),
        Some(error_code(CustomTokenError::Unauthorized))
    );

    // Frozen for good once nobody can pass the authority check
    let account: TokenAccount = app.get_account_data(fixture.token_account).await.unwrap();
    assert!(account.is_frozen());
}
