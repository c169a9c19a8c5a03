//! Custom token program client

use anchor_client::{Client, Program};
use anchor_lang::{solana_program::program_option::COption, AccountDeserialize};
use anchor_spl::token::{self, Mint, TokenAccount};
use custom_token_program::{accounts, constants::find_program_authority, instruction};
use solana_sdk::{
    account::Account,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    system_program, sysvar,
};
use std::sync::Arc;

use crate::{
    config::ProviderConfig,
    error::{SdkError, SdkResult},
    types::{MintInfo, TokenAccountInfo},
};

/// Blocking client bound to one program and one payer
pub struct CustomTokenClient {
    /// Anchor client
    pub client: Client<Arc<Keypair>>,

    /// Anchor program handle
    pub program: Program<Arc<Keypair>>,

    /// Provider configuration the client was built from
    pub config: ProviderConfig,
}

impl CustomTokenClient {
    /// Load the wallet and open a program handle
    pub fn new(config: ProviderConfig) -> SdkResult<Self> {
        let payer = Arc::new(config.load_wallet()?);
        Self::with_payer(config, payer)
    }

    /// Open a program handle with an already loaded payer
    pub fn with_payer(config: ProviderConfig, payer: Arc<Keypair>) -> SdkResult<Self> {
        let client = Client::new_with_options(config.cluster.clone(), payer, config.commitment);
        let program = client.program(config.program_id)?;

        tracing::debug!(
            cluster = config.cluster.url(),
            program_id = %config.program_id,
            payer = %program.payer(),
            "custom token client ready"
        );

        Ok(Self {
            client,
            program,
            config,
        })
    }

    /// Provider configured entirely from `ANCHOR_PROVIDER_URL` / `ANCHOR_WALLET`
    pub fn from_env() -> SdkResult<Self> {
        Self::new(ProviderConfig::from_env()?)
    }

    pub fn program_id(&self) -> Pubkey {
        self.program.id()
    }

    pub fn payer(&self) -> Pubkey {
        self.program.payer()
    }

    /// Freeze authority PDA of every mint created by the program
    pub fn program_authority(&self) -> Pubkey {
        find_program_authority(&self.program.id()).0
    }

    pub fn initialize(&self) -> SdkResult<Signature> {
        let signature = self
            .program
            .request()
            .accounts(accounts::Initialize {
                payer: self.payer(),
                program_authority: self.program_authority(),
                system_program: system_program::ID,
            })
            .args(instruction::Initialize {})
            .send()?;

        tracing::info!(%signature, "initialize confirmed");
        Ok(signature)
    }

    /// `mint` is a fresh keypair; it signs its own account creation
    pub fn create_token_mint(
        &self,
        mint: &Keypair,
        decimals: u8,
        mint_authority: Pubkey,
    ) -> SdkResult<Signature> {
        let signature = self
            .program
            .request()
            .accounts(accounts::CreateTokenMint {
                mint: mint.pubkey(),
                program_authority: self.program_authority(),
                payer: self.payer(),
                system_program: system_program::ID,
                token_program: token::ID,
                rent: sysvar::rent::ID,
            })
            .args(instruction::CreateTokenMint {
                decimals,
                mint_authority,
            })
            .signer(mint)
            .send()?;

        tracing::info!(%signature, mint = %mint.pubkey(), decimals, "token mint created");
        Ok(signature)
    }

    /// Approve `delegate` on a token account owned by the payer
    pub fn delegate_tokens(
        &self,
        token_account: Pubkey,
        delegate: Pubkey,
        amount: u64,
    ) -> SdkResult<Signature> {
        let signature = self
            .program
            .request()
            .accounts(accounts::DelegateTokens {
                token_account,
                delegate,
                owner: self.payer(),
                token_program: token::ID,
            })
            .args(instruction::DelegateTokens { amount })
            .send()?;

        tracing::info!(%signature, %token_account, %delegate, amount, "tokens delegated");
        Ok(signature)
    }

    /// Freeze a token account; the payer must be the mint authority
    pub fn freeze_token_account(&self, token_account: Pubkey, mint: Pubkey) -> SdkResult<Signature> {
        let signature = self
            .program
            .request()
            .accounts(self.freeze_or_thaw_accounts(token_account, mint))
            .args(instruction::FreezeTokenAccount {})
            .send()?;

        tracing::info!(%signature, %token_account, %mint, "token account frozen");
        Ok(signature)
    }

    /// Thaw a token account; the payer must be the mint authority
    pub fn thaw_token_account(&self, token_account: Pubkey, mint: Pubkey) -> SdkResult<Signature> {
        let signature = self
            .program
            .request()
            .accounts(self.freeze_or_thaw_accounts(token_account, mint))
            .args(instruction::ThawTokenAccount {})
            .send()?;

        tracing::info!(%signature, %token_account, %mint, "token account thawed");
        Ok(signature)
    }

    pub fn mint_info(&self, mint: Pubkey) -> SdkResult<MintInfo> {
        let state: Mint = self.fetch_token_state(&mint, "Mint")?;
        Ok(mint_info_from_state(&mint, &state, &self.program_authority()))
    }

    pub fn token_account_info(&self, address: Pubkey) -> SdkResult<TokenAccountInfo> {
        let state: TokenAccount = self.fetch_token_state(&address, "TokenAccount")?;
        Ok(token_account_info_from_state(&address, &state))
    }

    fn freeze_or_thaw_accounts(&self, token_account: Pubkey, mint: Pubkey) -> accounts::FreezeOrThawAccount {
        accounts::FreezeOrThawAccount {
            admin: self.payer(),
            token_account_to_process: token_account,
            mint,
            program_authority: self.program_authority(),
            token_program: token::ID,
        }
    }

    fn fetch_token_state<T: AccountDeserialize>(&self, address: &Pubkey, kind: &str) -> SdkResult<T> {
        let account = self
            .program
            .rpc()
            .get_account_with_commitment(address, self.config.commitment)
            .map_err(|e| SdkError::Rpc(format!("{kind} {address}: {e}")))?
            .value;

        decode_token_state(address, kind, account)
    }
}

/// Decode a token program account returned by RPC; `None` means the address
/// holds no account
pub(crate) fn decode_token_state<T: AccountDeserialize>(
    address: &Pubkey,
    kind: &str,
    account: Option<Account>,
) -> SdkResult<T> {
    let account = account.ok_or_else(|| SdkError::AccountNotFound(format!("{kind} {address}")))?;

    if account.owner != token::ID {
        return Err(SdkError::Deserialization(format!(
            "{kind} {address} is owned by {}, not the token program",
            account.owner
        )));
    }

    T::try_deserialize(&mut account.data.as_slice())
        .map_err(|e| SdkError::Deserialization(format!("{kind} {address}: {e}")))
}

fn optional_key(key: COption<Pubkey>) -> Option<String> {
    Option::<Pubkey>::from(key).map(|k| k.to_string())
}

pub(crate) fn mint_info_from_state(
    address: &Pubkey,
    state: &Mint,
    program_authority: &Pubkey,
) -> MintInfo {
    MintInfo {
        address: address.to_string(),
        decimals: state.decimals,
        supply: state.supply,
        mint_authority: optional_key(state.mint_authority),
        freeze_authority: optional_key(state.freeze_authority),
        program_controlled: state.freeze_authority == COption::Some(*program_authority),
    }
}

pub(crate) fn token_account_info_from_state(
    address: &Pubkey,
    state: &TokenAccount,
) -> TokenAccountInfo {
    TokenAccountInfo {
        address: address.to_string(),
        mint: state.mint.to_string(),
        owner: state.owner.to_string(),
        amount: state.amount,
        delegate: optional_key(state.delegate),
        delegated_amount: state.delegated_amount,
        frozen: state.is_frozen(),
    }
}
