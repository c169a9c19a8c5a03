use anchor_lang::prelude::*;

#[error_code]
pub enum CustomTokenError {
    #[msg("Unauthorized: The signer is not the mint authority.")]
    Unauthorized,
    #[msg("Token account does not belong to the given mint")]
    MintMismatch,
    #[msg("Mint freeze authority is not the program authority")]
    FreezeAuthorityMismatch,
    #[msg("Decimals value is too large")]
    DecimalsTooLarge,
    #[msg("Signer is not the owner of the token account")]
    OwnerMismatch,
}
