use anchor_lang::prelude::*;

/// Seed of the PDA that acts as freeze authority for every mint we create
pub const AUTHORITY_SEED: &[u8] = b"authority";

/// SPL Token accepts any u8, but nothing sensible goes above this
pub const MAX_DECIMALS: u8 = 18;

/// Derive the program authority PDA for a given program id
pub fn find_program_authority(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[AUTHORITY_SEED], program_id)
}
