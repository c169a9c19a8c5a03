pub const AUTHORITY_PDA_SEED: &[u8] = b"authority";

pub const PROGRAM_PATH: &str = "../../target/deploy/custom_token_program.so";

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
pub const DEFAULT_AIRDROP: u64 = 10 * LAMPORTS_PER_SOL;
