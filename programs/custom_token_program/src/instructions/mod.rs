pub mod create_token_mint;
pub mod delegate_tokens;
pub mod freeze_thaw;
pub mod initialize;

pub use create_token_mint::*;
pub use delegate_tokens::*;
pub use freeze_thaw::*;
pub use initialize::*;
