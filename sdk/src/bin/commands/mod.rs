// Command modules for the custom-token CLI

pub mod init;
pub mod token;
pub mod utils;
