pub mod constants;
pub mod helpers;
pub mod logging;

pub use helpers::{custom_error_code, TestApp};
pub use logging::init_test_tracing;
