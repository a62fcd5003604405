//! Errors reported by stack construction and stack operations.

mod push_error;
mod stack_config_error;
mod stack_error;

pub use push_error::PushError;
pub use stack_config_error::StackConfigError;
pub use stack_error::StackError;
