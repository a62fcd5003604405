//! Capacity configuration and the grow/shrink arithmetic applied by [`ArrayStack`](super::ArrayStack).

mod pop_outcome;
mod push_outcome;
mod resize_policy;
mod stack_config;

pub use pop_outcome::PopOutcome;
pub use push_outcome::PushOutcome;
pub use resize_policy::ResizePolicy;
pub use stack_config::StackConfig;
