//! Resizing LIFO stack together with its storage, policy, and error layers.

mod array_stack;
pub mod error;
pub mod policy;
pub mod storage;

pub use array_stack::ArrayStack;
pub use error::{PushError, StackConfigError, StackError};
pub use policy::{PopOutcome, PushOutcome, ResizePolicy, StackConfig};
pub use storage::{StackStorage, VecStackStorage};
