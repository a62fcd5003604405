use core::fmt;


/// Errors that may arise while operating on a stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackError {
  /// The stack contains no elements.
  Empty,
  /// The stack holds as many elements as its maximum capacity allows.
  Full,
}

impl fmt::Display for StackError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | StackError::Empty => write!(f, "stack is empty"),
      | StackError::Full => write!(f, "stack is full"),
    }
  }
}

impl core::error::Error for StackError {}
