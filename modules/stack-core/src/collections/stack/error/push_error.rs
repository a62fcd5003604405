use core::fmt;

use super::StackError;


/// Rejection returned when pushing onto a stack that already holds its maximum number of elements.
///
/// The rejected item is handed back so the caller keeps ownership of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushError<T> {
  item: T,
}

impl<T> PushError<T> {
  /// Wraps the item that could not be stored.
  #[must_use]
  pub const fn new(item: T) -> Self {
    Self { item }
  }

  /// Returns a reference to the rejected item.
  #[must_use]
  pub const fn item(&self) -> &T {
    &self.item
  }

  /// Consumes the error and returns the rejected item.
  #[must_use]
  pub fn into_inner(self) -> T {
    self.item
  }
}

impl<T> From<PushError<T>> for StackError {
  fn from(_: PushError<T>) -> Self {
    StackError::Full
  }
}

impl<T> fmt::Display for PushError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&StackError::Full, f)
  }
}

impl<T: fmt::Debug> core::error::Error for PushError<T> {}
