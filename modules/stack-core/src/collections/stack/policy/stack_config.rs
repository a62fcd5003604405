use super::ResizePolicy;
use crate::collections::stack::StackConfigError;


/// Capacity settings used to construct an [`ArrayStack`](crate::collections::stack::ArrayStack).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackConfig {
  initial_capacity: usize,
  max_capacity:     usize,
}

impl StackConfig {
  /// Initial capacity used when none is given.
  pub const DEFAULT_INITIAL_CAPACITY: usize = 16;
  /// Maximum capacity used when none is given.
  pub const DEFAULT_MAX_CAPACITY: usize = usize::MAX;

  /// Creates the default configuration.
  #[must_use]
  pub const fn new() -> Self {
    Self { initial_capacity: Self::DEFAULT_INITIAL_CAPACITY, max_capacity: Self::DEFAULT_MAX_CAPACITY }
  }

  /// Replaces the initial capacity.
  #[must_use]
  pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
    self.initial_capacity = initial_capacity;
    self
  }

  /// Replaces the maximum capacity.
  #[must_use]
  pub const fn with_max_capacity(mut self, max_capacity: usize) -> Self {
    self.max_capacity = max_capacity;
    self
  }

  /// Configured initial capacity.
  #[must_use]
  pub const fn initial_capacity(&self) -> usize {
    self.initial_capacity
  }

  /// Configured maximum capacity.
  #[must_use]
  pub const fn max_capacity(&self) -> usize {
    self.max_capacity
  }

  /// Checks the capacities and returns the resize policy they describe.
  ///
  /// # Errors
  ///
  /// Returns [`StackConfigError::ZeroInitialCapacity`] when the initial capacity is zero and
  /// [`StackConfigError::MaxBelowInitial`] when the maximum is smaller than the initial capacity.
  pub const fn validate(&self) -> Result<ResizePolicy, StackConfigError> {
    if self.initial_capacity == 0 {
      return Err(StackConfigError::ZeroInitialCapacity);
    }
    if self.max_capacity < self.initial_capacity {
      return Err(StackConfigError::MaxBelowInitial { initial: self.initial_capacity, max: self.max_capacity });
    }
    Ok(ResizePolicy::new(self.initial_capacity, self.max_capacity))
  }
}

impl Default for StackConfig {
  fn default() -> Self {
    Self::new()
  }
}
