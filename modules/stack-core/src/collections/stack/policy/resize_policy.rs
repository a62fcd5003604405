
/// Validated capacity bounds and the grow/shrink arithmetic derived from them.
///
/// Growth doubles the capacity and clamps it to the maximum. Shrinking halves the capacity once
/// the stack is at most half full, but never below the initial capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizePolicy {
  initial_capacity: usize,
  max_capacity:     usize,
}

impl ResizePolicy {
  /// Built by [`StackConfig::validate`](super::StackConfig::validate), which guarantees
  /// `1 <= initial_capacity <= max_capacity`.
  pub(crate) const fn new(initial_capacity: usize, max_capacity: usize) -> Self {
    Self { initial_capacity, max_capacity }
  }

  /// Capacity the stack starts with and never shrinks below.
  #[must_use]
  pub const fn initial_capacity(&self) -> usize {
    self.initial_capacity
  }

  /// Largest number of elements the stack may hold.
  #[must_use]
  pub const fn max_capacity(&self) -> usize {
    self.max_capacity
  }

  /// Indicates whether a stack holding `len` elements may accept one more.
  #[must_use]
  pub const fn admits(&self, len: usize) -> bool {
    len < self.max_capacity
  }

  /// Capacity to grow to before storing one more element, if the buffer is exhausted.
  ///
  /// Returns `None` when there is still a free slot or when the buffer already sits at the
  /// maximum capacity.
  #[must_use]
  pub const fn grow_target(&self, len: usize, capacity: usize) -> Option<usize> {
    if len < capacity || capacity >= self.max_capacity {
      return None;
    }
    let doubled = capacity.saturating_mul(2);
    if doubled > self.max_capacity { Some(self.max_capacity) } else { Some(doubled) }
  }

  /// Capacity to shrink to after an element was removed, if any.
  ///
  /// The target is `capacity / 2`; it applies only when `len` fits in it and it does not fall
  /// below the initial capacity.
  #[must_use]
  pub const fn shrink_target(&self, len: usize, capacity: usize) -> Option<usize> {
    let target = capacity / 2;
    if len <= target && target >= self.initial_capacity { Some(target) } else { None }
  }
}
