/// Low-level contiguous storage used by [`ArrayStack`](crate::collections::stack::ArrayStack).
///
/// A storage tracks a logical capacity that only changes through [`StackStorage::reallocate`].
/// Slots past [`StackStorage::len`] never hold a value.
pub trait StackStorage<T> {
  /// Creates an empty storage with room for exactly `capacity` elements.
  fn with_capacity(capacity: usize) -> Self
  where
    Self: Sized;

  /// Returns the logical capacity of the storage.
  fn capacity(&self) -> usize;

  /// Returns the number of stored elements.
  fn len(&self) -> usize;

  /// Indicates whether the storage holds no elements.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Appends an element after the current top.
  ///
  /// The caller must ensure `len() < capacity()`.
  fn push(&mut self, value: T);

  /// Moves the top element out, leaving its slot empty.
  fn pop(&mut self) -> Option<T>;

  /// Returns a reference to the top element.
  fn peek(&self) -> Option<&T>;

  /// Returns a mutable reference to the top element.
  fn peek_mut(&mut self) -> Option<&mut T>;

  /// Moves the stored elements into a fresh buffer of `new_capacity` slots and drops the old one.
  ///
  /// The caller must ensure `new_capacity >= len()`.
  fn reallocate(&mut self, new_capacity: usize);
}
