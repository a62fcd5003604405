use alloc::vec::Vec;
use core::mem;

use super::StackStorage;


/// Contiguous stack storage backed by `alloc::vec::Vec`.
///
/// `limit` is the logical capacity. The allocation behind `data` is only replaced by
/// [`StackStorage::reallocate`], never by `Vec`'s own amortized growth.
#[derive(Debug, Clone)]
pub struct VecStackStorage<T> {
  data:  Vec<T>,
  limit: usize,
}

impl<T> VecStackStorage<T> {
  /// Returns the stored elements from bottom to top.
  #[must_use]
  pub fn as_slice(&self) -> &[T] {
    &self.data
  }
}

impl<T> StackStorage<T> for VecStackStorage<T> {
  fn with_capacity(capacity: usize) -> Self {
    Self { data: Vec::with_capacity(capacity), limit: capacity }
  }

  fn capacity(&self) -> usize {
    self.limit
  }

  fn len(&self) -> usize {
    self.data.len()
  }

  fn push(&mut self, value: T) {
    debug_assert!(self.data.len() < self.limit);
    self.data.push(value);
  }

  fn pop(&mut self) -> Option<T> {
    self.data.pop()
  }

  fn peek(&self) -> Option<&T> {
    self.data.last()
  }

  fn peek_mut(&mut self) -> Option<&mut T> {
    self.data.last_mut()
  }

  fn reallocate(&mut self, new_capacity: usize) {
    debug_assert!(new_capacity >= self.data.len());
    let mut fresh = Vec::with_capacity(new_capacity);
    fresh.append(&mut self.data);
    drop(mem::replace(&mut self.data, fresh));
    self.limit = new_capacity;
  }
}
