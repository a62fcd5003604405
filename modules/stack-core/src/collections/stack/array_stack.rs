use core::{fmt, marker::PhantomData};

use tracing::{debug, trace};

use crate::collections::stack::{
  PopOutcome, PushError, PushOutcome, ResizePolicy, StackConfig, StackConfigError, StackError, StackStorage,
  VecStackStorage,
};


/// Target of the events emitted whenever the buffer is reallocated.
const RESIZE_TARGET: &str = "array_stack::resize";

const DEFAULT_POLICY: ResizePolicy =
  ResizePolicy::new(StackConfig::DEFAULT_INITIAL_CAPACITY, StackConfig::DEFAULT_MAX_CAPACITY);

/// LIFO stack over a contiguous buffer that doubles when exhausted and halves when half empty.
///
/// The capacity never exceeds [`max_capacity`](Self::max_capacity) and never drops below
/// [`initial_capacity`](Self::initial_capacity). It only changes inside [`push`](Self::push) and
/// [`pop`](Self::pop).
///
/// ```
/// use array_stack_core_rs::collections::stack::{ArrayStack, StackError};
///
/// let mut stack = ArrayStack::with_capacities(1, 5).unwrap();
/// stack.push("a").unwrap();
/// stack.push("b").unwrap();
/// assert_eq!(stack.capacity(), 2);
/// assert_eq!(stack.pop(), Ok("b"));
/// assert_eq!(stack.peek(), Ok(&"a"));
/// assert_eq!(stack.pop(), Ok("a"));
/// assert_eq!(stack.pop(), Err(StackError::Empty));
/// ```
pub struct ArrayStack<T, S = VecStackStorage<T>>
where
  S: StackStorage<T>, {
  storage: S,
  policy:  ResizePolicy,
  _pd:     PhantomData<T>,
}

impl<T> ArrayStack<T> {
  /// Creates an empty stack with an initial capacity of 16 and no practical ceiling.
  #[must_use]
  pub fn new() -> Self {
    Self::from_policy(DEFAULT_POLICY)
  }

  /// Creates an empty stack with the given initial capacity and no practical ceiling.
  ///
  /// # Errors
  ///
  /// Returns [`StackConfigError::ZeroInitialCapacity`] when `initial_capacity` is zero.
  pub fn with_initial_capacity(initial_capacity: usize) -> Result<Self, StackConfigError> {
    Self::from_config(StackConfig::new().with_initial_capacity(initial_capacity))
  }

  /// Creates an empty stack with the given initial and maximum capacities.
  ///
  /// # Errors
  ///
  /// Returns a [`StackConfigError`] when `initial_capacity` is zero or exceeds `max_capacity`.
  pub fn with_capacities(initial_capacity: usize, max_capacity: usize) -> Result<Self, StackConfigError> {
    Self::from_config(StackConfig::new().with_initial_capacity(initial_capacity).with_max_capacity(max_capacity))
  }

  /// Creates an empty stack from a configuration value.
  ///
  /// # Errors
  ///
  /// Returns a [`StackConfigError`] when the configuration does not validate.
  pub fn from_config(config: StackConfig) -> Result<Self, StackConfigError> {
    config.validate().map(Self::from_policy)
  }
}

impl<T, S> ArrayStack<T, S>
where
  S: StackStorage<T>,
{
  /// Creates an empty stack on top of a caller-supplied storage.
  ///
  /// The storage is reallocated to the initial capacity when it differs.
  ///
  /// # Errors
  ///
  /// Returns a [`StackConfigError`] when the configuration does not validate or when the storage
  /// already holds elements.
  pub fn with_storage(config: StackConfig, mut storage: S) -> Result<Self, StackConfigError> {
    let policy = config.validate()?;
    if !storage.is_empty() {
      return Err(StackConfigError::StorageNotEmpty { len: storage.len() });
    }
    if storage.capacity() != policy.initial_capacity() {
      storage.reallocate(policy.initial_capacity());
    }
    Ok(Self::from_parts(storage, policy))
  }

  fn from_policy(policy: ResizePolicy) -> Self {
    Self::from_parts(S::with_capacity(policy.initial_capacity()), policy)
  }

  fn from_parts(storage: S, policy: ResizePolicy) -> Self {
    trace!(
      initial_capacity = policy.initial_capacity(),
      max_capacity = policy.max_capacity(),
      "stack created"
    );
    Self { storage, policy, _pd: PhantomData }
  }

  /// Pushes an item onto the top of the stack, doubling the buffer first when it is exhausted.
  ///
  /// # Errors
  ///
  /// Returns a [`PushError`] holding `item` when the stack already holds
  /// [`max_capacity`](Self::max_capacity) elements. The stack is left unchanged.
  pub fn push(&mut self, item: T) -> Result<PushOutcome, PushError<T>> {
    let len = self.storage.len();
    if !self.policy.admits(len) {
      debug!(len, max_capacity = self.policy.max_capacity(), "stack push rejected");
      return Err(PushError::new(item));
    }

    let outcome = match self.policy.grow_target(len, self.storage.capacity()) {
      | Some(capacity) => PushOutcome::GrewTo { capacity },
      | None => PushOutcome::Pushed,
    };
    if let PushOutcome::GrewTo { capacity } = outcome {
      self.reallocate(capacity, (&outcome).into());
    }
    self.storage.push(item);
    Ok(outcome)
  }

  /// Removes and returns the top item, halving the buffer afterwards when it is at most half full.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn pop(&mut self) -> Result<T, StackError> {
    self.pop_with_outcome().map(|(item, _)| item)
  }

  /// Same as [`pop`](Self::pop), additionally reporting whether the buffer shrank.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn pop_with_outcome(&mut self) -> Result<(T, PopOutcome), StackError> {
    let Some(item) = self.storage.pop() else {
      debug!("stack pop on empty");
      return Err(StackError::Empty);
    };

    let outcome = match self.policy.shrink_target(self.storage.len(), self.storage.capacity()) {
      | Some(capacity) => PopOutcome::ShrankTo { capacity },
      | None => PopOutcome::Popped,
    };
    if let PopOutcome::ShrankTo { capacity } = outcome {
      self.reallocate(capacity, (&outcome).into());
    }
    Ok((item, outcome))
  }

  /// Returns a reference to the top item.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn peek(&self) -> Result<&T, StackError> {
    self.storage.peek().ok_or(StackError::Empty)
  }

  /// Returns a mutable reference to the top item.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn peek_mut(&mut self) -> Result<&mut T, StackError> {
    self.storage.peek_mut().ok_or(StackError::Empty)
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.storage.len()
  }

  /// Indicates whether the stack is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.storage.is_empty()
  }

  /// Indicates whether the next push would be rejected.
  #[must_use]
  pub fn is_full(&self) -> bool {
    !self.policy.admits(self.storage.len())
  }

  /// Returns the current capacity of the backing buffer.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.storage.capacity()
  }

  /// Returns the capacity the buffer never shrinks below.
  #[must_use]
  pub const fn initial_capacity(&self) -> usize {
    self.policy.initial_capacity()
  }

  /// Returns the largest number of elements the stack accepts.
  #[must_use]
  pub const fn max_capacity(&self) -> usize {
    self.policy.max_capacity()
  }

  /// Returns the resize policy in effect.
  #[must_use]
  pub const fn policy(&self) -> &ResizePolicy {
    &self.policy
  }

  /// Provides read access to the backing storage.
  #[must_use]
  pub const fn storage(&self) -> &S {
    &self.storage
  }

  fn reallocate(&mut self, to: usize, kind: &'static str) {
    let from = self.storage.capacity();
    self.storage.reallocate(to);
    trace!(target: RESIZE_TARGET, from, to, len = self.storage.len(), kind, "stack buffer reallocated");
  }
}

impl<T> Default for ArrayStack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T, S> Clone for ArrayStack<T, S>
where
  S: StackStorage<T> + Clone,
{
  fn clone(&self) -> Self {
    Self { storage: self.storage.clone(), policy: self.policy, _pd: PhantomData }
  }
}

impl<T, S> fmt::Debug for ArrayStack<T, S>
where
  S: StackStorage<T>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ArrayStack")
      .field("len", &self.storage.len())
      .field("capacity", &self.storage.capacity())
      .field("policy", &self.policy)
      .finish()
  }
}
