use core::fmt;


/// Errors reported when a stack cannot be built from the requested capacities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackConfigError {
  /// The initial capacity was zero, which leaves nothing to double.
  ZeroInitialCapacity,
  /// The maximum capacity is smaller than the initial capacity.
  MaxBelowInitial {
    /// Requested initial capacity.
    initial: usize,
    /// Requested maximum capacity.
    max:     usize,
  },
  /// The supplied storage already held elements.
  StorageNotEmpty {
    /// Number of elements found in the storage.
    len: usize,
  },
}

impl fmt::Display for StackConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | StackConfigError::ZeroInitialCapacity => write!(f, "initial capacity must be at least 1"),
      | StackConfigError::MaxBelowInitial { initial, max } => {
        write!(f, "max capacity {max} is below initial capacity {initial}")
      },
      | StackConfigError::StorageNotEmpty { len } => write!(f, "storage already holds {len} elements"),
    }
  }
}

impl core::error::Error for StackConfigError {}
