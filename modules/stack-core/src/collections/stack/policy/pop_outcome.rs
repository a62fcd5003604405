/// Outcome produced by a successful stack pop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopOutcome {
  /// The element was removed without touching the buffer capacity.
  Popped,
  /// The buffer was reallocated after the element was removed.
  ShrankTo {
    /// New capacity after the buffer has shrunk.
    capacity: usize,
  },
}

impl From<&PopOutcome> for &'static str {
  fn from(outcome: &PopOutcome) -> Self {
    match outcome {
      | PopOutcome::Popped => "pop",
      | PopOutcome::ShrankTo { .. } => "shrink",
    }
  }
}
