/// Outcome produced by a successful stack push.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushOutcome {
  /// The element was stored without touching the buffer capacity.
  Pushed,
  /// The buffer was reallocated before the element was stored.
  GrewTo {
    /// New capacity after the buffer has grown.
    capacity: usize,
  },
}

impl From<&PushOutcome> for &'static str {
  fn from(outcome: &PushOutcome) -> Self {
    match outcome {
      | PushOutcome::Pushed => "push",
      | PushOutcome::GrewTo { .. } => "grow",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn push_outcome_pushed_variant() {
    let outcome = PushOutcome::Pushed;
    let desc: &str = (&outcome).into();
    assert_eq!(desc, "push");
  }

  #[test]
  fn push_outcome_grew_to_variant() {
    let outcome = PushOutcome::GrewTo { capacity: 32 };
    if let PushOutcome::GrewTo { capacity } = outcome {
      assert_eq!(capacity, 32);
    } else {
      panic!("Expected GrewTo variant");
    }
    let desc: &str = (&outcome).into();
    assert_eq!(desc, "grow");
  }

  #[test]
  fn push_outcome_debug_format() {
    let debug_str = format!("{:?}", PushOutcome::GrewTo { capacity: 50 });
    assert!(debug_str.contains("GrewTo"));
    assert!(debug_str.contains("50"));
  }
}
