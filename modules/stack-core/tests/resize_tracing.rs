use std::{
  io,
  sync::{Arc, Mutex},
};

use array_stack_core_rs::collections::stack::ArrayStack;
use tracing_subscriber::{fmt, util::SubscriberInitExt};

#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
  fn contents(&self) -> String {
    String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
  }
}

impl io::Write for CapturedOutput {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

fn capture<F: FnOnce()>(f: F) -> String {
  let output = CapturedOutput::default();
  let writer = output.clone();
  let subscriber = fmt()
    .with_max_level(tracing::Level::TRACE)
    .with_ansi(false)
    .with_writer(move || writer.clone())
    .finish();
  let guard = subscriber.set_default();
  f();
  drop(guard);
  output.contents()
}

#[test]
fn growth_and_shrink_emit_resize_events() {
  let logs = capture(|| {
    let mut stack = ArrayStack::with_capacities(1, 4).unwrap();
    stack.push('a').unwrap();
    stack.push('b').unwrap();
    stack.pop().unwrap();
  });

  assert!(logs.contains("stack created"));
  assert!(logs.contains("array_stack::resize"));
  assert!(logs.contains("from=1 to=2 len=1"));
  assert!(logs.contains("from=2 to=1 len=1"));
  assert!(logs.contains("kind=\"grow\"") || logs.contains("kind=grow"));
  assert!(logs.contains("kind=\"shrink\"") || logs.contains("kind=shrink"));
}

#[test]
fn rejected_operations_are_logged_at_debug() {
  let logs = capture(|| {
    let mut stack = ArrayStack::with_capacities(1, 1).unwrap();
    assert!(stack.pop().is_err());
    stack.push(1).unwrap();
    assert!(stack.push(2).is_err());
  });

  assert!(logs.contains("stack pop on empty"));
  assert!(logs.contains("stack push rejected"));
}
