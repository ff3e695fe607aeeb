//! Workflow execution results.

use std::collections::HashMap;
use std::sync::Arc;

/// Result of a complete workflow execution.
///
/// Holds every atom's cached output, keyed by atom id, plus the order the
/// atoms actually ran in.
#[derive(Debug)]
pub struct ExecutionResult<T> {
  order: Vec<String>,
  outputs: HashMap<String, Arc<T>>,
}

impl<T> ExecutionResult<T> {
  pub(crate) fn new(order: Vec<String>, outputs: HashMap<String, Arc<T>>) -> Self {
    Self { order, outputs }
  }

  /// Atom ids in the order they executed.
  pub fn order(&self) -> &[String] {
    &self.order
  }

  /// The cached output of an atom, if it ran.
  pub fn output(&self, id: &str) -> Option<&T> {
    self.outputs.get(id).map(Arc::as_ref)
  }

  /// Number of atoms that executed.
  pub fn len(&self) -> usize {
    self.order.len()
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }
}
