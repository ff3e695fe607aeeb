use std::sync::Arc;

use futures::future::BoxFuture;
use thiserror::Error;

/// Error produced by an atom's operation.
///
/// Atoms are expected to handle their own data-level failures; an `AtomError`
/// aborts the whole run, so it is reserved for conditions the pipeline cannot
/// continue past.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct AtomError(pub String);

impl AtomError {
  pub fn new(message: impl Into<String>) -> Self {
    Self(message.into())
  }
}

/// The operation an atom wraps.
///
/// Receives the cached outputs of the atom's declared dependencies, in
/// declaration order.
pub type AtomOp<T> =
  Box<dyn Fn(Vec<Arc<T>>) -> BoxFuture<'static, Result<T, AtomError>> + Send + Sync>;

/// A named unit of work with explicit dependencies on other atoms.
///
/// Immutable after registration.
pub struct Atom<T> {
  id: String,
  dependencies: Vec<String>,
  op: AtomOp<T>,
}

impl<T> Atom<T> {
  pub(crate) fn new(id: String, dependencies: Vec<String>, op: AtomOp<T>) -> Self {
    Self {
      id,
      dependencies,
      op,
    }
  }

  pub fn id(&self) -> &str {
    &self.id
  }

  pub fn dependencies(&self) -> &[String] {
    &self.dependencies
  }

  pub(crate) fn op(&self) -> &AtomOp<T> {
    &self.op
  }
}

impl<T> std::fmt::Debug for Atom<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Atom")
      .field("id", &self.id)
      .field("dependencies", &self.dependencies)
      .finish_non_exhaustive()
  }
}
