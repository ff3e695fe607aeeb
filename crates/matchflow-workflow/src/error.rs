use thiserror::Error;

use crate::atom::AtomError;

#[derive(Debug, Error)]
pub enum WorkflowError {
  #[error("atom already registered: {0}")]
  DuplicateAtom(String),

  #[error("atom '{atom}' depends on unregistered atom '{dependency}'")]
  UnknownDependency { atom: String, dependency: String },

  #[error("dependency cycle involving atoms: {remaining:?}")]
  CycleDetected { remaining: Vec<String> },

  #[error("atom '{atom}' failed: {source}")]
  AtomFailed {
    atom: String,
    #[source]
    source: AtomError,
  },
}
