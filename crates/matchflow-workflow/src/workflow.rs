//! Workflow registration and execution.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::{debug, info};

use crate::atom::{Atom, AtomError};
use crate::error::WorkflowError;
use crate::graph::Graph;
use crate::result::ExecutionResult;

/// A workflow: a registry of atoms keyed by id, executed in dependency order.
///
/// `T` is the value type atoms exchange. Each atom receives the outputs of its
/// declared dependencies as `Arc<T>` handles and produces one `T` of its own,
/// cached for dependents.
pub struct Workflow<T> {
  order: Vec<String>,
  atoms: HashMap<String, Atom<T>>,
}

impl<T: Send + Sync + 'static> Workflow<T> {
  pub fn new() -> Self {
    Self {
      order: Vec::new(),
      atoms: HashMap::new(),
    }
  }

  /// Register an atom.
  ///
  /// `dependencies` name previously (or later) registered atoms whose outputs
  /// are passed to `op` in declaration order. Registering the same id twice is
  /// an error; dependency ids are checked by [`Workflow::validate`], not here,
  /// so registration order does not matter.
  pub fn register<F>(
    &mut self,
    id: impl Into<String>,
    dependencies: &[&str],
    op: F,
  ) -> Result<(), WorkflowError>
  where
    F: Fn(Vec<Arc<T>>) -> BoxFuture<'static, Result<T, AtomError>> + Send + Sync + 'static,
  {
    let id = id.into();
    if self.atoms.contains_key(&id) {
      return Err(WorkflowError::DuplicateAtom(id));
    }

    let dependencies: Vec<String> = dependencies.iter().map(|d| d.to_string()).collect();
    debug!(atom = %id, dependencies = ?dependencies, "atom_registered");

    self.order.push(id.clone());
    self
      .atoms
      .insert(id.clone(), Atom::new(id, dependencies, Box::new(op)));
    Ok(())
  }

  /// Number of registered atoms.
  pub fn len(&self) -> usize {
    self.order.len()
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }

  /// Build the graph structure for traversal.
  pub fn graph(&self) -> Graph {
    let entries: Vec<(String, Vec<String>)> = self
      .order
      .iter()
      .map(|id| (id.clone(), self.atoms[id].dependencies().to_vec()))
      .collect();
    Graph::new(&entries)
  }

  /// Validate the workflow and compute its execution order.
  ///
  /// Rejects dependencies on unregistered atoms and dependency cycles. Runs
  /// before any atom executes.
  pub fn validate(&self) -> Result<Vec<String>, WorkflowError> {
    for id in &self.order {
      for dep in self.atoms[id].dependencies() {
        if !self.atoms.contains_key(dep) {
          return Err(WorkflowError::UnknownDependency {
            atom: id.clone(),
            dependency: dep.clone(),
          });
        }
      }
    }

    self.graph().topological_order()
  }

  /// Execute all registered atoms, strictly sequentially, in topological
  /// order.
  ///
  /// Each atom runs at most once and only after all of its dependencies. An
  /// atom operation error aborts the run with [`WorkflowError::AtomFailed`].
  pub async fn execute(&self) -> Result<ExecutionResult<T>, WorkflowError> {
    let order = self.validate()?;
    info!(atoms = order.len(), "workflow_started");

    let mut outputs: HashMap<String, Arc<T>> = HashMap::new();

    for id in &order {
      let atom = &self.atoms[id];
      let inputs: Vec<Arc<T>> = atom
        .dependencies()
        .iter()
        .map(|dep| Arc::clone(&outputs[dep]))
        .collect();

      debug!(atom = %id, dependencies = ?atom.dependencies(), "atom_started");

      let value = (atom.op())(inputs)
        .await
        .map_err(|source| WorkflowError::AtomFailed {
          atom: id.clone(),
          source,
        })?;

      debug!(atom = %id, "atom_completed");
      outputs.insert(id.clone(), Arc::new(value));
    }

    info!(atoms = order.len(), "workflow_completed");
    Ok(ExecutionResult::new(order, outputs))
  }
}

impl<T: Send + Sync + 'static> Default for Workflow<T> {
  fn default() -> Self {
    Self::new()
  }
}
