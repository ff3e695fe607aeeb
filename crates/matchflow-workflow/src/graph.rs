use std::collections::HashMap;

use crate::error::WorkflowError;

/// Graph structure for traversal and validation.
///
/// Built from `(atom id, dependency ids)` entries in registration order; all
/// derived orderings are deterministic with respect to that order.
#[derive(Debug, Clone)]
pub struct Graph {
  /// Atom ids in registration order.
  order: Vec<String>,
  /// Adjacency list: atom id -> list of downstream atom ids.
  adjacency: HashMap<String, Vec<String>>,
  /// Reverse adjacency: atom id -> list of upstream atom ids.
  reverse_adjacency: HashMap<String, Vec<String>>,
  /// Atoms with no dependencies.
  entry_points: Vec<String>,
}

impl Graph {
  /// Build a graph from `(id, dependencies)` entries.
  ///
  /// Dependency ids are not checked here; [`Graph::topological_order`] rejects
  /// cycles and [`crate::Workflow::validate`] rejects unknown references.
  pub fn new(entries: &[(String, Vec<String>)]) -> Self {
    let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();
    let mut reverse_adjacency: HashMap<String, Vec<String>> = HashMap::new();
    let order: Vec<String> = entries.iter().map(|(id, _)| id.clone()).collect();

    for (id, _) in entries {
      adjacency.entry(id.clone()).or_default();
      reverse_adjacency.entry(id.clone()).or_default();
    }

    for (id, dependencies) in entries {
      for dep in dependencies {
        adjacency.entry(dep.clone()).or_default().push(id.clone());
        reverse_adjacency
          .entry(id.clone())
          .or_default()
          .push(dep.clone());
      }
    }

    let entry_points: Vec<String> = order
      .iter()
      .filter(|id| reverse_adjacency.get(*id).is_none_or(|v| v.is_empty()))
      .cloned()
      .collect();

    Self {
      order,
      adjacency,
      reverse_adjacency,
      entry_points,
    }
  }

  /// Get entry points (atoms with no dependencies).
  pub fn entry_points(&self) -> &[String] {
    &self.entry_points
  }

  /// Get downstream atoms for a given atom.
  pub fn downstream(&self, id: &str) -> &[String] {
    self.adjacency.get(id).map(|v| v.as_slice()).unwrap_or(&[])
  }

  /// Get upstream atoms for a given atom.
  pub fn upstream(&self, id: &str) -> &[String] {
    self
      .reverse_adjacency
      .get(id)
      .map(|v| v.as_slice())
      .unwrap_or(&[])
  }

  /// Compute a topological order over all atoms (Kahn's algorithm).
  ///
  /// The order is deterministic: ties are broken by registration order. Fails
  /// with [`WorkflowError::CycleDetected`] when any atom cannot be scheduled,
  /// naming the atoms left unscheduled (the cycle members and everything
  /// downstream of them).
  pub fn topological_order(&self) -> Result<Vec<String>, WorkflowError> {
    let mut in_degree: HashMap<&str, usize> = self
      .order
      .iter()
      .map(|id| (id.as_str(), self.upstream(id).len()))
      .collect();

    let mut sorted: Vec<String> = Vec::with_capacity(self.order.len());
    let mut ready: Vec<&str> = self
      .order
      .iter()
      .map(String::as_str)
      .filter(|id| in_degree[id] == 0)
      .collect();

    let mut next = 0;
    while next < ready.len() {
      let id = ready[next];
      next += 1;
      sorted.push(id.to_string());

      for down in self.downstream(id) {
        let degree = in_degree
          .get_mut(down.as_str())
          .expect("downstream atom missing from in-degree map");
        *degree -= 1;
        if *degree == 0 {
          ready.push(down.as_str());
        }
      }
    }

    if sorted.len() != self.order.len() {
      let remaining: Vec<String> = self
        .order
        .iter()
        .filter(|id| !sorted.contains(id))
        .cloned()
        .collect();
      return Err(WorkflowError::CycleDetected { remaining });
    }

    Ok(sorted)
  }
}
