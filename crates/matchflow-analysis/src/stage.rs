use matchflow_data::Dataset;
use serde::{Deserialize, Serialize};

/// What a pipeline stage hands to its dependents.
///
/// An explicit union rather than an optional dataset: a stage that was skipped
/// because upstream data never materialized is distinguishable from a stage
/// that produced a valid empty dataset, and the reason travels with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StageData {
  Ready(Dataset),
  Unavailable { reason: String },
}

impl StageData {
  pub fn unavailable(reason: impl Into<String>) -> Self {
    Self::Unavailable {
      reason: reason.into(),
    }
  }

  /// The dataset, if this stage produced one.
  pub fn ready(&self) -> Option<&Dataset> {
    match self {
      Self::Ready(dataset) => Some(dataset),
      Self::Unavailable { .. } => None,
    }
  }

  pub fn is_unavailable(&self) -> bool {
    matches!(self, Self::Unavailable { .. })
  }
}
