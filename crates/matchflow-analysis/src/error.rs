use matchflow_data::DataError;
use thiserror::Error;

/// Stage-internal failure, reported to the sink and converted to
/// [`crate::StageData::Unavailable`] or a skipped figure; never propagated out
/// of a stage.
#[derive(Debug, Error)]
pub enum StageError {
  #[error(transparent)]
  Data(#[from] DataError),

  #[error("{0}")]
  Figure(String),
}
