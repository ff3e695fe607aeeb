use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
  #[error("failed to read dataset: {0}")]
  Io(#[from] std::io::Error),

  #[error("failed to parse csv: {0}")]
  Csv(#[from] csv::Error),

  #[error("column not found: {0}")]
  MissingColumn(String),

  #[error("column already exists: {0}")]
  DuplicateColumn(String),

  #[error("column '{column}' has {actual} values, dataset has {expected} rows")]
  ShapeMismatch {
    column: String,
    expected: usize,
    actual: usize,
  },

  #[error("row {row} has {actual} cells, dataset has {expected} columns")]
  RaggedRow {
    row: usize,
    expected: usize,
    actual: usize,
  },
}
