use matchflow_data::Dataset;
use thiserror::Error;

use crate::figure::Figure;

#[derive(Debug, Error)]
pub enum ReportError {
  #[error("failed to create artifact directory: {0}")]
  Io(#[from] std::io::Error),
}

/// Where pipeline output goes.
///
/// The sink interface is infallible on purpose: stages report what they have
/// and move on. A sink that cannot deliver an event handles that itself (the
/// console sink logs and skips).
pub trait ReportSink: Send + Sync {
  /// Emit a line of text.
  fn text(&self, message: &str);

  /// Emit a table preview.
  fn table(&self, table: &Dataset);

  /// Emit a chart figure under an artifact name.
  fn figure(&self, name: &str, figure: &Figure);
}
