//! The load stage: CSV file -> dataset.

use std::path::Path;

use matchflow_data::{DataError, Dataset};
use matchflow_report::ReportSink;
use tracing::info;

use crate::stage::StageData;

/// Read the match dataset from `path`.
///
/// Any read failure (missing file, malformed CSV) is reported to the sink as
/// exactly one message and yields [`StageData::Unavailable`]; no error escapes
/// the stage.
pub async fn load_matches(path: &Path, sink: &dyn ReportSink) -> StageData {
  match read_dataset(path).await {
    Ok(dataset) => {
      let (rows, columns) = dataset.shape();
      info!(path = %path.display(), rows, columns, "dataset_loaded");
      StageData::Ready(dataset)
    }
    Err(e) => {
      sink.text(&format!("Error loading data: {e}"));
      StageData::unavailable(format!("failed to load {}: {e}", path.display()))
    }
  }
}

async fn read_dataset(path: &Path) -> Result<Dataset, DataError> {
  let bytes = tokio::fs::read(path).await?;
  Dataset::from_csv_reader(bytes.as_slice())
}
