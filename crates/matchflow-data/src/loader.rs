//! CSV loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::dataset::Dataset;
use crate::error::DataError;

impl Dataset {
  /// Load a dataset from a CSV reader. The first record is the header; every
  /// cell loads as a string.
  pub fn from_csv_reader<R: Read>(reader: R) -> Result<Dataset, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);

    let columns: Vec<String> = csv_reader
      .headers()?
      .iter()
      .map(|h| h.trim().to_string())
      .collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
      let record = record?;
      rows.push(
        record
          .iter()
          .map(|cell| Value::String(cell.to_string()))
          .collect(),
      );
    }

    let dataset = Dataset::new(columns, rows)?;
    debug!(
      rows = dataset.shape().0,
      columns = dataset.shape().1,
      "csv_loaded"
    );
    Ok(dataset)
  }

  /// Load a dataset from a CSV file on disk.
  pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Dataset, DataError> {
    let file = File::open(path.as_ref())?;
    Dataset::from_csv_reader(file)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const SAMPLE: &str = "\
Date,Opponent,Team Score,Opponent Score,Result
2023-01-10,Zambia,2,1,Win
2023-02-18,Kenya,0,0,Draw
2023-03-05,Ghana,1,3,Loss
";

  #[test]
  fn loads_headers_and_all_rows() {
    let ds = Dataset::from_csv_reader(SAMPLE.as_bytes()).unwrap();
    assert_eq!(
      ds.columns(),
      ["Date", "Opponent", "Team Score", "Opponent Score", "Result"]
    );
    assert_eq!(ds.shape(), (3, 5));
    assert_eq!(ds.rows()[0][1], serde_json::json!("Zambia"));
  }

  #[test]
  fn header_only_csv_is_an_empty_dataset() {
    let ds = Dataset::from_csv_reader("a,b,c\n".as_bytes()).unwrap();
    assert!(ds.is_empty());
    assert_eq!(ds.shape(), (0, 3));
  }

  #[test]
  fn missing_file_is_an_io_error() {
    let err = Dataset::from_csv_path("does/not/exist.csv").unwrap_err();
    assert!(matches!(err, DataError::Io(_)));
  }

  #[test]
  fn ragged_record_is_a_csv_error() {
    let err = Dataset::from_csv_reader("a,b\n1,2,3\n".as_bytes()).unwrap_err();
    assert!(matches!(err, DataError::Csv(_)));
  }
}
