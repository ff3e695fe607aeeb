//! The analysis stage: structure summary, score coercion, win filter.

use matchflow_data::Dataset;
use matchflow_report::ReportSink;
use tracing::debug;

use crate::columns::{OPPONENT_SCORE, RESULT, TEAM_SCORE, WIN};
use crate::error::StageError;
use crate::stage::StageData;

/// Analyze the loaded dataset.
///
/// On [`StageData::Unavailable`] input: one message, input forwarded
/// unchanged. Otherwise the stage logs the dataset structure, emits a
/// `head(preview_rows)` table, coerces both score columns to numbers, groups
/// the (team score, opponent score) pairs, and emits the win-filtered table.
/// The returned dataset has the same row count as the input.
pub fn analyze_matches(
  input: &StageData,
  sink: &dyn ReportSink,
  preview_rows: usize,
) -> StageData {
  let Some(dataset) = input.ready() else {
    sink.text("No data available, cannot proceed with analysis.");
    return input.clone();
  };

  let mut dataset = dataset.clone();

  sink.text("## Match analysis");
  sink.text(&format!("Columns in the dataset: {:?}", dataset.columns()));
  let (rows, columns) = dataset.shape();
  sink.text(&format!("Dataset shape: ({rows}, {columns})"));
  let types: Vec<String> = dataset
    .column_types()
    .iter()
    .map(|(name, ty)| format!("{name}: {ty}"))
    .collect();
  sink.text(&format!("Column types: {}", types.join(", ")));
  sink.text(&format!("First {preview_rows} rows of the data:"));
  sink.table(&dataset.head(preview_rows));

  if let Err(e) = analyze_scores(&mut dataset, sink) {
    sink.text(&format!("Error analyzing data: {e}"));
    return StageData::unavailable(format!("analysis failed: {e}"));
  }

  StageData::Ready(dataset)
}

fn analyze_scores(dataset: &mut Dataset, sink: &dyn ReportSink) -> Result<(), StageError> {
  dataset.coerce_numeric(TEAM_SCORE)?;
  dataset.coerce_numeric(OPPONENT_SCORE)?;

  // Grouped for the record; nothing downstream consumes this.
  let score_pairs = dataset.pair_counts(TEAM_SCORE, OPPONENT_SCORE)?;
  debug!(distinct_pairs = score_pairs.len(), "score_pairs_grouped");

  let wins = dataset.filter_eq(RESULT, WIN)?;
  sink.text("**Filtered Data (Wins)**");
  sink.table(&wins);

  Ok(())
}
