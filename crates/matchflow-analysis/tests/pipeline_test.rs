//! End-to-end tests for the load -> analyze -> visualize pipeline.

use std::path::PathBuf;
use std::sync::Arc;

use matchflow_analysis::{
  JITTER_AMOUNT, PipelineConfig, StageData, VISUALIZE_ATOM, build_pipeline, columns,
};
use matchflow_report::{MemorySink, ReportEvent, Trace};

/// 10 matches: 5 wins, 3 losses, 2 draws.
const SAMPLE_CSV: &str = "\
Date,Opponent,Team Score,Opponent Score,Result
2023-01-10,Zambia,2,1,Win
2023-02-18,Kenya,0,0,Draw
2023-03-05,Ghana,1,3,Loss
2023-04-12,Tanzania,3,0,Win
2023-05-20,Zimbabwe,1,0,Win
2023-06-08,Senegal,0,2,Loss
2023-07-15,Botswana,2,2,Draw
2023-08-23,Uganda,4,1,Win
2023-09-30,Morocco,0,1,Loss
2023-11-02,Comoros,2,0,Win
";

fn write_sample(dir: &tempfile::TempDir) -> PathBuf {
  let path = dir.path().join("matches.csv");
  std::fs::write(&path, SAMPLE_CSV).expect("failed to write sample csv");
  path
}

async fn run(data_path: PathBuf) -> (Arc<MemorySink>, StageData) {
  let sink = Arc::new(MemorySink::new());
  let config = PipelineConfig {
    data_path,
    preview_rows: 10,
  };
  let workflow = build_pipeline(config, sink.clone()).expect("pipeline should register");
  let result = workflow.execute().await.expect("pipeline should execute");

  assert_eq!(result.order(), ["load_data", "analyze_data", "visualize_data"]);
  let last = result
    .output(VISUALIZE_ATOM)
    .expect("visualize output should be cached")
    .clone();
  (sink, last)
}

#[tokio::test]
async fn full_run_produces_tables_and_figures() {
  let dir = tempfile::tempdir().unwrap();
  let (sink, last) = run(write_sample(&dir)).await;

  // The final stage forwards a ready dataset with all 10 rows.
  let dataset = last.ready().expect("final stage should be ready");
  assert_eq!(dataset.shape().0, 10);

  // Head preview plus win filter.
  let tables = sink.tables();
  assert_eq!(tables.len(), 2);
  let wins = &tables[1];
  assert_eq!(wins.shape().0, 5);
  assert_eq!(wins.columns(), dataset.columns());
  let result_idx = wins.column_index(columns::RESULT).unwrap();
  for row in wins.rows() {
    assert_eq!(row[result_idx].as_str(), Some(columns::WIN));
  }

  // Scatter, time series (all dates parse), and bar.
  let figures = sink.figures();
  let names: Vec<&str> = figures.iter().map(|(name, _)| name.as_str()).collect();
  assert_eq!(names, ["scores_scatter", "scores_over_time", "results_summary"]);
}

#[tokio::test]
async fn bar_figure_counts_every_match_once() {
  let dir = tempfile::tempdir().unwrap();
  let (sink, _) = run(write_sample(&dir)).await;

  let figures = sink.figures();
  let (_, bar) = figures
    .iter()
    .find(|(name, _)| name == "results_summary")
    .expect("bar figure should be emitted");

  match &bar.traces[0] {
    Trace::Bar {
      categories, values, ..
    } => {
      assert_eq!(categories.len(), 3);
      assert_eq!(values.iter().sum::<u64>(), 10);
      assert_eq!(categories[0], columns::WIN);
      assert_eq!(values[0], 5);
    }
    other => panic!("unexpected trace: {other:?}"),
  }
}

#[tokio::test]
async fn scatter_points_stay_within_jitter_of_true_scores() {
  let dir = tempfile::tempdir().unwrap();
  let (sink, last) = run(write_sample(&dir)).await;
  let dataset = last.ready().unwrap();

  let figures = sink.figures();
  let (_, scatter) = figures
    .iter()
    .find(|(name, _)| name == "scores_scatter")
    .expect("scatter figure should be emitted");

  // Each trace holds the rows of one result value, in row order; compare
  // point by point against the unjittered scores.
  for trace in &scatter.traces {
    let Trace::Scatter { name, x, y, .. } = trace else {
      panic!("unexpected trace: {trace:?}");
    };
    let group = dataset.filter_eq(columns::RESULT, name).unwrap();
    let team = group.numeric_column(columns::TEAM_SCORE).unwrap();
    let opponent = group.numeric_column(columns::OPPONENT_SCORE).unwrap();

    assert_eq!(x.len(), group.shape().0);
    for ((jittered, original), (jittered_y, original_y)) in
      x.iter().zip(&opponent).zip(y.iter().zip(&team))
    {
      let (jittered, original) = (jittered.unwrap(), original.unwrap());
      assert!((jittered - original).abs() <= JITTER_AMOUNT + 1e-9);
      let (jittered_y, original_y) = (jittered_y.unwrap(), original_y.unwrap());
      assert!((jittered_y - original_y).abs() <= JITTER_AMOUNT + 1e-9);
    }
  }
}

#[tokio::test]
async fn missing_file_degrades_without_failing_the_workflow() {
  let dir = tempfile::tempdir().unwrap();
  let (sink, last) = run(dir.path().join("nope.csv")).await;

  assert!(last.is_unavailable());

  // One message per stage: the load error, then one skip notice each from
  // analyze and visualize. Nothing else reaches the sink.
  let events = sink.events();
  assert_eq!(events.len(), 3);
  assert!(events.iter().all(|e| matches!(e, ReportEvent::Text(_))));
  assert!(sink.texts()[0].starts_with("Error loading data"));
  assert!(sink.tables().is_empty());
  assert!(sink.figures().is_empty());
}
