//! The visualization stage: scatter, time-series, and bar figures.

use chrono::NaiveDate;
use matchflow_data::{Dataset, cell_text};
use matchflow_report::{Annotation, Figure, Layout, ReportSink, Shape, Trace, TraceMode};
use rand::Rng;
use tracing::debug;

use crate::columns::{
  DATE, OPPONENT, OPPONENT_SCORE, OPPONENT_SCORE_JITTERED, RESULT, TEAM_SCORE,
  TEAM_SCORE_JITTERED,
};
use crate::error::StageError;
use crate::jitter::{JITTER_AMOUNT, jittered};
use crate::stage::StageData;

/// Date formats accepted for the time-series x axis.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y"];

/// Build and emit the figures for the analyzed dataset.
///
/// On [`StageData::Unavailable`] input: one message, no figures. Otherwise
/// emits a jittered scatter of team vs opponent scores, a score-over-time
/// line figure when at least one date parses (silently skipped otherwise),
/// and a bar figure of result counts. A failed figure is reported as text and
/// never stops the remaining figures.
pub fn visualize_matches(input: &StageData, sink: &dyn ReportSink) -> StageData {
  visualize_with_rng(input, sink, &mut rand::thread_rng())
}

/// [`visualize_matches`] with a caller-supplied jitter source.
pub fn visualize_with_rng(
  input: &StageData,
  sink: &dyn ReportSink,
  rng: &mut impl Rng,
) -> StageData {
  let Some(dataset) = input.ready() else {
    sink.text("No data available, cannot create the plots.");
    return input.clone();
  };

  let mut dataset = dataset.clone();

  match scatter_figure(&mut dataset, rng) {
    Ok(figure) => sink.figure("scores_scatter", &figure),
    Err(e) => sink.text(&format!("Error creating or displaying the plot: {e}")),
  }

  match time_series_figure(&dataset) {
    Ok(Some(figure)) => sink.figure("scores_over_time", &figure),
    Ok(None) => debug!("no parseable dates, time series skipped"),
    Err(e) => sink.text(&format!("Could not create time series plot: {e}")),
  }

  match results_bar_figure(&dataset) {
    Ok(figure) => sink.figure("results_summary", &figure),
    Err(e) => sink.text(&format!("Error creating or displaying the plot: {e}")),
  }

  input.clone()
}

/// Scatter of team score against opponent score, one trace per result value,
/// with an equal-score diagonal and win/loss region labels.
fn scatter_figure(dataset: &mut Dataset, rng: &mut impl Rng) -> Result<Figure, StageError> {
  let team = dataset.numeric_column(TEAM_SCORE)?;
  let opponent = dataset.numeric_column(OPPONENT_SCORE)?;

  let highest = team
    .iter()
    .chain(&opponent)
    .flatten()
    .fold(f64::NAN, |a, &b| a.max(b));
  if !highest.is_finite() {
    return Err(StageError::Figure("no numeric scores to plot".to_string()));
  }
  let score_max = highest + 1.0;

  dataset.push_column(TEAM_SCORE_JITTERED, jittered(rng, &team, JITTER_AMOUNT))?;
  dataset.push_column(
    OPPONENT_SCORE_JITTERED,
    jittered(rng, &opponent, JITTER_AMOUNT),
  )?;
  let team_jittered = dataset.numeric_column(TEAM_SCORE_JITTERED)?;
  let opponent_jittered = dataset.numeric_column(OPPONENT_SCORE_JITTERED)?;

  // One trace per result value, in order of first appearance.
  let result_idx = dataset.column_index(RESULT)?;
  let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
  for (i, row) in dataset.rows().iter().enumerate() {
    let label = cell_text(&row[result_idx]);
    match groups.iter_mut().find(|(l, _)| *l == label) {
      Some((_, rows)) => rows.push(i),
      None => groups.push((label, vec![i])),
    }
  }

  let dates = dataset.column(DATE).ok();
  let opponents = dataset.column(OPPONENT).ok();
  let team_cells = dataset.column(TEAM_SCORE)?;
  let opponent_cells = dataset.column(OPPONENT_SCORE)?;

  let mut figure = Figure::new("Match Scores");
  for (label, rows) in &groups {
    let hover = match (&dates, &opponents) {
      (Some(dates), Some(opponents)) => Some(
        rows
          .iter()
          .map(|&i| {
            format!(
              "{} vs {} ({}-{})",
              cell_text(dates[i]),
              cell_text(opponents[i]),
              cell_text(team_cells[i]),
              cell_text(opponent_cells[i]),
            )
          })
          .collect(),
      ),
      _ => None,
    };

    figure.traces.push(Trace::Scatter {
      name: label.clone(),
      x: rows.iter().map(|&i| opponent_jittered[i]).collect(),
      y: rows.iter().map(|&i| team_jittered[i]).collect(),
      mode: TraceMode::Markers,
      hover,
    });
  }

  // Equal scores fall on the diagonal; above it are wins, below it losses.
  figure.shapes.push(Shape {
    x0: 0.0,
    y0: 0.0,
    x1: score_max,
    y1: score_max,
    dash: true,
    opacity: 0.5,
  });
  figure.annotations.push(Annotation {
    x: score_max * 0.75,
    y: score_max * 0.25,
    text: "Losses".to_string(),
    font_size: 14,
  });
  figure.annotations.push(Annotation {
    x: score_max * 0.25,
    y: score_max * 0.75,
    text: "Wins".to_string(),
    font_size: 14,
  });
  figure.layout = Layout {
    x_title: Some("Opponent Score".to_string()),
    y_title: Some("Team Score".to_string()),
    x_range: Some((-0.5, score_max)),
    y_range: Some((-0.5, score_max)),
    legend_title: Some("Match Result".to_string()),
  };

  Ok(figure)
}

/// Team and opponent scores over time, for the rows whose date parses.
fn time_series_figure(dataset: &Dataset) -> Result<Option<Figure>, StageError> {
  let date_cells = dataset.column(DATE)?;
  let mut dated: Vec<(usize, NaiveDate)> = date_cells
    .iter()
    .enumerate()
    .filter_map(|(i, cell)| cell.as_str().and_then(parse_date).map(|date| (i, date)))
    .collect();
  if dated.is_empty() {
    return Ok(None);
  }
  dated.sort_by_key(|&(_, date)| date);

  let team = dataset.numeric_column(TEAM_SCORE)?;
  let opponent = dataset.numeric_column(OPPONENT_SCORE)?;
  let labels: Vec<String> = dated
    .iter()
    .map(|(_, date)| date.format("%Y-%m-%d").to_string())
    .collect();

  let mut figure = Figure::new("Team Scores Over Time");
  figure.traces.push(Trace::Line {
    name: "Team Score".to_string(),
    x: labels.clone(),
    y: dated.iter().map(|&(i, _)| team[i]).collect(),
    markers: true,
  });
  figure.traces.push(Trace::Line {
    name: "Opponent Score".to_string(),
    x: labels,
    y: dated.iter().map(|&(i, _)| opponent[i]).collect(),
    markers: true,
  });
  figure.layout.x_title = Some("Date".to_string());
  figure.layout.y_title = Some("Score".to_string());

  Ok(Some(figure))
}

/// Counts of each result value.
fn results_bar_figure(dataset: &Dataset) -> Result<Figure, StageError> {
  let counts = dataset.value_counts(RESULT)?;

  let mut figure = Figure::new("Match Results Summary");
  figure.traces.push(Trace::Bar {
    name: "Matches".to_string(),
    categories: counts.iter().map(|(label, _)| label.clone()).collect(),
    values: counts.iter().map(|&(_, n)| n as u64).collect(),
  });
  figure.layout.x_title = Some(RESULT.to_string());
  figure.layout.y_title = Some("Count".to_string());

  Ok(figure)
}

fn parse_date(text: &str) -> Option<NaiveDate> {
  let text = text.trim();
  DATE_FORMATS
    .iter()
    .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

#[cfg(test)]
mod tests {
  use super::*;
  use matchflow_report::MemorySink;
  use serde_json::json;

  fn dataset(date: &str) -> Dataset {
    let mut ds = Dataset::new(
      vec![
        "Date".into(),
        "Opponent".into(),
        "Team Score".into(),
        "Opponent Score".into(),
        "Result".into(),
      ],
      vec![
        vec![
          json!(date),
          json!("Zambia"),
          json!("2"),
          json!("1"),
          json!("Win"),
        ],
        vec![
          json!(date),
          json!("Kenya"),
          json!("0"),
          json!("0"),
          json!("Draw"),
        ],
      ],
    )
    .unwrap();
    ds.coerce_numeric(TEAM_SCORE).unwrap();
    ds.coerce_numeric(OPPONENT_SCORE).unwrap();
    ds
  }

  #[test]
  fn parses_the_supported_date_formats() {
    assert!(parse_date("2023-01-10").is_some());
    assert!(parse_date("10/01/2023").is_some());
    assert!(parse_date(" 2023-01-10 ").is_some());
    assert!(parse_date("January 10th").is_none());
  }

  #[test]
  fn unavailable_input_emits_one_message_and_no_figures() {
    let sink = MemorySink::new();
    let input = StageData::unavailable("upstream failed");

    let output = visualize_matches(&input, &sink);

    assert_eq!(output, input);
    assert_eq!(sink.texts().len(), 1);
    assert!(sink.figures().is_empty());
    assert!(sink.tables().is_empty());
  }

  #[test]
  fn unparseable_dates_skip_the_time_series_silently() {
    let sink = MemorySink::new();
    visualize_matches(&StageData::Ready(dataset("sometime")), &sink);

    let names: Vec<String> = sink.figures().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["scores_scatter", "results_summary"]);
    // Silently skipped: no message about the missing time series.
    assert!(sink.texts().is_empty());
  }

  #[test]
  fn parseable_dates_produce_the_time_series() {
    let sink = MemorySink::new();
    visualize_matches(&StageData::Ready(dataset("2023-01-10")), &sink);

    let names: Vec<String> = sink.figures().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["scores_scatter", "scores_over_time", "results_summary"]);
  }

  #[test]
  fn all_null_scores_report_the_scatter_failure_and_continue() {
    let mut ds = Dataset::new(
      vec![
        "Date".into(),
        "Opponent".into(),
        "Team Score".into(),
        "Opponent Score".into(),
        "Result".into(),
      ],
      vec![vec![
        json!("2023-01-10"),
        json!("Zambia"),
        json!("n/a"),
        json!("n/a"),
        json!("Win"),
      ]],
    )
    .unwrap();
    ds.coerce_numeric(TEAM_SCORE).unwrap();
    ds.coerce_numeric(OPPONENT_SCORE).unwrap();

    let sink = MemorySink::new();
    visualize_matches(&StageData::Ready(ds), &sink);

    assert_eq!(sink.texts().len(), 1);
    assert!(sink.texts()[0].starts_with("Error creating or displaying the plot"));
    // Bar figure still emitted, and the time series for the parseable date.
    let names: Vec<String> = sink.figures().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["scores_over_time", "results_summary"]);
  }
}
