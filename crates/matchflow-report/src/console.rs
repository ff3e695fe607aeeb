//! Console sink: text and tables to stdout, figures to JSON artifacts.

use std::path::{Path, PathBuf};

use matchflow_data::{Dataset, cell_text};
use tracing::{debug, error};

use crate::figure::Figure;
use crate::sink::{ReportError, ReportSink};

/// Rows printed per table before truncating.
const MAX_TABLE_ROWS: usize = 50;

pub struct ConsoleSink {
  artifact_dir: PathBuf,
}

impl ConsoleSink {
  /// Establish a report session: creates the artifact directory figures are
  /// written into.
  pub fn connect(artifact_dir: impl Into<PathBuf>) -> Result<Self, ReportError> {
    let artifact_dir = artifact_dir.into();
    std::fs::create_dir_all(&artifact_dir)?;
    debug!(dir = %artifact_dir.display(), "report_session_connected");
    Ok(Self { artifact_dir })
  }

  pub fn artifact_dir(&self) -> &Path {
    &self.artifact_dir
  }

  fn write_figure(&self, name: &str, figure: &Figure) -> Result<PathBuf, std::io::Error> {
    let path = self.artifact_dir.join(format!("{name}.json"));
    let json = serde_json::to_string_pretty(figure)
      .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    std::fs::write(&path, json)?;
    Ok(path)
  }
}

impl ReportSink for ConsoleSink {
  fn text(&self, message: &str) {
    println!("{message}");
  }

  fn table(&self, table: &Dataset) {
    println!("{}", render_table(table, MAX_TABLE_ROWS));
  }

  fn figure(&self, name: &str, figure: &Figure) {
    match self.write_figure(name, figure) {
      Ok(path) => println!("[figure] {} -> {}", figure.title, path.display()),
      // Log-and-continue: a failed artifact never halts the pipeline.
      Err(e) => error!(figure = %name, error = %e, "figure_artifact_write_failed"),
    }
  }
}

/// Render a dataset as an aligned text table, truncated after `max_rows`.
fn render_table(table: &Dataset, max_rows: usize) -> String {
  let rendered_rows: Vec<Vec<String>> = table
    .rows()
    .iter()
    .take(max_rows)
    .map(|row| row.iter().map(cell_text).collect())
    .collect();

  let mut widths: Vec<usize> = table.columns().iter().map(|c| c.len()).collect();
  for row in &rendered_rows {
    for (i, cell) in row.iter().enumerate() {
      widths[i] = widths[i].max(cell.len());
    }
  }

  let mut out = String::new();
  let header: Vec<String> = table
    .columns()
    .iter()
    .enumerate()
    .map(|(i, c)| format!("{:<width$}", c, width = widths[i]))
    .collect();
  out.push_str(&header.join("  "));
  out.push('\n');

  for row in &rendered_rows {
    let line: Vec<String> = row
      .iter()
      .enumerate()
      .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
      .collect();
    out.push_str(&line.join("  "));
    out.push('\n');
  }

  let hidden = table.rows().len().saturating_sub(max_rows);
  if hidden > 0 {
    out.push_str(&format!("... ({hidden} more rows)\n"));
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn table() -> Dataset {
    Dataset::new(
      vec!["Opponent".into(), "Team Score".into()],
      vec![
        vec![json!("Zambia"), json!(2.0)],
        vec![json!("Kenya"), json!(0.0)],
      ],
    )
    .unwrap()
  }

  #[test]
  fn table_renders_aligned_columns() {
    let rendered = render_table(&table(), 50);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Opponent"));
    assert!(lines[1].starts_with("Zambia"));
  }

  #[test]
  fn table_truncates_after_max_rows() {
    let rendered = render_table(&table(), 1);
    assert!(rendered.contains("(1 more rows)"));
  }

  #[test]
  fn figures_are_written_as_json_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let sink = ConsoleSink::connect(dir.path().join("artifacts")).unwrap();
    let figure = Figure::new("Test");
    sink.figure("test_figure", &figure);

    let path = sink.artifact_dir().join("test_figure.json");
    let written: Figure = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(written, figure);
  }
}
