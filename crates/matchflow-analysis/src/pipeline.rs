//! Pipeline wiring: the three stages as workflow atoms.

use std::path::PathBuf;
use std::sync::Arc;

use matchflow_report::ReportSink;
use matchflow_workflow::{Workflow, WorkflowError};

use crate::analyze::analyze_matches;
use crate::load::load_matches;
use crate::stage::StageData;
use crate::visualize::visualize_matches;

/// Atom ids, in dependency order.
pub const LOAD_ATOM: &str = "load_data";
pub const ANALYZE_ATOM: &str = "analyze_data";
pub const VISUALIZE_ATOM: &str = "visualize_data";

#[derive(Debug, Clone)]
pub struct PipelineConfig {
  /// Path of the match results CSV.
  pub data_path: PathBuf,
  /// Rows shown in the head preview table.
  pub preview_rows: usize,
}

impl Default for PipelineConfig {
  fn default() -> Self {
    Self {
      data_path: PathBuf::from("data/matches.csv"),
      preview_rows: 10,
    }
  }
}

/// Register the load -> analyze -> visualize chain on a fresh workflow.
///
/// All stage output goes through `sink`; the workflow result carries each
/// stage's [`StageData`].
pub fn build_pipeline(
  config: PipelineConfig,
  sink: Arc<dyn ReportSink>,
) -> Result<Workflow<StageData>, WorkflowError> {
  let mut workflow = Workflow::new();

  let load_sink = Arc::clone(&sink);
  let data_path = config.data_path.clone();
  workflow.register(LOAD_ATOM, &[], move |_inputs| {
    let sink = Arc::clone(&load_sink);
    let path = data_path.clone();
    Box::pin(async move { Ok(load_matches(&path, sink.as_ref()).await) })
  })?;

  let analyze_sink = Arc::clone(&sink);
  let preview_rows = config.preview_rows;
  workflow.register(ANALYZE_ATOM, &[LOAD_ATOM], move |inputs| {
    let sink = Arc::clone(&analyze_sink);
    Box::pin(async move { Ok(analyze_matches(&inputs[0], sink.as_ref(), preview_rows)) })
  })?;

  let visualize_sink = Arc::clone(&sink);
  workflow.register(VISUALIZE_ATOM, &[ANALYZE_ATOM], move |inputs| {
    let sink = Arc::clone(&visualize_sink);
    Box::pin(async move { Ok(visualize_matches(&inputs[0], sink.as_ref())) })
  })?;

  Ok(workflow)
}
