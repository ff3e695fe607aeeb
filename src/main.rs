use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use matchflow_analysis::{PipelineConfig, StageData, VISUALIZE_ATOM, build_pipeline};
use matchflow_report::ConsoleSink;

/// Matchflow - exploratory analysis of football match results
#[derive(Parser)]
#[command(name = "matchflow")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Path to the match results CSV
  #[arg(long, default_value = "data/matches.csv")]
  data: PathBuf,

  /// Directory figure artifacts are written into
  #[arg(long, default_value = "artifacts")]
  artifacts: PathBuf,

  /// Rows shown in the head preview table
  #[arg(long, default_value_t = 10)]
  preview_rows: usize,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(run(cli))
}

async fn run(cli: Cli) -> Result<()> {
  let sink = Arc::new(
    ConsoleSink::connect(&cli.artifacts)
      .with_context(|| format!("failed to prepare artifact dir: {}", cli.artifacts.display()))?,
  );

  let config = PipelineConfig {
    data_path: cli.data,
    preview_rows: cli.preview_rows,
  };
  let workflow =
    build_pipeline(config, sink.clone()).context("failed to register pipeline atoms")?;

  // Engine-level errors (bad graph, atom abort) fail the run; data-level
  // failures were already reported through the sink and leave the final
  // stage unavailable.
  let result = workflow.execute().await.context("workflow execution failed")?;
  tracing::info!(atoms = result.len(), "pipeline finished");

  let summary = match result.output(VISUALIZE_ATOM) {
    Some(StageData::Ready(dataset)) => serde_json::json!({
      "atoms": result.order(),
      "state": "ready",
      "rows": dataset.shape().0,
      "artifacts": sink.artifact_dir(),
    }),
    Some(StageData::Unavailable { reason }) => serde_json::json!({
      "atoms": result.order(),
      "state": "unavailable",
      "reason": reason,
    }),
    None => serde_json::json!({ "atoms": result.order() }),
  };
  println!("{}", serde_json::to_string_pretty(&summary)?);

  Ok(())
}
