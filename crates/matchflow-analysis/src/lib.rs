//! Matchflow Analysis
//!
//! The three pipeline stages over a football match dataset, wired as workflow
//! atoms:
//! - `load_data`: CSV file -> dataset
//! - `analyze_data`: structure summary, score coercion, win filter
//! - `visualize_data`: scatter / time-series / bar figures
//!
//! Stages exchange a [`StageData`] union. Data-level failures never abort the
//! run: the failing stage reports once to the sink and forwards
//! [`StageData::Unavailable`], which downstream stages short-circuit on.

mod analyze;
pub mod columns;
mod error;
mod jitter;
mod load;
mod pipeline;
mod stage;
mod visualize;

pub use analyze::analyze_matches;
pub use error::StageError;
pub use jitter::{JITTER_AMOUNT, jittered};
pub use load::load_matches;
pub use pipeline::{ANALYZE_ATOM, LOAD_ATOM, PipelineConfig, VISUALIZE_ATOM, build_pipeline};
pub use stage::StageData;
pub use visualize::{visualize_matches, visualize_with_rng};
