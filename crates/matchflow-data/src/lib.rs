//! Matchflow Data
//!
//! In-memory tabular dataset for match results, loaded from CSV. Cells are
//! [`serde_json::Value`]s so a freshly loaded dataset is all strings; numeric
//! coercion reparses columns in place. The dataset lives only for one pipeline
//! run, there is no persistence.

mod dataset;
mod error;
mod loader;

pub use dataset::{Dataset, cell_text};
pub use error::DataError;
