//! In-memory sink for tests and embedding.

use std::sync::Mutex;

use matchflow_data::Dataset;

use crate::figure::Figure;
use crate::sink::ReportSink;

/// One event delivered to a sink.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
  Text(String),
  Table(Dataset),
  Figure { name: String, figure: Figure },
}

/// Records every event it receives, in order.
#[derive(Debug, Default)]
pub struct MemorySink {
  events: Mutex<Vec<ReportEvent>>,
}

impl MemorySink {
  pub fn new() -> Self {
    Self::default()
  }

  /// All recorded events, in delivery order.
  pub fn events(&self) -> Vec<ReportEvent> {
    self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
  }

  pub fn texts(&self) -> Vec<String> {
    self
      .events()
      .into_iter()
      .filter_map(|e| match e {
        ReportEvent::Text(message) => Some(message),
        _ => None,
      })
      .collect()
  }

  pub fn tables(&self) -> Vec<Dataset> {
    self
      .events()
      .into_iter()
      .filter_map(|e| match e {
        ReportEvent::Table(table) => Some(table),
        _ => None,
      })
      .collect()
  }

  pub fn figures(&self) -> Vec<(String, Figure)> {
    self
      .events()
      .into_iter()
      .filter_map(|e| match e {
        ReportEvent::Figure { name, figure } => Some((name, figure)),
        _ => None,
      })
      .collect()
  }
}

impl ReportSink for MemorySink {
  fn text(&self, message: &str) {
    self
      .events
      .lock()
      .unwrap_or_else(|e| e.into_inner())
      .push(ReportEvent::Text(message.to_string()));
  }

  fn table(&self, table: &Dataset) {
    self
      .events
      .lock()
      .unwrap_or_else(|e| e.into_inner())
      .push(ReportEvent::Table(table.clone()));
  }

  fn figure(&self, name: &str, figure: &Figure) {
    self
      .events
      .lock()
      .unwrap_or_else(|e| e.into_inner())
      .push(ReportEvent::Figure {
        name: name.to_string(),
        figure: figure.clone(),
      });
  }
}
