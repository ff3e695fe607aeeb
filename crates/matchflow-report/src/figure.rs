//! Serializable chart figures.
//!
//! A [`Figure`] is a declarative description of a chart: traces plus optional
//! shapes, annotations, and axis layout. Sinks decide how to materialize one;
//! the console sink writes it as a JSON artifact.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
  pub title: String,
  pub traces: Vec<Trace>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub shapes: Vec<Shape>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub annotations: Vec<Annotation>,
  #[serde(default)]
  pub layout: Layout,
}

impl Figure {
  pub fn new(title: impl Into<String>) -> Self {
    Self {
      title: title.into(),
      traces: Vec::new(),
      shapes: Vec::new(),
      annotations: Vec::new(),
      layout: Layout::default(),
    }
  }
}

/// One data series within a figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trace {
  /// Points on a numeric x/y plane. Null cells stay null so point indices
  /// line up with the source rows.
  Scatter {
    name: String,
    x: Vec<Option<f64>>,
    y: Vec<Option<f64>>,
    mode: TraceMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hover: Option<Vec<String>>,
  },
  /// A series over ordered category labels (dates, here).
  Line {
    name: String,
    x: Vec<String>,
    y: Vec<Option<f64>>,
    markers: bool,
  },
  /// Counts per category.
  Bar {
    name: String,
    categories: Vec<String>,
    values: Vec<u64>,
  },
}

impl Trace {
  pub fn name(&self) -> &str {
    match self {
      Trace::Scatter { name, .. } | Trace::Line { name, .. } | Trace::Bar { name, .. } => name,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceMode {
  Markers,
  Lines,
  LinesMarkers,
}

/// A reference shape drawn over the plot area. Only line shapes are needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
  pub x0: f64,
  pub y0: f64,
  pub x1: f64,
  pub y1: f64,
  pub dash: bool,
  pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
  pub x: f64,
  pub y: f64,
  pub text: String,
  pub font_size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub x_title: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub y_title: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub x_range: Option<(f64, f64)>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub y_range: Option<(f64, f64)>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub legend_title: Option<String>,
}
