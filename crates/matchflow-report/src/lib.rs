//! Matchflow Report
//!
//! The presentation side of the pipeline: a [`ReportSink`] receives text
//! messages, table previews, and chart figures from the analysis stages and
//! decides what to do with them. Stages never care where output goes.
//!
//! Two sinks are provided:
//! - [`ConsoleSink`]: text and tables to stdout, figures serialized as pretty
//!   JSON artifacts into a session directory.
//! - [`MemorySink`]: records every event in memory, for tests and embedding.

mod console;
mod figure;
mod memory;
mod sink;

pub use console::ConsoleSink;
pub use figure::{Annotation, Figure, Layout, Shape, Trace, TraceMode};
pub use memory::{MemorySink, ReportEvent};
pub use sink::{ReportError, ReportSink};
