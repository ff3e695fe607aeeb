//! Matchflow Workflow
//!
//! This crate provides the workflow engine for matchflow: named units of work
//! ("atoms") registered with explicit dependency declarations, validated as a
//! directed acyclic graph, and executed strictly sequentially in topological
//! order.
//!
//! Key properties:
//! - Dependencies are resolved by a topological sort performed before any atom
//!   runs; unknown references and cycles are rejected up front.
//! - Each atom runs exactly once; its output is cached by atom id and handed to
//!   dependents in declaration order.
//! - No parallelism, no retries, no cancellation: one pass, one atom at a time.

mod atom;
mod error;
mod graph;
mod result;
mod workflow;

pub use atom::{Atom, AtomError, AtomOp};
pub use error::WorkflowError;
pub use graph::Graph;
pub use result::ExecutionResult;
pub use workflow::Workflow;
