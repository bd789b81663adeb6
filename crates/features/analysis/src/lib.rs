//! Analysis feature slice.
//!
//! Runs the sentiment predictor over a batch (one text, the demo posts or a user's fetched
//! posts) and reports per-item labels with summary statistics. With the `server` feature the
//! workflows are also exposed as JSON endpoints.

pub mod aggregator;
pub mod analyzer;
pub mod demo;
mod error;
#[cfg(feature = "server")]
pub mod server;

pub use crate::analyzer::Analyzer;
pub use crate::error::{AnalysisError, AnalysisErrorExt, ErrorKind};

/// Analysis feature state
#[shub_derive::shub_slice]
pub struct Analysis {
    pub analyzer: Analyzer,
}
