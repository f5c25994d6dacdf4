//! The two output documents written at the end of every run.
//!
//! Downstream consumers read the whole graph, not just the verdict, so the
//! full target-record and group-record lists are written unconditionally.
//! Unlike the parse-side error policy, a failed write is a real error: it
//! breaks the contract with those consumers.

use std::path::Path;

use sift_config::OutputConfig;
use sift_graph::BuildGraph;

/// Errors that can occur while writing the output documents.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Writing a document to disk failed.
    #[error("failed to write report {path}: {source}")]
    Io {
        /// Path of the document that failed.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Serializing the records failed.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Writes the full target and group documents as pretty-printed JSON.
pub fn write_reports(graph: &BuildGraph, output: &OutputConfig) -> Result<(), ReportError> {
    write_document(&output.targets, &serde_json::to_string_pretty(&graph.targets)?)?;
    write_document(&output.groups, &serde_json::to_string_pretty(&graph.groups)?)?;
    Ok(())
}

fn write_document(path: &str, json: &str) -> Result<(), ReportError> {
    std::fs::write(Path::new(path), json).map_err(|source| ReportError::Io {
        path: path.to_string(),
        source,
    })
}
