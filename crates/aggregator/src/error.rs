//! Error types for report aggregation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during report aggregation.
///
/// Malformed rows are not represented here: they are skipped and counted
/// during the pass. Every variant below is fatal and aborts the operation.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// Input store does not exist.
    #[error("input store '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
