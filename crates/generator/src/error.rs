//! Error types for record generation.

use thiserror::Error;

/// Errors that can occur while writing the record store.
///
/// All variants are fatal: a partially written store must not be trusted.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Batch size must be positive.
    #[error("batch size must be greater than zero")]
    ZeroBatchSize,
}
