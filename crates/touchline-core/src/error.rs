//! Errors surfaced by the load operations.

use thiserror::Error;

/// Errors raised while loading a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    // === Input Errors ===
    /// A data file could not be read.
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // === Stage Errors ===
    #[error(transparent)]
    Ingest(#[from] touchline_ingest::IngestError),

    #[error(transparent)]
    Transform(#[from] touchline_transform::TransformError),

    // === Tracking Errors ===
    /// A tracking frame line could not be decoded.
    #[error("malformed tracking frame on line {line}: {reason}")]
    FrameParse { line: usize, reason: String },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, LoadError>;
