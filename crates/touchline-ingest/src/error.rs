//! Error types for feed ingestion.

use thiserror::Error;

/// Errors that can occur while reading and decoding vendor feeds.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Format Detection Errors ===
    /// Metadata document in a format no parser exists for.
    #[error("no parser implemented for metadata in {format} format")]
    UnsupportedMetadataFormat { format: String },

    /// Event feed dialect no parser exists for.
    #[error("no parser implemented for {feed} event feeds")]
    UnsupportedEventFeed { feed: String },

    /// The event feed has no lines, so its dialect cannot be detected.
    #[error("cannot detect event feed dialect: feed is empty")]
    EmptyEventFeed,

    /// The first line of the event feed is not valid JSON.
    #[error("cannot detect event feed dialect: {source}")]
    FeedDetection {
        #[source]
        source: serde_json::Error,
    },

    // === Metadata Errors ===
    /// The metadata document is not valid JSON.
    #[error("failed to parse metadata document: {source}")]
    MetadataParse {
        #[source]
        source: serde_json::Error,
    },

    /// A required metadata field is missing or malformed.
    #[error("invalid metadata: {reason}")]
    MetadataSchema { reason: String },

    // === Event Feed Errors ===
    /// An event line failed to decode.
    #[error("failed to parse event on line {line}: {reason}")]
    EventParse { line: usize, reason: String },

    /// A feed timestamp failed to parse.
    #[error("invalid timestamp {value:?} on line {line}: {reason}")]
    Timestamp {
        value: String,
        line: usize,
        reason: String,
    },

    // === Model Errors ===
    /// A parsed value failed model validation.
    #[error("invalid metadata: {source}")]
    Model {
        #[from]
        source: touchline_model::ModelError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::UnsupportedMetadataFormat {
            format: "XML".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no parser implemented for metadata in XML format"
        );
    }

    #[test]
    fn test_error_from_model() {
        let model_err = touchline_model::TeamId::new("").unwrap_err();
        let ingest_err: IngestError = model_err.into();
        assert!(matches!(ingest_err, IngestError::Model { .. }));
    }
}
