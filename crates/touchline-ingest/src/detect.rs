//! Feed format detection.
//!
//! Both inputs are sniffed from their first bytes: a metadata document
//! starting with `<` is markup, anything else is JSON; an event feed whose
//! first line is a JSON object carrying an `optaEvent` member is the
//! Insight dialect. Callers may pass an explicit tag instead, which skips
//! sniffing entirely.

use tracing::debug;

use crate::error::{IngestError, Result};

/// Recognized metadata document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataFormat {
    Json,
}

/// Recognized event feed dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFeedFormat {
    Insight,
}

/// Determines the metadata document format.
///
/// Explicit tags are matched case-insensitively; naming an unsupported
/// format is an error even when the document itself would sniff fine.
pub fn detect_metadata_format(data: &str, tag: Option<&str>) -> Result<MetadataFormat> {
    if let Some(tag) = tag {
        return match tag.to_uppercase().as_str() {
            "JSON" => Ok(MetadataFormat::Json),
            other => Err(IngestError::UnsupportedMetadataFormat {
                format: other.to_string(),
            }),
        };
    }
    if data.starts_with('<') {
        Err(IngestError::UnsupportedMetadataFormat {
            format: "XML".to_string(),
        })
    } else {
        debug!("detected JSON metadata document");
        Ok(MetadataFormat::Json)
    }
}

/// Determines the event feed dialect.
///
/// Explicit tags are matched verbatim.
pub fn detect_event_feed(data: &str, tag: Option<&str>) -> Result<EventFeedFormat> {
    if let Some(tag) = tag {
        return match tag {
            "Insight" => Ok(EventFeedFormat::Insight),
            other => Err(IngestError::UnsupportedEventFeed {
                feed: other.to_string(),
            }),
        };
    }
    let first_line = data.lines().next().ok_or(IngestError::EmptyEventFeed)?;
    let value: serde_json::Value =
        serde_json::from_str(first_line).map_err(|source| IngestError::FeedDetection { source })?;
    if value.get("optaEvent").is_some() {
        debug!("detected Insight event feed");
        Ok(EventFeedFormat::Insight)
    } else {
        Err(IngestError::UnsupportedEventFeed {
            feed: "unrecognized".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_sniffs_markup_as_unsupported() {
        let err = detect_metadata_format("<matchData>", None).unwrap_err();
        assert!(matches!(
            err,
            IngestError::UnsupportedMetadataFormat { format } if format == "XML"
        ));
    }

    #[test]
    fn metadata_defaults_to_json() {
        assert_eq!(
            detect_metadata_format("{\"ssiId\": \"abc\"}", None).unwrap(),
            MetadataFormat::Json
        );
    }

    #[test]
    fn metadata_tag_is_case_insensitive() {
        assert_eq!(
            detect_metadata_format("<ignored>", Some("json")).unwrap(),
            MetadataFormat::Json
        );
        assert!(detect_metadata_format("{}", Some("XML")).is_err());
    }

    #[test]
    fn event_feed_sniffs_the_sentinel_key() {
        let feed = "{\"optaEvent\": {\"id\": 1}}\n";
        assert_eq!(
            detect_event_feed(feed, None).unwrap(),
            EventFeedFormat::Insight
        );
    }

    #[test]
    fn event_feed_rejects_other_dialects() {
        assert!(matches!(
            detect_event_feed("{\"frameIdx\": 0}", None).unwrap_err(),
            IngestError::UnsupportedEventFeed { .. }
        ));
        assert!(matches!(
            detect_event_feed("", None).unwrap_err(),
            IngestError::EmptyEventFeed
        ));
    }

    #[test]
    fn event_feed_tag_is_matched_verbatim() {
        assert_eq!(
            detect_event_feed("", Some("Insight")).unwrap(),
            EventFeedFormat::Insight
        );
        assert!(detect_event_feed("", Some("insight")).is_err());
    }
}
