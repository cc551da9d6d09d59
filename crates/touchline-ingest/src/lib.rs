//! Vendor feed ingestion: format detection, the match metadata document,
//! and the Insight event stream.

pub mod codes;
mod coerce;
pub mod detect;
pub mod error;
pub mod insight;
pub mod metadata;

pub use detect::{EventFeedFormat, MetadataFormat, detect_event_feed, detect_metadata_format};
pub use error::{IngestError, Result};
pub use insight::{RawEvent, extract_events, parse_feed_datetime, parse_goal_clock};
pub use metadata::{
    DEFAULT_FRAME_RATE, MatchInfo, parse_match_info, parse_supplementary_rosters,
};
