//! Match periods.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::clock;
use crate::ids::PeriodId;

/// A played period of the match.
///
/// The frame offsets come from the match metadata and locate the period
/// inside the tracking feed. The absolute kick-off and final-whistle
/// instants are only known once the event feed's period markers have been
/// seen, so they start out unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub id: PeriodId,
    /// Elapsed feed time at which the period starts.
    #[serde(with = "clock::duration_secs")]
    pub start_offset: TimeDelta,
    /// Elapsed feed time at which the period ends.
    #[serde(with = "clock::duration_secs")]
    pub end_offset: TimeDelta,
    /// Absolute kick-off instant, taken from the period-start marker event.
    #[serde(default)]
    pub start_timestamp: Option<DateTime<Utc>>,
    /// Absolute end instant, taken from the period-end marker event.
    #[serde(default)]
    pub end_timestamp: Option<DateTime<Utc>>,
}

impl Period {
    pub fn new(id: PeriodId, start_offset: TimeDelta, end_offset: TimeDelta) -> Self {
        Self {
            id,
            start_offset,
            end_offset,
            start_timestamp: None,
            end_timestamp: None,
        }
    }

    /// True once the period-start marker has been observed.
    pub fn has_started(&self) -> bool {
        self.start_timestamp.is_some()
    }

    /// Length of the period according to the metadata frame offsets.
    pub fn duration(&self) -> TimeDelta {
        self.end_offset - self.start_offset
    }
}
