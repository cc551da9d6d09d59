//! The Insight event feed: newline-delimited JSON, one vendor record per
//! line.
//!
//! Lines are decoded eagerly and in order. A line participates only when it
//! is a JSON object whose `optaEvent` member is itself an object; anything
//! else valid is skipped. Deleted records (type 43) are dropped here so
//! that neighbor offsets downstream index the surviving sequence.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Europe::London;
use serde_json::Value;
use tracing::debug;

use crate::codes;
use crate::coerce::{coerce_f64, coerce_i64, coerce_string, coerce_u32};
use crate::error::{IngestError, Result};

/// One vendor event record, as carried on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent {
    pub id: String,
    pub event_id: i64,
    pub type_id: u16,
    pub period_id: u8,
    /// Match-clock minute, zero when the clock is absent.
    pub time_min: u32,
    /// Match-clock second within the minute, zero when the clock is absent.
    pub time_sec: u32,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub timestamp: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub contestant_id: Option<String>,
    pub player_id: Option<String>,
    pub outcome: Option<i64>,
    /// Qualifier codes attached to the record. Codes may arrive without a
    /// value; those are kept as presence-only markers.
    pub qualifiers: HashMap<u32, Option<String>>,
    /// The decoded wire object, kept for downstream back-references.
    pub raw: Value,
}

impl RawEvent {
    /// Value of a qualifier, when the code is attached and carries one.
    pub fn qualifier_value(&self, code: u32) -> Option<&str> {
        self.qualifiers.get(&code).and_then(Option::as_deref)
    }

    /// True when the qualifier code is attached, with or without a value.
    pub fn has_qualifier(&self, code: u32) -> bool {
        self.qualifiers.contains_key(&code)
    }
}

/// Decodes the feed into raw events, preserving line order.
pub fn extract_events(data: &str) -> Result<Vec<RawEvent>> {
    let mut events = Vec::new();
    for (idx, line) in data.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(trimmed).map_err(|source| {
            IngestError::EventParse {
                line: line_no,
                reason: source.to_string(),
            }
        })?;
        let Some(event) = parse_event_line(&value, line_no)? else {
            debug!(line = line_no, "skipping line without an event record");
            continue;
        };
        if event.type_id == codes::DELETED_EVENT {
            debug!(event_id = %event.id, "dropping deleted event");
            continue;
        }
        events.push(event);
    }
    Ok(events)
}

fn parse_event_line(value: &Value, line: usize) -> Result<Option<RawEvent>> {
    let Some(record) = value.get("optaEvent").filter(|v| v.is_object()) else {
        return Ok(None);
    };

    let id = coerce_string(required(record, "id", line)?)
        .ok_or_else(|| malformed(line, "id"))?;
    let event_id = coerce_i64(required(record, "eventId", line)?)
        .ok_or_else(|| malformed(line, "eventId"))?;
    let type_id = coerce_i64(required(record, "typeId", line)?)
        .and_then(|n| u16::try_from(n).ok())
        .ok_or_else(|| malformed(line, "typeId"))?;
    let period_id = coerce_i64(required(record, "periodId", line)?)
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| malformed(line, "periodId"))?;

    let clock = record.get("alignedClock").and_then(coerce_f64);
    let (time_min, time_sec) = match clock {
        Some(seconds) => {
            let seconds = seconds.max(0.0);
            ((seconds / 60.0) as u32, (seconds % 60.0) as u32)
        }
        None => (0, 0),
    };

    let timestamp = parse_timestamp_field(record, "timeStamp", line)?;
    let last_modified = parse_timestamp_field(record, "lastModified", line)?;

    let qualifiers = match record.get("qualifier") {
        Some(Value::Array(items)) => collect_qualifiers(items),
        _ => HashMap::new(),
    };

    Ok(Some(RawEvent {
        id,
        event_id,
        type_id,
        period_id,
        time_min,
        time_sec,
        x: record.get("x").and_then(coerce_f64),
        y: record.get("y").and_then(coerce_f64),
        timestamp,
        last_modified,
        contestant_id: record.get("opContestantId").and_then(coerce_string),
        player_id: record.get("opPlayerId").and_then(coerce_string),
        outcome: record.get("outcome").and_then(coerce_i64),
        qualifiers,
        raw: value.clone(),
    }))
}

/// Collapses the qualifier array into a code -> value map.
///
/// `opValue` wins over `value` whenever the key is present, even when it is
/// null. Entries without a `qualifierId` are dropped.
fn collect_qualifiers(items: &[Value]) -> HashMap<u32, Option<String>> {
    let mut qualifiers = HashMap::with_capacity(items.len());
    for item in items {
        let Some(code) = item.get("qualifierId").and_then(coerce_u32) else {
            continue;
        };
        let value = match item.get("opValue") {
            Some(op_value) => coerce_string(op_value),
            None => item.get("value").and_then(coerce_string),
        };
        qualifiers.insert(code, value);
    }
    qualifiers
}

fn parse_timestamp_field(record: &Value, field: &str, line: usize) -> Result<DateTime<Utc>> {
    let raw = coerce_string(required(record, field, line)?)
        .ok_or_else(|| malformed(line, field))?;
    parse_feed_datetime(&raw).map_err(|reason| IngestError::Timestamp {
        value: raw,
        line,
        reason,
    })
}

fn required<'a>(record: &'a Value, field: &str, line: usize) -> Result<&'a Value> {
    record
        .get(field)
        .filter(|value| !value.is_null())
        .ok_or_else(|| IngestError::EventParse {
            line,
            reason: format!("missing required field `{field}`"),
        })
}

fn malformed(line: usize, field: &str) -> IngestError {
    IngestError::EventParse {
        line,
        reason: format!("malformed field `{field}`"),
    }
}

/// Parses the feed's timestamps (`2023-03-04T17:02:43.5`), which are local
/// London times, into UTC instants.
///
/// Fractional seconds are normalized to exactly three digits by
/// right-padding (`.5` means 500 milliseconds) or truncating; a missing
/// fraction counts as zero.
pub fn parse_feed_datetime(value: &str) -> std::result::Result<DateTime<Utc>, String> {
    let normalized = normalize_fraction(value)?;
    let naive = NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.3f")
        .map_err(|err| err.to_string())?;
    london_to_utc(naive)
}

/// Parses the authoritative goal-clock qualifier (`2023-03-04 17:49:12.5`),
/// also a local London time. The fraction is optional here.
pub fn parse_goal_clock(value: &str) -> std::result::Result<DateTime<Utc>, String> {
    let naive = NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%d %H:%M:%S%.f")
        .map_err(|err| err.to_string())?;
    london_to_utc(naive)
}

fn normalize_fraction(value: &str) -> std::result::Result<String, String> {
    match value.rsplit_once('.') {
        None => Ok(format!("{value}.000")),
        Some((head, fraction)) => {
            if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format!("invalid fractional seconds: {fraction:?}"));
            }
            let mut digits = fraction.to_string();
            digits.truncate(3);
            while digits.len() < 3 {
                digits.push('0');
            }
            Ok(format!("{head}.{digits}"))
        }
    }
}

/// Ambiguous local times (the autumn DST fold) resolve to the earlier
/// instant; times inside the spring-forward gap do not exist and fail.
fn london_to_utc(naive: NaiveDateTime) -> std::result::Result<DateTime<Utc>, String> {
    London
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| format!("nonexistent local time {naive} in Europe/London"))
}
