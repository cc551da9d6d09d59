//! Match-clock helpers.
//!
//! Relative times inside a dataset are [`TimeDelta`] values and serialize as
//! fractional seconds, matching how the vendor expresses its clocks.

use chrono::TimeDelta;

/// Converts fractional seconds into a `TimeDelta`, rounding to milliseconds
/// and saturating at the representable range.
pub fn seconds_f64(secs: f64) -> TimeDelta {
    let millis = (secs * 1000.0).round();
    if millis >= i64::MAX as f64 {
        TimeDelta::MAX
    } else if millis <= i64::MIN as f64 {
        TimeDelta::MIN
    } else {
        TimeDelta::try_milliseconds(millis as i64).unwrap_or(TimeDelta::MAX)
    }
}

/// Returns the duration as fractional seconds.
pub fn as_seconds_f64(value: TimeDelta) -> f64 {
    value.num_milliseconds() as f64 / 1000.0
}

/// Serde adapter: `TimeDelta` as fractional seconds.
pub mod duration_secs {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(super::as_seconds_f64(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TimeDelta, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Ok(super::seconds_f64(secs))
    }
}

/// Serde adapter: `Option<TimeDelta>` as fractional seconds or null.
pub mod opt_duration_secs {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<TimeDelta>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(delta) => serializer.serialize_some(&super::as_seconds_f64(*delta)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<TimeDelta>, D::Error> {
        let secs = Option::<f64>::deserialize(deserializer)?;
        Ok(secs.map(super::seconds_f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_round_trip_through_milliseconds() {
        let delta = seconds_f64(83.52);
        assert_eq!(delta.num_milliseconds(), 83_520);
        assert!((as_seconds_f64(delta) - 83.52).abs() < 1e-9);
    }

    #[test]
    fn negative_seconds_are_preserved() {
        assert_eq!(seconds_f64(-0.25).num_milliseconds(), -250);
    }

    #[test]
    fn sub_millisecond_values_round() {
        assert_eq!(seconds_f64(0.0004).num_milliseconds(), 0);
        assert_eq!(seconds_f64(0.0006).num_milliseconds(), 1);
    }
}
