//! Period bookkeeping for the mapping pass.

use chrono::{DateTime, Utc};
use touchline_model::{Period, PeriodId};

/// Owns the match periods while events are being mapped.
///
/// Kick-off and final-whistle instants arrive as marker records in the
/// event feed, so the pass needs mutable access to the periods it is
/// mapping against. The arena provides lookups by period id and releases
/// the enriched periods when the pass is done.
#[derive(Debug)]
pub struct PeriodArena {
    periods: Vec<Period>,
}

impl PeriodArena {
    pub fn new(periods: Vec<Period>) -> Self {
        Self { periods }
    }

    /// Looks up a period by id. Records pointing at a period that is not
    /// in the list are skipped by the pass.
    pub fn get(&self, id: PeriodId) -> Option<&Period> {
        self.periods.iter().find(|period| period.id == id)
    }

    /// Records the kick-off instant of a period. Repeated markers for the
    /// same period overwrite the earlier instant.
    pub fn set_start(&mut self, id: PeriodId, timestamp: DateTime<Utc>) {
        if let Some(period) = self.periods.iter_mut().find(|period| period.id == id) {
            period.start_timestamp = Some(timestamp);
        }
    }

    /// Records the final instant of a period.
    pub fn set_end(&mut self, id: PeriodId, timestamp: DateTime<Utc>) {
        if let Some(period) = self.periods.iter_mut().find(|period| period.id == id) {
            period.end_timestamp = Some(timestamp);
        }
    }

    /// Releases the periods with whatever markers were observed.
    pub fn into_periods(self) -> Vec<Period> {
        self.periods
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use touchline_model::clock::seconds_f64;

    fn arena() -> PeriodArena {
        PeriodArena::new(vec![
            Period::new(PeriodId::new(1), seconds_f64(0.0), seconds_f64(2700.0)),
            Period::new(PeriodId::new(2), seconds_f64(2700.0), seconds_f64(5400.0)),
        ])
    }

    #[test]
    fn lookup_by_id() {
        let arena = arena();
        assert!(arena.get(PeriodId::new(2)).is_some());
        assert!(arena.get(PeriodId::new(3)).is_none());
    }

    #[test]
    fn markers_fill_timestamps() {
        let mut arena = arena();
        let kick_off = Utc.with_ymd_and_hms(2024, 8, 17, 14, 0, 0).unwrap();
        let whistle = Utc.with_ymd_and_hms(2024, 8, 17, 14, 47, 3).unwrap();

        arena.set_start(PeriodId::new(1), kick_off);
        arena.set_end(PeriodId::new(1), whistle);
        // Markers for an unknown period are a no-op.
        arena.set_start(PeriodId::new(9), kick_off);

        let periods = arena.into_periods();
        assert_eq!(periods[0].start_timestamp, Some(kick_off));
        assert_eq!(periods[0].end_timestamp, Some(whistle));
        assert_eq!(periods[1].start_timestamp, None);
    }
}
