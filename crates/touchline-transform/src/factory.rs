//! Event construction seam.
//!
//! The mapping pass assembles everything it knows about a record into
//! [`EventParts`] and hands them to a factory. The default factory emits
//! the canonical [`Event`] unchanged; callers can substitute their own to
//! decorate events as they are built.

use chrono::TimeDelta;
use serde_json::Value;
use touchline_model::{BallState, Event, EventKind, PeriodId, PlayerId, Point, TeamId};

/// Everything known about an event at the moment it is built.
#[derive(Debug, Clone)]
pub struct EventParts {
    pub event_id: String,
    pub kind: EventKind,
    pub period_id: PeriodId,
    /// Offset from the period's kick-off instant.
    pub timestamp: TimeDelta,
    pub team_id: TeamId,
    pub player_id: Option<PlayerId>,
    pub ball_owning_team: Option<TeamId>,
    pub ball_state: BallState,
    pub coordinates: Option<Point>,
    /// The decoded wire object the event came from.
    pub raw: Value,
}

/// Builds canonical events from their parts.
pub trait EventFactory {
    fn build(&self, parts: EventParts) -> Event;
}

/// The standard factory: emits the parts as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultEventFactory;

impl EventFactory for DefaultEventFactory {
    fn build(&self, parts: EventParts) -> Event {
        Event {
            event_id: parts.event_id,
            kind: parts.kind,
            period_id: parts.period_id,
            timestamp: parts.timestamp,
            team_id: parts.team_id,
            player_id: parts.player_id,
            ball_owning_team: parts.ball_owning_team,
            ball_state: parts.ball_state,
            coordinates: parts.coordinates,
            raw: Some(parts.raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use touchline_model::PassResult;

    #[test]
    fn default_factory_keeps_every_part() {
        let parts = EventParts {
            event_id: "e1".to_string(),
            kind: EventKind::Pass {
                result: PassResult::Complete,
                receiver_coordinates: None,
                qualifiers: Vec::new(),
            },
            period_id: PeriodId::new(1),
            timestamp: TimeDelta::try_milliseconds(1500).unwrap(),
            team_id: TeamId::new("t1").unwrap(),
            player_id: Some(PlayerId::new("p1").unwrap()),
            ball_owning_team: Some(TeamId::new("t1").unwrap()),
            ball_state: BallState::Alive,
            coordinates: Some(Point::new(40.0, 60.0)),
            raw: serde_json::json!({"optaEvent": {"id": "e1"}}),
        };

        let event = DefaultEventFactory.build(parts);
        assert_eq!(event.event_id, "e1");
        assert_eq!(event.kind_name(), "pass");
        assert_eq!(event.coordinates, Some(Point::new(40.0, 60.0)));
        assert!(event.raw.is_some());
    }
}
