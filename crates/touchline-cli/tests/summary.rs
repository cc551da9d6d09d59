//! Integration tests for the summary module.

use std::collections::BTreeMap;

use chrono::TimeDelta;

use touchline_cli::summary::{frame_counts, kind_counts};
use touchline_model::{
    BallState, CoordinateSystem, DatasetFlags, Event, EventDataset, EventKind, Frame, Ground,
    Metadata, Orientation, PassResult, Period, PeriodId, Provider, Team, TeamId,
    TrackingDataset,
};

fn metadata() -> Metadata {
    Metadata {
        game_id: "game-1".to_string(),
        date: None,
        game_week: None,
        home_team: Team {
            id: TeamId::new("t1").unwrap(),
            name: "home".to_string(),
            ground: Ground::Home,
            players: vec![],
        },
        away_team: Team {
            id: TeamId::new("t2").unwrap(),
            name: "away".to_string(),
            ground: Ground::Away,
            players: vec![],
        },
        periods: vec![
            Period::new(PeriodId::new(1), TimeDelta::zero(), TimeDelta::zero()),
            Period::new(PeriodId::new(2), TimeDelta::zero(), TimeDelta::zero()),
        ],
        pitch_dimensions: None,
        frame_rate: 25,
        score: None,
        orientation: Orientation::ActionExecutingTeam,
        flags: DatasetFlags::all(),
        provider: Provider::SecondSpectrum,
        coordinate_system: CoordinateSystem::Provider,
    }
}

fn event(id: &str, kind: EventKind) -> Event {
    Event {
        event_id: id.to_string(),
        kind,
        period_id: PeriodId::new(1),
        timestamp: TimeDelta::zero(),
        team_id: TeamId::new("t1").unwrap(),
        player_id: None,
        ball_owning_team: None,
        ball_state: BallState::Alive,
        coordinates: None,
        raw: None,
    }
}

fn pass() -> EventKind {
    EventKind::Pass {
        result: PassResult::Complete,
        receiver_coordinates: None,
        qualifiers: vec![],
    }
}

fn frame(id: u64, period: u8) -> Frame {
    Frame {
        frame_id: id,
        period_id: PeriodId::new(period),
        timestamp: TimeDelta::zero(),
        ball_state: BallState::Alive,
        ball_owning_team: None,
        ball_coordinates: None,
        players: BTreeMap::new(),
    }
}

#[test]
fn test_kind_counts_orders_by_frequency() {
    let dataset = EventDataset {
        metadata: metadata(),
        events: vec![
            event("e1", pass()),
            event("e2", pass()),
            event("e3", EventKind::Recovery),
            event("e4", pass()),
            event("e5", EventKind::Recovery),
            event("e6", EventKind::BallOut),
        ],
    };

    let counts = kind_counts(&dataset);
    assert_eq!(
        counts,
        vec![
            ("pass".to_string(), 3),
            ("recovery".to_string(), 2),
            ("ball_out".to_string(), 1),
        ]
    );
}

#[test]
fn test_kind_counts_breaks_ties_by_name() {
    let dataset = EventDataset {
        metadata: metadata(),
        events: vec![
            event("e1", EventKind::Recovery),
            event("e2", EventKind::BallOut),
        ],
    };

    let counts = kind_counts(&dataset);
    assert_eq!(counts[0].0, "ball_out");
    assert_eq!(counts[1].0, "recovery");
}

#[test]
fn test_kind_counts_uses_generic_names() {
    let dataset = EventDataset {
        metadata: metadata(),
        events: vec![
            event(
                "e1",
                EventKind::Generic {
                    name: "block".to_string(),
                },
            ),
            event(
                "e2",
                EventKind::Generic {
                    name: "start delay".to_string(),
                },
            ),
        ],
    };

    let counts = kind_counts(&dataset);
    let names: Vec<&str> = counts.iter().map(|(name, _)| name.as_str()).collect();
    assert!(names.contains(&"block"));
    assert!(names.contains(&"start delay"));
}

#[test]
fn test_frame_counts_group_by_period() {
    let dataset = TrackingDataset {
        metadata: metadata(),
        frames: vec![frame(1, 1), frame(2, 1), frame(3, 2)],
    };

    let counts = frame_counts(&dataset);
    assert_eq!(
        counts,
        vec![(PeriodId::new(1), 2), (PeriodId::new(2), 1)]
    );
}

#[test]
fn test_empty_datasets_count_nothing() {
    let dataset = EventDataset {
        metadata: metadata(),
        events: vec![],
    };
    assert!(kind_counts(&dataset).is_empty());

    let dataset = TrackingDataset {
        metadata: metadata(),
        frames: vec![],
    };
    assert!(frame_counts(&dataset).is_empty());
}
