pub mod clock;
pub mod dataset;
pub mod error;
pub mod event;
pub mod frame;
pub mod geometry;
pub mod ids;
pub mod period;
pub mod team;

pub use dataset::{
    BallState, DatasetFlags, EventDataset, Metadata, Orientation, Provider, Score,
    TrackingDataset,
};
pub use error::ModelError;
pub use event::{
    BodyPart, CardType, DuelResult, DuelType, Event, EventKind, Formation, GoalkeeperAction,
    InterceptionResult, PassResult, PassStyle, PositionLine, Qualifier, SetPiece, ShotResult,
    TakeOnResult,
};
pub use frame::{Frame, PlayerData};
pub use geometry::{CoordinateSystem, PitchDimensions, Point, Point3};
pub use ids::{PeriodId, PlayerId, TeamId};
pub use period::Period;
pub use team::{Ground, Player, Team};

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;

    fn minimal_metadata() -> Metadata {
        Metadata {
            game_id: "d3caf5c6-ac45-4a6a-a2e7-172cf0a97f93".to_string(),
            date: None,
            game_week: None,
            home_team: Team {
                id: TeamId::new("t3").unwrap(),
                name: "home".to_string(),
                ground: Ground::Home,
                players: vec![],
            },
            away_team: Team {
                id: TeamId::new("t8").unwrap(),
                name: "away".to_string(),
                ground: Ground::Away,
                players: vec![],
            },
            periods: vec![Period::new(
                PeriodId::new(1),
                TimeDelta::zero(),
                TimeDelta::try_seconds(2760).unwrap(),
            )],
            pitch_dimensions: Some(PitchDimensions::new(105.0, 68.0)),
            frame_rate: 25,
            score: Some(Score { home: 2, away: 1 }),
            orientation: Orientation::ActionExecutingTeam,
            flags: DatasetFlags::all(),
            provider: Provider::SecondSpectrum,
            coordinate_system: CoordinateSystem::Provider,
        }
    }

    #[test]
    fn metadata_resolves_teams_by_id_and_ground() {
        let metadata = minimal_metadata();
        let away = TeamId::new("t8").unwrap();
        assert_eq!(metadata.team_by_id(&away).unwrap().ground, Ground::Away);
        assert_eq!(metadata.team_by_ground(Ground::Home).name, "home");
        assert!(metadata.team_by_id(&TeamId::new("t99").unwrap()).is_none());
    }

    #[test]
    fn metadata_round_trips_through_json() {
        let metadata = minimal_metadata();
        let json = serde_json::to_string(&metadata).expect("serialize metadata");
        let round: Metadata = serde_json::from_str(&json).expect("deserialize metadata");
        assert_eq!(round, metadata);
        assert_eq!(round.score.unwrap().to_string(), "2-1");
    }

    #[test]
    fn empty_dataset_reports_empty() {
        let dataset = EventDataset {
            metadata: minimal_metadata(),
            events: vec![],
        };
        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);
        assert_eq!(dataset.events_of_kind("pass").count(), 0);
    }
}
