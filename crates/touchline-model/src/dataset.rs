//! Datasets and their descriptive metadata.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::frame::Frame;
use crate::geometry::{CoordinateSystem, PitchDimensions};
use crate::ids::{PeriodId, TeamId};
use crate::period::Period;
use crate::team::{Ground, Team};

/// Whether the ball is in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BallState {
    Alive,
    Dead,
}

/// Reference frame the coordinates of a dataset are expressed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Each record's coordinates are relative to the team executing the
    /// action, which attacks left to right.
    ActionExecutingTeam,
    /// The home team attacks left to right in every period.
    FixedHomeAway,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::ActionExecutingTeam => "action_executing_team",
            Orientation::FixedHomeAway => "fixed_home_away",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Data provider a dataset originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    SecondSpectrum,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::SecondSpectrum => "secondspectrum",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which per-record annotations a dataset carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetFlags {
    pub ball_owning_team: bool,
    pub ball_state: bool,
}

impl DatasetFlags {
    pub const fn all() -> Self {
        Self {
            ball_owning_team: true,
            ball_state: true,
        }
    }
}

/// Running score as reported by the match metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

/// Match-level description shared by event and tracking datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub game_id: String,
    pub date: Option<DateTime<Utc>>,
    /// Matchday label; not available from this provider.
    pub game_week: Option<String>,
    pub home_team: Team,
    pub away_team: Team,
    pub periods: Vec<Period>,
    pub pitch_dimensions: Option<PitchDimensions>,
    /// Tracking feed sampling rate in frames per second.
    pub frame_rate: u32,
    pub score: Option<Score>,
    pub orientation: Orientation,
    pub flags: DatasetFlags,
    pub provider: Provider,
    pub coordinate_system: CoordinateSystem,
}

impl Metadata {
    pub fn team_by_id(&self, id: &TeamId) -> Option<&Team> {
        if self.home_team.id == *id {
            Some(&self.home_team)
        } else if self.away_team.id == *id {
            Some(&self.away_team)
        } else {
            None
        }
    }

    pub fn team_by_ground(&self, ground: Ground) -> &Team {
        match ground {
            Ground::Home => &self.home_team,
            Ground::Away => &self.away_team,
        }
    }

    pub fn period_by_id(&self, id: PeriodId) -> Option<&Period> {
        self.periods.iter().find(|period| period.id == id)
    }
}

/// A complete event dataset: one record per match event, in feed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDataset {
    pub metadata: Metadata,
    pub events: Vec<Event>,
}

impl EventDataset {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events whose kind name matches, ignoring case.
    pub fn events_of_kind<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Event> + 'a {
        self.events
            .iter()
            .filter(move |event| event.kind_name().eq_ignore_ascii_case(name))
    }
}

/// A complete tracking dataset: one record per sampled frame, in feed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingDataset {
    pub metadata: Metadata,
    pub frames: Vec<Frame>,
}

impl TrackingDataset {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
