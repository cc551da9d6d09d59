//! Tracking frames.

use std::collections::BTreeMap;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::clock;
use crate::dataset::BallState;
use crate::geometry::{Point, Point3};
use crate::ids::{PeriodId, PlayerId, TeamId};

/// Position (and optional speed) of one player at a sampled instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    pub coordinates: Point,
    pub speed: Option<f64>,
}

/// One sampled instant of the tracking feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub frame_id: u64,
    pub period_id: PeriodId,
    /// Time since the period start.
    #[serde(with = "clock::duration_secs")]
    pub timestamp: TimeDelta,
    pub ball_state: BallState,
    pub ball_owning_team: Option<TeamId>,
    pub ball_coordinates: Option<Point3>,
    /// Player positions keyed by player id.
    #[serde(default)]
    pub players: BTreeMap<PlayerId, PlayerData>,
}
