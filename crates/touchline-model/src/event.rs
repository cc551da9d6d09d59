//! Canonical match events.
//!
//! An [`Event`] pairs the context shared by every record (period, clock,
//! possession, ball state) with an [`EventKind`] payload describing what
//! actually happened. Events reference teams and players by id; the full
//! objects live on the dataset metadata.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::clock;
use crate::dataset::BallState;
use crate::geometry::{Point, Point3};
use crate::ids::{PeriodId, PlayerId, TeamId};

/// How a pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassResult {
    Complete,
    Incomplete,
    Offside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TakeOnResult {
    Complete,
    Incomplete,
}

/// How a shot ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotResult {
    OffTarget,
    Post,
    Saved,
    Blocked,
    Goal,
    OwnGoal,
}

impl ShotResult {
    /// True for shots that ended up in a net, own goals included.
    pub fn is_goal(&self) -> bool {
        matches!(self, ShotResult::Goal | ShotResult::OwnGoal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuelType {
    Ground,
    Aerial,
    LooseBall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuelResult {
    Won,
    Lost,
}

/// Where the ball went after an interception or blocked pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterceptionResult {
    /// The intercepting team kept the ball.
    Success,
    /// Possession went to the other team.
    Lost,
    /// The ball went out of play.
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalkeeperAction {
    Save,
    Claim,
    Punch,
    PickUp,
    Smother,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    FirstYellow,
    SecondYellow,
    Red,
}

/// Position line a player occupies when entering the pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionLine {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PositionLine {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionLine::Goalkeeper => "Goalkeeper",
            PositionLine::Defender => "Defender",
            PositionLine::Midfielder => "Midfielder",
            PositionLine::Forward => "Forward",
        }
    }
}

impl fmt::Display for PositionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PositionLine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "goalkeeper" => Ok(PositionLine::Goalkeeper),
            "defender" => Ok(PositionLine::Defender),
            "midfielder" => Ok(PositionLine::Midfielder),
            "forward" => Ok(PositionLine::Forward),
            _ => Err(format!("Unknown position line: {s}")),
        }
    }
}

/// A formation label such as "4-4-2".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Formation(String);

impl Formation {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetPiece {
    Corner,
    FreeKick,
    Penalty,
    ThrowIn,
    GoalKick,
    KickOff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    Head,
    LeftFoot,
    RightFoot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassStyle {
    LongBall,
    Cross,
    ThroughBall,
}

/// Secondary descriptor attached to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Qualifier {
    SetPiece(SetPiece),
    BodyPart(BodyPart),
    PassStyle(PassStyle),
}

/// Payload specific to one kind of event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventKind {
    Pass {
        result: PassResult,
        receiver_coordinates: Option<Point>,
        #[serde(default)]
        qualifiers: Vec<Qualifier>,
    },
    TakeOn {
        result: TakeOnResult,
    },
    Shot {
        result: ShotResult,
        end_coordinates: Option<Point3>,
        #[serde(default)]
        qualifiers: Vec<Qualifier>,
    },
    Recovery,
    Clearance {
        #[serde(default)]
        qualifiers: Vec<Qualifier>,
    },
    Duel {
        duel_type: DuelType,
        result: Option<DuelResult>,
        #[serde(default)]
        qualifiers: Vec<Qualifier>,
    },
    Interception {
        result: InterceptionResult,
    },
    Miscontrol,
    FoulCommitted,
    BallOut,
    Goalkeeper {
        action: GoalkeeperAction,
    },
    FormationChange {
        formation: Formation,
    },
    Substitution {
        replacement_player_id: PlayerId,
        position: Option<PositionLine>,
    },
    Card {
        card_type: Option<CardType>,
    },
    Generic {
        name: String,
    },
}

impl EventKind {
    /// Lowercase name used for event-type filtering and summaries.
    ///
    /// Generic events answer with their own name (for example "block"), not
    /// a blanket "generic".
    pub fn name(&self) -> &str {
        match self {
            EventKind::Pass { .. } => "pass",
            EventKind::TakeOn { .. } => "take_on",
            EventKind::Shot { .. } => "shot",
            EventKind::Recovery => "recovery",
            EventKind::Clearance { .. } => "clearance",
            EventKind::Duel { .. } => "duel",
            EventKind::Interception { .. } => "interception",
            EventKind::Miscontrol => "miscontrol",
            EventKind::FoulCommitted => "foul_committed",
            EventKind::BallOut => "ball_out",
            EventKind::Goalkeeper { .. } => "goalkeeper",
            EventKind::FormationChange { .. } => "formation_change",
            EventKind::Substitution { .. } => "substitution",
            EventKind::Card { .. } => "card",
            EventKind::Generic { name } => name,
        }
    }
}

/// A canonical match event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Vendor-assigned unique record id.
    pub event_id: String,
    #[serde(flatten)]
    pub kind: EventKind,
    pub period_id: PeriodId,
    /// Time since the period start.
    #[serde(with = "clock::duration_secs")]
    pub timestamp: TimeDelta,
    pub team_id: TeamId,
    pub player_id: Option<PlayerId>,
    pub ball_owning_team: Option<TeamId>,
    pub ball_state: BallState,
    pub coordinates: Option<Point>,
    /// The vendor record this event was built from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<serde_json::Value>,
}

impl Event {
    pub fn kind_name(&self) -> &str {
        self.kind.name()
    }
}
