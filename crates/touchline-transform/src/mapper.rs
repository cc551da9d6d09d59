//! The event mapping pass.
//!
//! One forward walk over the raw records, in feed order. The walk carries
//! the running possession team, fills in period kick-off instants from
//! marker records, and hands every remaining record to the constructor
//! its build plan names. Records in unknown periods, records before their
//! period's kick-off marker, and the marker records themselves emit no
//! events.

use chrono::TimeDelta;
use tracing::debug;

use touchline_ingest::codes::{self, qualifier as q};
use touchline_ingest::{RawEvent, parse_goal_clock};
use touchline_model::{
    BallState, Event, EventKind, PeriodId, PlayerId, Point, PositionLine, Team, TeamId,
};

use crate::builders;
use crate::error::TransformError;
use crate::factory::{EventFactory, EventParts};
use crate::periods::PeriodArena;
use crate::plan::{BuildPlan, plan};
use crate::qualifiers;

/// Case-insensitive allowlist of event kind names. The empty filter
/// includes everything.
#[derive(Debug, Clone, Default)]
pub struct EventKindFilter {
    names: Vec<String>,
}

impl EventKindFilter {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| name.into().trim().to_lowercase())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn includes(&self, kind_name: &str) -> bool {
        self.names.is_empty() || self.names.iter().any(|name| name == &kind_name.to_lowercase())
    }
}

/// Maps raw records into canonical events.
///
/// Possession and ball-state bookkeeping runs for every record, including
/// those the filter later drops, so the carried state stays faithful to
/// the full timeline. Periods are enriched with the kick-off and
/// final-whistle instants their marker records carry.
pub fn map_events(
    raw_events: &[RawEvent],
    home_team: &Team,
    away_team: &Team,
    arena: &mut PeriodArena,
    filter: &EventKindFilter,
    factory: &dyn EventFactory,
) -> Result<Vec<Event>, TransformError> {
    let mut possession_team: Option<TeamId> = None;
    let mut events = Vec::new();

    for (idx, raw) in raw_events.iter().enumerate() {
        let team = resolve_team(raw, home_team, away_team)?;
        let previous = neighbor(raw_events, idx, -1);
        let next = neighbor(raw_events, idx, 1);
        let next_next = neighbor(raw_events, idx, 2);

        let period_id = PeriodId::new(raw.period_id);
        let Some(period) = arena.get(period_id) else {
            debug!(
                event_id = %raw.id,
                period = raw.period_id,
                "skipping record outside the period list"
            );
            continue;
        };
        let period_start = period.start_timestamp;

        let build_plan = plan(raw.type_id, raw.outcome);
        match build_plan {
            BuildPlan::StartPeriod => {
                debug!(period = raw.period_id, timestamp = %raw.timestamp, "period start marker");
                arena.set_start(period_id, raw.timestamp);
                continue;
            }
            BuildPlan::EndPeriod => {
                debug!(period = raw.period_id, timestamp = %raw.timestamp, "period end marker");
                arena.set_end(period_id, raw.timestamp);
                continue;
            }
            // Consumed by the adjacent player-off record.
            BuildPlan::PlayerOn => continue,
            _ => {}
        }

        let Some(start_timestamp) = period_start else {
            debug!(event_id = %raw.id, "discarding record before its period started");
            continue;
        };

        if codes::BALL_OWNING_EVENTS.contains(&raw.type_id) {
            possession_team = Some(team.id.clone());
        }
        let ball_state = if codes::DEAD_BALL_EVENTS.contains(&raw.type_id) {
            BallState::Dead
        } else {
            BallState::Alive
        };

        let player_id = raw
            .player_id
            .as_deref()
            .and_then(|id| PlayerId::new(id).ok())
            .and_then(|id| team.player_by_id(&id))
            .map(|player| player.id.clone());

        let mut timestamp = raw.timestamp - start_timestamp;
        let mut coordinates = match (raw.x, raw.y) {
            (Some(x), Some(y)) => Some(Point::new(x, y)),
            _ => None,
        };

        let kind = match build_plan {
            BuildPlan::Pass => builders::build_pass(raw, next, next_next),
            BuildPlan::OffsidePass => builders::build_offside_pass(raw),
            BuildPlan::TakeOn => builders::build_take_on(raw),
            BuildPlan::Shot => {
                // The goal clock on a scoring record is authoritative and
                // replaces the receipt timestamp.
                if raw.type_id == codes::SHOT_GOAL
                    && let Some(value) = raw.qualifier_value(q::GOAL_CLOCK)
                {
                    let instant =
                        parse_goal_clock(value).map_err(|reason| TransformError::GoalClock {
                            value: value.to_string(),
                            event_id: raw.id.clone(),
                            reason,
                        })?;
                    timestamp = instant - start_timestamp;
                }
                if builders::is_own_goal(raw)
                    && let Some(point) = coordinates
                {
                    coordinates = Some(Point::new(100.0 - point.x, 100.0 - point.y));
                }
                builders::build_shot(raw)
            }
            BuildPlan::Recovery => EventKind::Recovery,
            BuildPlan::Clearance => builders::build_clearance(raw),
            BuildPlan::Duel => builders::build_duel(raw),
            BuildPlan::Interception => builders::build_interception(raw, next),
            BuildPlan::Keeper => {
                // A "save" credited to an outfield defender is a block.
                if raw.type_id == codes::SAVE && raw.has_qualifier(q::DEFENDER_BLOCK) {
                    EventKind::Generic {
                        name: "block".to_string(),
                    }
                } else {
                    builders::build_keeper(raw)
                }
            }
            BuildPlan::Miscontrol => EventKind::Miscontrol,
            BuildPlan::FoulCommitted => EventKind::FoulCommitted,
            BuildPlan::BallOut => EventKind::BallOut,
            BuildPlan::FormationChange => {
                // Bench decisions can be keyed in before kick-off.
                timestamp = timestamp.max(TimeDelta::zero());
                builders::build_formation_change(raw)
            }
            BuildPlan::Substitution => {
                timestamp = timestamp.max(TimeDelta::zero());
                let (replacement_player_id, position) =
                    resolve_substitution(raw, previous, next, team)?;
                EventKind::Substitution {
                    replacement_player_id,
                    position,
                }
            }
            BuildPlan::Card => builders::build_card(raw),
            BuildPlan::Generic => builders::build_generic(raw),
            BuildPlan::StartPeriod | BuildPlan::EndPeriod | BuildPlan::PlayerOn => continue,
        };

        let event = factory.build(EventParts {
            event_id: raw.id.clone(),
            kind,
            period_id,
            timestamp,
            team_id: team.id.clone(),
            player_id,
            ball_owning_team: possession_team.clone(),
            ball_state,
            coordinates,
            raw: raw.raw.clone(),
        });
        if filter.includes(event.kind_name()) {
            events.push(event);
        }
    }

    Ok(events)
}

fn resolve_team<'a>(
    raw: &RawEvent,
    home_team: &'a Team,
    away_team: &'a Team,
) -> Result<&'a Team, TransformError> {
    let contestant = raw.contestant_id.as_deref();
    if contestant == Some(home_team.id.as_str()) {
        Ok(home_team)
    } else if contestant == Some(away_team.id.as_str()) {
        Ok(away_team)
    } else {
        Err(TransformError::UnknownTeam {
            team_id: contestant.unwrap_or_default().to_string(),
            event_id: raw.id.clone(),
        })
    }
}

/// Bounded lookaround over the record sequence.
fn neighbor(raw_events: &[RawEvent], idx: usize, offset: isize) -> Option<&RawEvent> {
    let target = idx.checked_add_signed(offset)?;
    raw_events.get(target)
}

/// Resolves a player-off record against its player-on marker.
///
/// The marker sits in one of the directly adjacent records and is linked
/// by qualifier 55 carrying the off record's numeric event id. A missing
/// link, a marker without a player, or a player missing from the roster
/// all abort the pass.
fn resolve_substitution(
    raw: &RawEvent,
    previous: Option<&RawEvent>,
    next: Option<&RawEvent>,
    team: &Team,
) -> Result<(PlayerId, Option<PositionLine>), TransformError> {
    let related_id = qualifiers::related_event_id(raw).ok_or_else(|| {
        TransformError::SubstitutionUnresolved {
            event_id: raw.id.clone(),
        }
    })?;
    let marker = [previous, next]
        .into_iter()
        .flatten()
        .find(|candidate| {
            candidate.type_id == codes::PLAYER_ON && candidate.event_id == related_id
        })
        .ok_or_else(|| TransformError::SubstitutionUnresolved {
            event_id: raw.id.clone(),
        })?;

    let replacement_id =
        marker
            .player_id
            .as_deref()
            .ok_or_else(|| TransformError::SubstitutionUnresolved {
                event_id: raw.id.clone(),
            })?;
    let replacement = PlayerId::new(replacement_id)
        .ok()
        .and_then(|id| team.player_by_id(&id))
        .ok_or_else(|| TransformError::ReplacementNotOnRoster {
            player_id: replacement_id.to_string(),
            event_id: raw.id.clone(),
        })?;
    Ok((replacement.id.clone(), qualifiers::position_line(marker)))
}
