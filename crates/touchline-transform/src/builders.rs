//! Per-kind constructors for canonical event payloads.
//!
//! Each function takes the raw record (plus, where the vendor semantics
//! demand it, a neighboring record) and produces the typed payload for
//! one event kind. Timeline state such as possession and clamping lives
//! in the mapping pass, not here.

use touchline_ingest::RawEvent;
use touchline_ingest::codes::{self, qualifier as q};
use touchline_model::{
    DuelResult, DuelType, EventKind, GoalkeeperAction, InterceptionResult, PassResult, Point,
    Point3, ShotResult, TakeOnResult,
};

use crate::qualifiers;

/// Builds a pass.
///
/// A completed pass followed by an opponent's ball touch that the passing
/// team immediately wins back is treated as a deflection: the receiver
/// location moves to where the touch happened.
pub fn build_pass(
    raw: &RawEvent,
    next: Option<&RawEvent>,
    next_next: Option<&RawEvent>,
) -> EventKind {
    let result = if raw.outcome == Some(1) {
        PassResult::Complete
    } else {
        PassResult::Incomplete
    };
    let mut receiver_coordinates = qualifiers::end_coordinates(raw).map(Point3::xy);
    if result == PassResult::Complete
        && let Some(touch) = next
        && let Some(follow_up) = next_next
        && touch.type_id == codes::BALL_TOUCH
        && touch.contestant_id != raw.contestant_id
        && follow_up.contestant_id == raw.contestant_id
        && let (Some(x), Some(y)) = (touch.x, touch.y)
    {
        receiver_coordinates = Some(Point::new(x, y));
    }
    EventKind::Pass {
        result,
        receiver_coordinates,
        qualifiers: qualifiers::typed_qualifiers(raw),
    }
}

/// An offside pass keeps the pass shape with the offside result.
pub fn build_offside_pass(raw: &RawEvent) -> EventKind {
    EventKind::Pass {
        result: PassResult::Offside,
        receiver_coordinates: qualifiers::end_coordinates(raw).map(Point3::xy),
        qualifiers: qualifiers::typed_qualifiers(raw),
    }
}

pub fn build_take_on(raw: &RawEvent) -> EventKind {
    let result = if raw.outcome == Some(1) {
        TakeOnResult::Complete
    } else {
        TakeOnResult::Incomplete
    };
    EventKind::TakeOn { result }
}

/// Builds a shot from any of the four shot type codes.
///
/// A saved attempt carrying the blocked qualifier was stopped by an
/// outfield body, not the keeper; a goal carrying the own-goal qualifier
/// went into the shooter's own net.
pub fn build_shot(raw: &RawEvent) -> EventKind {
    let result = match raw.type_id {
        codes::SHOT_MISS => ShotResult::OffTarget,
        codes::SHOT_POST => ShotResult::Post,
        codes::SHOT_SAVED => {
            if raw.has_qualifier(q::BLOCKED) {
                ShotResult::Blocked
            } else {
                ShotResult::Saved
            }
        }
        _ => {
            if raw.has_qualifier(q::OWN_GOAL) {
                ShotResult::OwnGoal
            } else {
                ShotResult::Goal
            }
        }
    };
    EventKind::Shot {
        result,
        end_coordinates: qualifiers::end_coordinates(raw),
        qualifiers: qualifiers::typed_qualifiers(raw),
    }
}

/// True when the record is a goal into the shooter's own net. Such base
/// locations are mirrored to the defended end by the mapping pass.
pub fn is_own_goal(raw: &RawEvent) -> bool {
    raw.type_id == codes::SHOT_GOAL && raw.has_qualifier(q::OWN_GOAL)
}

pub fn build_clearance(raw: &RawEvent) -> EventKind {
    EventKind::Clearance {
        qualifiers: qualifiers::typed_qualifiers(raw),
    }
}

pub fn build_duel(raw: &RawEvent) -> EventKind {
    let duel_type = match raw.type_id {
        codes::TACKLE => DuelType::Ground,
        codes::AERIAL => DuelType::Aerial,
        _ => DuelType::LooseBall,
    };
    let result = raw.outcome.map(|outcome| {
        if outcome == 1 {
            DuelResult::Won
        } else {
            DuelResult::Lost
        }
    });
    EventKind::Duel {
        duel_type,
        result,
        qualifiers: qualifiers::typed_qualifiers(raw),
    }
}

/// Builds an interception; the following record decides how it ended.
/// The ball going out ends it out of play, the other side acting next
/// means possession was lost straight away.
pub fn build_interception(raw: &RawEvent, next: Option<&RawEvent>) -> EventKind {
    let result = match next {
        Some(next) if codes::BALL_OUT_EVENTS.contains(&next.type_id) => InterceptionResult::Out,
        Some(next) if next.contestant_id != raw.contestant_id => InterceptionResult::Lost,
        _ => InterceptionResult::Success,
    };
    EventKind::Interception { result }
}

pub fn build_keeper(raw: &RawEvent) -> EventKind {
    let action = match raw.type_id {
        codes::SAVE => GoalkeeperAction::Save,
        codes::CLAIM => GoalkeeperAction::Claim,
        codes::PUNCH => GoalkeeperAction::Punch,
        codes::KEEPER_PICK_UP => GoalkeeperAction::PickUp,
        _ => GoalkeeperAction::Smother,
    };
    EventKind::Goalkeeper { action }
}

pub fn build_formation_change(raw: &RawEvent) -> EventKind {
    EventKind::FormationChange {
        formation: qualifiers::formation(raw),
    }
}

pub fn build_card(raw: &RawEvent) -> EventKind {
    EventKind::Card {
        card_type: qualifiers::card_type(raw),
    }
}

/// Everything without a dedicated shape keeps its feed name.
pub fn build_generic(raw: &RawEvent) -> EventKind {
    EventKind::Generic {
        name: codes::event_type_name(raw.type_id).to_string(),
    }
}
