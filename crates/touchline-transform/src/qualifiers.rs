//! Typed views over the raw qualifier map.
//!
//! Records carry their refinements as numeric qualifier codes with
//! optional string values. The helpers here lift the codes the canonical
//! model cares about into typed qualifiers, leaving everything else in
//! the record's raw payload.

use touchline_ingest::RawEvent;
use touchline_ingest::codes::qualifier as q;
use touchline_model::{
    BodyPart, CardType, Formation, PassStyle, Point, Point3, PositionLine, Qualifier, SetPiece,
};

/// Set-piece, body-part and pass-style qualifiers attached to a record,
/// in that order.
pub fn typed_qualifiers(raw: &RawEvent) -> Vec<Qualifier> {
    let mut qualifiers = Vec::new();
    if let Some(set_piece) = set_piece(raw) {
        qualifiers.push(Qualifier::SetPiece(set_piece));
    }
    if let Some(body_part) = body_part(raw) {
        qualifiers.push(Qualifier::BodyPart(body_part));
    }
    qualifiers.extend(pass_styles(raw).into_iter().map(Qualifier::PassStyle));
    qualifiers
}

/// The restart the record was taken from, if any. A penalty outranks the
/// free-kick code it usually travels with.
pub fn set_piece(raw: &RawEvent) -> Option<SetPiece> {
    if raw.has_qualifier(q::PENALTY) {
        Some(SetPiece::Penalty)
    } else if raw.has_qualifier(q::CORNER_TAKEN) {
        Some(SetPiece::Corner)
    } else if raw.has_qualifier(q::FREE_KICK) {
        Some(SetPiece::FreeKick)
    } else if raw.has_qualifier(q::THROW_IN) {
        Some(SetPiece::ThrowIn)
    } else if raw.has_qualifier(q::GOAL_KICK) {
        Some(SetPiece::GoalKick)
    } else if raw.has_qualifier(q::KICK_OFF) {
        Some(SetPiece::KickOff)
    } else {
        None
    }
}

pub fn body_part(raw: &RawEvent) -> Option<BodyPart> {
    if raw.has_qualifier(q::HEAD) || raw.has_qualifier(q::HEAD_PASS) {
        Some(BodyPart::Head)
    } else if raw.has_qualifier(q::LEFT_FOOT) {
        Some(BodyPart::LeftFoot)
    } else if raw.has_qualifier(q::RIGHT_FOOT) {
        Some(BodyPart::RightFoot)
    } else {
        None
    }
}

/// Pass styles are not mutually exclusive; a long cross carries two.
pub fn pass_styles(raw: &RawEvent) -> Vec<PassStyle> {
    let mut styles = Vec::new();
    if raw.has_qualifier(q::LONG_BALL) {
        styles.push(PassStyle::LongBall);
    }
    if raw.has_qualifier(q::CROSS) {
        styles.push(PassStyle::Cross);
    }
    if raw.has_qualifier(q::THROUGH_BALL) {
        styles.push(PassStyle::ThroughBall);
    }
    styles
}

pub fn card_type(raw: &RawEvent) -> Option<CardType> {
    if raw.has_qualifier(q::FIRST_YELLOW) {
        Some(CardType::FirstYellow)
    } else if raw.has_qualifier(q::SECOND_YELLOW) {
        Some(CardType::SecondYellow)
    } else if raw.has_qualifier(q::RED) {
        Some(CardType::Red)
    } else {
        None
    }
}

/// Position line named by qualifier 44 on a player-on marker. Absent or
/// unrecognized values yield none.
pub fn position_line(raw: &RawEvent) -> Option<PositionLine> {
    raw.qualifier_value(q::POSITION_LINE)?.parse().ok()
}

/// Event id of the record this one is linked to (qualifier 55).
pub fn related_event_id(raw: &RawEvent) -> Option<i64> {
    raw.qualifier_value(q::RELATED_EVENT_ID)?.trim().parse().ok()
}

/// Formation label for the code in qualifier 130.
///
/// Codes outside the published table keep a `code-N` label so consumers
/// can still see what the vendor sent; a record with no formation
/// qualifier at all is labelled `unknown`.
pub fn formation(raw: &RawEvent) -> Formation {
    let code = raw
        .qualifier_value(q::FORMATION)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .map(|value| value as u32);
    match code {
        Some(2) => Formation::new("4-4-2"),
        Some(3) => Formation::new("4-1-2-1-2"),
        Some(4) => Formation::new("4-3-3"),
        Some(5) => Formation::new("4-5-1"),
        Some(6) => Formation::new("4-4-1-1"),
        Some(7) => Formation::new("4-1-4-1"),
        Some(8) => Formation::new("4-2-3-1"),
        Some(9) => Formation::new("4-3-2-1"),
        Some(10) => Formation::new("5-3-2"),
        Some(11) => Formation::new("5-4-1"),
        Some(12) => Formation::new("3-5-2"),
        Some(13) => Formation::new("3-4-3"),
        Some(other) => Formation::new(format!("code-{other}")),
        None => Formation::new("unknown"),
    }
}

/// End location named by the record's coordinate qualifiers.
///
/// The pass-end position (140/141) wins, then the block position
/// (146/147), then the goal-mouth pair (102/103), which places the ball
/// across and above the goal line at x = 100. Unparseable values count
/// as absent.
pub fn end_coordinates(raw: &RawEvent) -> Option<Point3> {
    if let Some(point) = point_from(raw, q::PASS_END_X, q::PASS_END_Y) {
        return Some(Point3::new(point.x, point.y, 0.0));
    }
    if let Some(point) = point_from(raw, q::BLOCKED_X, q::BLOCKED_Y) {
        return Some(Point3::new(point.x, point.y, 0.0));
    }
    let y = coordinate_value(raw, q::GOAL_MOUTH_Y)?;
    let z = coordinate_value(raw, q::GOAL_MOUTH_Z)?;
    Some(Point3::new(100.0, y, z))
}

fn point_from(raw: &RawEvent, x_code: u32, y_code: u32) -> Option<Point> {
    let x = coordinate_value(raw, x_code)?;
    let y = coordinate_value(raw, y_code)?;
    Some(Point::new(x, y))
}

fn coordinate_value(raw: &RawEvent, code: u32) -> Option<f64> {
    raw.qualifier_value(code)?.trim().parse().ok()
}
