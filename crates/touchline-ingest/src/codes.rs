//! Vendor type and qualifier codes carried by the Insight feed.
//!
//! The code space is Opta-compatible: every record names an event type by
//! number and attaches qualifier codes that refine it.

pub const PASS: u16 = 1;
pub const OFFSIDE_PASS: u16 = 2;
pub const TAKE_ON: u16 = 3;
pub const FOUL_COMMITTED: u16 = 4;
pub const BALL_OUT: u16 = 5;
pub const CORNER_AWARDED: u16 = 6;
pub const TACKLE: u16 = 7;
pub const INTERCEPTION: u16 = 8;
pub const SAVE: u16 = 10;
pub const CLAIM: u16 = 11;
pub const CLEARANCE: u16 = 12;
pub const SHOT_MISS: u16 = 13;
pub const SHOT_POST: u16 = 14;
pub const SHOT_SAVED: u16 = 15;
pub const SHOT_GOAL: u16 = 16;
pub const CARD: u16 = 17;
pub const PLAYER_OFF: u16 = 18;
pub const PLAYER_ON: u16 = 19;
pub const START_DELAY: u16 = 27;
pub const END_DELAY: u16 = 28;
pub const END_PERIOD: u16 = 30;
pub const START_PERIOD: u16 = 32;
pub const FORMATION_CHANGE: u16 = 40;
pub const PUNCH: u16 = 41;
pub const DELETED_EVENT: u16 = 43;
pub const AERIAL: u16 = 44;
pub const RECOVERY: u16 = 49;
pub const KEEPER_PICK_UP: u16 = 52;
pub const SMOTHER: u16 = 54;
pub const OFFSIDE_PROVOKED: u16 = 55;
pub const BALL_TOUCH: u16 = 61;
pub const FIFTY_FIFTY: u16 = 67;
pub const BLOCKED_PASS: u16 = 74;

/// Event types that put the acting team in possession.
pub const BALL_OWNING_EVENTS: &[u16] = &[
    PASS, OFFSIDE_PASS, TAKE_ON, SHOT_MISS, SHOT_POST, SHOT_SAVED, SHOT_GOAL, RECOVERY,
];

/// Event types recorded while the ball is out of play.
pub const DEAD_BALL_EVENTS: &[u16] = &[CARD, START_DELAY, END_DELAY, OFFSIDE_PROVOKED];

/// The duel family.
pub const DUEL_EVENTS: &[u16] = &[TACKLE, AERIAL, FIFTY_FIFTY];

/// The goalkeeper family.
pub const KEEPER_EVENTS: &[u16] = &[SAVE, CLAIM, PUNCH, KEEPER_PICK_UP, SMOTHER];

/// Event types that record the ball leaving play.
pub const BALL_OUT_EVENTS: &[u16] = &[BALL_OUT, CORNER_AWARDED];

/// Feed name for a type code, used for events with no dedicated
/// constructor.
pub fn event_type_name(type_id: u16) -> &'static str {
    match type_id {
        PASS => "pass",
        OFFSIDE_PASS => "offside pass",
        TAKE_ON => "take on",
        FOUL_COMMITTED => "foul",
        BALL_OUT => "out",
        CORNER_AWARDED => "corner awarded",
        TACKLE => "tackle",
        INTERCEPTION => "interception",
        SAVE => "save",
        CLAIM => "claim",
        CLEARANCE => "clearance",
        SHOT_MISS => "miss",
        SHOT_POST => "post",
        SHOT_SAVED => "attempt saved",
        SHOT_GOAL => "goal",
        CARD => "card",
        PLAYER_OFF => "player off",
        PLAYER_ON => "player on",
        START_DELAY => "start delay",
        END_DELAY => "end delay",
        END_PERIOD => "end",
        START_PERIOD => "start",
        FORMATION_CHANGE => "formation change",
        PUNCH => "punch",
        DELETED_EVENT => "deleted event",
        AERIAL => "aerial",
        RECOVERY => "ball recovery",
        KEEPER_PICK_UP => "keeper pick-up",
        SMOTHER => "smother",
        OFFSIDE_PROVOKED => "offside provoked",
        BALL_TOUCH => "ball touch",
        FIFTY_FIFTY => "50/50",
        BLOCKED_PASS => "blocked pass",
        _ => "unknown",
    }
}

/// Qualifier codes.
pub mod qualifier {
    /// Long-ball pass.
    pub const LONG_BALL: u32 = 1;
    /// Crossed pass.
    pub const CROSS: u32 = 2;
    /// Headed pass.
    pub const HEAD_PASS: u32 = 3;
    /// Through ball.
    pub const THROUGH_BALL: u32 = 4;
    /// Taken from a free kick.
    pub const FREE_KICK: u32 = 5;
    /// Taken from a corner.
    pub const CORNER_TAKEN: u32 = 6;
    /// Penalty kick.
    pub const PENALTY: u32 = 9;
    /// Headed.
    pub const HEAD: u32 = 15;
    /// Right-footed.
    pub const RIGHT_FOOT: u32 = 20;
    /// The goal was scored into the player's own net.
    pub const OWN_GOAL: u32 = 28;
    /// First yellow card.
    pub const FIRST_YELLOW: u32 = 31;
    /// Second yellow card.
    pub const SECOND_YELLOW: u32 = 32;
    /// Straight red card.
    pub const RED: u32 = 33;
    /// Position line of a player entering the pitch.
    pub const POSITION_LINE: u32 = 44;
    /// Event id of the related record (links a player-off to its
    /// player-on marker).
    pub const RELATED_EVENT_ID: u32 = 55;
    /// Left-footed.
    pub const LEFT_FOOT: u32 = 72;
    /// The shot was blocked before reaching the goal.
    pub const BLOCKED: u32 = 82;
    /// The "save" was a shot block by an outfield defender.
    pub const DEFENDER_BLOCK: u32 = 94;
    /// Goal-mouth placement: position across the goal line.
    pub const GOAL_MOUTH_Y: u32 = 102;
    /// Goal-mouth placement: height over the goal line.
    pub const GOAL_MOUTH_Z: u32 = 103;
    /// Thrown in.
    pub const THROW_IN: u32 = 107;
    /// Goal kick.
    pub const GOAL_KICK: u32 = 124;
    /// Formation layout code.
    pub const FORMATION: u32 = 130;
    /// Pass end position, x component.
    pub const PASS_END_X: u32 = 140;
    /// Pass end position, y component.
    pub const PASS_END_Y: u32 = 141;
    /// Block position, x component.
    pub const BLOCKED_X: u32 = 146;
    /// Block position, y component.
    pub const BLOCKED_Y: u32 = 147;
    /// Kick-off.
    pub const KICK_OFF: u32 = 279;
    /// Authoritative wall clock of a goal.
    pub const GOAL_CLOCK: u32 = 374;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_do_not_overlap() {
        for code in DUEL_EVENTS {
            assert!(!KEEPER_EVENTS.contains(code));
            assert!(!BALL_OUT_EVENTS.contains(code));
        }
        for code in DEAD_BALL_EVENTS {
            assert!(!BALL_OWNING_EVENTS.contains(code));
        }
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(event_type_name(SHOT_SAVED), "attempt saved");
        assert_eq!(event_type_name(999), "unknown");
    }
}
