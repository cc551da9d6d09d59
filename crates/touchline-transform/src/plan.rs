//! Type-code dispatch table.
//!
//! Every vendor type code resolves to exactly one [`BuildPlan`] naming
//! what the mapping pass will do with the record. Keeping the table
//! separate from the pass itself means the dispatch rules can be tested
//! without assembling a whole feed.

use touchline_ingest::codes;

/// Constructor (or marker role) selected for a vendor record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPlan {
    /// Period-start marker: records the kick-off instant, emits nothing.
    StartPeriod,
    /// Period-end marker: records the final instant, emits nothing.
    EndPeriod,
    /// Player-on marker: consumed by the adjacent player-off record.
    PlayerOn,
    Pass,
    /// A pass flagged offside at the receiving end.
    OffsidePass,
    TakeOn,
    Shot,
    Recovery,
    Clearance,
    Duel,
    Interception,
    Keeper,
    Miscontrol,
    FoulCommitted,
    BallOut,
    FormationChange,
    Substitution,
    Card,
    /// Everything else keeps its vendor name on a generic event.
    Generic,
}

/// Resolves the constructor for a type code.
///
/// Ball touches and fouls only take their dedicated shapes when the
/// record carries outcome 0 (a lost touch, a conceded foul); any other
/// outcome falls through to the generic constructor.
pub fn plan(type_id: u16, outcome: Option<i64>) -> BuildPlan {
    match type_id {
        codes::START_PERIOD => BuildPlan::StartPeriod,
        codes::END_PERIOD => BuildPlan::EndPeriod,
        codes::PLAYER_ON => BuildPlan::PlayerOn,
        codes::PASS => BuildPlan::Pass,
        codes::OFFSIDE_PASS => BuildPlan::OffsidePass,
        codes::TAKE_ON => BuildPlan::TakeOn,
        codes::SHOT_MISS | codes::SHOT_POST | codes::SHOT_SAVED | codes::SHOT_GOAL => {
            BuildPlan::Shot
        }
        codes::RECOVERY => BuildPlan::Recovery,
        codes::CLEARANCE => BuildPlan::Clearance,
        id if codes::DUEL_EVENTS.contains(&id) => BuildPlan::Duel,
        codes::INTERCEPTION | codes::BLOCKED_PASS => BuildPlan::Interception,
        id if codes::KEEPER_EVENTS.contains(&id) => BuildPlan::Keeper,
        codes::BALL_TOUCH if outcome == Some(0) => BuildPlan::Miscontrol,
        codes::FOUL_COMMITTED if outcome == Some(0) => BuildPlan::FoulCommitted,
        id if codes::BALL_OUT_EVENTS.contains(&id) => BuildPlan::BallOut,
        codes::FORMATION_CHANGE => BuildPlan::FormationChange,
        codes::PLAYER_OFF => BuildPlan::Substitution,
        codes::CARD => BuildPlan::Card,
        _ => BuildPlan::Generic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_resolve_before_constructors() {
        assert_eq!(plan(codes::START_PERIOD, None), BuildPlan::StartPeriod);
        assert_eq!(plan(codes::END_PERIOD, None), BuildPlan::EndPeriod);
        assert_eq!(plan(codes::PLAYER_ON, Some(1)), BuildPlan::PlayerOn);
    }

    #[test]
    fn every_shot_code_is_a_shot() {
        for id in [
            codes::SHOT_MISS,
            codes::SHOT_POST,
            codes::SHOT_SAVED,
            codes::SHOT_GOAL,
        ] {
            assert_eq!(plan(id, Some(1)), BuildPlan::Shot);
        }
    }

    #[test]
    fn outcome_gates_touch_and_foul() {
        assert_eq!(plan(codes::BALL_TOUCH, Some(0)), BuildPlan::Miscontrol);
        assert_eq!(plan(codes::BALL_TOUCH, Some(1)), BuildPlan::Generic);
        assert_eq!(plan(codes::BALL_TOUCH, None), BuildPlan::Generic);
        assert_eq!(plan(codes::FOUL_COMMITTED, Some(0)), BuildPlan::FoulCommitted);
        assert_eq!(plan(codes::FOUL_COMMITTED, Some(1)), BuildPlan::Generic);
    }

    #[test]
    fn grouped_codes_share_a_plan() {
        assert_eq!(plan(codes::TACKLE, Some(1)), BuildPlan::Duel);
        assert_eq!(plan(codes::AERIAL, Some(0)), BuildPlan::Duel);
        assert_eq!(plan(codes::FIFTY_FIFTY, None), BuildPlan::Duel);
        assert_eq!(plan(codes::BLOCKED_PASS, None), BuildPlan::Interception);
        assert_eq!(plan(codes::KEEPER_PICK_UP, None), BuildPlan::Keeper);
        assert_eq!(plan(codes::BALL_OUT, None), BuildPlan::BallOut);
        assert_eq!(plan(codes::CORNER_AWARDED, None), BuildPlan::BallOut);
    }

    #[test]
    fn unknown_codes_stay_generic() {
        assert_eq!(plan(999, Some(1)), BuildPlan::Generic);
        assert_eq!(plan(codes::START_DELAY, None), BuildPlan::Generic);
        assert_eq!(plan(codes::OFFSIDE_PROVOKED, None), BuildPlan::Generic);
    }
}
