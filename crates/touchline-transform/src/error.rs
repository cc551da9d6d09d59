//! Error types for the mapping pass.

use thiserror::Error;

/// Errors raised while turning raw records into canonical events.
#[derive(Debug, Error)]
pub enum TransformError {
    // === Team Resolution Errors ===
    /// A record names a contestant that is not one of the two lineups.
    #[error("unknown team id '{team_id}' on event {event_id}")]
    UnknownTeam { team_id: String, event_id: String },

    // === Substitution Errors ===
    /// A player-off record whose player-on marker cannot be found in the
    /// adjacent records, or whose marker names no player.
    #[error("unable to resolve the replacement player for event {event_id}")]
    SubstitutionUnresolved { event_id: String },

    /// The player-on marker names a player missing from the roster.
    #[error("replacement player '{player_id}' for event {event_id} is not on the roster")]
    ReplacementNotOnRoster { player_id: String, event_id: String },

    // === Clock Errors ===
    /// The authoritative goal clock on a scoring record failed to parse.
    #[error("invalid goal clock '{value}' on event {event_id}: {reason}")]
    GoalClock {
        value: String,
        event_id: String,
        reason: String,
    },

    // === Coordinate Errors ===
    /// Metric output was requested but the metadata carries no pitch
    /// dimensions to scale against.
    #[error("cannot produce metric coordinates without pitch dimensions")]
    MissingPitchDimensions,
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TransformError::UnknownTeam {
            team_id: "t99".to_string(),
            event_id: "e1".to_string(),
        };
        assert_eq!(err.to_string(), "unknown team id 't99' on event e1");

        let err = TransformError::SubstitutionUnresolved {
            event_id: "e7".to_string(),
        };
        assert!(err.to_string().contains("e7"));

        let err = TransformError::MissingPitchDimensions;
        assert!(err.to_string().contains("pitch dimensions"));
    }
}
