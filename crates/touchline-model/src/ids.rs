use std::fmt;

use crate::ModelError;

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TeamId(String);

impl TeamId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidTeamId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidPlayerId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Period number as carried by the feed (1 = first half, 2 = second half).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct PeriodId(u8);

impl PeriodId {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for PeriodId {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for PeriodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_id_rejects_blank_input() {
        assert!(TeamId::new("").is_err());
        assert!(TeamId::new("   ").is_err());
        assert_eq!(TeamId::new(" 4dsgumo7d4zupm2ugsvm4zm4d ").unwrap().as_str(),
            "4dsgumo7d4zupm2ugsvm4zm4d");
    }

    #[test]
    fn player_id_trims_whitespace() {
        let id = PlayerId::new(" 40f0n89hbkxjth8xxbbk4cfo1 ").unwrap();
        assert_eq!(id.to_string(), "40f0n89hbkxjth8xxbbk4cfo1");
    }

    #[test]
    fn period_id_displays_its_number() {
        assert_eq!(PeriodId::new(2).to_string(), "2");
        assert_eq!(PeriodId::from(1).value(), 1);
    }
}
