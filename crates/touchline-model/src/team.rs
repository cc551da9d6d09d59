//! Teams and rosters.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ids::{PlayerId, TeamId};

/// Side of the fixture a team occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ground {
    Home,
    Away,
}

impl Ground {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ground::Home => "home",
            Ground::Away => "away",
        }
    }

    pub fn opposite(&self) -> Ground {
        match self {
            Ground::Home => Ground::Away,
            Ground::Away => Ground::Home,
        }
    }
}

impl fmt::Display for Ground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Ground {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Ground::Home),
            "away" => Ok(Ground::Away),
            _ => Err(format!("Unknown ground: {s}")),
        }
    }
}

/// A rostered player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub jersey_number: u32,
    /// True when the player is in the starting eleven rather than on the
    /// bench.
    pub starting: bool,
    pub starting_position: Option<String>,
    /// Vendor extras that survive deserialization, such as alternate ids.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub ground: Ground,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Team {
    pub fn player_by_id(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| &player.id == id)
    }

    pub fn player_by_jersey(&self, number: u32) -> Option<&Player> {
        self.players
            .iter()
            .find(|player| player.jersey_number == number)
    }

    /// Players in the starting eleven.
    pub fn starters(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|player| player.starting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_team() -> Team {
        Team {
            id: TeamId::new("t101").unwrap(),
            name: "Arsenal".to_string(),
            ground: Ground::Home,
            players: vec![
                Player {
                    id: PlayerId::new("p1").unwrap(),
                    name: "Aaron Ramsdale".to_string(),
                    jersey_number: 1,
                    starting: true,
                    starting_position: Some("GK".to_string()),
                    attributes: BTreeMap::new(),
                },
                Player {
                    id: PlayerId::new("p2").unwrap(),
                    name: "Eddie Nketiah".to_string(),
                    jersey_number: 14,
                    starting: false,
                    starting_position: Some("SUB".to_string()),
                    attributes: BTreeMap::new(),
                },
            ],
        }
    }

    #[test]
    fn lookup_by_id_and_jersey() {
        let team = sample_team();
        let keeper = PlayerId::new("p1").unwrap();
        assert_eq!(team.player_by_id(&keeper).unwrap().jersey_number, 1);
        assert_eq!(team.player_by_jersey(14).unwrap().name, "Eddie Nketiah");
        assert!(team.player_by_jersey(99).is_none());
    }

    #[test]
    fn starters_excludes_the_bench() {
        let team = sample_team();
        let starters: Vec<_> = team.starters().collect();
        assert_eq!(starters.len(), 1);
        assert!(starters[0].starting);
    }

    #[test]
    fn ground_round_trips_through_strings() {
        assert_eq!("HOME".parse::<Ground>().unwrap(), Ground::Home);
        assert_eq!(Ground::Away.opposite(), Ground::Home);
        assert_eq!(Ground::Away.to_string(), "away");
    }
}
