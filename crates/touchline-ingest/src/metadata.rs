//! The match metadata document (JSON variant).
//!
//! A single complete JSON object describing the fixture: identity, date,
//! lineups, played periods, pitch size, score, and the tracking frame rate.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use touchline_model::clock;
use touchline_model::{
    Ground, Period, PeriodId, PitchDimensions, Player, PlayerId, Score, Team, TeamId,
};

use crate::coerce::{coerce_string, coerce_u32};
use crate::error::{IngestError, Result};

/// Tracking frame rate assumed when the document does not name one.
pub const DEFAULT_FRAME_RATE: u32 = 25;

/// Everything the metadata document describes about the match.
#[derive(Debug, Clone)]
pub struct MatchInfo {
    pub game_id: String,
    pub date: Option<DateTime<Utc>>,
    pub frame_rate: u32,
    pub home_team: Team,
    pub away_team: Team,
    pub periods: Vec<Period>,
    pub pitch_dimensions: Option<PitchDimensions>,
    pub score: Option<Score>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetadataDoc {
    ssi_id: Option<String>,
    description: Option<String>,
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    fps: Option<f64>,
    home_opta_id: Option<Value>,
    away_opta_id: Option<Value>,
    #[serde(default)]
    home_players: Vec<PlayerDoc>,
    #[serde(default)]
    away_players: Vec<PlayerDoc>,
    #[serde(default)]
    periods: Vec<PeriodDoc>,
    pitch_length: Option<f64>,
    pitch_width: Option<f64>,
    home_score: Option<u32>,
    away_score: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerDoc {
    opta_id: Option<Value>,
    ssi_id: Option<String>,
    opta_uuid: Option<String>,
    name: Option<String>,
    position: Option<String>,
    number: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PeriodDoc {
    number: u8,
    start_frame_idx: i64,
    end_frame_idx: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RosterDoc {
    #[serde(default)]
    home_players: Vec<PlayerDoc>,
    #[serde(default)]
    away_players: Vec<PlayerDoc>,
}

/// Parses the metadata document.
pub fn parse_match_info(data: &str) -> Result<MatchInfo> {
    let doc: MetadataDoc =
        serde_json::from_str(data).map_err(|source| IngestError::MetadataParse { source })?;

    let game_id = doc.ssi_id.clone().ok_or_else(|| schema("missing ssiId"))?;
    let frame_rate = match doc.fps {
        Some(fps) if fps >= 1.0 => fps as u32,
        Some(fps) => return Err(schema(&format!("fps must be positive, got {fps}"))),
        None => DEFAULT_FRAME_RATE,
    };

    let (home_name, away_name) = team_names(doc.description.as_deref());
    let home_team = build_team(
        Ground::Home,
        home_name,
        doc.home_opta_id.as_ref(),
        &doc.home_players,
    )?;
    let away_team = build_team(
        Ground::Away,
        away_name,
        doc.away_opta_id.as_ref(),
        &doc.away_players,
    )?;

    let mut periods = Vec::new();
    for period in &doc.periods {
        // A period whose frame range is 0..0 was never played.
        if period.start_frame_idx == 0 && period.end_frame_idx == 0 {
            debug!(number = period.number, "excluding unplayed period");
            continue;
        }
        periods.push(Period::new(
            PeriodId::new(period.number),
            clock::seconds_f64(period.start_frame_idx as f64 / f64::from(frame_rate)),
            clock::seconds_f64(period.end_frame_idx as f64 / f64::from(frame_rate)),
        ));
    }

    let pitch_dimensions = match (doc.pitch_length, doc.pitch_width) {
        (Some(length), Some(width)) => Some(PitchDimensions::new(length, width)),
        _ => None,
    };
    let score = match (doc.home_score, doc.away_score) {
        (Some(home), Some(away)) => Some(Score { home, away }),
        _ => None,
    };

    Ok(MatchInfo {
        game_id,
        date: extract_date(&doc),
        frame_rate,
        home_team,
        away_team,
        periods,
        pitch_dimensions,
        score,
    })
}

/// Parses a supplementary roster document (`homePlayers`/`awayPlayers` in
/// the metadata player schema). Tracking feeds ship their lineups this way
/// when the main metadata document has none.
pub fn parse_supplementary_rosters(data: &str) -> Result<(Vec<Player>, Vec<Player>)> {
    let doc: RosterDoc =
        serde_json::from_str(data).map_err(|source| IngestError::MetadataParse { source })?;
    let home = doc
        .home_players
        .iter()
        .map(build_player)
        .collect::<Result<Vec<_>>>()?;
    let away = doc
        .away_players
        .iter()
        .map(build_player)
        .collect::<Result<Vec<_>>>()?;
    Ok((home, away))
}

fn extract_date(doc: &MetadataDoc) -> Option<DateTime<Utc>> {
    let (year, month, day) = (doc.year?, doc.month?, doc.day?);
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()
}

/// Best-effort short team names from the description string, which reads
/// `"Home - Away: ..."`. Any shape that does not fit falls back to the
/// placeholder names.
fn team_names(description: Option<&str>) -> (String, String) {
    if let Some(description) = description {
        let mut parts = description.split('-');
        if let (Some(home), Some(away)) = (parts.next(), parts.next()) {
            let away = match away.split_once(':') {
                Some((before, _)) => before,
                None => away,
            };
            return (home.trim().to_string(), away.trim().to_string());
        }
    }
    ("home".to_string(), "away".to_string())
}

fn build_team(
    ground: Ground,
    name: String,
    team_id: Option<&Value>,
    players: &[PlayerDoc],
) -> Result<Team> {
    let id_raw = team_id
        .and_then(coerce_string)
        .ok_or_else(|| schema(&format!("missing {ground} team id")))?;
    let mut team = Team {
        id: TeamId::new(id_raw)?,
        name,
        ground,
        players: Vec::with_capacity(players.len()),
    };
    for player in players {
        team.players.push(build_player(player)?);
    }
    Ok(team)
}

fn build_player(doc: &PlayerDoc) -> Result<Player> {
    let id_raw = doc
        .opta_id
        .as_ref()
        .and_then(coerce_string)
        .ok_or_else(|| schema("player missing optaId"))?;
    let name = doc
        .name
        .clone()
        .ok_or_else(|| schema(&format!("player {id_raw} missing name")))?;
    let jersey_number = doc
        .number
        .as_ref()
        .and_then(coerce_u32)
        .ok_or_else(|| schema(&format!("player {id_raw} missing jersey number")))?;

    let mut attributes = BTreeMap::new();
    if let Some(ssi_id) = &doc.ssi_id {
        attributes.insert("ssiId".to_string(), ssi_id.clone());
    }
    if let Some(opta_uuid) = &doc.opta_uuid {
        attributes.insert("optaUuid".to_string(), opta_uuid.clone());
    }

    Ok(Player {
        id: PlayerId::new(id_raw)?,
        name,
        jersey_number,
        starting: doc.position.as_deref() != Some("SUB"),
        starting_position: doc.position.clone(),
        attributes,
    })
}

fn schema(reason: &str) -> IngestError {
    IngestError::MetadataSchema {
        reason: reason.to_string(),
    }
}
