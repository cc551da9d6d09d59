//! Loading a tracking dataset from the raw frame feed.
//!
//! Frames arrive as newline-delimited JSON. Each line carries the frame
//! index, the in-period game clock, liveness, the last-touch side, the
//! ball position and both teams' player positions keyed by jersey number.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, info_span};

use touchline_ingest::{MatchInfo, parse_match_info, parse_supplementary_rosters};
use touchline_model::{
    BallState, DatasetFlags, Frame, Metadata, Orientation, PeriodId, PlayerData, PlayerId, Point,
    Point3, Provider, Team, TrackingDataset, clock,
};
use touchline_transform::CoordinateTransformer;

use crate::error::{LoadError, Result};
use crate::event::read_input;
use crate::options::TrackingOptions;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrameDoc {
    frame_idx: u64,
    game_clock: f64,
    period: u8,
    live: bool,
    last_touch: Option<String>,
    ball: Option<BallDoc>,
    #[serde(default)]
    home_players: Vec<FramePlayerDoc>,
    #[serde(default)]
    away_players: Vec<FramePlayerDoc>,
}

#[derive(Debug, Deserialize)]
struct BallDoc {
    xyz: Option<[f64; 3]>,
}

#[derive(Debug, Deserialize)]
struct FramePlayerDoc {
    number: Option<u32>,
    xyz: Option<[f64; 3]>,
    speed: Option<f64>,
}

/// Loads a canonical tracking dataset from a raw frame feed and its
/// metadata document.
pub fn load_tracking(
    raw_data: &str,
    meta_data: &str,
    options: &TrackingOptions,
) -> Result<TrackingDataset> {
    let mut info = info_span!("metadata").in_scope(|| parse_match_info(meta_data))?;

    if let Some(additional) = options.additional_meta.as_deref() {
        let (home, away) = parse_supplementary_rosters(additional)?;
        if !home.is_empty() {
            info.home_team.players = home;
        }
        if !away.is_empty() {
            info.away_team.players = away;
        }
    }

    let transformer = CoordinateTransformer::new(options.coordinates, info.pitch_dimensions)?;
    let frames =
        info_span!("frames").in_scope(|| collect_frames(raw_data, &info, options, &transformer))?;
    info!(frames = frames.len(), game_id = %info.game_id, "tracking dataset loaded");

    let metadata = Metadata {
        game_id: info.game_id,
        date: info.date,
        game_week: None,
        home_team: info.home_team,
        away_team: info.away_team,
        periods: info.periods,
        pitch_dimensions: info.pitch_dimensions,
        frame_rate: info.frame_rate,
        score: info.score,
        orientation: Orientation::FixedHomeAway,
        flags: DatasetFlags::all(),
        provider: Provider::SecondSpectrum,
        coordinate_system: transformer.system(),
    };
    Ok(TrackingDataset { metadata, frames })
}

/// Reads both inputs from disk and loads the dataset.
pub fn load_tracking_from_paths(
    raw_path: impl AsRef<Path>,
    meta_path: impl AsRef<Path>,
    options: &TrackingOptions,
) -> Result<TrackingDataset> {
    let raw_data = read_input(raw_path.as_ref())?;
    let meta_data = read_input(meta_path.as_ref())?;
    load_tracking(&raw_data, &meta_data, options)
}

fn collect_frames(
    raw_data: &str,
    info: &MatchInfo,
    options: &TrackingOptions,
    transformer: &CoordinateTransformer,
) -> Result<Vec<Frame>> {
    let step = sample_step(options.sample_rate);
    let mut frames = Vec::new();
    let mut surviving = 0usize;

    for (idx, line) in raw_data.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let doc: FrameDoc = serde_json::from_str(trimmed).map_err(|err| LoadError::FrameParse {
            line: idx + 1,
            reason: err.to_string(),
        })?;
        if options.only_alive && !doc.live {
            continue;
        }
        let sampled = surviving % step == 0;
        surviving += 1;
        if !sampled {
            continue;
        }
        let Some(frame) = build_frame(&doc, info) else {
            continue;
        };
        frames.push(transformer.frame(frame));
        if let Some(limit) = options.limit
            && frames.len() >= limit
        {
            break;
        }
    }
    Ok(frames)
}

/// Sampling keeps every `step`-th frame that survives the liveness
/// filter.
fn sample_step(sample_rate: Option<f64>) -> usize {
    match sample_rate {
        Some(rate) if rate > 0.0 && rate < 1.0 => (1.0 / rate).round() as usize,
        _ => 1,
    }
}

fn build_frame(doc: &FrameDoc, info: &MatchInfo) -> Option<Frame> {
    let period_id = PeriodId::new(doc.period);
    if !info.periods.iter().any(|period| period.id == period_id) {
        debug!(
            frame = doc.frame_idx,
            period = doc.period,
            "skipping frame in unknown period"
        );
        return None;
    }

    let ball_state = if doc.live {
        BallState::Alive
    } else {
        BallState::Dead
    };
    let ball_owning_team = match doc.last_touch.as_deref() {
        Some("home") => Some(info.home_team.id.clone()),
        Some("away") => Some(info.away_team.id.clone()),
        _ => None,
    };
    let ball_coordinates = doc
        .ball
        .as_ref()
        .and_then(|ball| ball.xyz)
        .map(|[x, y, z]| Point3::new(x, y, z));

    let mut players = BTreeMap::new();
    collect_players(&mut players, &doc.home_players, &info.home_team, doc.frame_idx);
    collect_players(&mut players, &doc.away_players, &info.away_team, doc.frame_idx);

    Some(Frame {
        frame_id: doc.frame_idx,
        period_id,
        timestamp: clock::seconds_f64(doc.game_clock),
        ball_state,
        ball_owning_team,
        ball_coordinates,
        players,
    })
}

fn collect_players(
    players: &mut BTreeMap<PlayerId, PlayerData>,
    docs: &[FramePlayerDoc],
    team: &Team,
    frame_idx: u64,
) {
    for doc in docs {
        let Some(number) = doc.number else {
            continue;
        };
        let Some(player) = team.player_by_jersey(number) else {
            debug!(
                frame = frame_idx,
                team = %team.id,
                jersey = number,
                "skipping player with unknown jersey number"
            );
            continue;
        };
        let Some([x, y, _]) = doc.xyz else {
            continue;
        };
        players.insert(
            player.id.clone(),
            PlayerData {
                coordinates: Point::new(x, y),
                speed: doc.speed,
            },
        );
    }
}
