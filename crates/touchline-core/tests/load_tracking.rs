//! End-to-end tracking loading against hand-built frame feeds.

use std::io::Write;

use serde_json::{Value, json};
use touchline_core::{TrackingOptions, load_tracking, load_tracking_from_paths};
use touchline_model::{BallState, Orientation, PlayerId, Point3, TeamId, clock};

fn meta_doc() -> String {
    json!({
        "ssiId": "d3caf5c6-ac45-4a6a-a2e7-172cf0a97f93",
        "description": "Arsenal - Fulham: 2022-08-27",
        "fps": 25,
        "homeOptaId": 3,
        "awayOptaId": 54,
        "pitchLength": 104.9,
        "pitchWidth": 68.2,
        "homePlayers": [
            { "optaId": 98745, "name": "Aaron Ramsdale", "position": "GK", "number": 1 }
        ],
        "awayPlayers": [
            { "optaId": 111931, "name": "Bernd Leno", "position": "GK", "number": 17 }
        ],
        "periods": [
            { "number": 1, "startFrameIdx": 0, "endFrameIdx": 70325 },
            { "number": 2, "startFrameIdx": 77534, "endFrameIdx": 148941 }
        ]
    })
    .to_string()
}

fn frame(idx: u64, game_clock: f64, period: u8, live: bool, touch: &str) -> Value {
    json!({
        "frameIdx": idx,
        "gameClock": game_clock,
        "period": period,
        "live": live,
        "lastTouch": touch,
        "ball": { "xyz": [52.0, 48.0, 0.3] },
        "homePlayers": [
            { "number": 1, "xyz": [30.0, 50.0, 0.0], "speed": 1.25 },
            { "number": 99, "xyz": [31.0, 51.0, 0.0] }
        ],
        "awayPlayers": [
            { "number": 17, "xyz": [70.0, 50.0, 0.0] }
        ]
    })
}

fn feed(frames: &[Value]) -> String {
    frames
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn loads_frames_with_jersey_resolved_players() {
    let raw = feed(&[
        frame(100, 4.0, 1, true, "home"),
        frame(101, 4.04, 1, true, "away"),
    ]);
    let dataset = load_tracking(&raw, &meta_doc(), &TrackingOptions::default()).unwrap();

    assert_eq!(dataset.metadata.orientation, Orientation::FixedHomeAway);
    assert_eq!(dataset.frames.len(), 2);

    let first = &dataset.frames[0];
    assert_eq!(first.frame_id, 100);
    assert_eq!(first.timestamp, clock::seconds_f64(4.0));
    assert_eq!(first.ball_state, BallState::Alive);
    assert_eq!(first.ball_owning_team, Some(TeamId::new("3").unwrap()));
    assert_eq!(first.ball_coordinates, Some(Point3::new(52.0, 48.0, 0.3)));

    // Jersey 1 and 17 resolve; the unknown 99 is skipped.
    assert_eq!(first.players.len(), 2);
    let keeper = &first.players[&PlayerId::new("98745").unwrap()];
    assert_eq!(keeper.coordinates.x, 30.0);
    assert_eq!(keeper.speed, Some(1.25));

    assert_eq!(
        dataset.frames[1].ball_owning_team,
        Some(TeamId::new("54").unwrap())
    );
}

#[test]
fn dead_frames_drop_unless_asked_for() {
    let raw = feed(&[
        frame(100, 4.0, 1, true, "home"),
        frame(101, 4.04, 1, false, "home"),
        frame(102, 4.08, 1, true, "home"),
    ]);

    let dataset = load_tracking(&raw, &meta_doc(), &TrackingOptions::default()).unwrap();
    let ids: Vec<_> = dataset.frames.iter().map(|frame| frame.frame_id).collect();
    assert_eq!(ids, [100, 102]);

    let options = TrackingOptions::new().with_only_alive(false);
    let dataset = load_tracking(&raw, &meta_doc(), &options).unwrap();
    assert_eq!(dataset.frames.len(), 3);
    assert_eq!(dataset.frames[1].ball_state, BallState::Dead);
}

#[test]
fn sampling_keeps_every_other_surviving_frame() {
    let raw = feed(&[
        frame(100, 4.0, 1, true, "home"),
        frame(101, 4.04, 1, true, "home"),
        frame(102, 4.08, 1, true, "home"),
        frame(103, 4.12, 1, true, "home"),
    ]);

    let options = TrackingOptions::new().with_sample_rate(0.5);
    let dataset = load_tracking(&raw, &meta_doc(), &options).unwrap();
    let ids: Vec<_> = dataset.frames.iter().map(|frame| frame.frame_id).collect();
    assert_eq!(ids, [100, 102]);
}

#[test]
fn the_limit_counts_kept_frames() {
    let raw = feed(&[
        frame(100, 4.0, 1, true, "home"),
        frame(101, 4.04, 1, false, "home"),
        frame(102, 4.08, 1, true, "home"),
        frame(103, 4.12, 1, true, "home"),
    ]);

    let options = TrackingOptions::new().with_limit(2);
    let dataset = load_tracking(&raw, &meta_doc(), &options).unwrap();
    let ids: Vec<_> = dataset.frames.iter().map(|frame| frame.frame_id).collect();
    assert_eq!(ids, [100, 102]);
}

#[test]
fn frames_in_unknown_periods_are_skipped() {
    let raw = feed(&[
        frame(100, 4.0, 1, true, "home"),
        frame(200, 0.0, 9, true, "home"),
    ]);
    let dataset = load_tracking(&raw, &meta_doc(), &TrackingOptions::default()).unwrap();
    assert_eq!(dataset.frames.len(), 1);
}

#[test]
fn blank_lines_are_ignored() {
    let raw = format!("\n{}\n\n", frame(100, 4.0, 1, true, "home"));
    let dataset = load_tracking(&raw, &meta_doc(), &TrackingOptions::default()).unwrap();
    assert_eq!(dataset.frames.len(), 1);
}

#[test]
fn supplementary_rosters_replace_the_metadata_lineups() {
    let additional = json!({
        "homePlayers": [
            { "optaId": 55555, "name": "Trialist", "position": "CM", "number": 7 }
        ],
        "awayPlayers": []
    })
    .to_string();

    let mut home_shirt_seven = frame(100, 4.0, 1, true, "home");
    home_shirt_seven["homePlayers"] = json!([{ "number": 7, "xyz": [44.0, 31.0, 0.0] }]);
    let raw = feed(&[home_shirt_seven]);

    let options = TrackingOptions::new().with_additional_meta(additional);
    let dataset = load_tracking(&raw, &meta_doc(), &options).unwrap();

    let frame = &dataset.frames[0];
    assert!(frame.players.contains_key(&PlayerId::new("55555").unwrap()));
    // The empty away list keeps the metadata roster.
    assert_eq!(dataset.metadata.away_team.players[0].id.as_str(), "111931");
    assert_eq!(dataset.metadata.home_team.players[0].id.as_str(), "55555");
}

#[test]
fn loads_from_paths() {
    let dir = tempfile::tempdir().unwrap();
    let raw_path = dir.path().join("frames.jsonl");
    let meta_path = dir.path().join("meta.json");
    std::fs::File::create(&raw_path)
        .unwrap()
        .write_all(feed(&[frame(100, 4.0, 1, true, "home")]).as_bytes())
        .unwrap();
    std::fs::File::create(&meta_path)
        .unwrap()
        .write_all(meta_doc().as_bytes())
        .unwrap();

    let dataset =
        load_tracking_from_paths(&raw_path, &meta_path, &TrackingOptions::default()).unwrap();
    assert_eq!(dataset.frames.len(), 1);
}
