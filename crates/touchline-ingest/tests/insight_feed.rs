//! End-to-end checks for Insight feed ingestion: detection plus raw event
//! extraction over a realistic multi-line feed.

use touchline_ingest::{EventFeedFormat, detect_event_feed, extract_events};

fn event_line(event_id: i64, type_id: u16, extra: &str) -> String {
    format!(
        concat!(
            "{{\"optaEvent\": {{\"id\": \"{id}\", \"eventId\": {event_id}, ",
            "\"typeId\": {type_id}, \"periodId\": 1, \"alignedClock\": {clock}, ",
            "\"x\": 50.0, \"y\": 50.0, ",
            "\"timeStamp\": \"2022-08-27T16:30:{sec:02}.000\", ",
            "\"lastModified\": \"2022-08-27T16:30:{sec:02}.000\", ",
            "\"opContestantId\": \"3\", \"qualifier\": []{extra}}}}}"
        ),
        id = 2_000_000_000 + event_id,
        event_id = event_id,
        type_id = type_id,
        clock = event_id * 4,
        sec = event_id % 60,
        extra = extra,
    )
}

#[test]
fn a_realistic_feed_parses_in_order() {
    let feed = [
        event_line(1, 32, ""),
        event_line(2, 1, ", \"opPlayerId\": \"98745\", \"outcome\": 1"),
        // A deleted record that must disappear from the sequence.
        event_line(3, 43, ""),
        event_line(4, 16, ", \"opPlayerId\": \"98745\", \"outcome\": 1"),
        event_line(5, 30, ""),
    ]
    .join("\n");

    assert_eq!(
        detect_event_feed(&feed, None).unwrap(),
        EventFeedFormat::Insight
    );

    let events = extract_events(&feed).unwrap();
    let event_ids: Vec<i64> = events.iter().map(|event| event.event_id).collect();
    assert_eq!(event_ids, vec![1, 2, 4, 5]);

    let goal = &events[2];
    assert_eq!(goal.type_id, 16);
    assert_eq!(goal.player_id.as_deref(), Some("98745"));
    assert_eq!(goal.outcome, Some(1));
    assert_eq!((goal.time_min, goal.time_sec), (0, 16));
}

#[test]
fn feed_order_survives_interleaved_noise() {
    let feed = format!(
        "{}\n{{\"heartbeat\": true}}\n\n{}",
        event_line(1, 32, ""),
        event_line(2, 5, "")
    );
    let events = extract_events(&feed).unwrap();
    assert_eq!(events.len(), 2);
    assert!(events[0].event_id < events[1].event_id);
}
