//! Loading an event dataset from the vendor documents.

use std::fs;
use std::path::Path;

use tracing::{debug, info, info_span};

use touchline_ingest::{
    EventFeedFormat, MetadataFormat, detect_event_feed, detect_metadata_format, extract_events,
    parse_match_info,
};
use touchline_model::{DatasetFlags, EventDataset, Metadata, Orientation, Provider};
use touchline_transform::{
    CoordinateTransformer, DefaultEventFactory, EventFactory, EventKindFilter, PeriodArena,
    map_events,
};

use crate::error::{LoadError, Result};
use crate::options::EventOptions;

/// Loads a canonical event dataset from an event feed and its metadata
/// document.
pub fn load_event(
    event_data: &str,
    meta_data: &str,
    options: &EventOptions,
) -> Result<EventDataset> {
    // Both formats are settled up front so unsupported input fails before
    // any parsing work happens. One parser exists per closed set today.
    let MetadataFormat::Json = detect_metadata_format(meta_data, options.metadata_format.as_deref())?;
    let EventFeedFormat::Insight = detect_event_feed(event_data, options.feed.as_deref())?;

    let info = info_span!("metadata").in_scope(|| parse_match_info(meta_data))?;
    let raw_events = info_span!("events").in_scope(|| extract_events(event_data))?;
    debug!(records = raw_events.len(), game_id = %info.game_id, "feed decoded");

    let transformer = CoordinateTransformer::new(options.coordinates, info.pitch_dimensions)?;
    let filter = EventKindFilter::new(options.event_types.iter().cloned());
    let factory: &dyn EventFactory = options.factory.as_deref().unwrap_or(&DefaultEventFactory);

    let mut arena = PeriodArena::new(info.periods.clone());
    let events = info_span!("map").in_scope(|| {
        map_events(
            &raw_events,
            &info.home_team,
            &info.away_team,
            &mut arena,
            &filter,
            factory,
        )
    })?;
    let events: Vec<_> = events
        .into_iter()
        .map(|event| transformer.event(event))
        .collect();
    info!(events = events.len(), "event dataset loaded");

    let metadata = Metadata {
        game_id: info.game_id,
        date: info.date,
        // The provider's documents never carry a round number.
        game_week: None,
        home_team: info.home_team,
        away_team: info.away_team,
        periods: arena.into_periods(),
        pitch_dimensions: info.pitch_dimensions,
        frame_rate: info.frame_rate,
        score: info.score,
        orientation: Orientation::ActionExecutingTeam,
        flags: DatasetFlags::all(),
        provider: Provider::SecondSpectrum,
        coordinate_system: transformer.system(),
    };
    Ok(EventDataset { metadata, events })
}

/// Reads both documents from disk and loads the dataset.
pub fn load_event_from_paths(
    event_path: impl AsRef<Path>,
    meta_path: impl AsRef<Path>,
    options: &EventOptions,
) -> Result<EventDataset> {
    let event_data = read_input(event_path.as_ref())?;
    let meta_data = read_input(meta_path.as_ref())?;
    load_event(&event_data, &meta_data, options)
}

pub(crate) fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}
