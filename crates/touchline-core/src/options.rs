//! Typed options for the load operations.

use std::fmt;

use touchline_model::CoordinateSystem;
use touchline_transform::EventFactory;

/// Options for [`load_event`](crate::load_event). The default loads every
/// event, in the provider's coordinate system, with both formats
/// auto-detected.
#[derive(Default)]
pub struct EventOptions {
    pub(crate) metadata_format: Option<String>,
    pub(crate) feed: Option<String>,
    pub(crate) event_types: Vec<String>,
    pub(crate) coordinates: CoordinateSystem,
    pub(crate) factory: Option<Box<dyn EventFactory + Send + Sync>>,
}

impl EventOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips metadata format detection and asserts the named format.
    pub fn with_metadata_format(mut self, tag: impl Into<String>) -> Self {
        self.metadata_format = Some(tag.into());
        self
    }

    /// Skips feed dialect detection and asserts the named dialect.
    pub fn with_feed(mut self, tag: impl Into<String>) -> Self {
        self.feed = Some(tag.into());
        self
    }

    /// Keeps only events whose kind name is in the list, matched
    /// case-insensitively. An empty list keeps everything.
    pub fn with_event_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.event_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Target coordinate system for every location in the dataset.
    pub fn with_coordinates(mut self, system: CoordinateSystem) -> Self {
        self.coordinates = system;
        self
    }

    /// Replaces the default event construction.
    pub fn with_factory(mut self, factory: impl EventFactory + Send + Sync + 'static) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }
}

impl fmt::Debug for EventOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventOptions")
            .field("metadata_format", &self.metadata_format)
            .field("feed", &self.feed)
            .field("event_types", &self.event_types)
            .field("coordinates", &self.coordinates)
            .field("custom_factory", &self.factory.is_some())
            .finish()
    }
}

/// Options for [`load_tracking`](crate::load_tracking). The default keeps
/// every in-play frame at the full frame rate, in the provider's
/// coordinate system.
#[derive(Debug, Clone)]
pub struct TrackingOptions {
    pub(crate) additional_meta: Option<String>,
    pub(crate) sample_rate: Option<f64>,
    pub(crate) limit: Option<usize>,
    pub(crate) only_alive: bool,
    pub(crate) coordinates: CoordinateSystem,
}

impl Default for TrackingOptions {
    fn default() -> Self {
        Self {
            additional_meta: None,
            sample_rate: None,
            limit: None,
            only_alive: true,
            coordinates: CoordinateSystem::default(),
        }
    }
}

impl TrackingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplementary roster document (`homePlayers`/`awayPlayers`). When
    /// present and non-empty its rosters replace the metadata lineups.
    pub fn with_additional_meta(mut self, data: impl Into<String>) -> Self {
        self.additional_meta = Some(data.into());
        self
    }

    /// Fraction of frames to keep. `0.1` keeps every tenth frame; values
    /// outside `(0, 1)` keep everything.
    pub fn with_sample_rate(mut self, rate: f64) -> Self {
        self.sample_rate = Some(rate);
        self
    }

    /// Stops after this many kept frames.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether frames with the ball out of play are dropped. On by
    /// default.
    pub fn with_only_alive(mut self, only_alive: bool) -> Self {
        self.only_alive = only_alive;
        self
    }

    /// Target coordinate system for every location in the dataset.
    pub fn with_coordinates(mut self, system: CoordinateSystem) -> Self {
        self.coordinates = system;
        self
    }
}
