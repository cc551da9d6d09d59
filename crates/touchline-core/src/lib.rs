//! Public load surface: vendor feeds in, canonical datasets out.
//!
//! [`load_event`] turns an Insight event feed plus its metadata document
//! into an [`EventDataset`](touchline_model::EventDataset); [`load_tracking`]
//! does the same for a raw tracking frame feed. Both take typed options
//! with builder-style setters and `_from_paths` convenience wrappers.

pub mod error;
pub mod event;
pub mod options;
pub mod tracking;

pub use error::{LoadError, Result};
pub use event::{load_event, load_event_from_paths};
pub use options::{EventOptions, TrackingOptions};
pub use tracking::{load_tracking, load_tracking_from_paths};

// The construction seam, re-exported so callers supplying a factory only
// need this crate.
pub use touchline_transform::{DefaultEventFactory, EventFactory, EventParts};
