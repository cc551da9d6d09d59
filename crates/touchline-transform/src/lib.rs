//! Mapping raw vendor records into canonical match events.
//!
//! The crate owns everything between a parsed feed and a finished event
//! list: the type-code dispatch table, the per-kind constructors, the
//! single forward pass that carries possession and period state, and the
//! coordinate rewriting applied to the result.

pub mod builders;
pub mod coordinates;
pub mod error;
pub mod factory;
pub mod mapper;
pub mod periods;
pub mod plan;
pub mod qualifiers;

pub use coordinates::CoordinateTransformer;
pub use error::{Result, TransformError};
pub use factory::{DefaultEventFactory, EventFactory, EventParts};
pub use mapper::{EventKindFilter, map_events};
pub use periods::PeriodArena;
pub use plan::{BuildPlan, plan};
