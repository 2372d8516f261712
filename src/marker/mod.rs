//! Quest Marker Module
//!
//! World markers over quest givers and turn-in targets: billboarding,
//! distance-based destruction, and the throttled sync with host requests.

pub mod billboard;
pub mod set;

pub use billboard::{
    look_rotation, Marker, MarkerController, MarkerKind, ReferenceProvider, TickOutcome,
    WorldAnchor, DEFAULT_RELEVANCE_DISTANCE,
};
pub use set::{MarkerSet, MarkerSpawnRequest};
