//! Domain layer for timewheel.
//!
//! Core types with no I/O: historical event summaries and their display
//! fallbacks, eras, map regions and topics, plus the crate error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`event`]: Event summaries, payload normalization and display cards
//! - [`era`]: Year-range eras
//! - [`region`]: Map region code table and location names
//! - [`topic`]: Topic filters

pub mod era;
pub mod error;
pub mod event;
pub mod region;
pub mod topic;

pub use era::Era;
pub use error::{Result, TimewheelError};
pub use event::{events_from_payload, EventCard, EventSummary};
pub use region::{known_locations, resolve_region_name};
pub use topic::Topic;
