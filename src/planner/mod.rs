//! Planning core: destination ranking and itinerary construction
//!
//! Everything here is synchronous and pure given its inputs and the shared
//! read-only catalog.

pub mod itinerary;
pub mod rotation;
pub mod scoring;
pub mod transition;

pub use itinerary::ItineraryBuilder;
pub use scoring::{RankedDestination, ScoreBreakdown, ScoringEngine, ScoringError};
