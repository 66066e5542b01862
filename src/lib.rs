//! Yuletide - Christmas market trip planning
//!
//! This library ranks curated Christmas-market destinations against traveller
//! preferences, builds deterministic day-by-day itineraries and assembles
//! transport, lodging and cultural advice, either generated or curated.

pub mod advice;
pub mod agent;
pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod planner;
pub mod web;

// Re-export core types for public API
pub use advice::{Advice, AdviceGenerator, BackendError, GeminiClient, TextGenerator};
pub use agent::{TravelAgent, TravelPlan};
pub use catalog::{Catalog, CatalogError};
pub use config::YuletideConfig;
pub use error::YuletideError;
pub use models::{
    Activity, DestinationProfile, Itinerary, ItineraryDay, Pace, PriceLevel, UserPreferences,
};
pub use planner::{ItineraryBuilder, RankedDestination, ScoringEngine, ScoringError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
