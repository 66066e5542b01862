//! Data models for the Yuletide planner
//!
//! This module contains the core domain models organized by concern:
//! - Destination: curated market profiles, price levels and pace
//! - Preferences: what the traveller asked for
//! - Itinerary: the day-by-day schedule and its text rendering

pub mod destination;
pub mod itinerary;
pub mod preferences;

// Re-export all public types for convenient access
pub use destination::{DestinationProfile, DestinationTags, LodgingOption, Pace, PriceLevel};
pub use itinerary::{Activity, Itinerary, ItineraryDay};
pub use preferences::{BudgetTier, UserPreferences};
