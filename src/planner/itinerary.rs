//! Day-by-day itinerary construction
//!
//! Turns a ranked list of destination names into a fixed-shape schedule:
//! cities are visited round-robin, every day gets the same six time slots
//! filled from the city's curated profile, and a travel note is attached
//! whenever the next day moves to a different city.

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use tracing::{debug, instrument};

use super::rotation::{pick, rotate};
use super::scoring::DEFAULT_DESTINATIONS;
use super::transition;
use crate::catalog::Catalog;
use crate::models::{Activity, DestinationProfile, Itinerary, ItineraryDay, UserPreferences};

pub const MIN_DAYS: u32 = 3;
pub const MAX_DAYS: u32 = 10;
/// Cities used when the caller passes no ranked names
const DEFAULT_CITY_COUNT: usize = 3;
const START_DATE_FORMAT: &str = "%Y-%m-%d";

/// Builds itineraries from ranked destination names
#[derive(Debug, Clone)]
pub struct ItineraryBuilder {
    catalog: Arc<Catalog>,
}

impl ItineraryBuilder {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Number of days the trip will have
    #[must_use]
    pub fn total_days(preferences: &UserPreferences, city_count: usize) -> u32 {
        let requested = preferences
            .duration_days
            .filter(|days| *days > 0)
            .unwrap_or_else(|| u32::try_from(city_count).unwrap_or(MAX_DAYS).max(MIN_DAYS));
        requested.clamp(MIN_DAYS, MAX_DAYS)
    }

    /// First calendar day, when the preferences carry a parseable start date
    #[must_use]
    pub fn start_date(preferences: &UserPreferences) -> Option<NaiveDate> {
        let raw = preferences.start_date.as_deref()?;
        match NaiveDate::parse_from_str(raw.trim(), START_DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(err) => {
                debug!("Ignoring start date '{raw}': {err}; building an undated itinerary");
                None
            }
        }
    }

    #[instrument(skip(self, preferences, ranked_names), fields(cities = ranked_names.len()))]
    pub fn build(&self, preferences: &UserPreferences, ranked_names: &[String]) -> Itinerary {
        let cities = self.cities_for(ranked_names);
        let total_days = Self::total_days(preferences, cities.len());
        let start = Self::start_date(preferences);

        let days = (0..total_days as usize)
            .map(|index| {
                let city = &cities[index % cities.len()];
                let profile = self.profile_for(city);

                let transition_note = (index + 1 < total_days as usize)
                    .then(|| &cities[(index + 1) % cities.len()])
                    .filter(|next| *next != city)
                    .map(|next| transition::resolve(city, next, &profile));

                ItineraryDay {
                    day_index: index,
                    city_name: city.clone(),
                    calendar_date: start
                        .and_then(|date| date.checked_add_days(Days::new(index as u64))),
                    activities: day_schedule(city, &profile),
                    transition_note,
                    daily_tip: rotate(&profile.tips, index).cloned(),
                }
            })
            .collect();

        Itinerary::new(days)
    }

    fn cities_for(&self, ranked_names: &[String]) -> Vec<String> {
        if !ranked_names.is_empty() {
            return ranked_names.to_vec();
        }
        let from_catalog = self.catalog.first_names(DEFAULT_CITY_COUNT);
        if from_catalog.is_empty() {
            DEFAULT_DESTINATIONS
                .iter()
                .take(DEFAULT_CITY_COUNT)
                .map(|name| (*name).to_string())
                .collect()
        } else {
            from_catalog
        }
    }

    fn profile_for(&self, city: &str) -> DestinationProfile {
        self.catalog.get(city).cloned().unwrap_or_else(|| {
            debug!("No curated profile for {city}; using literal defaults");
            DestinationProfile::empty(city)
        })
    }
}

/// The six fixed slots of a day
fn day_schedule(city: &str, profile: &DestinationProfile) -> Vec<Activity> {
    let signature = profile.signature_market_or_default();
    let food = pick(&profile.foods, 0, "local pastries and a mug of mulled wine");
    let highlight = pick(
        &profile.highlights,
        0,
        "Explore festive streets and artisan huts",
    );
    let evening = rotate(&profile.experiences, 0)
        .cloned()
        .unwrap_or_else(|| format!("Evening wander through {signature}"));
    let (stay, stay_note) = match rotate(&profile.lodging_options, 0) {
        Some(lodging) => (lodging.name.clone(), lodging.note.clone()),
        None => (
            format!("Cozy hotel in {city}"),
            "Stay near the old town for easy walks.".to_string(),
        ),
    };

    let break_slot = match &profile.side_trip {
        Some(side_trip) => Activity::new("16:00", "Side adventure", side_trip.as_str()),
        None => Activity::new(
            "16:00",
            "Warm-up break",
            "Step inside a café for hot chocolate and people watching.",
        ),
    };

    vec![
        Activity::new(
            "09:00",
            format!("Arrive at {signature}"),
            format!("Ease into the day with {food} and capture the first light on the stalls."),
        ),
        Activity::new(
            "11:30",
            "Local lunch",
            format!(
                "Grab a seat near the main square and sample seasonal specials inspired by {food}."
            ),
        ),
        Activity::new("14:30", "Afternoon highlights", highlight),
        break_slot,
        Activity::new("18:30", "Golden hour magic", evening),
        Activity::new("20:30", format!("Check into {stay}"), stay_note),
    ]
}
