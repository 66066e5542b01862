//! Destination scoring and ranking
//!
//! Every catalog entry starts from a neutral base score and collects
//! independent additive bonuses for matching interests, budget, pace and
//! trip length. Ranking is a stable descending sort, so equal scores keep
//! catalog order.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::models::{DestinationProfile, UserPreferences};

pub const BASE_SCORE: f64 = 50.0;
pub const INTEREST_BONUS: f64 = 8.0;
pub const BUDGET_BONUS: f64 = 6.0;
pub const PACE_BONUS: f64 = 5.0;
pub const DURATION_WEIGHT: f64 = 0.8;
/// Days beyond this add nothing further
pub const DURATION_CAP: u32 = 8;
pub const TOP_N: usize = 5;

/// Used when nothing in the catalog could be scored
pub const DEFAULT_DESTINATIONS: [&str; 5] = ["Nuremberg", "Munich", "Dresden", "Vienna", "Salzburg"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("no destinations could be scored")]
    NoDestinationsScored,
}

/// One ranked destination with its score and the profile it was scored from
#[derive(Debug, Clone, Serialize)]
pub struct RankedDestination {
    pub name: String,
    pub score: f64,
    #[serde(skip)]
    pub profile: DestinationProfile,
}

/// Individual score terms, for explanations
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base: f64,
    pub interest_bonus: f64,
    pub budget_bonus: f64,
    pub pace_bonus: f64,
    pub duration_bonus: f64,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.base + self.interest_bonus + self.budget_bonus + self.pace_bonus + self.duration_bonus
    }
}

/// Ranks catalog destinations against user preferences
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: Arc<Catalog>,
}

impl ScoringEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Score terms for one profile
    #[must_use]
    pub fn score_breakdown(
        preferences: &UserPreferences,
        profile: &DestinationProfile,
    ) -> ScoreBreakdown {
        let matched = preferences
            .interests
            .iter()
            .filter(|interest| profile.tags.serves(interest))
            .count();

        let budget_aligned = preferences
            .budget_tier()
            .is_some_and(|tier| tier.aligns_with(profile.price_level));

        let duration_bonus = preferences
            .duration_days
            .map_or(0.0, |days| f64::from(days.min(DURATION_CAP)) * DURATION_WEIGHT);

        ScoreBreakdown {
            base: BASE_SCORE,
            interest_bonus: matched as f64 * INTEREST_BONUS,
            budget_bonus: if budget_aligned { BUDGET_BONUS } else { 0.0 },
            pace_bonus: if preferences.pace == profile.ideal_pace {
                PACE_BONUS
            } else {
                0.0
            },
            duration_bonus,
        }
    }

    #[must_use]
    pub fn score(preferences: &UserPreferences, profile: &DestinationProfile) -> f64 {
        Self::score_breakdown(preferences, profile).total()
    }

    /// Top destinations, best first
    pub fn rank(
        &self,
        preferences: &UserPreferences,
    ) -> Result<Vec<RankedDestination>, ScoringError> {
        let mut ranked: Vec<RankedDestination> = self
            .catalog
            .iter()
            .filter_map(|profile| {
                let score = Self::score(preferences, profile);
                if score.is_finite() {
                    Some(RankedDestination {
                        name: profile.name.clone(),
                        score,
                        profile: profile.clone(),
                    })
                } else {
                    warn!("Discarding non-finite score for {}", profile.name);
                    None
                }
            })
            .collect();

        if ranked.is_empty() {
            return Err(ScoringError::NoDestinationsScored);
        }

        // sort_by is stable: ties keep catalog order
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(TOP_N);

        debug!(
            "Ranked destinations: {}",
            ranked
                .iter()
                .map(|r| format!("{} ({:.1})", r.name, r.score))
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(ranked)
    }

    /// Ranking that never comes back empty
    #[must_use]
    pub fn rank_or_default(&self, preferences: &UserPreferences) -> Vec<RankedDestination> {
        match self.rank(preferences) {
            Ok(ranked) => ranked,
            Err(err) => {
                debug!("{err}; using default destinations");
                default_ranking()
            }
        }
    }
}

/// Fixed fallback list backed by placeholder profiles at the base score
#[must_use]
pub fn default_ranking() -> Vec<RankedDestination> {
    DEFAULT_DESTINATIONS
        .iter()
        .map(|name| RankedDestination {
            name: (*name).to_string(),
            score: BASE_SCORE,
            profile: DestinationProfile::placeholder(*name),
        })
        .collect()
}
