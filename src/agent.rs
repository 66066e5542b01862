//! Trip planning orchestration
//!
//! Runs ranking, itinerary construction and the advice sections in order and
//! assembles the result into a [`TravelPlan`].

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::advice::{Advice, AdviceGenerator, BackendError, GeminiClient, TextGenerator};
use crate::catalog::Catalog;
use crate::config::YuletideConfig;
use crate::models::{Itinerary, UserPreferences};
use crate::planner::{ItineraryBuilder, RankedDestination, ScoreBreakdown, ScoringEngine};

/// Everything produced for one planning request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPlan {
    pub preferences: UserPreferences,
    pub ranked_destinations: Vec<RankedDestination>,
    pub recommendations: Advice,
    pub itinerary: Itinerary,
    /// Plain-text rendering of `itinerary`
    pub itinerary_text: String,
    pub transport: Advice,
    pub accommodations: Advice,
    pub cultural_insights: Advice,
    pub summary: String,
}

impl TravelPlan {
    #[must_use]
    pub fn destination_names(&self) -> Vec<&str> {
        self.ranked_destinations
            .iter()
            .map(|r| r.name.as_str())
            .collect()
    }

    /// Whether any section fell back to curated content
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        [
            &self.recommendations,
            &self.transport,
            &self.accommodations,
            &self.cultural_insights,
        ]
        .iter()
        .any(|advice| advice.is_degraded())
    }
}

/// Short overview block closing every plan
#[must_use]
pub fn summarize(names: &[&str], total_days: usize, preferences: &UserPreferences) -> String {
    format!(
        "Travel Plan Summary:\n- Recommended Markets: {}\n- Duration: {total_days} days\n- Budget: {}\n- Departure: {}",
        names.join(", "),
        preferences.budget_label,
        preferences.departure_city
    )
}

/// Coordinates scoring, itinerary building and advice generation
#[derive(Clone)]
pub struct TravelAgent {
    catalog: Arc<Catalog>,
    scoring: ScoringEngine,
    builder: ItineraryBuilder,
    advice: AdviceGenerator,
}

impl TravelAgent {
    pub fn new(catalog: Arc<Catalog>, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        if catalog.is_empty() {
            warn!("Destination catalog is empty; plans will use the default destinations");
        }
        Self {
            scoring: ScoringEngine::new(Arc::clone(&catalog)),
            builder: ItineraryBuilder::new(Arc::clone(&catalog)),
            advice: AdviceGenerator::new(Arc::clone(&catalog), generator),
            catalog,
        }
    }

    /// Agent that never calls a generation backend
    pub fn offline(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, None)
    }

    /// Agent wired to the Gemini backend when configuration allows it
    pub fn from_config(config: &YuletideConfig, catalog: Arc<Catalog>, offline: bool) -> Self {
        if offline || !config.generator.enabled {
            info!("Text generation disabled; using curated content only");
            return Self::offline(catalog);
        }

        match GeminiClient::new(&config.generator) {
            Ok(client) => {
                info!(model = %config.generator.model, "Using Gemini text generation");
                Self::new(catalog, Some(Arc::new(client)))
            }
            Err(BackendError::NotConfigured) => {
                info!("No Gemini API key configured; using curated content only");
                Self::offline(catalog)
            }
            Err(err) => {
                warn!("Gemini client unavailable: {err}; using curated content only");
                Self::offline(catalog)
            }
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub fn has_backend(&self) -> bool {
        self.advice.has_backend()
    }

    /// Score terms for each ranked destination
    #[must_use]
    pub fn explain(
        &self,
        preferences: &UserPreferences,
        ranked: &[RankedDestination],
    ) -> Vec<(String, ScoreBreakdown)> {
        ranked
            .iter()
            .map(|r| {
                (
                    r.name.clone(),
                    ScoringEngine::score_breakdown(preferences, &r.profile),
                )
            })
            .collect()
    }

    #[instrument(skip_all, fields(departure = %preferences.departure_city))]
    pub async fn plan(&self, preferences: UserPreferences) -> TravelPlan {
        info!("Planning Christmas market trip");

        let ranked = self.scoring.rank_or_default(&preferences);
        let names: Vec<String> = ranked.iter().map(|r| r.name.clone()).collect();

        let itinerary = self.builder.build(&preferences, &names);

        let recommendations = self.advice.recommendations(&preferences, &ranked).await;
        let (transport, accommodations, cultural_insights) = tokio::join!(
            self.advice.transport(&preferences, &itinerary),
            self.advice.lodging(&preferences, &itinerary),
            self.advice.culture(&preferences, &itinerary),
        );

        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let summary = summarize(&name_refs, itinerary.len(), &preferences);

        info!(
            days = itinerary.len(),
            destinations = names.len(),
            "Travel plan ready"
        );

        TravelPlan {
            itinerary_text: itinerary.to_string(),
            preferences,
            ranked_destinations: ranked,
            recommendations,
            itinerary,
            transport,
            accommodations,
            cultural_insights,
            summary,
        }
    }
}
