//! Travel advice sections
//!
//! Each section asks the text generation backend once and, when that is not
//! possible, falls back to content assembled from the curated catalog. The
//! result always carries renderable text; `Advice::Degraded` records why the
//! backend was not used. Sections never fail each other.

pub mod backend;
pub mod gemini;
pub mod prompts;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::models::{BudgetTier, DestinationProfile, Itinerary, LodgingOption, UserPreferences};
use crate::planner::RankedDestination;

pub use backend::{BackendError, TextGenerator};
pub use gemini::GeminiClient;

/// Text for one advice section and where it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Advice {
    Generated { content: String },
    Degraded { content: String, reason: String },
}

impl Advice {
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Advice::Generated { content } | Advice::Degraded { content, .. } => content,
        }
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self, Advice::Degraded { .. })
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.content())
    }
}

/// The advice sections of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Recommendations,
    Transport,
    Lodging,
    Culture,
}

impl Section {
    #[must_use]
    pub fn temperature(self) -> f32 {
        match self {
            Section::Recommendations | Section::Culture => 0.8,
            Section::Transport => 0.6,
            Section::Lodging => 0.7,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Section::Recommendations => "recommendations",
            Section::Transport => "transport",
            Section::Lodging => "lodging",
            Section::Culture => "culture",
        };
        f.write_str(label)
    }
}

/// Produces advice sections, optionally backed by a text generator
#[derive(Clone)]
pub struct AdviceGenerator {
    generator: Option<Arc<dyn TextGenerator>>,
    catalog: Arc<Catalog>,
}

impl AdviceGenerator {
    pub fn new(catalog: Arc<Catalog>, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator, catalog }
    }

    /// Curated content only
    pub fn offline(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, None)
    }

    #[must_use]
    pub fn has_backend(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn recommendations(
        &self,
        preferences: &UserPreferences,
        ranked: &[RankedDestination],
    ) -> Advice {
        let prompt = prompts::recommendations(preferences);
        self.generate(Section::Recommendations, &prompt, || {
            static_recommendations(ranked)
        })
        .await
    }

    pub async fn transport(&self, preferences: &UserPreferences, itinerary: &Itinerary) -> Advice {
        let cities = itinerary.distinct_cities();
        let prompt = prompts::transport(preferences, &cities);
        self.generate(Section::Transport, &prompt, || {
            self.static_transport(preferences, itinerary)
        })
        .await
    }

    pub async fn lodging(&self, preferences: &UserPreferences, itinerary: &Itinerary) -> Advice {
        let cities = itinerary.distinct_cities();
        let prompt = prompts::lodging(preferences, &cities, itinerary.len());
        self.generate(Section::Lodging, &prompt, || {
            self.static_lodging(preferences, &cities)
        })
        .await
    }

    pub async fn culture(&self, preferences: &UserPreferences, itinerary: &Itinerary) -> Advice {
        let cities = itinerary.distinct_cities();
        let prompt = prompts::culture(preferences, &cities);
        self.generate(Section::Culture, &prompt, || self.static_culture(&cities))
            .await
    }

    async fn generate<F>(&self, section: Section, prompt: &str, fallback: F) -> Advice
    where
        F: FnOnce() -> String,
    {
        let Some(generator) = &self.generator else {
            debug!("No generation backend; using curated {section} content");
            return Advice::Degraded {
                content: fallback(),
                reason: BackendError::NotConfigured.to_string(),
            };
        };

        match generator.generate(prompt, section.temperature()).await {
            Ok(content) => Advice::Generated { content },
            Err(err) => {
                warn!(
                    model = generator.model_name(),
                    "Falling back to curated {section} content: {err}"
                );
                Advice::Degraded {
                    content: fallback(),
                    reason: err.to_string(),
                }
            }
        }
    }

    fn profile(&self, city: &str) -> Option<&DestinationProfile> {
        self.catalog.get(city)
    }

    fn static_transport(&self, preferences: &UserPreferences, itinerary: &Itinerary) -> String {
        let mut lines = vec![format!(
            "Recommended transportation from {}:",
            preferences.departure_city
        )];

        for city in itinerary.distinct_cities() {
            match self.profile(city) {
                Some(profile) => {
                    if !profile.arrival_tip.is_empty() {
                        lines.push(format!("- {city} arrival: {}", profile.arrival_tip));
                    }
                    if !profile.local_transport_tip.is_empty() {
                        lines.push(format!("- {city} locally: {}", profile.local_transport_tip));
                    }
                }
                None => lines.push(format!(
                    "- {city}: use rail where possible and public transport in town"
                )),
            }
        }

        let mut connections: Vec<&str> = Vec::new();
        for note in itinerary.days.iter().filter_map(|d| d.transition_note.as_deref()) {
            if !connections.contains(&note) {
                connections.push(note);
            }
        }
        if !connections.is_empty() {
            lines.push("Between cities:".to_string());
            lines.extend(connections.iter().map(|c| format!("- {c}")));
        }

        lines.push("- Trains: consider a rail pass when visiting several cities".to_string());
        lines.join("\n")
    }

    fn static_lodging(&self, preferences: &UserPreferences, cities: &[&str]) -> String {
        let tier = preferences.budget_tier();
        let mut lines = vec![format!(
            "Accommodation suggestions for a {} budget:",
            preferences.budget_label
        )];

        for city in cities {
            let options = self
                .profile(city)
                .map(|p| options_for_budget(&p.lodging_options, tier))
                .unwrap_or_default();

            if options.is_empty() {
                lines.push(format!(
                    "- {city}: look for hotels within walking distance of the old town"
                ));
            } else {
                for option in options {
                    lines.push(format!(
                        "- {city}: {} ({}, {}) - {}",
                        option.name, option.category, option.price_tier, option.note
                    ));
                }
            }
        }

        lines.push(
            "- Book early during Christmas market season (late November - December)".to_string(),
        );
        lines.join("\n")
    }

    fn static_culture(&self, cities: &[&str]) -> String {
        let mut sections = Vec::new();

        for city in cities {
            let mut lines = vec![format!("{city}:")];
            if let Some(profile) = self.profile(city) {
                if !profile.foods.is_empty() {
                    lines.push(format!("- Try: {}", profile.foods.join(", ")));
                }
                lines.extend(profile.customs.iter().map(|c| format!("- {c}")));
                lines.extend(profile.phrases.iter().map(|p| format!("- Say: {p}")));
            }
            if lines.len() == 1 {
                lines.extend(
                    [
                        "- Try local mulled wine and traditional Christmas treats",
                        "- Dress warmly as markets are outdoors",
                        "- Bring cash as some stalls don't accept cards",
                    ]
                    .map(str::to_string),
                );
            }
            sections.push(lines.join("\n"));
        }

        sections.join("\n\n")
    }
}

fn static_recommendations(ranked: &[RankedDestination]) -> String {
    let mut lines = vec!["Based on your preferences, these markets fit best:".to_string()];
    for (position, destination) in ranked.iter().enumerate() {
        let profile = &destination.profile;
        let mut line = format!("{}. {}", position + 1, destination.name);
        if !profile.country.is_empty() {
            line.push_str(&format!(" ({})", profile.country));
        }
        line.push_str(&format!(" - score {:.1}", destination.score));
        if !profile.date_range.is_empty() {
            line.push_str(&format!(", {}", profile.date_range));
        }
        if !profile.summary.is_empty() {
            line.push_str(&format!(": {}", profile.summary));
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Options within the budget's price range, or all of them when none fit
fn options_for_budget(options: &[LodgingOption], tier: Option<BudgetTier>) -> Vec<&LodgingOption> {
    let max_rank = tier.map_or(usize::MAX, BudgetTier::max_lodging_rank);
    let fitting: Vec<&LodgingOption> = options
        .iter()
        .filter(|o| o.tier_rank() <= max_rank)
        .collect();
    if fitting.is_empty() {
        options.iter().collect()
    } else {
        fitting
    }
}
