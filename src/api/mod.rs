//! JSON web API mounted under `/api`

use axum::{
    Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    YuletideError,
    agent::{TravelAgent, TravelPlan},
    catalog::{MarketEntry, markets},
    config::{DefaultsConfig, SUPPORTED_LANGUAGES},
    models::{DestinationProfile, LodgingOption, Pace, UserPreferences},
};

const SERVICE_NAME: &str = "Yuletide Travel Planner API";
const DEFAULT_BUDGET_AMOUNT: f64 = 1500.0;
const DEFAULT_INTERESTS: [&str; 2] = ["food", "culture"];

/// Shared state for every handler
#[derive(Clone)]
pub struct AppState {
    pub agent: TravelAgent,
    pub defaults: DefaultsConfig,
}

impl AppState {
    pub fn new(agent: TravelAgent, defaults: DefaultsConfig) -> Self {
        Self { agent, defaults }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Budget as sent by clients: an amount, a one-element amount array, or a label
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BudgetInput {
    Amount(f64),
    Amounts(Vec<f64>),
    Label(String),
}

impl BudgetInput {
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            BudgetInput::Amount(amount) => budget_label_for(*amount).to_string(),
            BudgetInput::Amounts(amounts) => {
                budget_label_for(amounts.first().copied().unwrap_or(DEFAULT_BUDGET_AMOUNT))
                    .to_string()
            }
            BudgetInput::Label(label) if label.trim().is_empty() => {
                budget_label_for(DEFAULT_BUDGET_AMOUNT).to_string()
            }
            BudgetInput::Label(label) => label.trim().to_string(),
        }
    }
}

/// Budget tier label for a total trip budget
#[must_use]
pub fn budget_label_for(amount: f64) -> &'static str {
    if amount < 1000.0 {
        "Budget-friendly"
    } else if amount < 2500.0 {
        "Mid-range"
    } else {
        "Luxury"
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub duration_days: Option<u32>,
    pub departure_city: Option<String>,
    pub budget: Option<BudgetInput>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub pace: Option<String>,
    pub language: Option<String>,
    pub travel_companions: Option<String>,
}

/// Inclusive day count between two `YYYY-MM-DD` dates
#[must_use]
pub fn inclusive_days(start: &str, end: &str) -> Option<u32> {
    let start = NaiveDate::parse_from_str(start.trim(), "%Y-%m-%d").ok()?;
    let end = NaiveDate::parse_from_str(end.trim(), "%Y-%m-%d").ok()?;
    let days = (end - start).num_days() + 1;
    u32::try_from(days).ok().filter(|d| *d > 0)
}

impl PlanRequest {
    /// Normalised preferences, or a validation error for unsupported input
    pub fn into_preferences(
        self,
        defaults: &DefaultsConfig,
    ) -> Result<UserPreferences, YuletideError> {
        let language = self
            .language
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| defaults.language.clone());
        if !SUPPORTED_LANGUAGES.contains(&language.as_str()) {
            return Err(YuletideError::validation(format!(
                "Unsupported language '{language}'. Must be one of: {}",
                SUPPORTED_LANGUAGES.join(", ")
            )));
        }

        let (duration_days, travel_dates) = match (&self.start_date, &self.end_date) {
            (Some(start), Some(end)) if !start.trim().is_empty() && !end.trim().is_empty() => (
                inclusive_days(start, end).or(self.duration_days),
                Some(format!("{} to {}", start.trim(), end.trim())),
            ),
            _ => (self.duration_days, None),
        };

        let pace = self
            .pace
            .as_deref()
            .and_then(|p| p.parse::<Pace>().ok())
            .unwrap_or_default();

        let budget_label = self
            .budget
            .map_or_else(|| budget_label_for(DEFAULT_BUDGET_AMOUNT).to_string(), |b| b.label());

        let departure_city = self
            .departure_city
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| defaults.departure_city.clone());

        let mut preferences = UserPreferences::new(departure_city)
            .with_interests(&self.interests)
            .with_budget(budget_label)
            .with_pace(pace)
            .with_duration_days(duration_days)
            .with_start_date(self.start_date)
            .with_travel_dates(travel_dates)
            .with_language(language)
            .with_companions(self.travel_companions);

        if preferences.interests.is_empty() {
            preferences = preferences.with_interests(DEFAULT_INTERESTS);
        }

        Ok(preferences)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub success: bool,
    pub travel_plan: TravelPlan,
    pub user_preferences: UserPreferences,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MarketsResponse {
    pub markets: Vec<ApiMarket>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiMarket {
    pub name: String,
    pub country: String,
}

impl From<MarketEntry> for ApiMarket {
    fn from(entry: MarketEntry) -> Self {
        Self {
            name: entry.name,
            country: entry.country,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLodging {
    pub name: String,
    pub price_tier: String,
    pub category: String,
    pub note: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDestination {
    pub name: String,
    pub country: String,
    pub date_range: String,
    pub summary: String,
    pub best_for: Vec<String>,
    pub price_level: String,
    pub ideal_pace: String,
    pub signature_market: String,
    pub highlights: Vec<String>,
    pub foods: Vec<String>,
    pub experiences: Vec<String>,
    pub lodging_options: Vec<ApiLodging>,
    pub arrival_tip: String,
    pub local_transport_tip: String,
    pub transit_connections: Vec<String>,
    pub customs: Vec<String>,
    pub tips: Vec<String>,
    pub phrases: Vec<String>,
    pub side_trip: Option<String>,
}

impl From<&LodgingOption> for ApiLodging {
    fn from(lodging: &LodgingOption) -> Self {
        Self {
            name: lodging.name.clone(),
            price_tier: lodging.price_tier.clone(),
            category: lodging.category.clone(),
            note: lodging.note.clone(),
        }
    }
}

impl From<&DestinationProfile> for ApiDestination {
    fn from(profile: &DestinationProfile) -> Self {
        Self {
            name: profile.name.clone(),
            country: profile.country.clone(),
            date_range: profile.date_range.clone(),
            summary: profile.summary.clone(),
            best_for: profile.tags.best_for.clone(),
            price_level: profile.price_level.to_string(),
            ideal_pace: profile.ideal_pace.to_string(),
            signature_market: profile.signature_market_or_default(),
            highlights: profile.highlights.clone(),
            foods: profile.foods.clone(),
            experiences: profile.experiences.clone(),
            lodging_options: profile.lodging_options.iter().map(ApiLodging::from).collect(),
            arrival_tip: profile.arrival_tip.clone(),
            local_transport_tip: profile.local_transport_tip.clone(),
            transit_connections: profile.transit_connections.clone(),
            customs: profile.customs.clone(),
            tips: profile.tips.clone(),
            phrases: profile.phrases.clone(),
            side_trip: profile.side_trip.clone(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/plan", post(create_plan))
        .route("/markets", get(get_markets))
        .route("/destinations/{name}", get(get_destination))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

async fn create_plan(
    State(state): State<AppState>,
    body: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<PlanResponse>, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        warn!("Rejected plan request body: {rejection}");
        api_error(rejection.status(), rejection.body_text())
    })?;
    let preferences = request
        .into_preferences(&state.defaults)
        .map_err(|err| {
            warn!("Rejected plan request: {err}");
            api_error(StatusCode::BAD_REQUEST, err.user_message())
        })?;

    info!(
        departure = %preferences.departure_city,
        budget = %preferences.budget_label,
        "Processing travel plan request"
    );

    let travel_plan = state.agent.plan(preferences.clone()).await;
    Ok(Json(PlanResponse {
        success: true,
        travel_plan,
        user_preferences: preferences,
    }))
}

async fn get_markets() -> Json<MarketsResponse> {
    let markets: Vec<ApiMarket> = markets::all_markets()
        .into_iter()
        .map(ApiMarket::from)
        .collect();
    Json(MarketsResponse {
        total: markets.len(),
        markets,
    })
}

async fn get_destination(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiDestination>, ApiError> {
    state
        .agent
        .catalog()
        .find(&name)
        .map(|profile| Json(ApiDestination::from(profile)))
        .ok_or_else(|| {
            api_error(
                StatusCode::NOT_FOUND,
                format!("No curated profile for '{name}'"),
            )
        })
}
