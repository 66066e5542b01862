//! User travel preferences

use serde::{Deserialize, Serialize};

use super::destination::{Pace, PriceLevel};

/// Budget tier derived from a free-text budget label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetTier {
    Budget,
    Mid,
    Luxury,
}

impl BudgetTier {
    /// Case-insensitive prefix match: "budget*", "mid*", "lux*"
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        if label.starts_with("budget") {
            Some(BudgetTier::Budget)
        } else if label.starts_with("mid") {
            Some(BudgetTier::Mid)
        } else if label.starts_with("lux") {
            Some(BudgetTier::Luxury)
        } else {
            None
        }
    }

    /// Whether a destination's price level suits this tier
    #[must_use]
    pub fn aligns_with(self, price_level: PriceLevel) -> bool {
        matches!(
            (self, price_level),
            (BudgetTier::Budget, PriceLevel::Budget)
                | (BudgetTier::Mid, PriceLevel::Mid)
                | (BudgetTier::Luxury, PriceLevel::Premium | PriceLevel::Luxury)
        )
    }

    /// Highest lodging price tier (number of euro signs) this budget is comfortable with
    #[must_use]
    pub fn max_lodging_rank(self) -> usize {
        match self {
            BudgetTier::Budget => 2,
            BudgetTier::Mid => 3,
            BudgetTier::Luxury => usize::MAX,
        }
    }
}

/// What the traveller asked for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Normalised interest keywords (lowercase, unique, in the order given)
    pub interests: Vec<String>,
    pub budget_label: String,
    pub pace: Pace,
    pub duration_days: Option<u32>,
    /// Requested first day, expected as `YYYY-MM-DD`
    pub start_date: Option<String>,
    pub departure_city: String,
    /// Free-text travel window used in prompts and summaries
    pub travel_dates: Option<String>,
    pub language: String,
    pub travel_companions: Option<String>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            interests: Vec::new(),
            budget_label: "Mid-range".to_string(),
            pace: Pace::Moderate,
            duration_days: None,
            start_date: None,
            departure_city: "Not specified".to_string(),
            travel_dates: None,
            language: "en".to_string(),
            travel_companions: None,
        }
    }
}

impl UserPreferences {
    /// Create preferences departing from the given city
    #[must_use]
    pub fn new(departure_city: impl Into<String>) -> Self {
        Self {
            departure_city: departure_city.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.interests = normalize_interests(interests);
        self
    }

    #[must_use]
    pub fn with_budget(mut self, label: impl Into<String>) -> Self {
        self.budget_label = label.into();
        self
    }

    #[must_use]
    pub fn with_pace(mut self, pace: Pace) -> Self {
        self.pace = pace;
        self
    }

    #[must_use]
    pub fn with_duration_days(mut self, days: Option<u32>) -> Self {
        self.duration_days = days;
        self
    }

    #[must_use]
    pub fn with_start_date(mut self, start_date: Option<String>) -> Self {
        self.start_date = start_date.filter(|s| !s.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_travel_dates(mut self, travel_dates: Option<String>) -> Self {
        self.travel_dates = travel_dates;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn with_companions(mut self, companions: Option<String>) -> Self {
        self.travel_companions = companions;
        self
    }

    #[must_use]
    pub fn budget_tier(&self) -> Option<BudgetTier> {
        BudgetTier::from_label(&self.budget_label)
    }

    /// Travel window for display: explicit dates, else the start date
    #[must_use]
    pub fn travel_dates_label(&self) -> String {
        self.travel_dates
            .clone()
            .or_else(|| self.start_date.clone())
            .unwrap_or_else(|| "Not specified".to_string())
    }

    #[must_use]
    pub fn interests_label(&self) -> String {
        if self.interests.is_empty() {
            "Not specified".to_string()
        } else {
            self.interests.join(", ")
        }
    }
}

/// Trim, lowercase and de-duplicate interest keywords, keeping first occurrence order
pub fn normalize_interests<I, S>(interests: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for interest in interests {
        let interest = interest.as_ref().trim().to_lowercase();
        if !interest.is_empty() && !normalized.contains(&interest) {
            normalized.push(interest);
        }
    }
    normalized
}
