//! Day-by-day itinerary model and its plain-text rendering

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Time slot used for the evening transfer line
pub const TRANSITION_TIME: &str = "21:30";

/// Calendar date format used in rendered itineraries ("Monday, December 15, 2025")
pub const DATE_FORMAT: &str = "%A, %B %d, %Y";

/// One timed entry in a day's schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub time_of_day: String,
    pub title: String,
    pub description: String,
}

impl Activity {
    pub fn new(
        time_of_day: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            time_of_day: time_of_day.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

impl Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.time_of_day, self.title, self.description)
    }
}

/// One day of the trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    /// Zero-based position in the trip
    pub day_index: usize,
    pub city_name: String,
    pub calendar_date: Option<NaiveDate>,
    pub activities: Vec<Activity>,
    /// Travel guidance to the next day's city, when it differs
    pub transition_note: Option<String>,
    pub daily_tip: Option<String>,
}

impl ItineraryDay {
    /// Header line, e.g. "Day 1: Nuremberg"
    #[must_use]
    pub fn header(&self) -> String {
        format!("Day {}: {}", self.day_index + 1, self.city_name)
    }

    #[must_use]
    pub fn date_label(&self) -> Option<String> {
        self.calendar_date
            .map(|date| date.format(DATE_FORMAT).to_string())
    }

    /// Transfer line as rendered after the lodging slot
    #[must_use]
    pub fn transition_line(&self) -> Option<String> {
        self.transition_note
            .as_ref()
            .map(|note| format!("{TRANSITION_TIME} Travel - {note}"))
    }
}

impl Display for ItineraryDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())?;
        if let Some(date) = self.date_label() {
            write!(f, "\n{date}")?;
        }
        for activity in &self.activities {
            write!(f, "\n{activity}")?;
        }
        if let Some(line) = self.transition_line() {
            write!(f, "\n{line}")?;
        }
        if let Some(tip) = &self.daily_tip {
            write!(f, "\nTip: {tip}")?;
        }
        Ok(())
    }
}

/// Ordered sequence of days; this order is the canonical representation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub days: Vec<ItineraryDay>,
}

impl Itinerary {
    #[must_use]
    pub fn new(days: Vec<ItineraryDay>) -> Self {
        Self { days }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// City per day, in day order
    #[must_use]
    pub fn cities(&self) -> Vec<&str> {
        self.days.iter().map(|d| d.city_name.as_str()).collect()
    }

    /// Distinct cities in order of first visit
    #[must_use]
    pub fn distinct_cities(&self) -> Vec<&str> {
        let mut cities: Vec<&str> = Vec::new();
        for day in &self.days {
            if !cities.contains(&day.city_name.as_str()) {
                cities.push(&day.city_name);
            }
        }
        cities
    }

    /// Whether days carry calendar dates
    #[must_use]
    pub fn is_dated(&self) -> bool {
        self.days.iter().any(|d| d.calendar_date.is_some())
    }
}

impl Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, day) in self.days.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            write!(f, "{day}")?;
        }
        Ok(())
    }
}
