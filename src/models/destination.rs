//! Destination profile model for curated Christmas-market data

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::YuletideError;

/// Price level of a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceLevel {
    Budget,
    Mid,
    Premium,
    Luxury,
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PriceLevel::Budget => "budget",
            PriceLevel::Mid => "mid",
            PriceLevel::Premium => "premium",
            PriceLevel::Luxury => "luxury",
        };
        f.write_str(label)
    }
}

/// Travel pace, shared by destination profiles and user preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Relaxed,
    #[default]
    Moderate,
    /// Also accepted as "intense"
    #[serde(alias = "intense")]
    Active,
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Pace::Relaxed => "relaxed",
            Pace::Moderate => "moderate",
            Pace::Active => "active",
        };
        f.write_str(label)
    }
}

impl FromStr for Pace {
    type Err = YuletideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relaxed" => Ok(Pace::Relaxed),
            "moderate" => Ok(Pace::Moderate),
            "active" | "intense" => Ok(Pace::Active),
            other => Err(YuletideError::validation(format!(
                "Unknown pace '{other}'. Must be one of: relaxed, moderate, active"
            ))),
        }
    }
}

/// Interest tags a destination serves well
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DestinationTags {
    #[serde(default)]
    pub best_for: Vec<String>,
}

impl DestinationTags {
    /// Whether this destination is tagged with the given interest
    #[must_use]
    pub fn serves(&self, interest: &str) -> bool {
        self.best_for.iter().any(|tag| tag == interest)
    }
}

/// A lodging suggestion attached to a destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LodgingOption {
    pub name: String,
    /// Euro-sign price tier ("€€", "€€€", ...)
    pub price_tier: String,
    pub category: String,
    pub note: String,
}

impl LodgingOption {
    /// Number of euro signs in the price tier
    #[must_use]
    pub fn tier_rank(&self) -> usize {
        self.price_tier.chars().filter(|c| *c == '€').count()
    }
}

/// All curated attributes for one destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationProfile {
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub date_range: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub tags: DestinationTags,
    pub price_level: PriceLevel,
    pub ideal_pace: Pace,
    #[serde(default)]
    pub signature_market: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub foods: Vec<String>,
    #[serde(default)]
    pub experiences: Vec<String>,
    #[serde(default)]
    pub lodging_options: Vec<LodgingOption>,
    #[serde(default)]
    pub arrival_tip: String,
    #[serde(default)]
    pub local_transport_tip: String,
    #[serde(default)]
    pub transit_connections: Vec<String>,
    #[serde(default)]
    pub customs: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub phrases: Vec<String>,
    #[serde(default)]
    pub side_trip: Option<String>,
}

impl DestinationProfile {
    /// Profile with only a name; every content field is empty so all
    /// consumers fall back to their literal defaults.
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: String::new(),
            region: String::new(),
            date_range: String::new(),
            summary: String::new(),
            themes: Vec::new(),
            tags: DestinationTags::default(),
            price_level: PriceLevel::Mid,
            ideal_pace: Pace::Moderate,
            signature_market: None,
            highlights: Vec::new(),
            foods: Vec::new(),
            experiences: Vec::new(),
            lodging_options: Vec::new(),
            arrival_tip: String::new(),
            local_transport_tip: String::new(),
            transit_connections: Vec::new(),
            customs: Vec::new(),
            tips: Vec::new(),
            phrases: Vec::new(),
            side_trip: None,
        }
    }

    /// Generic stand-in used when no curated data could be ranked.
    #[must_use]
    pub fn placeholder(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            summary: format!("Festive lights, seasonal food and artisan stalls in {name}."),
            date_range: "Late November – 24 December".to_string(),
            arrival_tip: format!("Arrive by train where possible; {name}'s main station is central."),
            local_transport_tip: "Old towns are walkable; day tickets cover trams and buses."
                .to_string(),
            ..Self::empty(name)
        }
    }

    /// Signature market name, or a generic "{name} Christmas Market"
    #[must_use]
    pub fn signature_market_or_default(&self) -> String {
        self.signature_market
            .clone()
            .unwrap_or_else(|| format!("{} Christmas Market", self.name))
    }

    /// Whether this profile carries any curated content at all
    #[must_use]
    pub fn has_content(&self) -> bool {
        !(self.highlights.is_empty()
            && self.foods.is_empty()
            && self.experiences.is_empty()
            && self.lodging_options.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("relaxed", Pace::Relaxed)]
    #[case("Moderate", Pace::Moderate)]
    #[case("active", Pace::Active)]
    #[case(" intense ", Pace::Active)]
    fn test_pace_parsing(#[case] input: &str, #[case] expected: Pace) {
        assert_eq!(input.parse::<Pace>().unwrap(), expected);
    }

    #[test]
    fn test_pace_parsing_rejects_unknown() {
        let err = "frantic".parse::<Pace>().unwrap_err();
        assert!(err.to_string().contains("Unknown pace"));
    }

    #[test]
    fn test_pace_deserializes_intense_alias() {
        let pace: Pace = serde_json::from_str("\"intense\"").unwrap();
        assert_eq!(pace, Pace::Active);
    }

    #[test]
    fn test_signature_market_fallback() {
        let profile = DestinationProfile::empty("Graz");
        assert_eq!(profile.signature_market_or_default(), "Graz Christmas Market");
        assert!(!profile.has_content());
    }

    #[test]
    fn test_minimal_profile_deserializes_with_defaults() {
        let json = r#"{"name": "Linz", "price_level": "budget", "ideal_pace": "relaxed"}"#;
        let profile: DestinationProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "Linz");
        assert_eq!(profile.price_level, PriceLevel::Budget);
        assert!(profile.foods.is_empty());
        assert!(profile.side_trip.is_none());
    }

    #[test]
    fn test_lodging_tier_rank() {
        let lodging = LodgingOption {
            name: "Hotel Sacher Wien".to_string(),
            price_tier: "€€€€".to_string(),
            category: "Legendary luxury".to_string(),
            note: "Opposite the Opera.".to_string(),
        };
        assert_eq!(lodging.tier_rank(), 4);
    }
}
