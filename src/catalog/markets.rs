//! Directory of well-known Christmas markets grouped by country
//!
//! Broader than the curated profiles: it feeds the recommendation prompt and
//! the `/api/markets` listing, while scoring only ever sees curated profiles.

use serde::Serialize;

/// Country and its market cities, in listing order
const MARKETS_BY_COUNTRY: &[(&str, &[&str])] = &[
    (
        "Germany",
        &[
            "Nuremberg",
            "Munich",
            "Dresden",
            "Cologne",
            "Frankfurt",
            "Berlin",
            "Stuttgart",
            "Hamburg",
            "Rothenburg ob der Tauber",
        ],
    ),
    ("Austria", &["Vienna", "Salzburg", "Innsbruck", "Graz", "Linz"]),
    ("France", &["Strasbourg", "Colmar", "Paris", "Lyon"]),
    ("Czech Republic", &["Prague", "Brno", "Český Krumlov"]),
    ("Switzerland", &["Zurich", "Basel", "Lucerne"]),
    ("Belgium", &["Brussels", "Bruges", "Ghent"]),
];

/// One market city and the country it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketEntry {
    pub name: String,
    pub country: String,
}

/// Countries in directory order with their market cities
pub fn countries() -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
    MARKETS_BY_COUNTRY
        .iter()
        .map(|(country, markets)| (*country, *markets))
}

/// Flat list of every market, country by country
#[must_use]
pub fn all_markets() -> Vec<MarketEntry> {
    MARKETS_BY_COUNTRY
        .iter()
        .flat_map(|(country, markets)| {
            markets.iter().map(move |name| MarketEntry {
                name: (*name).to_string(),
                country: (*country).to_string(),
            })
        })
        .collect()
}

/// Multi-line listing used inside generation prompts
#[must_use]
pub fn prompt_listing() -> String {
    countries()
        .map(|(country, markets)| format!("{country}: {}", markets.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_markets_flattens_every_country() {
        let markets = all_markets();
        assert_eq!(markets.len(), 27);
        assert_eq!(markets[0].name, "Nuremberg");
        assert_eq!(markets[0].country, "Germany");
        assert!(
            markets
                .iter()
                .any(|m| m.name == "Český Krumlov" && m.country == "Czech Republic")
        );
    }

    #[test]
    fn test_prompt_listing_uses_display_names() {
        let listing = prompt_listing();
        assert!(listing.starts_with("Germany: Nuremberg, Munich"));
        assert!(listing.contains("\nCzech Republic: Prague, Brno, Český Krumlov"));
        assert_eq!(listing.lines().count(), 6);
    }
}
