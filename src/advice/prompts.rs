//! Prompt templates for each advice section

use crate::catalog::markets;
use crate::models::UserPreferences;

/// Human-readable name of a supported language code
#[must_use]
pub fn language_name(code: &str) -> &str {
    match code {
        "en" => "English",
        "de" => "German",
        "fr" => "French",
        other => other,
    }
}

fn cities_label(cities: &[&str]) -> String {
    if cities.is_empty() {
        "Multiple European cities".to_string()
    } else {
        cities.join(", ")
    }
}

fn language_line(preferences: &UserPreferences) -> String {
    format!(
        "Write the entire answer in {}.",
        language_name(&preferences.language)
    )
}

pub fn recommendations(preferences: &UserPreferences) -> String {
    format!(
        "You are a Christmas market travel expert. Recommend the best Christmas markets in Europe based on the following preferences:

Departure City: {departure}
Travel Dates: {dates}
Budget: {budget}
Interests: {interests}
Travel Pace: {pace}
Language Preference: {language}

Available Christmas Markets by Country:
{markets}

Provide:
1. Top 3-5 recommended markets with brief explanations
2. Why each market matches their preferences
3. Best time to visit each market
4. Unique features of each market

Format your response clearly and concisely. {language_line}",
        departure = preferences.departure_city,
        dates = preferences.travel_dates_label(),
        budget = preferences.budget_label,
        interests = preferences.interests_label(),
        pace = preferences.pace,
        language = language_name(&preferences.language),
        markets = markets::prompt_listing(),
        language_line = language_line(preferences),
    )
}

pub fn transport(preferences: &UserPreferences, cities: &[&str]) -> String {
    format!(
        "Provide detailed transportation options for a Christmas market trip:

Departure City: {departure}
Budget: {budget}
Markets to Visit: {cities}

Provide recommendations for:
1. Flights: Best airports, airlines, and approximate costs from {departure}
2. Trains: European rail options, routes, and costs
3. Buses: Intercity bus services and costs
4. Local Transportation: Public transport, taxis, walking in each city
5. Best combination of transport modes for this itinerary
6. Estimated total transportation costs
7. Booking tips

Consider the budget ({budget}) and provide realistic cost estimates. {language_line}",
        departure = preferences.departure_city,
        budget = preferences.budget_label,
        cities = cities_label(cities),
        language_line = language_line(preferences),
    )
}

pub fn lodging(preferences: &UserPreferences, cities: &[&str], total_days: usize) -> String {
    format!(
        "Provide accommodation recommendations for a Christmas market trip:

Cities to Visit: {cities}
Budget: {budget}
Travel Companions: {companions}
Trip Duration: {total_days} days

For each city, provide:
1. Hotel recommendations (luxury, mid-range, budget options)
2. Hostel and vacation rental options
3. Best neighborhoods to stay in, close to the Christmas markets
4. Estimated costs per night for each option
5. Booking tips for the market season

Consider the budget ({budget}) and provide realistic recommendations. {language_line}",
        cities = cities_label(cities),
        budget = preferences.budget_label,
        companions = preferences
            .travel_companions
            .as_deref()
            .unwrap_or("Not specified"),
        language_line = language_line(preferences),
    )
}

pub fn culture(preferences: &UserPreferences, cities: &[&str]) -> String {
    format!(
        "Provide cultural insights and local tips for visiting these Christmas markets: {cities}

User Interests: {interests}

For each market, provide:
1. Local Food & Drinks: traditional market foods, mulled wine, regional treats
2. Cultural Events: concerts, performances, traditional celebrations
3. Local Customs & Etiquette: market etiquette, tipping culture
4. Shopping Tips: local crafts and souvenirs
5. Weather & What to Wear
6. Language Tips: basic phrases in the local language

Make the information practical, specific, and engaging. {language_line}",
        cities = cities_label(cities),
        interests = preferences.interests_label(),
        language_line = language_line(preferences),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendations_prompt_lists_preferences_and_markets() {
        let prefs = UserPreferences::new("Hamburg")
            .with_interests(["food", "music"])
            .with_language("de");
        let prompt = recommendations(&prefs);

        assert!(prompt.contains("Departure City: Hamburg"));
        assert!(prompt.contains("Interests: food, music"));
        assert!(prompt.contains("Travel Pace: moderate"));
        assert!(prompt.contains("Austria: Vienna, Salzburg, Innsbruck, Graz, Linz"));
        assert!(prompt.ends_with("Write the entire answer in German."));
    }

    #[test]
    fn test_lodging_prompt_defaults_companions() {
        let prefs = UserPreferences::new("Berlin");
        let prompt = lodging(&prefs, &["Prague"], 4);
        assert!(prompt.contains("Cities to Visit: Prague"));
        assert!(prompt.contains("Travel Companions: Not specified"));
        assert!(prompt.contains("Trip Duration: 4 days"));
    }

    #[test]
    fn test_transport_prompt_without_cities() {
        let prompt = transport(&UserPreferences::new("Paris"), &[]);
        assert!(prompt.contains("Markets to Visit: Multiple European cities"));
        assert!(prompt.contains("costs from Paris"));
    }
}
