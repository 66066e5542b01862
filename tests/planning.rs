//! End-to-end planning through the public library API

use std::sync::Arc;

use async_trait::async_trait;
use yuletide::advice::BackendError;
use yuletide::{Advice, Catalog, Pace, TextGenerator, TravelAgent, UserPreferences};

struct Unreachable;

#[async_trait]
impl TextGenerator for Unreachable {
    async fn generate(&self, _prompt: &str, _temperature: f32) -> Result<String, BackendError> {
        Err(BackendError::unavailable("connection refused"))
    }

    fn model_name(&self) -> &str {
        "unreachable"
    }
}

struct Echo;

#[async_trait]
impl TextGenerator for Echo {
    async fn generate(&self, prompt: &str, _temperature: f32) -> Result<String, BackendError> {
        Ok(format!("generated for {} chars", prompt.len()))
    }

    fn model_name(&self) -> &str {
        "echo"
    }
}

fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().expect("built-in catalog parses"))
}

fn food_and_history() -> UserPreferences {
    UserPreferences::new("Berlin")
        .with_interests(["food", "history"])
        .with_budget("Mid-range")
        .with_pace(Pace::Moderate)
        .with_duration_days(Some(4))
        .with_start_date(Some("2025-12-15".to_string()))
}

/// Nuremberg, Munich and Vienna only, in that order
fn three_city_catalog() -> Arc<Catalog> {
    let builtin = catalog();
    let profiles = ["Nuremberg", "Munich", "Vienna"]
        .iter()
        .map(|name| builtin.get(name).cloned().expect("curated profile"))
        .collect();
    Arc::new(Catalog::from_profiles(profiles).expect("unique names"))
}

#[tokio::test]
async fn test_dated_four_day_plan_over_three_cities() {
    let catalog = three_city_catalog();
    let agent = TravelAgent::offline(Arc::clone(&catalog));
    let plan = agent.plan(food_and_history()).await;

    let ranked: Vec<(&str, f64)> = plan
        .ranked_destinations
        .iter()
        .map(|r| (r.name.as_str(), r.score))
        .collect();
    assert_eq!(ranked.len(), 3);
    for ((name, score), (expected_name, expected_score)) in
        ranked.iter().zip([("Nuremberg", 80.2), ("Vienna", 74.2), ("Munich", 67.2)])
    {
        assert_eq!(*name, expected_name);
        assert!((score - expected_score).abs() < 1e-9, "{name} scored {score}");
    }

    let days = &plan.itinerary.days;
    let cities: Vec<&str> = days.iter().map(|d| d.city_name.as_str()).collect();
    assert_eq!(cities, vec!["Nuremberg", "Vienna", "Munich", "Nuremberg"]);

    let dates: Vec<String> = days.iter().filter_map(|d| d.date_label()).collect();
    assert_eq!(
        dates,
        vec![
            "Monday, December 15, 2025",
            "Tuesday, December 16, 2025",
            "Wednesday, December 17, 2025",
            "Thursday, December 18, 2025",
        ]
    );

    let transitions: Vec<bool> = days.iter().map(|d| d.transition_note.is_some()).collect();
    assert_eq!(transitions, vec![true, true, true, false]);

    for day in days {
        assert_eq!(day.activities.len(), 6);
        if let Some(tip) = &day.daily_tip {
            let profile = catalog.get(&day.city_name).unwrap();
            assert!(profile.tips.contains(tip));
        }
    }

    assert!(plan.summary.contains("- Recommended Markets: Nuremberg, Vienna, Munich"));
    assert!(plan.summary.contains("- Duration: 4 days"));
    assert!(plan.itinerary_text.starts_with("Day 1: Nuremberg\nMonday, December 15, 2025"));
}

#[tokio::test]
async fn test_unreachable_backend_degrades_every_section() {
    let agent = TravelAgent::new(catalog(), Some(Arc::new(Unreachable)));
    let plan = agent.plan(food_and_history()).await;

    for advice in [
        &plan.recommendations,
        &plan.transport,
        &plan.accommodations,
        &plan.cultural_insights,
    ] {
        assert!(advice.is_degraded());
        assert!(!advice.content().is_empty());
    }
    assert_eq!(plan.itinerary.len(), 4);
}

#[tokio::test]
async fn test_working_backend_generates_sections() {
    let agent = TravelAgent::new(catalog(), Some(Arc::new(Echo)));
    let plan = agent.plan(food_and_history()).await;

    assert!(!plan.is_degraded());
    assert!(matches!(plan.transport, Advice::Generated { .. }));
    assert!(plan.transport.content().starts_with("generated for"));
}

#[tokio::test]
async fn test_plan_serializes_with_camel_case_fields() {
    let plan = TravelAgent::offline(catalog()).plan(food_and_history()).await;
    let json = serde_json::to_value(&plan).unwrap();

    assert!(json["rankedDestinations"].is_array());
    assert_eq!(json["transport"]["status"], "degraded");
    assert_eq!(json["itinerary"]["days"][0]["dayIndex"], 0);
    assert!(json["culturalInsights"]["content"].is_string());
}
