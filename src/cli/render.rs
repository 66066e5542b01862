//! Terminal rendering of plans, destinations and the market directory

use std::fmt::Write;

use colored::Colorize;
use yuletide::catalog::markets;
use yuletide::planner::ScoreBreakdown;
use yuletide::{Advice, DestinationProfile, TravelPlan};

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}", title.green().bold());
    let _ = writeln!(out, "{}", "─".repeat(title.chars().count()).green());
}

fn advice_block(out: &mut String, title: &str, advice: &Advice) {
    heading(out, title);
    let _ = writeln!(out, "{}", advice.content());
    if let Advice::Degraded { reason, .. } = advice {
        let _ = writeln!(out, "{}", format!("(curated content: {reason})").dimmed());
    }
}

/// Full human-readable plan, section by section
pub fn plan(plan: &TravelPlan) -> String {
    let mut out = String::new();

    advice_block(&mut out, "Recommended Christmas Markets", &plan.recommendations);

    heading(&mut out, "Your Itinerary");
    for (i, day) in plan.itinerary.days.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", day.header().cyan().bold());
        if let Some(date) = day.date_label() {
            let _ = writeln!(out, "{}", date.dimmed());
        }
        for activity in &day.activities {
            let _ = writeln!(out, "  {activity}");
        }
        if let Some(line) = day.transition_line() {
            let _ = writeln!(out, "  {}", line.yellow());
        }
        if let Some(tip) = &day.daily_tip {
            let _ = writeln!(out, "  {} {tip}", "Tip:".bold());
        }
    }

    advice_block(&mut out, "Transportation Options", &plan.transport);
    advice_block(&mut out, "Accommodation Recommendations", &plan.accommodations);
    advice_block(&mut out, "Cultural Insights & Local Tips", &plan.cultural_insights);

    heading(&mut out, "Summary");
    let _ = writeln!(out, "{}", plan.summary);
    out
}

/// Score table for `plan --explain`
pub fn explanation(rows: &[(String, ScoreBreakdown)]) -> String {
    let mut out = String::new();
    heading(&mut out, "Why these markets");
    let _ = writeln!(
        out,
        "{:<14} {:>6} {:>9} {:>7} {:>5} {:>9} {:>7}",
        "Destination", "Base", "Interest", "Budget", "Pace", "Duration", "Total"
    );
    for (name, b) in rows {
        let _ = writeln!(
            out,
            "{:<14} {:>6.1} {:>9.1} {:>7.1} {:>5.1} {:>9.1} {:>7.1}",
            name,
            b.base,
            b.interest_bonus,
            b.budget_bonus,
            b.pace_bonus,
            b.duration_bonus,
            b.total()
        );
    }
    out
}

/// Market directory grouped by country, marking curated destinations
pub fn market_directory(is_curated: impl Fn(&str) -> bool) -> String {
    let mut out = String::new();
    let mut total = 0;
    for (country, names) in markets::countries() {
        let _ = writeln!(out, "{}", country.bold());
        for name in names {
            total += 1;
            if is_curated(name) {
                let _ = writeln!(out, "  {} {}", "★".yellow(), name);
            } else {
                let _ = writeln!(out, "    {name}");
            }
        }
    }
    let _ = writeln!(
        out,
        "\n{total} markets; {} marks a curated destination (see `yuletide show <name>`)",
        "★".yellow()
    );
    out
}

fn list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "{}", title.bold());
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}

/// Detail view for `yuletide show`
pub fn destination(profile: &DestinationProfile) -> String {
    let mut out = String::new();
    let title = if profile.country.is_empty() {
        profile.name.clone()
    } else {
        format!("{}, {}", profile.name, profile.country)
    };
    let _ = writeln!(out, "{}", title.green().bold());
    if !profile.summary.is_empty() {
        let _ = writeln!(out, "{}", profile.summary);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{} {}", "Signature market:".bold(), profile.signature_market_or_default());
    if !profile.date_range.is_empty() {
        let _ = writeln!(out, "{} {}", "Season:".bold(), profile.date_range);
    }
    let _ = writeln!(
        out,
        "{} {}   {} {}",
        "Price level:".bold(),
        profile.price_level,
        "Ideal pace:".bold(),
        profile.ideal_pace
    );
    if !profile.tags.best_for.is_empty() {
        let _ = writeln!(out, "{} {}", "Best for:".bold(), profile.tags.best_for.join(", "));
    }
    let _ = writeln!(out);

    list(&mut out, "Highlights", &profile.highlights);
    list(&mut out, "Foods", &profile.foods);
    list(&mut out, "Experiences", &profile.experiences);

    let lodging: Vec<String> = profile
        .lodging_options
        .iter()
        .map(|l| format!("{} ({}, {}) - {}", l.name, l.price_tier, l.category, l.note))
        .collect();
    list(&mut out, "Where to stay", &lodging);

    let getting_around: Vec<String> = [&profile.arrival_tip, &profile.local_transport_tip]
        .into_iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .chain(profile.transit_connections.iter().cloned())
        .collect();
    list(&mut out, "Getting there and around", &getting_around);

    list(&mut out, "Customs", &profile.customs);
    list(&mut out, "Tips", &profile.tips);
    list(&mut out, "Useful phrases", &profile.phrases);

    if let Some(side_trip) = &profile.side_trip {
        let _ = writeln!(out, "{} {side_trip}", "Side trip:".bold());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use yuletide::{Catalog, TravelAgent, UserPreferences};

    fn plain() {
        colored::control::set_override(false);
    }

    #[tokio::test]
    async fn test_plan_lists_every_section_in_order() {
        plain();
        let agent = TravelAgent::offline(Arc::new(Catalog::builtin().unwrap()));
        let plan = agent
            .plan(UserPreferences::new("Berlin").with_duration_days(Some(3)))
            .await;
        let text = super::plan(&plan);

        let order = [
            "Recommended Christmas Markets",
            "Your Itinerary",
            "Transportation Options",
            "Accommodation Recommendations",
            "Cultural Insights & Local Tips",
            "Summary",
        ];
        let positions: Vec<usize> = order.iter().map(|t| text.find(t).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("Day 1: "));
        assert!(text.contains("(curated content: no generation backend configured)"));
    }

    #[test]
    fn test_market_directory_marks_curated() {
        plain();
        let text = market_directory(|name| name == "Vienna");
        assert!(text.contains("  ★ Vienna"));
        assert!(text.contains("    Graz"));
        assert!(text.contains("27 markets"));
    }

    #[test]
    fn test_destination_view() {
        plain();
        let catalog = Catalog::builtin().unwrap();
        let text = destination(catalog.find("vienna").unwrap());
        assert!(text.starts_with("Vienna, Austria"));
        assert!(text.contains("Where to stay"));
        assert!(text.contains("Ideal pace:"));
    }
}
