//! Inter-city travel guidance between consecutive itinerary days

use crate::models::DestinationProfile;

/// Travel note from `from_city` to `to_city`.
///
/// The first recorded connection of the origin profile that mentions both
/// city names wins; matching is plain case-sensitive substring containment,
/// so "Munich" also matches inside a longer station name.
#[must_use]
pub fn resolve(from_city: &str, to_city: &str, from_profile: &DestinationProfile) -> String {
    from_profile
        .transit_connections
        .iter()
        .find(|connection| connection.contains(from_city) && connection.contains(to_city))
        .cloned()
        .unwrap_or_else(|| fallback_note(from_city, to_city))
}

fn fallback_note(from_city: &str, to_city: &str) -> String {
    format!(
        "Regional train or bus from {from_city} to {to_city}, roughly 1–3 hours (book tickets in advance)."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nuremberg() -> DestinationProfile {
        DestinationProfile {
            transit_connections: vec![
                "Nuremberg → Munich: ICE 1h05".to_string(),
                "Munich → Salzburg: Railjet 1h30".to_string(),
                "Salzburg → Vienna: Railjet 2h30".to_string(),
            ],
            ..DestinationProfile::empty("Nuremberg")
        }
    }

    #[test]
    fn test_recorded_connection_is_returned_verbatim() {
        assert_eq!(
            resolve("Nuremberg", "Munich", &nuremberg()),
            "Nuremberg → Munich: ICE 1h05"
        );
    }

    #[test]
    fn test_unrecorded_pair_falls_back_naming_both_cities() {
        let note = resolve("Nuremberg", "Vienna", &nuremberg());
        assert!(note.contains("Nuremberg"));
        assert!(note.contains("Vienna"));
        assert!(note.starts_with("Regional train or bus"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let note = resolve("nuremberg", "munich", &nuremberg());
        assert!(note.starts_with("Regional train or bus"));
    }

    #[test]
    fn test_empty_profile_falls_back() {
        let note = resolve("Graz", "Linz", &DestinationProfile::empty("Graz"));
        assert_eq!(
            note,
            "Regional train or bus from Graz to Linz, roughly 1–3 hours (book tickets in advance)."
        );
    }
}
