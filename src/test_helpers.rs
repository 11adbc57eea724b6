//! Shared test fixtures for the athenstays test suite.
//!
//! Builders produce records that pass snapshot validation out of the box;
//! tests mutate the returned values to set up the case under test.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let snapshot = sample_snapshot();
//! let hotel = find_hotel(&snapshot, "attic-view-suites");
//! assert_eq!(hotel.neighborhood, "plaka");
//! ```

use crate::config::RenderConfig;
use crate::data::Snapshot;
use crate::types::{Hotel, Neighborhood};
use chrono::NaiveDate;

/// Fixed run date so dated output is reproducible across test runs.
pub fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
}

/// Render config with the fallback form id and the fixed run date.
pub fn sample_config() -> RenderConfig {
    RenderConfig::new(None, run_date())
}

/// A valid neighborhood whose display name is the capitalized id.
pub fn sample_neighborhood(id: &str) -> Neighborhood {
    let mut chars = id.chars();
    let name = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    Neighborhood {
        id: id.to_string(),
        name,
        emoji: "🏛️".to_string(),
        tagline: "Lanes below the rock".to_string(),
        description: "Old lanes under the Acropolis. Quiet after dark.".to_string(),
        avg_price: 110,
        walk_to_acropolis: 10,
        vibe: vec!["historic".to_string()],
        best_for: vec!["first visit".to_string()],
    }
}

/// A valid, active, featureless hotel at €140 in the given neighborhood.
pub fn sample_hotel(slug: &str, neighborhood: &str) -> Hotel {
    Hotel {
        id: slug.to_string(),
        slug: slug.to_string(),
        name: format!("Hotel {slug}"),
        stars: 4,
        price: 140,
        neighborhood: neighborhood.to_string(),
        acropolis_view: false,
        rooftop_bar: false,
        rooftop_rating: None,
        amenities: vec!["Air conditioning".to_string()],
        pros: vec!["Central".to_string()],
        cons: vec!["Small rooms".to_string()],
        best_for: vec!["couples".to_string()],
        overview: "A reliable base in the center.".to_string(),
        distance_to_acropolis: "10 min walk".to_string(),
        last_verified: run_date(),
        active: true,
    }
}

/// Two neighborhoods, four hotels, every card variant represented.
pub fn sample_snapshot() -> Snapshot {
    let hoods = vec![sample_neighborhood("plaka"), sample_neighborhood("koukaki")];

    let mut view = sample_hotel("attic-view-suites", "plaka");
    view.acropolis_view = true;
    view.price = 195;

    let mut rooftop = sample_hotel("agora-heights-hotel", "plaka");
    rooftop.rooftop_bar = true;
    rooftop.rooftop_rating = Some(4.8);
    rooftop.price = 160;

    let mut budget = sample_hotel("olive-press-rooms", "koukaki");
    budget.price = 68;
    budget.stars = 2;
    budget.pros.clear();
    budget.cons.clear();

    let mut luxury = sample_hotel("grand-lycabettus", "koukaki");
    luxury.price = 320;
    luxury.stars = 5;

    Snapshot::from_records(hoods, vec![view, rooftop, budget, luxury], run_date())
        .expect("sample records must validate")
}

/// Find a hotel by slug. Panics with the available slugs on a miss.
pub fn find_hotel<'a>(snapshot: &'a Snapshot, slug: &str) -> &'a Hotel {
    snapshot
        .hotels
        .iter()
        .find(|h| h.slug == slug)
        .unwrap_or_else(|| {
            let slugs: Vec<&str> = snapshot.hotels.iter().map(|h| h.slug.as_str()).collect();
            panic!("hotel '{slug}' not found. Available: {slugs:?}")
        })
}

/// Find a neighborhood by id. Panics with the available ids on a miss.
pub fn find_neighborhood<'a>(snapshot: &'a Snapshot, id: &str) -> &'a Neighborhood {
    snapshot.neighborhood(id).unwrap_or_else(|| {
        let ids: Vec<&str> = snapshot.neighborhoods.iter().map(|n| n.id.as_str()).collect();
        panic!("neighborhood '{id}' not found. Available: {ids:?}")
    })
}
