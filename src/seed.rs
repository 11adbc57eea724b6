//! Curated starter dataset.
//!
//! Writes the data store a fresh checkout needs to produce a complete site:
//! the neighborhood catalog, one hotel listing per neighborhood, and the
//! consolidated `hotels-index.json` export with derived aggregates. The
//! records are the curation itself — edit them in place, or replace the
//! files wholesale from an external feed; the generator only cares about the
//! document shapes.
//!
//! Seeding refuses to touch an existing catalog unless forced, so a tuned
//! dataset is never clobbered by a stray `seed` run.

use crate::data::{self, HotelListing, HotelsDocument, NeighborhoodCatalog};
use crate::types::{Hotel, Neighborhood};
use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("data store already exists at {} (re-run with --force to overwrite)", .0.display())]
    ExistingData(PathBuf),
}

/// What a seed run wrote.
#[derive(Debug)]
pub struct SeedSummary {
    pub neighborhoods: usize,
    pub hotels: usize,
}

/// Write the starter dataset under `root`.
///
/// `updated` stamps the consolidated index export.
pub fn seed(root: &Path, force: bool, updated: NaiveDate) -> Result<SeedSummary, SeedError> {
    let catalog_path = root.join("neighborhoods.json");
    if catalog_path.exists() && !force {
        return Err(SeedError::ExistingData(catalog_path));
    }

    let neighborhoods = starter_neighborhoods();
    let hotels = starter_hotels();

    fs::create_dir_all(root.join("hotels"))?;
    write_json(
        &catalog_path,
        &NeighborhoodCatalog {
            neighborhoods: neighborhoods.clone(),
        },
    )?;

    for hood in &neighborhoods {
        let listing = HotelListing {
            neighborhood: hood.id.clone(),
            hotels: hotels
                .iter()
                .filter(|h| h.neighborhood == hood.id)
                .cloned()
                .collect(),
        };
        write_json(&root.join("hotels").join(format!("{}.json", hood.id)), &listing)?;
    }

    let active: Vec<Hotel> = hotels.iter().filter(|h| h.active).cloned().collect();
    let document = HotelsDocument {
        index: data::derive_index(&active, updated),
        hotels: active,
    };
    write_json(&root.join("hotels-index.json"), &document)?;

    Ok(SeedSummary {
        neighborhoods: neighborhoods.len(),
        hotels: hotels.len(),
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), SeedError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}

// ============================================================================
// Curated records
// ============================================================================

fn hood(
    id: &str,
    name: &str,
    emoji: &str,
    tagline: &str,
    description: &str,
    avg_price: u32,
    walk: u32,
    vibe: &[&str],
    best_for: &[&str],
) -> Neighborhood {
    Neighborhood {
        id: id.to_string(),
        name: name.to_string(),
        emoji: emoji.to_string(),
        tagline: tagline.to_string(),
        description: description.to_string(),
        avg_price,
        walk_to_acropolis: walk,
        vibe: vibe.iter().map(|s| s.to_string()).collect(),
        best_for: best_for.iter().map(|s| s.to_string()).collect(),
    }
}

fn starter_neighborhoods() -> Vec<Neighborhood> {
    vec![
        hood(
            "plaka",
            "Plaka",
            "🏛️",
            "The old town at the foot of the rock",
            "Neoclassical lanes, bougainvillea and rooftop views straight onto the Acropolis. \
             Touristy by day, surprisingly calm after the tour groups leave.",
            145,
            6,
            &["historic", "romantic", "pedestrian"],
            &["first visit", "couples"],
        ),
        hood(
            "koukaki",
            "Koukaki",
            "🪴",
            "Local cafés south of the Acropolis museum",
            "A residential grid that turned into the city's favourite base. \
             Brunch spots and wine bars without the old-town markup.",
            105,
            12,
            &["local", "café culture"],
            &["longer stays", "food lovers"],
        ),
        hood(
            "monastiraki",
            "Monastiraki",
            "🧿",
            "Flea-market chaos with the best rooftop density in town",
            "Market stalls, ruins in the metro station and a rooftop bar on every corner. \
             Loud, central and never boring.",
            120,
            10,
            &["nightlife", "markets", "buzzing"],
            &["night owls", "first visit"],
        ),
        hood(
            "kolonaki",
            "Kolonaki",
            "🥂",
            "Galleries, tailors and quiet money",
            "Athens' upscale quarter on the slope of Lycabettus. \
             Designer shopping and the city's most polished hotels.",
            230,
            25,
            &["upscale", "quiet", "galleries"],
            &["luxury travellers", "repeat visitors"],
        ),
    ]
}

struct HotelSpec {
    id: &'static str,
    slug: &'static str,
    name: &'static str,
    stars: u8,
    price: u32,
    neighborhood: &'static str,
    acropolis_view: bool,
    rooftop_bar: bool,
    rooftop_rating: Option<f32>,
    amenities: &'static [&'static str],
    pros: &'static [&'static str],
    cons: &'static [&'static str],
    best_for: &'static [&'static str],
    overview: &'static str,
    distance: &'static str,
}

fn starter_hotels() -> Vec<Hotel> {
    STARTER_HOTELS
        .iter()
        .map(|s| Hotel {
            id: s.id.to_string(),
            slug: s.slug.to_string(),
            name: s.name.to_string(),
            stars: s.stars,
            price: s.price,
            neighborhood: s.neighborhood.to_string(),
            acropolis_view: s.acropolis_view,
            rooftop_bar: s.rooftop_bar,
            rooftop_rating: s.rooftop_rating,
            amenities: s.amenities.iter().map(|a| a.to_string()).collect(),
            pros: s.pros.iter().map(|p| p.to_string()).collect(),
            cons: s.cons.iter().map(|c| c.to_string()).collect(),
            best_for: s.best_for.iter().map(|b| b.to_string()).collect(),
            overview: s.overview.to_string(),
            distance_to_acropolis: s.distance.to_string(),
            last_verified: SEED_VERIFIED,
            active: true,
        })
        .collect()
}

/// Verification stamp carried by every starter record.
const SEED_VERIFIED: NaiveDate = match NaiveDate::from_ymd_opt(2026, 7, 20) {
    Some(date) => date,
    None => panic!("invalid seed verification date"),
};

const STARTER_HOTELS: &[HotelSpec] = &[
    HotelSpec {
        id: "attic-view",
        slug: "attic-view-suites",
        name: "Attic View Suites",
        stars: 4,
        price: 195,
        neighborhood: "plaka",
        acropolis_view: true,
        rooftop_bar: true,
        rooftop_rating: Some(4.5),
        amenities: &["Breakfast", "Air conditioning", "Rooftop terrace"],
        pros: &[
            "Parthenon view from half the rooms",
            "Five minutes from the Acropolis Museum",
        ],
        cons: &["Smaller rooms on the lower floors"],
        best_for: &["couples", "first visit"],
        overview: "Restored neoclassical house whose rooftop breakfast terrace looks straight \
                   at the Parthenon. Rooms are compact but the location is unbeatable.",
        distance: "6 min walk",
    },
    HotelSpec {
        id: "adrianou-inn",
        slug: "adrianou-garden-inn",
        name: "Adrianou Garden Inn",
        stars: 3,
        price: 110,
        neighborhood: "plaka",
        acropolis_view: false,
        rooftop_bar: false,
        rooftop_rating: None,
        amenities: &["Courtyard garden", "Air conditioning"],
        pros: &["Quiet inner courtyard", "Honest mid-range pricing for Plaka"],
        cons: &["No lift", "Books out months ahead in summer"],
        best_for: &["couples"],
        overview: "Family-run inn off Adrianou street with a shaded lemon-tree courtyard. \
                   What it lacks in views it returns in calm.",
        distance: "8 min walk",
    },
    HotelSpec {
        id: "museum-loft",
        slug: "museum-quarter-lofts",
        name: "Museum Quarter Lofts",
        stars: 4,
        price: 135,
        neighborhood: "koukaki",
        acropolis_view: true,
        rooftop_bar: false,
        rooftop_rating: None,
        amenities: &["Kitchenette", "Washer", "Air conditioning"],
        pros: &["Apartment-style rooms good for long stays"],
        cons: &["Reception keeps office hours only"],
        best_for: &["longer stays", "families"],
        overview: "Converted 1960s block two streets from the Acropolis Museum. Top-floor \
                   lofts catch the rock above the rooftops opposite.",
        distance: "12 min walk",
    },
    HotelSpec {
        id: "olive-press",
        slug: "olive-press-rooms",
        name: "Olive Press Rooms",
        stars: 2,
        price: 68,
        neighborhood: "koukaki",
        acropolis_view: false,
        rooftop_bar: false,
        rooftop_rating: None,
        amenities: &["Shared kitchen", "Luggage storage"],
        pros: &[],
        cons: &[],
        best_for: &["budget travellers", "solo travellers"],
        overview: "Simple rooms above a former olive press, now the cheapest clean bed this \
                   close to the museum quarter.",
        distance: "14 min walk",
    },
    HotelSpec {
        id: "agora-heights",
        slug: "agora-heights-hotel",
        name: "Agora Heights Hotel",
        stars: 4,
        price: 160,
        neighborhood: "monastiraki",
        acropolis_view: true,
        rooftop_bar: true,
        rooftop_rating: Some(4.8),
        amenities: &["Rooftop bar", "Breakfast", "Gym"],
        pros: &[
            "The rooftop everyone photographs at sunset",
            "Metro on the doorstep",
        ],
        cons: &["Square outside is loud until late"],
        best_for: &["night owls", "first visit"],
        overview: "Mid-century block over Monastiraki square whose top-floor bar has the \
                   classic framed-Acropolis sunset shot. Earplugs provided, genuinely needed.",
        distance: "10 min walk",
    },
    HotelSpec {
        id: "flea-market",
        slug: "flea-market-stay",
        name: "Flea Market Stay",
        stars: 3,
        price: 88,
        neighborhood: "monastiraki",
        acropolis_view: false,
        rooftop_bar: true,
        rooftop_rating: Some(3.5),
        amenities: &["Rooftop seating", "Air conditioning"],
        pros: &["Steps from Avissinias square bargains"],
        cons: &["Rooms over the street get market noise from 7am"],
        best_for: &["bargain hunters"],
        overview: "Budget-leaning rooms over the antique stalls, with a small roof deck \
                   that works better for morning coffee than for cocktails.",
        distance: "11 min walk",
    },
    HotelSpec {
        id: "lycabettus-grand",
        slug: "grand-lycabettus",
        name: "Grand Lycabettus",
        stars: 5,
        price: 320,
        neighborhood: "kolonaki",
        acropolis_view: true,
        rooftop_bar: true,
        rooftop_rating: Some(4.2),
        amenities: &["Pool", "Spa", "Concierge", "Breakfast", "Valet parking"],
        pros: &[
            "Rooftop pool with both Lycabettus and Acropolis in frame",
            "Service that remembers your name",
        ],
        cons: &["A taxi ride, not a stroll, to the old town"],
        best_for: &["luxury travellers", "special occasions"],
        overview: "The grande dame of Kolonaki. Marble everywhere, a ninth-floor pool deck \
                   and prices to match the postcode.",
        distance: "25 min walk",
    },
    HotelSpec {
        id: "gallery-row",
        slug: "gallery-row-suites",
        name: "Gallery Row Suites",
        stars: 4,
        price: 210,
        neighborhood: "kolonaki",
        acropolis_view: false,
        rooftop_bar: false,
        rooftop_rating: None,
        amenities: &["Breakfast", "Nespresso machines", "Concierge"],
        pros: &["Design-led suites between the galleries"],
        cons: &["No view to speak of"],
        best_for: &["repeat visitors", "design lovers"],
        overview: "Eight suites over a contemporary gallery, each furnished by a different \
                   Greek designer. For visitors who have already done the ruins.",
        distance: "22 min walk",
    },
];
