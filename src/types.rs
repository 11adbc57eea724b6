//! Shared domain types for the data store.
//!
//! These types are the JSON vocabulary of the whole pipeline: `seed` writes
//! them, `data` reads and validates them, and the page renderers consume them.
//! Keys are camelCase on disk to match the published JSON documents.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named geographic area of the city used to group hotels.
///
/// Authored once in `neighborhoods.json`, read-only during generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighborhood {
    /// Unique, URL-safe identifier (doubles as the page path segment)
    pub id: String,
    /// Display name
    pub name: String,
    /// Emoji glyph shown on cards
    pub emoji: String,
    /// One-line tagline
    pub tagline: String,
    /// Free-text description (first sentence feeds the FAQ section)
    pub description: String,
    /// Average nightly price in euros
    pub avg_price: u32,
    /// Walking time to the Acropolis, in minutes
    pub walk_to_acropolis: u32,
    /// Vibe tags ("historic", "nightlife", ...)
    #[serde(default)]
    pub vibe: Vec<String>,
    /// "Best for" tags ("first visit", "couples", ...)
    #[serde(default)]
    pub best_for: Vec<String>,
}

/// A single hotel record from a per-neighborhood listing document.
///
/// `slug` is unique site-wide and keys the hotel's output path;
/// `neighborhood` must reference an existing [`Neighborhood::id`]. Both are
/// enforced at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    /// Identifier, unique within its neighborhood
    pub id: String,
    /// URL-safe slug, unique site-wide
    pub slug: String,
    pub name: String,
    /// Star rating, 1-5
    pub stars: u8,
    /// Nightly price in euros
    pub price: u32,
    /// Foreign key to [`Neighborhood::id`]
    pub neighborhood: String,
    /// Whether the hotel has Acropolis visibility
    #[serde(default)]
    pub acropolis_view: bool,
    #[serde(default)]
    pub rooftop_bar: bool,
    /// Rooftop quality rating, 0-5 (only meaningful with `rooftop_bar`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooftop_rating: Option<f32>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub best_for: Vec<String>,
    /// Free-text overview paragraph
    pub overview: String,
    /// Display text, e.g. "5 min walk to the Acropolis"
    pub distance_to_acropolis: String,
    /// Date the record was last checked against the hotel
    pub last_verified: NaiveDate,
    /// Delisted hotels keep their record but are dropped from the snapshot
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Aggregate statistics over the active hotel collection.
///
/// Derived, never authored: re-computed in full from the per-neighborhood
/// listings on every run. `avg_price` is the rounded arithmetic mean and the
/// four tier counts always sum to `total_hotels`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelIndex {
    pub updated: NaiveDate,
    pub currency: String,
    pub total_hotels: usize,
    pub avg_price: u32,
    pub tiers: TierCounts,
}

/// Hotel counts per price tier. Mutually exclusive, collectively exhaustive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TierCounts {
    pub budget: usize,
    pub mid: usize,
    pub upscale: usize,
    pub luxury: usize,
}

impl TierCounts {
    pub fn total(&self) -> usize {
        self.budget + self.mid + self.upscale + self.luxury
    }
}

/// One of the four fixed nightly-price bands.
///
/// Buckets are half-open with boundaries at 80, 150 and 250 euros; a price
/// exactly at a boundary belongs to the higher tier, and luxury is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTier {
    Budget,
    Mid,
    Upscale,
    Luxury,
}

impl PriceTier {
    pub fn of(price: u32) -> Self {
        match price {
            0..80 => PriceTier::Budget,
            80..150 => PriceTier::Mid,
            150..250 => PriceTier::Upscale,
            _ => PriceTier::Luxury,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceTier::Budget => "budget",
            PriceTier::Mid => "mid-range",
            PriceTier::Upscale => "upscale",
            PriceTier::Luxury => "luxury",
        }
    }
}
