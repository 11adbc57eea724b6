//! Data store loading and validation.
//!
//! Reads the JSON data store into an immutable [`Snapshot`] that every page
//! builder receives by reference. The store is two fixed levels:
//!
//! ```text
//! data/
//! ├── neighborhoods.json       # { "neighborhoods": [...] }
//! ├── hotels/
//! │   ├── plaka.json           # { "neighborhood": "plaka", "hotels": [...] }
//! │   └── koukaki.json
//! └── hotels-index.json        # consolidated document written by `seed`
//! ```
//!
//! ## Validation
//!
//! The loader enforces what the data files cannot express on their own:
//!
//! - every hotel's `neighborhood` must name a catalog entry
//! - no two hotels site-wide may share a slug (the slug keys the output path)
//! - star ratings must be 1-5, rooftop ratings 0-5
//! - a listing file must belong to the neighborhood it is filed under
//!
//! Any violation aborts the run with a diagnostic naming the offending
//! record. Inactive hotels are dropped before validation; a delisted record
//! never blocks a build.
//!
//! ## Aggregate index
//!
//! [`derive_index`] recomputes the aggregate statistics from the active
//! hotel collection on every call. The authored `hotels-index.json` is an
//! export for external consumers and is never read back here, so the derived
//! numbers cannot drift from the listings.

use crate::types::{Hotel, HotelIndex, Neighborhood, PriceTier, TierCounts};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("hotel '{slug}' references unknown neighborhood '{neighborhood}'")]
    UnknownNeighborhood { slug: String, neighborhood: String },
    #[error("duplicate hotel slug '{0}' (slugs key output paths and must be unique site-wide)")]
    DuplicateSlug(String),
    #[error("hotel '{slug}' has star rating {stars}, expected 1-5")]
    InvalidStars { slug: String, stars: u8 },
    #[error("hotel '{slug}' has rooftop rating {rating}, expected 0-5")]
    InvalidRooftopRating { slug: String, rating: f32 },
    #[error("{} lists neighborhood '{found}' but is filed under '{expected}'", .path.display())]
    ListingMismatch {
        path: PathBuf,
        found: String,
        expected: String,
    },
}

/// Shape of `neighborhoods.json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct NeighborhoodCatalog {
    pub neighborhoods: Vec<Neighborhood>,
}

/// Shape of one `hotels/<id>.json` listing document.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelListing {
    pub neighborhood: String,
    pub hotels: Vec<Hotel>,
}

/// Shape of the consolidated `hotels-index.json` export.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelsDocument {
    #[serde(flatten)]
    pub index: HotelIndex,
    pub hotels: Vec<Hotel>,
}

/// The immutable in-memory data store for one generation run.
///
/// Loaded once at startup and passed by reference into every builder; nothing
/// downstream mutates it. Hotels are held in data-store iteration order
/// (catalog order, then listing order within each neighborhood), which is the
/// order every "first N" selection policy sees.
#[derive(Debug)]
pub struct Snapshot {
    pub neighborhoods: Vec<Neighborhood>,
    pub hotels: Vec<Hotel>,
    pub index: HotelIndex,
}

impl Snapshot {
    /// Load and validate the data store under `root`.
    ///
    /// `updated` stamps the derived aggregate index; callers pass the run
    /// date so repeated runs over unchanged input stay byte-identical.
    pub fn load(root: &Path, updated: NaiveDate) -> Result<Self, DataError> {
        let catalog: NeighborhoodCatalog = read_json(&root.join("neighborhoods.json"))?;

        let mut hotels = Vec::new();
        for hood in &catalog.neighborhoods {
            let path = root.join("hotels").join(format!("{}.json", hood.id));
            let listing: HotelListing = read_json(&path)?;
            if listing.neighborhood != hood.id {
                return Err(DataError::ListingMismatch {
                    path,
                    found: listing.neighborhood,
                    expected: hood.id.clone(),
                });
            }
            hotels.extend(listing.hotels);
        }

        Self::from_records(catalog.neighborhoods, hotels, updated)
    }

    /// Build a snapshot from in-memory records, applying the same validation
    /// as [`Snapshot::load`]. This is the entry point tests use to exercise
    /// the pipeline with synthetic fixtures instead of filesystem trees.
    pub fn from_records(
        neighborhoods: Vec<Neighborhood>,
        hotels: Vec<Hotel>,
        updated: NaiveDate,
    ) -> Result<Self, DataError> {
        let hotels: Vec<Hotel> = hotels.into_iter().filter(|h| h.active).collect();

        let mut seen_slugs = std::collections::HashSet::new();
        for hotel in &hotels {
            if !(1..=5).contains(&hotel.stars) {
                return Err(DataError::InvalidStars {
                    slug: hotel.slug.clone(),
                    stars: hotel.stars,
                });
            }
            if let Some(rating) = hotel.rooftop_rating {
                if !(0.0..=5.0).contains(&rating) {
                    return Err(DataError::InvalidRooftopRating {
                        slug: hotel.slug.clone(),
                        rating,
                    });
                }
            }
            if !neighborhoods.iter().any(|n| n.id == hotel.neighborhood) {
                return Err(DataError::UnknownNeighborhood {
                    slug: hotel.slug.clone(),
                    neighborhood: hotel.neighborhood.clone(),
                });
            }
            if !seen_slugs.insert(hotel.slug.clone()) {
                return Err(DataError::DuplicateSlug(hotel.slug.clone()));
            }
        }

        let index = derive_index(&hotels, updated);
        Ok(Snapshot {
            neighborhoods,
            hotels,
            index,
        })
    }

    /// Look up a neighborhood by identifier.
    pub fn neighborhood(&self, id: &str) -> Option<&Neighborhood> {
        self.neighborhoods.iter().find(|n| n.id == id)
    }

    /// Resolved display name for a hotel's neighborhood, if the reference
    /// resolves. Card rendering falls back to the raw identifier otherwise.
    pub fn neighborhood_name(&self, hotel: &Hotel) -> Option<&str> {
        self.neighborhood(&hotel.neighborhood).map(|n| n.name.as_str())
    }

    /// All hotels in one neighborhood, in data-store order.
    pub fn hotels_in<'a>(&'a self, hood_id: &'a str) -> impl Iterator<Item = &'a Hotel> {
        self.hotels.iter().filter(move |h| h.neighborhood == hood_id)
    }
}

/// Recompute the aggregate index from the active hotel collection.
pub fn derive_index(hotels: &[Hotel], updated: NaiveDate) -> HotelIndex {
    let total = hotels.len();
    let avg_price = if total == 0 {
        0
    } else {
        let sum: f64 = hotels.iter().map(|h| f64::from(h.price)).sum();
        (sum / total as f64).round() as u32
    };

    let mut tiers = TierCounts::default();
    for hotel in hotels {
        match PriceTier::of(hotel.price) {
            PriceTier::Budget => tiers.budget += 1,
            PriceTier::Mid => tiers.mid += 1,
            PriceTier::Upscale => tiers.upscale += 1,
            PriceTier::Luxury => tiers.luxury += 1,
        }
    }

    HotelIndex {
        updated,
        currency: "EUR".to_string(),
        total_hotels: total,
        avg_price,
        tiers,
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| DataError::Json {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{run_date, sample_hotel, sample_neighborhood};

    #[test]
    fn from_records_accepts_consistent_data() {
        let hoods = vec![sample_neighborhood("plaka"), sample_neighborhood("koukaki")];
        let hotels = vec![
            sample_hotel("hotel-a", "plaka"),
            sample_hotel("hotel-b", "koukaki"),
        ];
        let snapshot = Snapshot::from_records(hoods, hotels, run_date()).unwrap();
        assert_eq!(snapshot.hotels.len(), 2);
        assert_eq!(snapshot.index.total_hotels, 2);
    }

    #[test]
    fn orphaned_hotel_is_rejected() {
        let hoods = vec![sample_neighborhood("plaka")];
        let hotels = vec![sample_hotel("lost", "atlantis")];
        let err = Snapshot::from_records(hoods, hotels, run_date()).unwrap_err();
        match err {
            DataError::UnknownNeighborhood { slug, neighborhood } => {
                assert_eq!(slug, "lost");
                assert_eq!(neighborhood, "atlantis");
            }
            other => panic!("expected UnknownNeighborhood, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_slug_is_rejected() {
        let hoods = vec![sample_neighborhood("plaka")];
        let hotels = vec![sample_hotel("twin", "plaka"), sample_hotel("twin", "plaka")];
        let err = Snapshot::from_records(hoods, hotels, run_date()).unwrap_err();
        assert!(matches!(err, DataError::DuplicateSlug(slug) if slug == "twin"));
    }

    #[test]
    fn out_of_range_stars_are_rejected() {
        let hoods = vec![sample_neighborhood("plaka")];
        let mut hotel = sample_hotel("six-star", "plaka");
        hotel.stars = 6;
        let err = Snapshot::from_records(hoods, vec![hotel], run_date()).unwrap_err();
        assert!(matches!(err, DataError::InvalidStars { stars: 6, .. }));
    }

    #[test]
    fn out_of_range_rooftop_rating_is_rejected() {
        let hoods = vec![sample_neighborhood("plaka")];
        let mut hotel = sample_hotel("overrated", "plaka");
        hotel.rooftop_rating = Some(5.5);
        let err = Snapshot::from_records(hoods, vec![hotel], run_date()).unwrap_err();
        assert!(matches!(err, DataError::InvalidRooftopRating { .. }));
    }

    #[test]
    fn inactive_hotels_are_dropped_before_validation() {
        let hoods = vec![sample_neighborhood("plaka")];
        // The delisted record is inconsistent, but delisting wins.
        let mut delisted = sample_hotel("ghost", "nowhere");
        delisted.active = false;
        let hotels = vec![sample_hotel("alive", "plaka"), delisted];
        let snapshot = Snapshot::from_records(hoods, hotels, run_date()).unwrap();
        assert_eq!(snapshot.hotels.len(), 1);
        assert_eq!(snapshot.hotels[0].slug, "alive");
        assert_eq!(snapshot.index.total_hotels, 1);
    }

    #[test]
    fn derive_index_rounds_mean_and_partitions() {
        let hotels = vec![
            {
                let mut h = sample_hotel("a", "plaka");
                h.price = 60;
                h
            },
            {
                let mut h = sample_hotel("b", "plaka");
                h.price = 80;
                h
            },
            {
                let mut h = sample_hotel("c", "plaka");
                h.price = 155;
                h
            },
            {
                let mut h = sample_hotel("d", "plaka");
                h.price = 310;
                h
            },
        ];
        let index = derive_index(&hotels, run_date());
        // mean(60, 80, 155, 310) = 151.25 → 151
        assert_eq!(index.avg_price, 151);
        assert_eq!(index.total_hotels, 4);
        assert_eq!(index.tiers.budget, 1);
        assert_eq!(index.tiers.mid, 1);
        assert_eq!(index.tiers.upscale, 1);
        assert_eq!(index.tiers.luxury, 1);
        assert_eq!(index.tiers.total(), index.total_hotels);
        assert_eq!(index.currency, "EUR");
    }

    #[test]
    fn derive_index_handles_empty_collection() {
        let index = derive_index(&[], run_date());
        assert_eq!(index.total_hotels, 0);
        assert_eq!(index.avg_price, 0);
        assert_eq!(index.tiers.total(), 0);
    }

    #[test]
    fn load_reads_catalog_and_listings() {
        let tmp = tempfile::TempDir::new().unwrap();
        let root = tmp.path();
        std::fs::create_dir_all(root.join("hotels")).unwrap();
        std::fs::write(
            root.join("neighborhoods.json"),
            serde_json::to_string_pretty(&NeighborhoodCatalog {
                neighborhoods: vec![sample_neighborhood("plaka")],
            })
            .unwrap(),
        )
        .unwrap();
        std::fs::write(
            root.join("hotels/plaka.json"),
            serde_json::to_string_pretty(&HotelListing {
                neighborhood: "plaka".to_string(),
                hotels: vec![sample_hotel("hotel-a", "plaka")],
            })
            .unwrap(),
        )
        .unwrap();

        let snapshot = Snapshot::load(root, run_date()).unwrap();
        assert_eq!(snapshot.neighborhoods.len(), 1);
        assert_eq!(snapshot.hotels.len(), 1);
    }

    #[test]
    fn load_rejects_mislabeled_listing() {
        let tmp = tempfile::TempDir::new().unwrap();
        let root = tmp.path();
        std::fs::create_dir_all(root.join("hotels")).unwrap();
        std::fs::write(
            root.join("neighborhoods.json"),
            serde_json::to_string_pretty(&NeighborhoodCatalog {
                neighborhoods: vec![sample_neighborhood("plaka")],
            })
            .unwrap(),
        )
        .unwrap();
        std::fs::write(
            root.join("hotels/plaka.json"),
            serde_json::to_string_pretty(&HotelListing {
                neighborhood: "koukaki".to_string(),
                hotels: vec![],
            })
            .unwrap(),
        )
        .unwrap();

        let err = Snapshot::load(root, run_date()).unwrap_err();
        assert!(matches!(err, DataError::ListingMismatch { .. }));
    }

    #[test]
    fn load_reports_malformed_json_with_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        let root = tmp.path();
        std::fs::write(root.join("neighborhoods.json"), "{ not json").unwrap();

        let err = Snapshot::load(root, run_date()).unwrap_err();
        match err {
            DataError::Json { path, .. } => {
                assert!(path.ends_with("neighborhoods.json"));
            }
            other => panic!("expected Json error, got {other:?}"),
        }
    }

    #[test]
    fn missing_catalog_is_an_io_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = Snapshot::load(tmp.path(), run_date()).unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
    }
}
