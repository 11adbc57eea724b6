//! # Athenstays
//!
//! Static site generator for an Athens hotel comparison site. Curated JSON
//! records are the data source; the output is a fixed snapshot of static
//! HTML plus the deployment artifacts a static host wants (sitemap, robots,
//! headers, redirects).
//!
//! # Architecture: Linear Single-Pass Pipeline
//!
//! ```text
//! data/ (JSON)  →  Snapshot (immutable)  →  page renderers  →  dist/
//! ```
//!
//! The data store is loaded and validated once into a [`data::Snapshot`],
//! which every builder receives by reference. Builders are pure functions
//! from snapshot subsets to markup; only the assembler touches the
//! filesystem. There is no incremental mode: every run rewrites the whole
//! output tree, which keeps generation trivially idempotent.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Domain records serialized to/from the JSON data store |
//! | [`data`] | Loading, consistency validation, aggregate-index derivation |
//! | [`config`] | The one configurable value (form id) plus site constants |
//! | [`render`] | Fragment renderers: star strings, cards, badges |
//! | [`pages`] | One typed renderer per page family plus the layout shell |
//! | [`site`] | Orchestrates builders, writes the output tree and artifacts |
//! | [`seed`] | Curated starter dataset |
//! | [`output`] | CLI reporting — pure formatters with print wrappers |
//!
//! # Design Decisions
//!
//! ## Maud Over String Templates
//!
//! Pages are rendered with [Maud](https://maud.lambda.xyz/) rather than
//! placeholder substitution into template files:
//!
//! - **No unreplaced tokens**: a missing value is a compile error, not a
//!   `{{name}}` shipped to production.
//! - **Escaped by default**: free-text fields (hotel names, overviews,
//!   pros/cons) cannot inject markup.
//! - **Zero runtime files**: no template directory to load or get out of
//!   sync; the only asset is the stylesheet, embedded at compile time.
//!
//! ## Validation at the Door
//!
//! Referential integrity (hotel → neighborhood) and site-wide slug
//! uniqueness are enforced when the snapshot loads, because a violation
//! downstream is a broken link or a silently overwritten page. Everything
//! optional degrades to a documented default at render time instead.
//!
//! ## Derived, Never Authored, Aggregates
//!
//! The aggregate index (hotel count, average price, tier counts) is
//! recomputed from the listings on every run. The consolidated
//! `hotels-index.json` the seeder writes is an export for external
//! consumers; the generator never reads it, so the numbers cannot drift.
//!
//! ## Literal Selection Order
//!
//! "Similar hotels", "nearby neighborhoods" and the home-page highlights
//! all take the first N qualifying records in data-store order. The
//! curation order of the JSON files is the ranking; the generator does not
//! invent a scoring function.

pub mod config;
pub mod data;
pub mod output;
pub mod pages;
pub mod render;
pub mod seed;
pub mod site;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
