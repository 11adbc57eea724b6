//! CLI output formatting.
//!
//! Each command has a `format_*` function returning lines (pure, testable
//! without capturing stdout) and a `print_*` wrapper that writes them. The
//! display is information-first: entities lead with an index and name, paths
//! and counts follow as context.
//!
//! ```text
//! Neighborhoods
//! 001 Plaka (2 hotels, avg €145)
//! 002 Koukaki (2 hotels, avg €105)
//!
//! Index
//!     8 hotels · average €161/night
//!     tiers: 1 budget / 3 mid / 2 upscale / 2 luxury
//! ```

use crate::data::Snapshot;
use crate::seed::SeedSummary;
use crate::site::Summary;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// check
// ============================================================================

/// Inventory of the loaded data store.
pub fn format_check_output(snapshot: &Snapshot) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Neighborhoods".to_string());
    for (i, hood) in snapshot.neighborhoods.iter().enumerate() {
        let count = snapshot.hotels_in(&hood.id).count();
        lines.push(format!(
            "{} {} ({} hotels, avg €{})",
            format_index(i + 1),
            hood.name,
            count,
            hood.avg_price
        ));
        lines.push(format!("    Source: hotels/{}.json", hood.id));
    }

    lines.push(String::new());
    lines.push("Index".to_string());
    let index = &snapshot.index;
    lines.push(format!(
        "    {} hotels · average €{}/night",
        index.total_hotels, index.avg_price
    ));
    lines.push(format!(
        "    tiers: {} budget / {} mid / {} upscale / {} luxury",
        index.tiers.budget, index.tiers.mid, index.tiers.upscale, index.tiers.luxury
    ));

    lines
}

pub fn print_check_output(snapshot: &Snapshot) {
    for line in format_check_output(snapshot) {
        println!("{}", line);
    }
}

// ============================================================================
// generate
// ============================================================================

/// Closing summary after a generation run. Per-page progress lines are
/// printed by the assembler as it writes.
pub fn format_generate_output(summary: &Summary) -> Vec<String> {
    vec![format!(
        "Generated {} files: 1 home, {} neighborhood pages, {} hotel pages, {} guides, contact and thank-you, {} artifacts",
        summary.total_files(),
        summary.neighborhood_pages,
        summary.hotel_pages,
        summary.guide_pages,
        summary.artifacts
    )]
}

pub fn print_generate_output(summary: &Summary) {
    for line in format_generate_output(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// seed
// ============================================================================

pub fn format_seed_output(summary: &SeedSummary, data_dir: &Path) -> Vec<String> {
    vec![
        format!(
            "Seeded {} neighborhoods and {} hotels",
            summary.neighborhoods, summary.hotels
        ),
        format!("    Catalog: {}", data_dir.join("neighborhoods.json").display()),
        format!("    Listings: {}", data_dir.join("hotels").display()),
        format!("    Export: {}", data_dir.join("hotels-index.json").display()),
    ]
}

pub fn print_seed_output(summary: &SeedSummary, data_dir: &Path) {
    for line in format_seed_output(summary, data_dir) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_snapshot;

    #[test]
    fn format_index_pads_to_three() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn check_output_lists_each_neighborhood_with_counts() {
        let snapshot = sample_snapshot();
        let lines = format_check_output(&snapshot);
        assert_eq!(lines[0], "Neighborhoods");
        assert!(lines[1].starts_with("001 "));
        assert!(lines[1].contains("hotels"));
        assert!(lines[2].contains("Source: hotels/"));
        assert!(lines.iter().any(|l| l == "Index"));
        assert!(lines.iter().any(|l| l.contains("average €")));
        assert!(lines.iter().any(|l| l.contains("budget")));
    }

    #[test]
    fn generate_output_totals_match_summary() {
        let summary = Summary {
            neighborhood_pages: 4,
            hotel_pages: 8,
            guide_pages: 3,
            static_pages: 3,
            artifacts: 4,
        };
        let lines = format_generate_output(&summary);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("22 files"));
        assert!(lines[0].contains("8 hotel pages"));
    }

    #[test]
    fn seed_output_names_the_written_paths() {
        let summary = SeedSummary {
            neighborhoods: 4,
            hotels: 8,
        };
        let lines = format_seed_output(&summary, Path::new("data"));
        assert!(lines[0].contains("4 neighborhoods"));
        assert!(lines.iter().any(|l| l.contains("neighborhoods.json")));
    }
}
