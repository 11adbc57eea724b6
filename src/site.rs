//! Site assembly.
//!
//! Runs every page builder in a fixed order and writes the output tree:
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── neighborhoods/<id>/index.html
//! ├── hotels/<slug>/index.html
//! ├── guides/{budget,luxury,rooftop}/index.html
//! ├── contact/index.html
//! ├── thank-you/index.html
//! ├── sitemap.xml
//! ├── robots.txt
//! ├── _headers
//! └── _redirects
//! ```
//!
//! Output is fully replaced on every run; there is no diffing against prior
//! output and no rollback. A failure mid-run aborts and leaves whatever was
//! already written.
//!
//! The builder order (home, neighborhoods, hotels, contact, thank-you,
//! guides, then the ancillary artifacts) has no data dependency — everything
//! reads the same immutable snapshot — it only fixes the progress-report
//! order.

use crate::config::{self, RenderConfig};
use crate::data::Snapshot;
use crate::pages::{self, Guide};
use crate::types::PriceTier;
use maud::Markup;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What one generation run wrote, for the closing report.
#[derive(Debug, Default)]
pub struct Summary {
    pub neighborhood_pages: usize,
    pub hotel_pages: usize,
    pub guide_pages: usize,
    /// Home, contact and thank-you
    pub static_pages: usize,
    /// Sitemap, robots, headers, redirects
    pub artifacts: usize,
}

impl Summary {
    pub fn total_files(&self) -> usize {
        self.neighborhood_pages
            + self.hotel_pages
            + self.guide_pages
            + self.static_pages
            + self.artifacts
    }
}

/// Render and write the whole site under `out_dir`.
pub fn generate(
    snapshot: &Snapshot,
    config: &RenderConfig,
    out_dir: &Path,
) -> Result<Summary, GenerateError> {
    let mut summary = Summary::default();
    fs::create_dir_all(out_dir)?;

    write_page(
        out_dir,
        "index.html",
        pages::layout(
            "Athens hotels, hand-checked | Athenstays",
            "Compare Athens hotels by neighborhood, price tier, Acropolis view and rooftop bar.",
            "/",
            pages::home(snapshot),
        ),
    )?;
    summary.static_pages += 1;

    for hood in &snapshot.neighborhoods {
        let title = format!("{} hotels | Athenstays", hood.name);
        let description = format!("Where to stay in {}: {}", hood.name, hood.tagline);
        let path = format!("neighborhoods/{}/index.html", hood.id);
        write_page(
            out_dir,
            &path,
            pages::layout(
                &title,
                &description,
                &format!("/neighborhoods/{}/", hood.id),
                pages::neighborhood(snapshot, hood),
            ),
        )?;
        summary.neighborhood_pages += 1;
    }

    for hotel in &snapshot.hotels {
        let hood_name = snapshot.neighborhood_name(hotel).unwrap_or(&hotel.neighborhood);
        let title = format!("{} | Athenstays", hotel.name);
        let description = format!(
            "{} — {} hotel in {}, from €{} a night.",
            hotel.name,
            PriceTier::of(hotel.price).label(),
            hood_name,
            hotel.price
        );
        let path = format!("hotels/{}/index.html", hotel.slug);
        write_page(
            out_dir,
            &path,
            pages::layout(
                &title,
                &description,
                &format!("/hotels/{}/", hotel.slug),
                pages::hotel(snapshot, hotel),
            ),
        )?;
        summary.hotel_pages += 1;
    }

    write_page(
        out_dir,
        "contact/index.html",
        pages::layout(
            "Contact | Athenstays",
            "Corrections, additions and questions about Athens hotels.",
            "/contact/",
            pages::contact(config),
        ),
    )?;
    summary.static_pages += 1;

    write_page(
        out_dir,
        "thank-you/index.html",
        pages::layout(
            "Thanks | Athenstays",
            "Your message is on its way.",
            "/thank-you/",
            pages::thank_you(),
        ),
    )?;
    summary.static_pages += 1;

    for g in Guide::ALL {
        let title = format!("{} | Athenstays", g.title());
        let path = format!("guides/{}/index.html", g.slug());
        write_page(
            out_dir,
            &path,
            pages::layout(
                &title,
                g.intro(),
                &format!("/guides/{}/", g.slug()),
                pages::guide(snapshot, g),
            ),
        )?;
        summary.guide_pages += 1;
    }

    write_artifact(out_dir, "sitemap.xml", &sitemap_xml(snapshot, config))?;
    summary.artifacts += 1;
    write_artifact(out_dir, "robots.txt", &robots_txt())?;
    summary.artifacts += 1;
    write_artifact(out_dir, "_headers", HEADERS)?;
    summary.artifacts += 1;
    write_artifact(out_dir, "_redirects", REDIRECTS)?;
    summary.artifacts += 1;

    Ok(summary)
}

fn write_page(out_dir: &Path, rel_path: &str, markup: Markup) -> Result<(), GenerateError> {
    let target = out_dir.join(rel_path);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&target, markup.into_string())?;
    println!("Generated {rel_path}");
    Ok(())
}

fn write_artifact(out_dir: &Path, name: &str, content: &str) -> Result<(), GenerateError> {
    fs::write(out_dir.join(name), content)?;
    println!("Generated {name}");
    Ok(())
}

// ============================================================================
// Ancillary artifacts
// ============================================================================

/// Per-page-class sitemap priorities.
const PRIORITY_HOME: &str = "1.0";
const PRIORITY_NEIGHBORHOOD: &str = "0.9";
const PRIORITY_GUIDE: &str = "0.8";
const PRIORITY_HOTEL: &str = "0.7";
const PRIORITY_CONTACT: &str = "0.5";

/// One `<url>` entry per page. `lastmod` is the run date for every entry —
/// the site is regenerated as a whole, so per-record modification times
/// would be fiction.
fn sitemap_xml(snapshot: &Snapshot, config: &RenderConfig) -> String {
    let lastmod = config.run_date.format("%Y-%m-%d").to_string();
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    let mut push_entry = |path: &str, priority: &str| {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", config::canonical_url(path)));
        xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
        xml.push_str(&format!("    <priority>{priority}</priority>\n"));
        xml.push_str("  </url>\n");
    };

    push_entry("/", PRIORITY_HOME);
    for hood in &snapshot.neighborhoods {
        push_entry(&format!("/neighborhoods/{}/", hood.id), PRIORITY_NEIGHBORHOOD);
    }
    for g in Guide::ALL {
        push_entry(&format!("/guides/{}/", g.slug()), PRIORITY_GUIDE);
    }
    for hotel in &snapshot.hotels {
        push_entry(&format!("/hotels/{}/", hotel.slug), PRIORITY_HOTEL);
    }
    push_entry("/contact/", PRIORITY_CONTACT);

    xml.push_str("</urlset>\n");
    xml
}

fn robots_txt() -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /thank-you/\n\nSitemap: {}/sitemap.xml\n",
        config::SITE_URL
    )
}

const HEADERS: &str = "\
/*
  X-Frame-Options: DENY
  X-Content-Type-Options: nosniff
  Referrer-Policy: strict-origin-when-cross-origin

/sitemap.xml
  Cache-Control: public, max-age=3600

/*/
  Cache-Control: public, max-age=600
";

const REDIRECTS: &str = "\
/hotel/*   /hotels/:splat        301
/areas/*   /neighborhoods/:splat 301
/guides    /                     301
";
