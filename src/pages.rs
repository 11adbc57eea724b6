//! Page builders.
//!
//! One typed renderer per page family, each a pure function from a snapshot
//! subset to [`Markup`]. The [`crate::site`] module decides paths and does
//! the writing; nothing here touches the filesystem.
//!
//! Every page body passes through [`layout`], the shared document shell that
//! sets the title, meta description, canonical URL, navigation and footer —
//! the only step all page families share.

use crate::config::{self, RenderConfig};
use crate::data::Snapshot;
use crate::render::{badge_strip, hotel_card, neighborhood_card, star_glyphs, tag_list};
use crate::types::{Hotel, Neighborhood, PriceTier};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use url::form_urlencoded;

const CSS: &str = include_str!("../static/style.css");

/// Home-page highlight sections cap out at this many cards.
const HIGHLIGHT_LIMIT: usize = 6;

/// Rooftop hotels need at least this rating to make the home-page section.
const ROOFTOP_HIGHLIGHT_MIN: f32 = 4.0;

/// "Nearby" sections list this many other neighborhoods.
const NEARBY_LIMIT: usize = 4;

/// "Similar hotels" sections list this many same-neighborhood hotels.
const SIMILAR_LIMIT: usize = 3;

const DEFAULT_PROS: [&str; 2] = [
    "Walkable to the major sights",
    "Fair value for the neighborhood",
];
const DEFAULT_CONS: [&str; 1] = ["Street-side rooms can pick up evening noise"];
const DEFAULT_BEST_FOR: [&str; 1] = ["City-break travellers"];

// ============================================================================
// Layout shell
// ============================================================================

/// Wrap a page body in the shared document shell.
///
/// `path` is the site-relative path of the page ("/", "/contact/", ...); it
/// feeds the canonical link.
pub fn layout(title: &str, description: &str, path: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                meta name="description" content=(description);
                link rel="canonical" href=(config::canonical_url(path));
                style { (PreEscaped(CSS)) }
            }
            body {
                (site_header())
                main { (content) }
                (site_footer())
            }
        }
    }
}

fn site_header() -> Markup {
    html! {
        header.site-header {
            a.brand href="/" { "Athenstays" }
            nav.site-nav {
                a href="/guides/budget/" { "Budget" }
                a href="/guides/luxury/" { "Luxury" }
                a href="/guides/rooftop/" { "Rooftops" }
                a href="/contact/" { "Contact" }
            }
        }
    }
}

fn site_footer() -> Markup {
    html! {
        footer.site-footer {
            p { "Hand-checked Athens hotel picks. Prices are typical nightly rates and change with the season." }
            p { a href="/contact/" { "Suggest a correction" } }
        }
    }
}

// ============================================================================
// Home
// ============================================================================

/// Home page: neighborhood grid, Acropolis-view and rooftop highlights,
/// aggregate statistics.
///
/// Highlight sections take the first qualifying hotels in data-store order;
/// they are deliberately not quality-ranked.
pub fn home(snapshot: &Snapshot) -> Markup {
    let view_picks: Vec<&Hotel> = snapshot
        .hotels
        .iter()
        .filter(|h| h.acropolis_view)
        .take(HIGHLIGHT_LIMIT)
        .collect();
    let rooftop_picks: Vec<&Hotel> = snapshot
        .hotels
        .iter()
        .filter(|h| h.rooftop_bar && h.rooftop_rating.unwrap_or(0.0) >= ROOFTOP_HIGHLIGHT_MIN)
        .take(HIGHLIGHT_LIMIT)
        .collect();
    let index = &snapshot.index;

    html! {
        section.hero {
            h1 { "Find the right Athens hotel" }
            p.hero-tagline {
                "Every listing walked past, priced out and mapped against the Acropolis — "
                (index.total_hotels) " hotels across "
                (snapshot.neighborhoods.len()) " neighborhoods."
            }
            ul.stat-strip {
                li { strong { "€" (index.avg_price) } " average per night" }
                li { strong { (index.tiers.budget) } " under €80" }
                li { strong { (index.tiers.luxury) } " true luxury" }
                li { "updated " (index.updated) }
            }
        }
        section.hood-section {
            h2 { "Pick a neighborhood" }
            div.card-grid {
                @for hood in &snapshot.neighborhoods {
                    (neighborhood_card(hood))
                }
            }
        }
        @if !view_picks.is_empty() {
            section.highlight-section {
                h2 { "Wake up to the Acropolis" }
                div.card-grid {
                    @for hotel in &view_picks {
                        (hotel_card(hotel, snapshot.neighborhood_name(hotel)))
                    }
                }
            }
        }
        @if !rooftop_picks.is_empty() {
            section.highlight-section {
                h2 { "Rooftop bars worth the elevator" }
                div.card-grid {
                    @for hotel in &rooftop_picks {
                        (hotel_card(hotel, snapshot.neighborhood_name(hotel)))
                    }
                }
            }
        }
    }
}

// ============================================================================
// Neighborhood
// ============================================================================

/// Neighborhood page: hero, hotel grid, nearby neighborhoods, FAQ.
pub fn neighborhood(snapshot: &Snapshot, hood: &Neighborhood) -> Markup {
    let hotels: Vec<&Hotel> = snapshot.hotels_in(&hood.id).collect();
    let nearby: Vec<&Neighborhood> = snapshot
        .neighborhoods
        .iter()
        .filter(|n| n.id != hood.id)
        .take(NEARBY_LIMIT)
        .collect();

    html! {
        section.page-hero {
            h1 { (hood.emoji) " " (hood.name) }
            p.hero-tagline { (hood.tagline) }
            p.hero-body { (hood.description) }
            (tag_list(&hood.vibe))
        }
        section.hood-hotels {
            h2 { "Where to stay in " (hood.name) }
            @if hotels.is_empty() {
                p.empty-note { "No hotels listed here yet." }
            } @else {
                div.card-grid {
                    @for hotel in &hotels {
                        (hotel_card(hotel, Some(&hood.name)))
                    }
                }
            }
        }
        @if !nearby.is_empty() {
            section.nearby-section {
                h2 { "Also consider" }
                div.card-grid {
                    @for other in &nearby {
                        (neighborhood_card(other))
                    }
                }
            }
        }
        section.faq-section {
            h2 { "Good to know" }
            @for (question, answer) in neighborhood_faqs(hood) {
                details.faq {
                    summary { (question) }
                    p { (answer) }
                }
            }
        }
    }
}

/// Three FAQ entries synthesized from the neighborhood record itself.
pub(crate) fn neighborhood_faqs(hood: &Neighborhood) -> [(String, String); 3] {
    let lead = first_sentence(&hood.description).to_lowercase();
    [
        (
            format!("Is {} a good area to stay in Athens?", hood.name),
            format!("Yes — {lead}"),
        ),
        (
            format!("How expensive are hotels in {}?", hood.name),
            format!(
                "Hotels in {} average around €{} per night; the guides pages list cheaper and pricier picks city-wide.",
                hood.name, hood.avg_price
            ),
        ),
        (
            format!("How far is {} from the Acropolis?", hood.name),
            format!(
                "{} is roughly {} minutes on foot from the Acropolis.",
                hood.name, hood.walk_to_acropolis
            ),
        ),
    ]
}

/// First sentence of a text, up to and including the first full stop, or the
/// whole text if it has none.
pub(crate) fn first_sentence(text: &str) -> &str {
    match text.find('.') {
        Some(idx) => &text[..=idx],
        None => text,
    }
}

// ============================================================================
// Hotel
// ============================================================================

/// Hotel detail page: header with badges, fact row, overview, amenity and
/// pros/cons lists, booking link, similar hotels.
pub fn hotel(snapshot: &Snapshot, hotel: &Hotel) -> Markup {
    let hood_name = snapshot.neighborhood_name(hotel).unwrap_or(&hotel.neighborhood);
    let (low, high) = price_range(hotel.price);
    let similar: Vec<&Hotel> = snapshot
        .hotels_in(&hotel.neighborhood)
        .filter(|h| h.slug != hotel.slug)
        .take(SIMILAR_LIMIT)
        .collect();

    let pros: Vec<&str> = non_empty_or(&hotel.pros, &DEFAULT_PROS);
    let cons: Vec<&str> = non_empty_or(&hotel.cons, &DEFAULT_CONS);
    let best_for: Vec<&str> = non_empty_or(&hotel.best_for, &DEFAULT_BEST_FOR);

    html! {
        section.page-hero.hotel-hero {
            p.crumb {
                a href="/" { "Athens" } " / "
                a href={ "/neighborhoods/" (hotel.neighborhood) "/" } { (hood_name) }
            }
            h1 { (hotel.name) }
            p.card-stars { (star_glyphs(hotel.stars)) }
            (badge_strip(hotel))
            p.hero-body { (hotel.overview) }
        }
        section.fact-row {
            dl {
                div.fact { dt { "Nightly rate" } dd { "€" (hotel.price) } }
                div.fact { dt { "Typical range" } dd { "€" (low) "–€" (high) } }
                div.fact { dt { "Tier" } dd { (PriceTier::of(hotel.price).label()) } }
                div.fact { dt { "Acropolis" } dd { (hotel.distance_to_acropolis) } }
                @if let Some(rating) = hotel.rooftop_rating {
                    div.fact { dt { "Rooftop" } dd { (rating) " / 5" } }
                }
            }
            a.cta href=(booking_search_url(&hotel.name)) rel="nofollow noopener" {
                "Check rates on Booking.com"
            }
        }
        @if !hotel.amenities.is_empty() {
            section.amenity-section {
                h2 { "Amenities" }
                (tag_list(&hotel.amenities))
            }
        }
        section.pros-cons {
            div.pros {
                h2 { "What works" }
                ul { @for pro in &pros { li { (pro) } } }
            }
            div.cons {
                h2 { "What to know" }
                ul { @for con in &cons { li { (con) } } }
            }
        }
        section.best-for-section {
            h2 { "Best for" }
            ul.tags { @for tag in &best_for { li.tag { (tag) } } }
        }
        @if !similar.is_empty() {
            section.similar-section {
                h2 { "Similar stays in " (hood_name) }
                div.card-grid {
                    @for other in &similar {
                        (hotel_card(other, Some(hood_name)))
                    }
                }
            }
        }
        p.verified-note { "Details last verified " (hotel.last_verified) "." }
    }
}

/// Displayed nightly-rate band: 0.8x to 1.5x the listed price, rounded.
pub(crate) fn price_range(price: u32) -> (u32, u32) {
    let low = (f64::from(price) * 0.8).round() as u32;
    let high = (f64::from(price) * 1.5).round() as u32;
    (low, high)
}

/// External booking search for `"{name} Athens"`, query form-encoded.
pub(crate) fn booking_search_url(name: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("ss", &format!("{name} Athens"))
        .finish();
    format!("https://www.booking.com/searchresults.html?{query}")
}

fn non_empty_or<'a>(list: &'a [String], fallback: &'a [&'a str]) -> Vec<&'a str> {
    if list.is_empty() {
        fallback.to_vec()
    } else {
        list.iter().map(String::as_str).collect()
    }
}

// ============================================================================
// Contact / thank-you
// ============================================================================

/// Contact page with the externally configured form endpoint.
pub fn contact(config: &RenderConfig) -> Markup {
    html! {
        section.page-hero {
            h1 { "Get in touch" }
            p.hero-body {
                "Spotted a stale price, a closed rooftop or a hotel we should cover? Tell us."
            }
        }
        form.contact-form method="POST" action={ "https://formspree.io/f/" (config.form_id) } {
            label for="name" { "Name" }
            input type="text" id="name" name="name" required;
            label for="email" { "Email" }
            input type="email" id="email" name="email" required;
            label for="message" { "Message" }
            textarea id="message" name="message" rows="6" required {}
            input type="hidden" name="_next" value=(config::canonical_url("/thank-you/"));
            button.cta type="submit" { "Send" }
        }
    }
}

/// Post-submission thank-you page.
pub fn thank_you() -> Markup {
    html! {
        section.page-hero {
            h1 { "Thanks — got it" }
            p.hero-body {
                "We read every note and re-check listings as corrections come in."
            }
            p { a.cta href="/" { "Back to the hotels" } }
        }
    }
}

// ============================================================================
// Guides
// ============================================================================

/// The three themed guide pages: fixed predicate, fixed sort, own hero copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guide {
    Budget,
    Luxury,
    Rooftop,
}

impl Guide {
    pub const ALL: [Guide; 3] = [Guide::Budget, Guide::Luxury, Guide::Rooftop];

    pub fn slug(self) -> &'static str {
        match self {
            Guide::Budget => "budget",
            Guide::Luxury => "luxury",
            Guide::Rooftop => "rooftop",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Guide::Budget => "Athens on a budget",
            Guide::Luxury => "Luxury stays in Athens",
            Guide::Rooftop => "Athens rooftop-bar hotels",
        }
    }

    pub fn intro(self) -> &'static str {
        match self {
            Guide::Budget => {
                "Clean, central and under €80 a night. These picks trade marble lobbies for location."
            }
            Guide::Luxury => {
                "From €200 a night upwards: the hotels where the view, the service and the breakfast all deliver."
            }
            Guide::Rooftop => {
                "Every hotel here pours drinks on its own roof, ranked by how good the rooftop actually is."
            }
        }
    }

    /// Filter and sort the full collection for this guide.
    ///
    /// Budget: price under €80, cheapest first. Luxury: price €200 and up,
    /// priciest first. Rooftop: has a rooftop bar, best-rated first with a
    /// missing rating treated as 0.
    pub fn select<'a>(self, hotels: &'a [Hotel]) -> Vec<&'a Hotel> {
        let mut picks: Vec<&Hotel> = match self {
            Guide::Budget => hotels.iter().filter(|h| h.price < 80).collect(),
            Guide::Luxury => hotels.iter().filter(|h| h.price >= 200).collect(),
            Guide::Rooftop => hotels.iter().filter(|h| h.rooftop_bar).collect(),
        };
        match self {
            Guide::Budget => picks.sort_by(|a, b| a.price.cmp(&b.price)),
            Guide::Luxury => picks.sort_by(|a, b| b.price.cmp(&a.price)),
            Guide::Rooftop => picks.sort_by(|a, b| {
                b.rooftop_rating
                    .unwrap_or(0.0)
                    .total_cmp(&a.rooftop_rating.unwrap_or(0.0))
            }),
        }
        picks
    }
}

/// Guide page: hero copy plus the filtered, sorted hotel grid.
pub fn guide(snapshot: &Snapshot, guide: Guide) -> Markup {
    let picks = guide.select(&snapshot.hotels);
    html! {
        section.page-hero {
            h1 { (guide.title()) }
            p.hero-body { (guide.intro()) }
        }
        section.guide-hotels {
            @if picks.is_empty() {
                p.empty-note { "Nothing qualifies right now — check back after the next data refresh." }
            } @else {
                div.card-grid {
                    @for hotel in &picks {
                        (hotel_card(hotel, snapshot.neighborhood_name(hotel)))
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
