//! HTML fragment renderers.
//!
//! Small pure functions mapping one data record to a [`Markup`] fragment:
//! star strings, cards, badge strips. Page builders in [`crate::pages`]
//! compose these into full documents.
//!
//! All interpolation goes through maud, so free-text fields (names,
//! taglines) are HTML-escaped at the fragment boundary.

use crate::types::{Hotel, Neighborhood, PriceTier};
use maud::{Markup, html};

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// Fixed-width star string: `stars` filled glyphs then `5 - stars` empty
/// ones. Ratings outside 0-5 are a caller bug; load-time validation rejects
/// them, and this fails fast rather than rendering nonsense.
pub fn star_glyphs(stars: u8) -> String {
    assert!(stars <= 5, "star rating {stars} outside 0-5");
    let mut glyphs = String::with_capacity(5 * FILLED_STAR.len_utf8());
    for _ in 0..stars {
        glyphs.push(FILLED_STAR);
    }
    for _ in 0..5 - stars {
        glyphs.push(EMPTY_STAR);
    }
    glyphs
}

/// Card linking to a hotel page: placeholder photo, name, stars,
/// neighborhood, feature badges and a price line.
///
/// `neighborhood_name` is the resolved display name; when the caller has
/// none, the raw identifier from the record is shown instead.
pub fn hotel_card(hotel: &Hotel, neighborhood_name: Option<&str>) -> Markup {
    let hood = neighborhood_name.unwrap_or(&hotel.neighborhood);
    html! {
        a.hotel-card href={ "/hotels/" (hotel.slug) "/" } {
            div.card-photo aria-hidden="true" { span.photo-glyph { "🏨" } }
            div.card-body {
                h3.card-name { (hotel.name) }
                p.card-stars { (star_glyphs(hotel.stars)) }
                p.card-hood { (hood) }
                (badge_strip(hotel))
                p.card-price {
                    span.price { "€" (hotel.price) }
                    " / night · " (PriceTier::of(hotel.price).label())
                }
            }
        }
    }
}

/// Conditional feature badges for a hotel card or page header. Renders
/// nothing when the hotel has neither feature.
pub fn badge_strip(hotel: &Hotel) -> Markup {
    html! {
        @if hotel.acropolis_view || hotel.rooftop_bar {
            ul.badges {
                @if hotel.acropolis_view {
                    li.badge.badge-view { "Acropolis view" }
                }
                @if hotel.rooftop_bar {
                    li.badge.badge-rooftop { "Rooftop bar" }
                }
            }
        }
    }
}

/// Card linking to a neighborhood page: emoji, name, average price, walk
/// time.
pub fn neighborhood_card(hood: &Neighborhood) -> Markup {
    html! {
        a.hood-card href={ "/neighborhoods/" (hood.id) "/" } {
            span.hood-emoji aria-hidden="true" { (hood.emoji) }
            h3.hood-name { (hood.name) }
            p.hood-tagline { (hood.tagline) }
            p.hood-meta {
                "avg €" (hood.avg_price) "/night · "
                (hood.walk_to_acropolis) " min to the Acropolis"
            }
        }
    }
}

/// Tag pills for "best for" and vibe lists.
pub fn tag_list(tags: &[String]) -> Markup {
    html! {
        ul.tags {
            @for tag in tags {
                li.tag { (tag) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{sample_hotel, sample_neighborhood};

    #[test]
    fn star_glyphs_width_is_always_five() {
        for stars in 0..=5u8 {
            let glyphs = star_glyphs(stars);
            assert_eq!(glyphs.chars().count(), 5);
            assert_eq!(
                glyphs.chars().take_while(|c| *c == '★').count(),
                stars as usize
            );
        }
    }

    #[test]
    fn star_glyphs_split() {
        assert_eq!(star_glyphs(0), "☆☆☆☆☆");
        assert_eq!(star_glyphs(3), "★★★☆☆");
        assert_eq!(star_glyphs(5), "★★★★★");
    }

    #[test]
    #[should_panic(expected = "outside 0-5")]
    fn star_glyphs_rejects_out_of_range() {
        star_glyphs(6);
    }

    #[test]
    fn hotel_card_links_by_slug() {
        let hotel = sample_hotel("attic-view-suites", "plaka");
        let html = hotel_card(&hotel, Some("Plaka")).into_string();
        assert!(html.contains(r#"href="/hotels/attic-view-suites/""#));
        assert!(html.contains("Plaka"));
        assert!(html.contains("€140"));
    }

    #[test]
    fn hotel_card_falls_back_to_raw_identifier() {
        let hotel = sample_hotel("somewhere-inn", "exarchia");
        let html = hotel_card(&hotel, None).into_string();
        assert!(html.contains("exarchia"));
    }

    #[test]
    fn hotel_card_shows_tier_label() {
        let mut hotel = sample_hotel("budget-bed", "plaka");
        hotel.price = 55;
        let html = hotel_card(&hotel, None).into_string();
        assert!(html.contains("budget"));
    }

    #[test]
    fn badge_strip_renders_both_badges() {
        let mut hotel = sample_hotel("full-house", "plaka");
        hotel.acropolis_view = true;
        hotel.rooftop_bar = true;
        let html = badge_strip(&hotel).into_string();
        assert!(html.contains("Acropolis view"));
        assert!(html.contains("Rooftop bar"));
    }

    #[test]
    fn badge_strip_is_empty_without_features() {
        let mut hotel = sample_hotel("plain", "plaka");
        hotel.acropolis_view = false;
        hotel.rooftop_bar = false;
        assert_eq!(badge_strip(&hotel).into_string(), "");
    }

    #[test]
    fn neighborhood_card_contents() {
        let hood = sample_neighborhood("koukaki");
        let html = neighborhood_card(&hood).into_string();
        assert!(html.contains(r#"href="/neighborhoods/koukaki/""#));
        assert!(html.contains("Koukaki"));
        assert!(html.contains("avg €"));
        assert!(html.contains("min to the Acropolis"));
    }

    #[test]
    fn free_text_is_escaped() {
        let mut hotel = sample_hotel("xss-inn", "plaka");
        hotel.name = "<script>alert('xss')</script>".to_string();
        let html = hotel_card(&hotel, None).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
