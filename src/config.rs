//! Render-time configuration.
//!
//! The site's configuration surface is deliberately tiny: one externally
//! supplied form-submission identifier, read from the environment with a
//! documented fallback, plus the run date that stamps dated output. Everything
//! else about the site (domain, page structure, copy) is fixed at compile
//! time.

use chrono::NaiveDate;
use std::env;

/// Canonical base URL for every page and sitemap entry. No trailing slash.
pub const SITE_URL: &str = "https://www.athenstays.com";

/// Environment variable holding the contact-form submission identifier.
pub const FORM_ID_ENV: &str = "ATHENSTAYS_FORM_ID";

/// Fallback form identifier used when [`FORM_ID_ENV`] is unset. Submissions
/// to the fallback endpoint go nowhere; it exists so local builds render a
/// complete contact page without credentials.
pub const DEFAULT_FORM_ID: &str = "contact-demo";

/// Configuration passed into the site assembler.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Form-submission identifier substituted into the contact page
    pub form_id: String,
    /// Date of this generation run; stamps the sitemap and the derived index
    pub run_date: NaiveDate,
}

impl RenderConfig {
    /// Build a config from an explicit form id (tests) or the fallback.
    pub fn new(form_id: Option<String>, run_date: NaiveDate) -> Self {
        RenderConfig {
            form_id: form_id.unwrap_or_else(|| DEFAULT_FORM_ID.to_string()),
            run_date,
        }
    }

    /// Build a config from the process environment.
    pub fn from_env(run_date: NaiveDate) -> Self {
        Self::new(env::var(FORM_ID_ENV).ok(), run_date)
    }
}

/// Absolute canonical URL for a site-relative path (`"/"`, `"/contact/"`).
pub fn canonical_url(path: &str) -> String {
    format!("{SITE_URL}{path}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::run_date;

    #[test]
    fn explicit_form_id_wins() {
        let config = RenderConfig::new(Some("live-form-7".to_string()), run_date());
        assert_eq!(config.form_id, "live-form-7");
    }

    #[test]
    fn missing_form_id_falls_back() {
        let config = RenderConfig::new(None, run_date());
        assert_eq!(config.form_id, DEFAULT_FORM_ID);
    }

    #[test]
    fn canonical_url_joins_path() {
        assert_eq!(canonical_url("/"), "https://www.athenstays.com/");
        assert_eq!(
            canonical_url("/hotels/attic-view-suites/"),
            "https://www.athenstays.com/hotels/attic-view-suites/"
        );
    }
}
