//! Site configuration.
//!
//! Every value has a default matching the live site, so an empty JSON
//! object (or no file at all) is a valid configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};
use crate::form::{is_form_endpoint, DEFAULT_FORM_ENDPOINT_PREFIX};
use crate::handlers::{ScrollThresholds, DEFAULT_BACK_TO_TOP_THRESHOLD, DEFAULT_NAVBAR_THRESHOLD};
use crate::toast::ToastTiming;

/// Endpoint the contact and newsletter forms post to
pub const DEFAULT_CONTACT_FORM_ACTION: &str = "https://formspree.io/f/xharborline";

/// Tunables for the page behaviors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Hero slider autoplay period (ms)
    pub slide_interval_ms: u64,
    /// How long a toast stays fully visible (ms)
    pub toast_display_ms: u64,
    /// Toast fade-out duration (ms)
    pub toast_fade_ms: u64,
    /// Scroll offset (px) for the navbar `scrolled` style
    pub navbar_scroll_threshold: f64,
    /// Scroll offset (px) for showing back-to-top
    pub back_to_top_threshold: f64,
    /// Forms whose action starts with this are submitted in place
    pub form_endpoint_prefix: String,
    /// Action URL of the site's forms
    pub contact_form_action: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            slide_interval_ms: 5000,
            toast_display_ms: 3000,
            toast_fade_ms: 300,
            navbar_scroll_threshold: DEFAULT_NAVBAR_THRESHOLD,
            back_to_top_threshold: DEFAULT_BACK_TO_TOP_THRESHOLD,
            form_endpoint_prefix: DEFAULT_FORM_ENDPOINT_PREFIX.to_string(),
            contact_form_action: DEFAULT_CONTACT_FORM_ACTION.to_string(),
        }
    }
}

impl SiteConfig {
    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&text)?;
        tracing::info!(path = %path.as_ref().display(), "Loaded site config");
        Ok(config)
    }

    /// Parse and validate a JSON config string
    pub fn from_json(text: &str) -> SiteResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SiteResult<()> {
        if self.slide_interval_ms == 0 {
            return Err(SiteError::Config(
                "slide_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.toast_display_ms == 0 {
            return Err(SiteError::Config(
                "toast_display_ms must be greater than zero".to_string(),
            ));
        }
        for (name, value) in [
            ("navbar_scroll_threshold", self.navbar_scroll_threshold),
            ("back_to_top_threshold", self.back_to_top_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SiteError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if !self.forms_wired() {
            tracing::warn!(
                action = %self.contact_form_action,
                prefix = %self.form_endpoint_prefix,
                "Contact form action doesn't match the endpoint prefix; forms will not be submitted in place"
            );
        }
        Ok(())
    }

    /// Whether the site's forms are handled by the in-page submission flow
    pub fn forms_wired(&self) -> bool {
        is_form_endpoint(&self.contact_form_action, &self.form_endpoint_prefix)
    }

    pub fn slide_interval(&self) -> Duration {
        Duration::from_millis(self.slide_interval_ms)
    }

    pub fn toast_timing(&self) -> ToastTiming {
        ToastTiming {
            display: Duration::from_millis(self.toast_display_ms),
            fade: Duration::from_millis(self.toast_fade_ms),
        }
    }

    pub fn scroll_thresholds(&self) -> ScrollThresholds {
        ScrollThresholds {
            navbar: self.navbar_scroll_threshold,
            back_to_top: self.back_to_top_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.slide_interval(), Duration::from_millis(5000));
        assert_eq!(config.toast_timing(), ToastTiming::default());
        assert_eq!(config.scroll_thresholds(), ScrollThresholds::default());
        assert!(config.forms_wired());
    }

    #[test]
    fn partial_override() {
        let config = SiteConfig::from_json(r#"{"slide_interval_ms": 8000}"#).unwrap();
        assert_eq!(config.slide_interval_ms, 8000);
        assert_eq!(config.toast_display_ms, 3000);
    }

    #[test]
    fn zero_interval_rejected() {
        let err = SiteConfig::from_json(r#"{"slide_interval_ms": 0}"#).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn negative_threshold_rejected() {
        let err = SiteConfig::from_json(r#"{"navbar_scroll_threshold": -1.0}"#).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let err = SiteConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, SiteError::Json(_)));
    }

    #[test]
    fn foreign_action_is_not_wired() {
        let config = SiteConfig {
            contact_form_action: "/contact".to_string(),
            ..SiteConfig::default()
        };
        assert!(config.validate().is_ok());
        assert!(!config.forms_wired());
    }
}
