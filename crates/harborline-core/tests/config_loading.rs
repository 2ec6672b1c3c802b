//! Site config file loading

use std::io::Write;
use std::time::Duration;

use harborline_core::{SiteConfig, SiteError};
use tempfile::NamedTempFile;

#[test]
fn test_load_overrides_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "slide_interval_ms": 7000,
            "toast_display_ms": 4000,
            "contact_form_action": "https://formspree.io/f/mharbor"
        }}"#
    )
    .unwrap();

    let config = SiteConfig::load(file.path()).unwrap();
    assert_eq!(config.slide_interval(), Duration::from_millis(7000));
    assert_eq!(config.toast_timing().display, Duration::from_millis(4000));
    assert_eq!(config.toast_timing().fade, Duration::from_millis(300));
    assert_eq!(config.contact_form_action, "https://formspree.io/f/mharbor");
    assert!(config.forms_wired());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SiteConfig::load(dir.path().join("site.json")).unwrap_err();
    assert!(matches!(err, SiteError::Io(_)));
}

#[test]
fn test_invalid_values_rejected_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "toast_display_ms": 0 }}"#).unwrap();

    let err = SiteConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));
}

#[test]
fn test_roundtrip_through_json() {
    let config = SiteConfig {
        back_to_top_threshold: 450.0,
        ..SiteConfig::default()
    };
    let text = serde_json::to_string_pretty(&config).unwrap();
    assert_eq!(SiteConfig::from_json(&text).unwrap(), config);
}
