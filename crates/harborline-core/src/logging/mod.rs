//! Tracing setup shared by the site binary and tests.
//!
//! ## Usage
//!
//! ```ignore
//! // RUST_LOG wins unless a directive is passed explicitly
//! harborline_core::logging::init(None)?;
//! harborline_core::logging::init(Some("harborline_core=debug"))?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::error::{SiteError, SiteResult};

/// Filter used when neither a directive nor `RUST_LOG` is given
pub const DEFAULT_FILTER: &str = "harborline=info,harborline_core=info";

/// Build the filter: explicit directive, then `RUST_LOG`, then the default.
pub fn env_filter(directive: Option<&str>) -> SiteResult<EnvFilter> {
    match directive {
        Some(directive) => EnvFilter::try_new(directive)
            .map_err(|e| SiteError::Config(format!("invalid log filter {directive:?}: {e}"))),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the global fmt subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init(directive: Option<&str>) -> SiteResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directive)?)
        .try_init()
        .map_err(|e| SiteError::Config(format!("failed to install tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_directive_is_used() {
        let filter = env_filter(Some("harborline_core=debug")).unwrap();
        assert!(filter.to_string().contains("harborline_core=debug"));
    }

    #[test]
    fn invalid_directive_is_config_error() {
        let err = env_filter(Some("harborline_core=loud")).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }
}
