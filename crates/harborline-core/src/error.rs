//! Error types for the Harborline site

use thiserror::Error;

/// Main error type for Harborline site operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// A slider was constructed without any slides
    #[error("Slider has no slides")]
    NoSlides,

    /// Slides and indicators must pair one-to-one
    #[error("Slider has {slides} slides but {indicators} indicators")]
    SlideIndicatorMismatch {
        /// Number of slide panels
        slides: usize,
        /// Number of indicator dots
        indicators: usize,
    },

    /// A slide index outside `[0, len)` was requested
    #[error("Slide index {index} out of range (len {len})")]
    SlideOutOfRange {
        /// Requested index
        index: usize,
        /// Number of slides
        len: usize,
    },

    /// An accordion item index outside `[0, len)` was requested
    #[error("Accordion item {index} out of range (len {len})")]
    AccordionOutOfRange {
        /// Requested index
        index: usize,
        /// Number of items
        len: usize,
    },

    /// The form endpoint could not be reached
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid site configuration
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::SlideIndicatorMismatch {
            slides: 3,
            indicators: 2,
        };
        assert_eq!(format!("{}", err), "Slider has 3 slides but 2 indicators");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let site_err: SiteError = io_err.into();
        assert!(matches!(site_err, SiteError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let site_err: SiteError = json_err.into();
        assert!(matches!(site_err, SiteError::Json(_)));
    }
}
