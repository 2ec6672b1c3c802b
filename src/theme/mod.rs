//! Global styles for the Harborline site.

mod styles;

pub use styles::GLOBAL_STYLES;

/// Phosphor icon font stylesheet (regular weight)
pub const PHOSPHOR_ICONS_CSS: &str = "https://unpkg.com/@phosphor-icons/web@2.1.1/src/regular/style.css";
