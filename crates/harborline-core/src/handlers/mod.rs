//! One-shot page handlers.
//!
//! Each handler is a small value type the page keeps in a signal and
//! updates in response to a single kind of event:
//!
//! - [`ScrollState`]: navbar `scrolled` flag and back-to-top visibility
//! - [`MobileMenu`]: menu visibility and its toggle icon
//! - [`AnchorTarget`]: in-page `#` links and smooth scrolling
//! - [`Accordion`]: single-open FAQ list
//! - [`CollapsibleGrid`]: fleet grid "view all" toggle

mod accordion;
mod fleet_grid;
mod navigation;

pub use accordion::Accordion;
pub use fleet_grid::{
    CollapsibleGrid, GridToggle, FLEET_GRID_ID, FLEET_SECTION_ID, VIEW_ALL_TRIGGER_ID,
};
pub use navigation::{
    resolve_anchor, AnchorTarget, MenuIcon, MobileMenu, ScrollState, ScrollThresholds,
    DEFAULT_BACK_TO_TOP_THRESHOLD, DEFAULT_NAVBAR_THRESHOLD,
};
