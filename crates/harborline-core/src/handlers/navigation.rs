//! Navbar scroll styling, mobile menu and in-page anchors.

use serde::{Deserialize, Serialize};

/// Scroll offset (px) past which the navbar gets its `scrolled` style
pub const DEFAULT_NAVBAR_THRESHOLD: f64 = 50.0;

/// Scroll offset (px) past which the back-to-top control appears
pub const DEFAULT_BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// Scroll offsets that flip the scroll-driven flags
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollThresholds {
    pub navbar: f64,
    pub back_to_top: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            navbar: DEFAULT_NAVBAR_THRESHOLD,
            back_to_top: DEFAULT_BACK_TO_TOP_THRESHOLD,
        }
    }
}

/// Flags derived from the vertical scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    /// Navbar and its inner container carry `scrolled`
    pub navbar_scrolled: bool,
    /// Back-to-top control carries `active`
    pub back_to_top_visible: bool,
}

impl ScrollState {
    /// Flags for a page scrolled `offset` pixels down.
    ///
    /// Both thresholds are exclusive: exactly at the threshold the flag is off.
    pub fn at(offset: f64, thresholds: &ScrollThresholds) -> Self {
        Self {
            navbar_scrolled: offset > thresholds.navbar,
            back_to_top_visible: offset > thresholds.back_to_top,
        }
    }

    pub fn navbar_class(&self) -> &'static str {
        if self.navbar_scrolled {
            "navbar scrolled"
        } else {
            "navbar"
        }
    }

    pub fn nav_container_class(&self) -> &'static str {
        if self.navbar_scrolled {
            "nav-container scrolled"
        } else {
            "nav-container"
        }
    }

    pub fn back_to_top_class(&self) -> &'static str {
        if self.back_to_top_visible {
            "back-to-top active"
        } else {
            "back-to-top"
        }
    }
}

/// Glyph on the mobile menu button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    /// Hamburger, menu closed
    List,
    /// Cross, menu open
    Close,
}

impl MenuIcon {
    pub fn class(&self) -> &'static str {
        match self {
            MenuIcon::List => "ph-list",
            MenuIcon::Close => "ph-x",
        }
    }
}

/// Mobile menu visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip visibility. Returns whether the menu is now open.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn icon(&self) -> MenuIcon {
        if self.open {
            MenuIcon::Close
        } else {
            MenuIcon::List
        }
    }

    /// Class list for the link list
    pub fn links_class(&self) -> &'static str {
        if self.open {
            "nav-links active"
        } else {
            "nav-links"
        }
    }
}

/// Element id referenced by an in-page link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorTarget(String);

impl AnchorTarget {
    /// Parse an `href`. Only `#id` links are in-page anchors; a bare `#`
    /// points nowhere.
    pub fn parse(href: &str) -> Option<Self> {
        let id = href.strip_prefix('#')?;
        if id.is_empty() {
            return None;
        }
        Some(Self(id.to_string()))
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

/// Handle a click on an in-page link.
///
/// Returns the target to scroll to, or `None` when the link points nowhere
/// or at an element the page doesn't have. The mobile menu is closed only
/// when there is somewhere to go.
pub fn resolve_anchor(
    href: &str,
    exists: impl Fn(&str) -> bool,
    menu: &mut MobileMenu,
) -> Option<AnchorTarget> {
    let target = AnchorTarget::parse(href)?;
    if !exists(target.id()) {
        tracing::debug!(target = target.id(), "Anchor target not on page");
        return None;
    }
    if menu.close() {
        tracing::trace!("Mobile menu closed by anchor navigation");
    }
    Some(target)
}
