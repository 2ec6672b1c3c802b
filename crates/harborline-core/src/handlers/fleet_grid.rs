//! "View all" toggle for the fleet grid.

/// Id of the "view all" trigger
pub const VIEW_ALL_TRIGGER_ID: &str = "view-all-fleet";

/// Id of the grid container the trigger collapses
pub const FLEET_GRID_ID: &str = "fleet-grid";

/// Id of the section scrolled back into view on collapse
pub const FLEET_SECTION_ID: &str = "fleet";

/// Result of one toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridToggle {
    /// Grid state after the toggle
    pub collapsed: bool,
    /// The page should scroll the fleet section into view
    pub scroll_to_section: bool,
}

/// Collapsed/expanded state of the fleet grid. Starts collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapsibleGrid {
    collapsed: bool,
}

impl Default for CollapsibleGrid {
    fn default() -> Self {
        Self { collapsed: true }
    }
}

impl CollapsibleGrid {
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn toggle(&mut self) -> GridToggle {
        self.collapsed = !self.collapsed;
        GridToggle {
            collapsed: self.collapsed,
            scroll_to_section: self.collapsed,
        }
    }

    /// Trigger label for the current state
    pub fn label(&self) -> &'static str {
        if self.collapsed {
            "View All"
        } else {
            "View Less"
        }
    }

    /// Trigger icon for the current state
    pub fn icon(&self) -> &'static str {
        if self.collapsed {
            "ph-arrow-right"
        } else {
            "ph-arrow-up"
        }
    }

    pub fn container_class(&self) -> &'static str {
        if self.collapsed {
            "fleet-grid collapsed"
        } else {
            "fleet-grid"
        }
    }
}
