//! Shared page context for the Harborline site.
//!
//! The App component provides these to every section via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In a section component
//! let config = use_site_config();
//! let toasts = use_toasts();
//! let mut menu = use_mobile_menu();
//! ```

use dioxus::prelude::*;
use harborline_core::{MobileMenu, ReqwestTransport, ScrollState, SiteConfig, ToastQueue};

/// Get the site configuration (set from command line or default).
pub fn get_site_config() -> SiteConfig {
    crate::get_site_config()
}

/// HTTP transport for form submissions, absent if the client failed to build
#[derive(Clone, Debug)]
pub struct SharedTransport(pub Option<ReqwestTransport>);

/// Hook to access the site configuration.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Hook to access the toast queue.
///
/// Pushing is fire-and-forget; the App re-renders the stack on change.
pub fn use_toasts() -> ToastQueue {
    use_context::<ToastQueue>()
}

/// Hook to access the form transport.
pub fn use_transport() -> SharedTransport {
    use_context::<SharedTransport>()
}

/// Hook to access the mobile menu state.
///
/// Shared between the navbar and every in-page anchor, since following an
/// anchor closes the menu.
pub fn use_mobile_menu() -> Signal<MobileMenu> {
    use_context::<Signal<MobileMenu>>()
}

/// Hook to access the scroll-driven flags.
pub fn use_scroll_state() -> Signal<ScrollState> {
    use_context::<Signal<ScrollState>>()
}
