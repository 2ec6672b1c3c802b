//! Navigation Bar Component
//!
//! Sticky top bar: brand, section links, booking button and the mobile
//! menu toggle. Picks up the `scrolled` style once the page scrolls past
//! the configured offset.

use dioxus::prelude::*;
use harborline_ui::{ButtonVariant, IconButton};

use crate::components::AnchorLink;
use crate::content::NAV_LINKS;
use crate::context::{use_mobile_menu, use_scroll_state};

#[component]
pub fn Navbar() -> Element {
    let mut menu = use_mobile_menu();
    let scroll = use_scroll_state();

    let state = menu();
    let flags = scroll();
    let menu_label = if state.is_open() { "Close menu" } else { "Open menu" };

    let toggle_menu = move |_: ()| {
        let open = menu.write().toggle();
        tracing::debug!(open, "Mobile menu toggled");
    };

    rsx! {
        nav { class: flags.navbar_class(),
            div { class: flags.nav_container_class(),
                AnchorLink { href: "#", class: "logo",
                    i { class: "ph ph-anchor-simple", "aria-hidden": "true" }
                    span { "Harborline" }
                }

                ul { class: state.links_class(),
                    for link in NAV_LINKS {
                        li { key: "{link.href}",
                            AnchorLink { href: link.href, "{link.label}" }
                        }
                    }
                    li {
                        AnchorLink { href: "#contact", class: ButtonVariant::Primary.class(), "Book Now" }
                    }
                }

                IconButton {
                    icon: state.icon().class(),
                    onclick: toggle_menu,
                    aria_label: menu_label.to_string(),
                    class: "mobile-menu-btn".to_string(),
                }
            }
        }
    }
}
