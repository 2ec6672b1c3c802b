//! Fleet Section
//!
//! Grid of charter boats, collapsed to its first row until "View All" is
//! clicked. Collapsing again scrolls back to the top of the section.

use dioxus::prelude::*;
use harborline_core::handlers::{FLEET_GRID_ID, FLEET_SECTION_ID, VIEW_ALL_TRIGGER_ID};
use harborline_core::CollapsibleGrid;
use harborline_ui::{ButtonVariant, Icon};

use crate::content::FLEET;
use crate::viewport::scroll_into_view;

#[component]
pub fn FleetSection() -> Element {
    let mut grid = use_signal(CollapsibleGrid::default);
    let state = grid();

    let toggle_grid = move |evt: MouseEvent| {
        evt.prevent_default();
        let toggle = grid.write().toggle();
        if toggle.scroll_to_section {
            scroll_into_view(FLEET_SECTION_ID);
        }
    };

    rsx! {
        section { id: FLEET_SECTION_ID, class: "fleet",
            div { class: "section-header",
                h2 { "Our Fleet" }
                p { "Every boat is maintained in-house and fully equipped for the day." }
            }

            div { id: FLEET_GRID_ID, class: state.container_class(),
                for vessel in FLEET {
                    article { key: "{vessel.name}", class: "fleet-card",
                        img { src: vessel.image, alt: vessel.name, loading: "lazy" }
                        div { class: "fleet-card-body",
                            h3 { "{vessel.name}" }
                            p { class: "fleet-kind", "{vessel.kind}" }
                            div { class: "fleet-meta",
                                span { Icon { name: "ph-users" } " Up to {vessel.guests} guests" }
                                span { class: "fleet-rate", "from €{vessel.daily_rate}/day" }
                            }
                        }
                    }
                }
            }

            div { class: "fleet-actions",
                a {
                    id: VIEW_ALL_TRIGGER_ID,
                    href: "#",
                    class: ButtonVariant::Outline.class(),
                    onclick: toggle_grid,
                    "{state.label()} "
                    Icon { name: state.icon() }
                }
            }
        }
    }
}
