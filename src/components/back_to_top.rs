//! Back-to-top control, shown once the page is scrolled far enough.

use dioxus::prelude::*;

use crate::context::use_scroll_state;
use crate::viewport::scroll_to_top;

#[component]
pub fn BackToTop() -> Element {
    let scroll = use_scroll_state();

    rsx! {
        a {
            href: "#",
            class: scroll().back_to_top_class(),
            "aria-label": "Back to top",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                scroll_to_top();
            },
            i { class: "ph ph-arrow-up", "aria-hidden": "true" }
        }
    }
}
