//! FAQ Item Component
//!
//! A question that reveals its answer when open. Open/closed state is
//! owned by the page's accordion.

use dioxus::prelude::*;

use crate::components::Icon;

/// Properties for the FaqItem component
#[derive(Clone, PartialEq, Props)]
pub struct FaqItemProps {
    /// Question text
    pub question: String,
    /// Answer text
    pub answer: String,
    /// Class list from the accordion (`faq-item` or `faq-item active`)
    pub class: &'static str,
    /// Whether this item is the open one
    pub open: bool,
    /// Called when the item is clicked
    pub on_toggle: EventHandler<()>,
}

#[component]
pub fn FaqItem(props: FaqItemProps) -> Element {
    let icon = if props.open { "ph-minus" } else { "ph-plus" };

    rsx! {
        div {
            class: props.class,
            onclick: move |_| props.on_toggle.call(()),
            div { class: "faq-question", "aria-expanded": "{props.open}",
                h4 { "{props.question}" }
                Icon { name: icon }
            }
            div { class: "faq-answer",
                p { "{props.answer}" }
            }
        }
    }
}
