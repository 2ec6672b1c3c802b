//! FAQ Section
//!
//! Single-open accordion: opening a question closes the previous one.

use dioxus::prelude::*;
use harborline_core::Accordion;
use harborline_ui::FaqItem;

use crate::content::FAQS;

#[component]
pub fn FaqSection() -> Element {
    let mut accordion = use_signal(|| Accordion::new(FAQS.len()));
    let state = accordion();

    rsx! {
        section { id: "faq", class: "faq",
            div { class: "section-header",
                h2 { "Frequently Asked Questions" }
            }
            div { class: "faq-list",
                for (index, entry) in FAQS.iter().enumerate() {
                    FaqItem {
                        key: "{index}",
                        question: entry.question.to_string(),
                        answer: entry.answer.to_string(),
                        class: state.item_class(index),
                        open: state.is_open(index),
                        on_toggle: move |_| {
                            if let Err(e) = accordion.write().toggle(index) {
                                tracing::warn!("FAQ toggle ignored: {}", e);
                            }
                        },
                    }
                }
            }
        }
    }
}
