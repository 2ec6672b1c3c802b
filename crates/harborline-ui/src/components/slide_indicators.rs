//! Slide Indicator Dots
//!
//! One dot per hero slide; the dot matching the active slide carries
//! `active`. Clicking a dot reports its index.

use dioxus::prelude::*;
use harborline_core::SlideDeck;

/// Class list for the dot at `index`
pub fn dot_class(deck: &SlideDeck, index: usize) -> &'static str {
    if deck.is_active(index) {
        "dot active"
    } else {
        "dot"
    }
}

/// Class list for the slide at `index`
pub fn slide_class(deck: &SlideDeck, index: usize) -> &'static str {
    if deck.is_active(index) {
        "hero-slide active"
    } else {
        "hero-slide"
    }
}

/// Properties for the SlideIndicators component
#[derive(Clone, PartialEq, Props)]
pub struct SlideIndicatorsProps {
    /// Current deck state
    pub deck: SlideDeck,
    /// Called with the index of the clicked dot
    pub on_select: EventHandler<usize>,
}

#[component]
pub fn SlideIndicators(props: SlideIndicatorsProps) -> Element {
    let deck = props.deck;

    rsx! {
        div { class: "slider-dots",
            for index in 0..deck.slide_count() {
                button {
                    key: "{index}",
                    class: dot_class(&deck, index),
                    r#type: "button",
                    "aria-label": "Show slide {index + 1}",
                    "aria-current": "{deck.is_active(index)}",
                    onclick: move |_| props.on_select.call(index),
                }
            }
        }
    }
}
