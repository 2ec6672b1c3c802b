//! Hero Slider Section
//!
//! Full-width slides that advance on a timer. Clicking a dot shows that
//! slide and restarts the timer. With no slides the section renders a
//! static hero instead.

use std::time::Duration;

use dioxus::prelude::*;
use harborline_core::{SlideDeck, SlideRotator};
use harborline_ui::{slide_class, ButtonVariant, SlideIndicators};

use crate::components::AnchorLink;
use crate::content::HERO_SLIDES;
use crate::context::use_site_config;

/// Stopped rotator over `slides` hero panels, or `None` if there are none
fn hero_rotator(slides: usize, period: Duration) -> Option<SlideRotator> {
    match SlideRotator::new(slides, slides, period) {
        Ok(rotator) => Some(rotator),
        Err(e) => {
            tracing::warn!("Hero slider not wired: {}", e);
            None
        }
    }
}

#[component]
pub fn HeroSlider() -> Element {
    let config = use_site_config();

    let mut rotator: Signal<Option<SlideRotator>> =
        use_signal(|| hero_rotator(HERO_SLIDES.len(), config.slide_interval()));
    // Seeded from the rotator so the first render already shows the slides
    let mut deck: Signal<Option<SlideDeck>> =
        use_signal(|| (*rotator.peek()).as_ref().map(SlideRotator::deck));

    // Start autoplay and mirror deck changes into the render state
    use_future(move || async move {
        let receiver = rotator.write().as_mut().map(|rotator| {
            rotator.start();
            tracing::debug!(period_ms = rotator.period().as_millis() as u64, "Hero autoplay started");
            rotator.subscribe()
        });
        let Some(mut rx) = receiver else {
            return;
        };

        deck.set(Some(*rx.borrow_and_update()));
        while rx.changed().await.is_ok() {
            let current = *rx.borrow_and_update();
            deck.set(Some(current));
        }
    });

    let select_slide = move |index: usize| {
        if let Some(rotator) = rotator.write().as_mut() {
            if let Err(e) = rotator.select_manually(index) {
                tracing::warn!("Ignoring slide selection: {}", e);
            }
        }
    };

    rsx! {
        section { id: "home", class: "hero",
            if let Some(deck) = deck() {
                div { class: "hero-slider",
                    for (index, slide) in HERO_SLIDES.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: slide_class(&deck, index),
                            style: "background-image: url('{slide.image}')",
                            div { class: "hero-overlay" }
                            div { class: "hero-content",
                                h1 { "{slide.title}" }
                                p { "{slide.subtitle}" }
                                div { class: "hero-actions",
                                    AnchorLink { href: "#fleet", class: ButtonVariant::Primary.class(), "See the Fleet" }
                                    AnchorLink { href: "#contact", class: ButtonVariant::Secondary.class(), "Get a Quote" }
                                }
                            }
                        }
                    }
                    SlideIndicators { deck, on_select: select_slide }
                }
            } else {
                div { class: "hero-content static",
                    h1 { "Harborline Charters" }
                    AnchorLink { href: "#contact", class: ButtonVariant::Primary.class(), "Get a Quote" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_deck_is_available_before_autoplay() {
        let rotator = hero_rotator(HERO_SLIDES.len(), Duration::from_millis(5000)).unwrap();
        assert!(!rotator.is_running());
        assert_eq!(rotator.period(), Duration::from_millis(5000));

        let deck = rotator.deck();
        assert_eq!(deck.current(), 0);
        assert_eq!(deck.slide_count(), HERO_SLIDES.len());
    }

    #[test]
    fn no_slides_means_static_hero() {
        assert!(hero_rotator(0, Duration::from_millis(5000)).is_none());
    }
}
