//! Landing page - the whole Harborline site.
//!
//! Sections in scroll order: hero slider, fleet, FAQ, contact, footer.
//! The navbar and back-to-top control float above them.

use dioxus::prelude::*;
use harborline_core::SiteConfig;

use crate::components::{
    BackToTop, ContactSection, FaqSection, FleetSection, FormSpec, HeroSlider, Navbar, SiteFooter,
    CONTACT_FORM, NEWSLETTER_FORM,
};
use crate::context::use_site_config;

/// Every endpoint form the page renders
const PAGE_FORMS: &[&FormSpec] = &[&CONTACT_FORM, &NEWSLETTER_FORM];

/// Number of page forms submitted in place under `config`
fn wired_form_count(forms: &[&FormSpec], config: &SiteConfig) -> usize {
    if config.forms_wired() {
        forms.len()
    } else {
        0
    }
}

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let config = use_site_config();

    use_hook(|| {
        tracing::info!(
            "Found {} Formspree forms.",
            wired_form_count(PAGE_FORMS, &config)
        );
    });

    rsx! {
        Navbar {}
        main { class: "landing",
            HeroSlider {}
            FleetSection {}
            FaqSection {}
            ContactSection {}
        }
        SiteFooter {}
        BackToTop {}
    }
}
