//! Site footer with the newsletter signup.

use dioxus::prelude::*;

use crate::components::{AnchorLink, EndpointForm, FieldSpec, FormSpec};
use crate::content::NAV_LINKS;

const NEWSLETTER_FIELDS: &[FieldSpec] = &[FieldSpec::text("email", "Email", "Your email")
    .with_type("email")
    .unlabelled()];

pub const NEWSLETTER_FORM: FormSpec = FormSpec {
    form_id: "newsletter-form",
    fields: NEWSLETTER_FIELDS,
    button_label: "Subscribe",
};

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer-grid",
                div { class: "footer-brand",
                    h3 { "Harborline" }
                    p { "Charters, sunset cruises and sailing days since 2009." }
                }
                div { class: "footer-links",
                    h4 { "Explore" }
                    ul {
                        for link in NAV_LINKS {
                            li { key: "{link.href}",
                                AnchorLink { href: link.href, "{link.label}" }
                            }
                        }
                    }
                }
                div { class: "footer-newsletter",
                    h4 { "Newsletter" }
                    p { "Early-season offers, twice a year." }
                    EndpointForm { spec: &NEWSLETTER_FORM, class: "newsletter-form" }
                }
            }
            p { class: "footer-bottom", "© Harborline Charters" }
        }
    }
}
