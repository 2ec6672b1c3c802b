//! Contact Section with the booking enquiry form.

use dioxus::prelude::*;
use harborline_ui::Icon;

use crate::components::{EndpointForm, FieldSpec, FormSpec};

const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name", "Your name"),
    FieldSpec::text("email", "Email", "you@example.com").with_type("email"),
    FieldSpec::text("phone", "Phone", "Optional").with_type("tel").optional(),
    FieldSpec::text("message", "Message", "Dates, group size, which boat...").multiline(),
];

pub const CONTACT_FORM: FormSpec = FormSpec {
    form_id: "contact-form",
    fields: CONTACT_FIELDS,
    button_label: "Send Message",
};

#[component]
pub fn ContactSection() -> Element {
    rsx! {
        section { id: "contact", class: "contact",
            div { class: "contact-info",
                h2 { "Plan Your Charter" }
                p { "Tell us when you'd like to sail and we'll get back to you within a day." }
                ul { class: "contact-details",
                    li { Icon { name: "ph-map-pin" } " Pier 4, Old Harbor" }
                    li { Icon { name: "ph-phone" } " +1 555 0142" }
                    li { Icon { name: "ph-envelope" } " ahoy@harborline.example" }
                }
            }
            EndpointForm { spec: &CONTACT_FORM, class: "contact-form" }
        }
    }
}
