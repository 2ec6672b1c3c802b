//! Page sections for the Harborline site.

mod anchor_link;
mod back_to_top;
mod contact_section;
mod endpoint_form;
mod faq_section;
mod fleet_section;
mod hero_slider;
mod navbar;
mod site_footer;

pub use anchor_link::AnchorLink;
pub use back_to_top::BackToTop;
pub use contact_section::{ContactSection, CONTACT_FORM};
pub use endpoint_form::{EndpointForm, FieldSpec, FormSpec};
pub use faq_section::FaqSection;
pub use fleet_section::FleetSection;
pub use hero_slider::HeroSlider;
pub use navbar::Navbar;
pub use site_footer::{SiteFooter, NEWSLETTER_FORM};
