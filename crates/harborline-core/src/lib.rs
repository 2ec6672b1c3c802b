//! Harborline Site Core Library
//!
//! UI-free behavior behind the Harborline charter marketing page.
//!
//! ## Overview
//!
//! The page is mostly flat event wiring; the pieces that carry state or
//! timing live here so they can be tested without a page:
//!
//! - **Slider**: [`SlideRotator`] cycles the hero slides on a repeating
//!   timer; an indicator click shows that slide and restarts the cadence
//! - **Toasts**: [`ToastQueue`] shows short-lived notifications, each with
//!   its own removal timer
//! - **Forms**: [`form::submit`] posts a form to Formspree and returns a
//!   [`SubmissionOutcome`] the page turns into a toast
//! - **Handlers**: scroll flags, mobile menu, anchors, FAQ accordion and
//!   the fleet grid toggle
//!
//! ## Quick Start
//!
//! ```ignore
//! use harborline_core::{FormState, ReqwestTransport, SiteConfig, ToastQueue};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SiteConfig::default();
//!     let toasts = ToastQueue::new(config.toast_timing());
//!     let transport = ReqwestTransport::with_defaults()?;
//!
//!     let mut form = FormState::new(&config.contact_form_action, ["email"], "Subscribe");
//!     form.set_field("email", "skipper@example.com");
//!     harborline_core::form::submit_form(&mut form, &transport, &toasts).await;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod handlers;
pub mod logging;
pub mod slider;
pub mod toast;

// Re-exports
pub use config::SiteConfig;
pub use error::{SiteError, SiteResult};
pub use form::{
    FormRequest, FormState, FormTransport, RawResponse, ReqwestTransport, SubmissionOutcome,
};
pub use handlers::{
    Accordion, AnchorTarget, CollapsibleGrid, MenuIcon, MobileMenu, ScrollState, ScrollThresholds,
};
pub use slider::{SlideDeck, SlideRotator};
pub use toast::{Toast, ToastId, ToastKind, ToastPhase, ToastQueue, ToastSurface, ToastTiming};
