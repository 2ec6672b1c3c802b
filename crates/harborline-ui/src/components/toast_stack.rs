//! Toast Stack Component
//!
//! Renders the notification container and its toasts:
//! - nothing until the first toast is pushed
//! - an empty container afterwards, once every toast has left
//! - `toast {kind}` per toast, plus `fading` during the fade-out, with the
//!   animation stretched to the queue's fade duration

use std::time::Duration;

use dioxus::prelude::*;
use harborline_core::toast::DEFAULT_TOAST_FADE;
use harborline_core::{ToastPhase, ToastSurface};

/// Inline style for a toast in `phase`, so the CSS fade matches the
/// removal timer
pub fn animation_style(phase: ToastPhase, fade: Duration) -> String {
    match phase {
        ToastPhase::Visible => String::new(),
        ToastPhase::Fading => format!("animation-duration: {}ms", fade.as_millis()),
    }
}

use crate::components::Icon;

/// Properties for the ToastStack component
#[derive(Clone, PartialEq, Props)]
pub struct ToastStackProps {
    /// Snapshot of the toast surface
    pub surface: ToastSurface,
    /// Fade-out duration of the queue
    #[props(default = DEFAULT_TOAST_FADE)]
    pub fade: Duration,
}

/// Fixed-position stack of notifications
///
/// # Example
///
/// ```rust,ignore
/// let toasts = use_context::<ToastQueue>();
/// let surface = use_signal(ToastSurface::default);
/// rsx! {
///     ToastStack { surface: surface(), fade: toasts.timing().fade }
/// }
/// ```
#[component]
pub fn ToastStack(props: ToastStackProps) -> Element {
    if !props.surface.is_attached() {
        return rsx! {};
    }

    rsx! {
        div { class: "toast-container", role: "status", "aria-live": "polite",
            for toast in props.surface.toasts() {
                div {
                    key: "{toast.id().value()}",
                    class: "{toast.class()}",
                    style: animation_style(toast.phase(), props.fade),
                    Icon { name: toast.kind().icon() }
                    span { "{toast.message()}" }
                }
            }
        }
    }
}
