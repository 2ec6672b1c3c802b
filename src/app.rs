use dioxus::prelude::*;
use harborline_core::{MobileMenu, ReqwestTransport, ScrollState, ToastQueue, ToastSurface};
use harborline_ui::ToastStack;

use crate::context::{get_site_config, SharedTransport};
use crate::pages::Landing;
use crate::theme::{GLOBAL_STYLES, PHOSPHOR_ICONS_CSS};
use crate::viewport::watch_scroll;

/// Application routes.
///
/// - `/` - The single-page site
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}

/// Root application component.
///
/// Provides global styles, page context, the toast stack, and routing.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_site_config);
    let toasts = use_hook(|| ToastQueue::new(config.toast_timing()));
    let transport = use_hook(|| match ReqwestTransport::with_defaults() {
        Ok(transport) => SharedTransport(Some(transport)),
        Err(e) => {
            tracing::error!(
                "Failed to build HTTP client, forms will report network errors: {}",
                e
            );
            SharedTransport(None)
        }
    });

    let menu: Signal<MobileMenu> = use_signal(MobileMenu::default);
    let mut scroll: Signal<ScrollState> = use_signal(ScrollState::default);
    let mut surface: Signal<ToastSurface> = use_signal(ToastSurface::default);

    // Provide page context to all sections
    use_context_provider(|| config.clone());
    use_context_provider(|| toasts.clone());
    use_context_provider(|| transport.clone());
    use_context_provider(|| menu);
    use_context_provider(|| scroll);

    // Re-render the toast stack whenever a toast appears, fades or leaves
    let queue = toasts.clone();
    use_future(move || {
        let queue = queue.clone();
        async move {
            let mut rx = queue.subscribe();
            while rx.changed().await.is_ok() {
                let current = rx.borrow_and_update().clone();
                surface.set(current);
            }
        }
    });

    // Navbar and back-to-top flags follow the scroll offset
    let thresholds = config.scroll_thresholds();
    use_future(move || async move {
        let mut listener = watch_scroll();
        loop {
            match listener.recv::<f64>().await {
                Ok(offset) => {
                    let next = ScrollState::at(offset, &thresholds);
                    if *scroll.peek() != next {
                        scroll.set(next);
                    }
                }
                Err(e) => {
                    tracing::warn!("Scroll listener stopped: {:?}", e);
                    break;
                }
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: PHOSPHOR_ICONS_CSS }
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        ToastStack { surface: surface(), fade: toasts.timing().fade }
    }
}
