//! In-page Anchor Link
//!
//! Replaces the jump to `#id` with a smooth scroll, and closes the mobile
//! menu when it navigates somewhere.

use dioxus::prelude::*;
use harborline_core::handlers::resolve_anchor;

use crate::content::section_exists;
use crate::context::use_mobile_menu;
use crate::viewport::scroll_into_view;

#[derive(Props, Clone, PartialEq)]
pub struct AnchorLinkProps {
    /// `#id` of the target section, or `#` for a link to nowhere
    pub href: &'static str,
    /// CSS classes for the link
    #[props(default)]
    pub class: Option<&'static str>,
    pub children: Element,
}

#[component]
pub fn AnchorLink(props: AnchorLinkProps) -> Element {
    let mut menu = use_mobile_menu();
    let href = props.href;

    let follow = move |evt: MouseEvent| {
        evt.prevent_default();
        let mut state = menu();
        if let Some(target) = resolve_anchor(href, section_exists, &mut state) {
            menu.set(state);
            scroll_into_view(target.id());
        }
    };

    rsx! {
        a {
            href: "{href}",
            class: props.class.unwrap_or(""),
            onclick: follow,
            {props.children}
        }
    }
}
