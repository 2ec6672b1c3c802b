//! Phosphor icon glyph

use dioxus::prelude::*;

/// Class list for a Phosphor icon, e.g. `ph ph-list`
pub fn icon_class(name: &str) -> String {
    format!("ph {name}")
}

/// Renders `<i class="ph {name}">`
#[component]
pub fn Icon(name: &'static str) -> Element {
    rsx! {
        i { class: "{icon_class(name)}", "aria-hidden": "true" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_class_prefixes_family() {
        assert_eq!(icon_class("ph-arrow-up"), "ph ph-arrow-up");
    }
}
