//! Gallery navigation tile built on the library's own card

use crate::Route;
use dashkit_ui::Card;
use dioxus::prelude::*;

/// Navigation tile linking to a gallery page
#[component]
pub fn LinkCard(to: Route, title: &'static str, description: &'static str) -> Element {
    rsx! {
        Link { to, class: "block",
            LinkCardBody { title, description }
        }
    }
}

/// Tile contents, kept router-free so it renders on its own
#[component]
pub fn LinkCardBody(title: &'static str, description: &'static str) -> Element {
    rsx! {
        Card { padding: "sm", hover: true,
            div { class: "font-medium text-gray-900", "{title}" }
            div { class: "text-sm text-gray-500", "{description}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_is_a_hover_card() {
        let html = dioxus_ssr::render_element(rsx! {
            LinkCardBody { title: "Card", description: "Padding sizes" }
        });
        assert!(html.starts_with("<div"));
        assert!(html.contains("hover:shadow-xl"));
        assert!(html.contains("p-4"));
        assert!(html.contains(">Card</div>"));
        assert!(html.contains(">Padding sizes</div>"));
    }
}
