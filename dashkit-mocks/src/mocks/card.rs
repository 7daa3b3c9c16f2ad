//! Card mock component

use super::framework::{ControlRegistryBuilder, MockPage, MockPanel, Preset};
use dashkit_ui::{Card, CardPadding};
use dioxus::prelude::*;

#[component]
pub fn CardMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .enum_control(
            "padding",
            "Padding",
            "md",
            vec![
                ("sm", "sm"),
                ("md", "md"),
                ("lg", "lg"),
                ("xl", "xl"),
                ("bogus", "unknown key"),
            ],
        )
        .doc("Unknown keys render without any padding")
        .bool_control("hover", "Hover", false)
        .bool_control("glass", "Glass", false)
        .string_control("class", "Extra class", "")
        .string_control("aria_label", "aria-label", "")
        .doc("Forwarded to the card root as a pass-through attribute")
        .with_presets(vec![
            Preset::new("Default"),
            Preset::new("Interactive tile")
                .set_string("padding", "lg")
                .set_bool("hover", true),
            Preset::new("Glass panel")
                .set_string("padding", "xl")
                .set_bool("glass", true),
            Preset::new("Unknown padding").set_string("padding", "bogus"),
        ])
        .build(initial_state);

    registry.use_url_sync(MockPage::Card);

    let padding = CardPadding::from(registry.get_string("padding"));
    let hover = registry.get_bool("hover");
    let glass = registry.get_bool("glass");
    let class = registry.get_string("class");
    let aria_label = registry.get_string("aria_label");

    let attributes = if aria_label.is_empty() {
        Vec::new()
    } else {
        vec![Attribute::new("aria-label", aria_label, None, false)]
    };

    rsx! {
        MockPanel { current_mock: MockPage::Card, registry,
            div { class: "p-8 bg-gradient-to-br from-indigo-400 to-pink-300 rounded-lg mb-8",
                Card {
                    padding: padding.clone(),
                    hover,
                    glass,
                    class,
                    attributes,
                    h3 { class: "text-lg font-semibold text-gray-900", "Monthly revenue" }
                    p { class: "text-sm text-gray-500", "$48,210 across 1,204 orders" }
                }
            }

            div { class: "mb-8",
                h3 { class: "text-sm text-gray-400 mb-3", "All paddings" }
                div { class: "grid grid-cols-4 gap-4",
                    for size in CardPadding::ALL {
                        Card { padding: size.clone(),
                            span { class: "text-sm text-gray-700", "{size.key()}" }
                        }
                    }
                }
            }

            div { class: "mb-8",
                h3 { class: "text-sm text-gray-400 mb-3", "Variants" }
                div { class: "grid grid-cols-2 gap-4 p-6 bg-gradient-to-br from-sky-400 to-emerald-300 rounded-lg",
                    Card { "Solid" }
                    Card { hover: true, "Hover" }
                    Card { glass: true, "Glass" }
                    Card { hover: true, glass: true, "Hover + glass" }
                }
            }

            p { class: "text-xs text-gray-500 font-mono",
                "{dashkit_ui::card_class(&padding, hover, glass, None)}"
            }
        }
    }
}
