//! PageWrapper mock component

use super::framework::{ControlRegistryBuilder, MockPage, MockPanel, Preset};
use dashkit_ui::{Card, PageWrapper};
use dioxus::prelude::*;

#[component]
pub fn PageWrapperMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .string_control("title", "Title", "Dashboard")
        .string_control("subtitle", "Subtitle", "Overview of the last 30 days")
        .doc("Clear it to hide the subtitle line")
        .bool_control("actions", "Header actions", true)
        .string_control("class", "Extra class", "")
        .with_presets(vec![
            Preset::new("Dashboard"),
            Preset::new("Title only")
                .set_string("subtitle", "")
                .set_bool("actions", false),
            Preset::new("Tinted").set_string("class", "bg-indigo-50"),
        ])
        .build(initial_state);

    registry.use_url_sync(MockPage::PageWrapper);

    let title = registry.get_string("title");
    let subtitle = registry.get_string("subtitle");
    let show_actions = registry.get_bool("actions");
    let class = registry.get_string("class");

    let header_actions = show_actions.then(|| {
        rsx! {
            button { class: "px-3 py-1.5 text-sm rounded-lg bg-white border border-gray-300 text-gray-700",
                "Export"
            }
            button { class: "px-3 py-1.5 text-sm rounded-lg bg-indigo-600 text-white",
                "New report"
            }
        }
    });

    rsx! {
        MockPanel { current_mock: MockPage::PageWrapper, registry,
            div { class: "bg-gray-50 rounded-lg overflow-hidden",
                PageWrapper {
                    title,
                    subtitle,
                    header_actions,
                    class,
                    div { class: "grid grid-cols-3 gap-4",
                        Card { padding: "sm", "Visitors" }
                        Card { padding: "sm", "Signups" }
                        Card { padding: "sm", "Churn" }
                    }
                    Card { padding: "lg", "Activity feed" }
                }
            }
        }
    }
}
