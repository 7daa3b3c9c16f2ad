//! Mock pages with URL state persistence

use crate::mocks::framework::{MockPage, LAST_MOCK_KEY};
use crate::mocks::{CardMock, PageWrapperMock};
use crate::storage;
use crate::ui::LinkCard;
use crate::Route;
use dashkit_ui::{Card, PageWrapper};
use dioxus::prelude::*;

#[component]
pub fn MockIndex() -> Element {
    let last = use_hook(|| storage::get_string(LAST_MOCK_KEY).and_then(|k| MockPage::from_key(&k)));

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-8",
            h1 { class: "text-2xl font-bold mb-6", "dashkit mocks" }

            if let Some(page) = last {
                div { class: "mb-8",
                    h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Continue" }
                    LinkCard {
                        to: page.to_route(None),
                        title: page.label(),
                        description: page.description(),
                    }
                }
            }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Specimens" }
            div { class: "grid grid-cols-2 gap-4 mb-8",
                SpecimenCard { title: "Card", to: MockPage::Card.to_route(None),
                    div { class: "grid grid-cols-2 gap-2",
                        Card { padding: "sm", span { class: "text-xs text-gray-700", "Solid" } }
                        Card { padding: "sm", glass: true,
                            span { class: "text-xs text-gray-700", "Glass" }
                        }
                    }
                }
                SpecimenCard {
                    title: "PageWrapper",
                    to: MockPage::PageWrapper.to_route(None),
                    div { class: "bg-gray-50 rounded",
                        PageWrapper { title: "Dashboard", subtitle: "Overview",
                            Card { padding: "sm", span { class: "text-xs text-gray-700", "Body" } }
                        }
                    }
                }
            }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Components" }
            div { class: "space-y-2",
                for page in MockPage::ALL {
                    LinkCard {
                        to: page.to_route(None),
                        title: page.label(),
                        description: page.description(),
                    }
                }
            }
        }
    }
}

/// A card showing specimen samples with a link to the full page
#[component]
fn SpecimenCard(title: &'static str, to: Route, children: Element) -> Element {
    rsx! {
        Link {
            to,
            class: "block bg-gray-950 rounded-lg p-4 hover:bg-gray-900 transition-colors border border-gray-800",
            h3 { class: "text-sm font-medium text-gray-300 mb-3", "{title}" }
            div { class: "pointer-events-none", {children} }
        }
    }
}

#[component]
pub fn MockCard(state: Option<String>) -> Element {
    rsx! {
        CardMock { initial_state: state }
    }
}

#[component]
pub fn MockPageWrapper(state: Option<String>) -> Element {
    rsx! {
        PageWrapperMock { initial_state: state }
    }
}
