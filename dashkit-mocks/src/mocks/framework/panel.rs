//! Auto-generated control panel UI

use super::registry::{ControlRegistry, ControlValue};
use crate::storage;
use crate::Route;
use dioxus::prelude::*;

/// Local storage key remembering the last opened mock
pub const LAST_MOCK_KEY: &str = "dashkit-mocks.last";

/// Every mock page in the gallery
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MockPage {
    Card,
    PageWrapper,
}

impl MockPage {
    pub const ALL: &'static [MockPage] = &[MockPage::Card, MockPage::PageWrapper];

    pub fn label(&self) -> &'static str {
        match self {
            MockPage::Card => "Card",
            MockPage::PageWrapper => "PageWrapper",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            MockPage::Card => "card",
            MockPage::PageWrapper => "page-wrapper",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MockPage::Card => "Container with padding sizes, hover emphasis and glass surface",
            MockPage::PageWrapper => "Page chrome with title, subtitle, header actions and body",
        }
    }

    pub fn from_key(key: &str) -> Option<MockPage> {
        MockPage::ALL.iter().copied().find(|p| p.key() == key)
    }

    pub fn to_route(self, state: Option<String>) -> Route {
        match self {
            MockPage::Card => Route::MockCard { state },
            MockPage::PageWrapper => Route::MockPageWrapper { state },
        }
    }
}

/// Main mock panel component that renders controls, presets, and the mock body
#[component]
pub fn MockPanel(current_mock: MockPage, registry: ControlRegistry, children: Element) -> Element {
    use_hook(move || storage::set_string(LAST_MOCK_KEY, current_mock.key()));

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white",
            div { class: "sticky top-0 z-50 bg-gray-800 border-b border-gray-700 p-4",
                div { class: "max-w-5xl mx-auto",
                    div { class: "flex items-center gap-3 mb-3",
                        Link {
                            to: Route::MockIndex {},
                            class: "text-sm text-gray-400 hover:text-white",
                            "← mocks"
                        }
                        h1 { class: "text-lg font-semibold", "{current_mock.label()}" }
                    }

                    if !registry.presets.is_empty() {
                        PresetBar { registry: registry.clone() }
                    }

                    ControlsRow { registry: registry.clone() }
                }
            }

            div { class: "max-w-5xl mx-auto p-6", {children} }
        }
    }
}

/// Preset buttons bar
#[component]
fn PresetBar(registry: ControlRegistry) -> Element {
    rsx! {
        div { class: "flex flex-wrap gap-2 mb-3",
            span { class: "text-xs text-gray-500 self-center mr-2", "Presets:" }
            for preset in &registry.presets {
                button {
                    class: if preset.matches(&registry) { "px-2 py-1 text-xs rounded bg-blue-600 text-white" } else { "px-2 py-1 text-xs rounded bg-gray-700 text-gray-300 hover:bg-gray-600" },
                    onclick: {
                        let preset = preset.clone();
                        let registry = registry.clone();
                        move |_| registry.apply_preset(&preset)
                    },
                    "{preset.name}"
                }
            }
        }
    }
}

/// Auto-generated controls row
#[component]
fn ControlsRow(registry: ControlRegistry) -> Element {
    let enum_controls: Vec<_> = registry
        .controls
        .iter()
        .filter(|c| c.enum_options.is_some())
        .collect();
    let other_controls: Vec<_> = registry
        .controls
        .iter()
        .filter(|c| c.enum_options.is_none())
        .collect();

    rsx! {
        for control in enum_controls {
            div { class: "flex flex-wrap items-center gap-2 mb-3",
                span { class: "text-xs text-gray-500 mr-2", "{control.label}:" }
                if let Some(options) = &control.enum_options {
                    for (value, label) in options.iter().copied() {
                        EnumButton {
                            registry: registry.clone(),
                            control_key: control.key,
                            value,
                            label,
                            doc: control.doc,
                        }
                    }
                }
            }
        }

        if !other_controls.is_empty() {
            div { class: "flex flex-wrap items-center gap-4 text-sm",
                for control in other_controls {
                    if matches!(control.default, ControlValue::Bool(_)) {
                        BoolCheckbox {
                            registry: registry.clone(),
                            control_key: control.key,
                            label: control.label,
                            doc: control.doc,
                        }
                    } else {
                        StringField {
                            registry: registry.clone(),
                            control_key: control.key,
                            label: control.label,
                            doc: control.doc,
                        }
                    }
                }
            }
        }
    }
}

/// Individual enum button - reads signal reactively
#[component]
fn EnumButton(
    registry: ControlRegistry,
    control_key: &'static str,
    value: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    let is_selected = registry.get_string(control_key) == value;

    rsx! {
        button {
            class: if is_selected { "px-3 py-1.5 text-sm rounded bg-blue-600 text-white" } else { "px-3 py-1.5 text-sm rounded bg-gray-700 text-gray-300 hover:bg-gray-600" },
            onclick: move |_| registry.set_string(control_key, value.to_string()),
            title: doc.unwrap_or(""),
            "{label}"
        }
    }
}

/// Individual bool checkbox - reads signal reactively
#[component]
fn BoolCheckbox(
    registry: ControlRegistry,
    control_key: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    let current = registry.get_bool(control_key);

    rsx! {
        label {
            class: "flex items-center gap-2 text-gray-400",
            title: doc.unwrap_or(""),
            input {
                r#type: "checkbox",
                checked: current,
                onchange: move |e| registry.set_bool(control_key, e.checked()),
            }
            "{label}"
        }
    }
}

/// Free-form text control
#[component]
fn StringField(
    registry: ControlRegistry,
    control_key: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    let current = registry.get_string(control_key);

    rsx! {
        label {
            class: "flex items-center gap-2 text-gray-400",
            title: doc.unwrap_or(""),
            "{label}"
            input {
                class: "px-2 py-1 text-sm rounded bg-gray-900 border border-gray-700 text-gray-200",
                r#type: "text",
                value: current,
                oninput: move |e| registry.set_string(control_key, e.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys_round_trip() {
        for page in MockPage::ALL {
            assert_eq!(MockPage::from_key(page.key()), Some(*page));
        }
        assert_eq!(MockPage::from_key("missing"), None);
    }

    #[test]
    fn test_route_carries_state() {
        assert_eq!(
            MockPage::Card.to_route(Some("abc".to_string())),
            Route::MockCard {
                state: Some("abc".to_string())
            }
        );
        assert_eq!(
            MockPage::PageWrapper.to_route(None),
            Route::MockPageWrapper { state: None }
        );
    }
}
