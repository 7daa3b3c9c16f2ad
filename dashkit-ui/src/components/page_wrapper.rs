//! Page layout shell with a title header and stacked content

use super::utils::join_classes;
use dioxus::prelude::*;

const BASE: &str = "min-h-full px-6 py-8";

/// Root token list for a page wrapper: base tokens followed by caller tokens
pub fn page_wrapper_class(class: Option<&str>) -> String {
    join_classes([BASE, class.unwrap_or_default()])
}

/// Consistent page chrome: title, optional subtitle and header actions,
/// then the page body with vertical spacing between blocks.
#[component]
pub fn PageWrapper(
    #[props(into)] title: String,
    /// Empty subtitles are treated the same as a missing one
    #[props(into)]
    subtitle: Option<String>,
    /// Controls rendered opposite the title
    #[props(default)]
    header_actions: Option<Element>,
    #[props(default, into)] class: Option<String>,
    children: Element,
) -> Element {
    let subtitle = subtitle.filter(|s| !s.is_empty());
    let computed_class = page_wrapper_class(class.as_deref());

    rsx! {
        div { class: computed_class,
            header { class: "flex items-start justify-between gap-4 mb-8",
                div { class: "min-w-0",
                    h1 { class: "text-2xl font-bold text-gray-900", "{title}" }
                    if let Some(subtitle) = subtitle {
                        p { class: "mt-1 text-sm text-gray-500", "{subtitle}" }
                    }
                }
                if let Some(actions) = header_actions {
                    div { class: "flex items-center gap-3 shrink-0", {actions} }
                }
            }
            div { class: "space-y-6", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_without_extra() {
        assert_eq!(page_wrapper_class(None), BASE);
    }

    #[test]
    fn test_class_appends_extra() {
        assert_eq!(
            page_wrapper_class(Some("custom-x")),
            "min-h-full px-6 py-8 custom-x"
        );
    }

    #[test]
    fn test_blank_extra_is_ignored() {
        assert_eq!(page_wrapper_class(Some("  ")), BASE);
    }
}
