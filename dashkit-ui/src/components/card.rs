//! Card container with padding, hover and glass variants

use super::utils::join_classes;
use dioxus::prelude::*;

const BASE: &str = "rounded-xl border";
const SOLID: &str = "bg-white border-gray-200 shadow-sm";
const GLASS: &str = "bg-white/60 backdrop-blur-md border-white/30 shadow-lg";
const STATIC: &str = "transition-none";
const HOVER: &str =
    "transition-all duration-200 hover:shadow-xl hover:-translate-y-0.5 cursor-pointer";

/// Card inner padding.
///
/// Keys that don't name one of the four sizes land in `Other` and resolve to
/// no padding at all rather than an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CardPadding {
    /// p-4
    Sm,
    /// p-6
    #[default]
    Md,
    /// p-8
    Lg,
    /// p-10
    Xl,
    /// Unrecognized key, kept verbatim
    Other(String),
}

impl CardPadding {
    pub const ALL: [CardPadding; 4] = [
        CardPadding::Sm,
        CardPadding::Md,
        CardPadding::Lg,
        CardPadding::Xl,
    ];

    /// Padding token for this size, empty for unrecognized keys
    pub fn class(&self) -> &'static str {
        match self {
            CardPadding::Sm => "p-4",
            CardPadding::Md => "p-6",
            CardPadding::Lg => "p-8",
            CardPadding::Xl => "p-10",
            CardPadding::Other(_) => "",
        }
    }

    pub fn key(&self) -> &str {
        match self {
            CardPadding::Sm => "sm",
            CardPadding::Md => "md",
            CardPadding::Lg => "lg",
            CardPadding::Xl => "xl",
            CardPadding::Other(key) => key,
        }
    }
}

impl From<&str> for CardPadding {
    fn from(key: &str) -> Self {
        match key {
            "sm" => CardPadding::Sm,
            "md" => CardPadding::Md,
            "lg" => CardPadding::Lg,
            "xl" => CardPadding::Xl,
            other => CardPadding::Other(other.to_string()),
        }
    }
}

impl From<String> for CardPadding {
    fn from(key: String) -> Self {
        CardPadding::from(key.as_str())
    }
}

/// Full token list for a card root: base, surface, hover, padding, extra.
pub fn card_class(padding: &CardPadding, hover: bool, glass: bool, class: Option<&str>) -> String {
    let surface = if glass { GLASS } else { SOLID };
    let motion = if hover { HOVER } else { STATIC };
    join_classes([
        BASE,
        surface,
        motion,
        padding.class(),
        class.unwrap_or_default(),
    ])
}

/// Styled container with optional hover emphasis and glass surface.
///
/// `attributes` are spread onto the root element untouched, so callers can
/// attach aria labels, ids or data attributes the card knows nothing about.
#[component]
pub fn Card(
    #[props(default, into)] padding: CardPadding,
    #[props(default)] hover: bool,
    #[props(default)] glass: bool,
    #[props(default, into)] class: Option<String>,
    #[props(default)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    if let CardPadding::Other(key) = &padding {
        tracing::debug!(padding = %key, "Unrecognized card padding, rendering without padding");
    }

    let computed_class = card_class(&padding, hover, glass, class.as_deref());

    rsx! {
        div { class: computed_class, ..attributes, {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(class: &str) -> Vec<&str> {
        class.split_whitespace().collect()
    }

    #[test]
    fn test_padding_keys_round_trip() {
        for padding in CardPadding::ALL {
            assert_eq!(CardPadding::from(padding.key()), padding);
        }
    }

    #[test]
    fn test_unknown_padding_key_is_kept() {
        let padding = CardPadding::from("xxl");
        assert_eq!(padding, CardPadding::Other("xxl".to_string()));
        assert_eq!(padding.key(), "xxl");
        assert_eq!(padding.class(), "");
    }

    #[test]
    fn test_padding_lookup_is_case_sensitive() {
        assert_eq!(CardPadding::from("LG").class(), "");
    }

    #[test]
    fn test_default_padding_is_md() {
        assert_eq!(CardPadding::default(), CardPadding::Md);
        assert!(tokens(&card_class(&CardPadding::default(), false, false, None)).contains(&"p-6"));
    }

    #[test]
    fn test_card_class_order() {
        let class = card_class(&CardPadding::Sm, false, false, Some("custom-x"));
        assert_eq!(
            class,
            "rounded-xl border bg-white border-gray-200 shadow-sm transition-none p-4 custom-x"
        );
    }

    #[test]
    fn test_card_class_without_padding_has_no_gaps() {
        let class = card_class(&CardPadding::from("huge"), true, true, None);
        assert!(!class.contains("  "));
        assert!(!class.ends_with(' '));
    }

    #[test]
    fn test_hover_and_glass_sets_are_disjoint() {
        let off = card_class(&CardPadding::Md, false, false, None);
        let both = card_class(&CardPadding::Md, true, true, None);
        assert!(tokens(&off).contains(&"bg-white"));
        assert!(!tokens(&both).contains(&"bg-white"));
        assert!(tokens(&both).contains(&"backdrop-blur-md"));
        assert!(tokens(&both).contains(&"hover:shadow-xl"));
    }
}
