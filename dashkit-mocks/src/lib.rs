//! dashkit mocks - Component gallery for dashkit-ui
//!
//! A minimal web app that renders each component with interactive controls.
//! Control state lives in the URL so any configuration can be shared.

pub mod mocks;
pub mod pages;
pub mod storage;
pub mod ui;

use dioxus::prelude::*;
use pages::{MockCard, MockIndex, MockPageWrapper};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    MockIndex {},
    #[route("/card?:state")]
    MockCard { state: Option<String> },
    #[route("/page-wrapper?:state")]
    MockPageWrapper { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
