//! Control panel scaffolding shared by every dashkit-ui mock
//!
//! A mock declares its knobs on a `ControlRegistryBuilder`, optionally with
//! `Preset`s, and wraps its specimen in `MockPanel`. Knob values round-trip
//! through the page URL so a configured specimen can be linked to directly.

mod panel;
mod preset;
mod registry;

pub use panel::{MockPage, MockPanel, LAST_MOCK_KEY};
pub use preset::Preset;
pub use registry::{ControlRegistry, ControlRegistryBuilder, ControlValue};
