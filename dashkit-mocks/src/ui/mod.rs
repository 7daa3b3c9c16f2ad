//! Shared UI components for dashkit-mocks

mod link_card;

pub use link_card::{LinkCard, LinkCardBody};
