//! Shared UI components

pub mod card;
pub mod page_wrapper;
pub mod utils;

pub use card::{card_class, Card, CardPadding};
pub use page_wrapper::{page_wrapper_class, PageWrapper};
pub use utils::join_classes;
