//! Component mocks with interactive controls

mod card;
pub mod framework;
mod page_wrapper;
pub mod url_state;

pub use card::CardMock;
pub use page_wrapper::PageWrapperMock;
