//! dashkit-ui - Presentational building blocks for dashkit pages
//!
//! Pure, props-based view components styled with Tailwind utility classes.
//! Nothing here holds state or performs I/O.

pub mod components;

pub use components::*;
