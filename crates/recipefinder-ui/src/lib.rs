//! Recipe Finder UI Components
//!
//! Dioxus components for the Recipe Finder landing and search pages.
//!
//! ## Design Notes
//!
//! Warm kitchen palette defined in the app's global stylesheet:
//! - **Pink (#ff69b4)**: active filter pills
//! - **Primary orange**: links, icons, the search button
//! - **Cream background**: sections and cards
//!
//! Components only render what they are given. Selection, filtering and
//! navigation live in `recipefinder-core` and the app crate.

pub mod components;

pub use components::*;
