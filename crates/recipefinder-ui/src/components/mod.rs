//! Reusable UI components for Recipe Finder
//!
//! Class names match the global stylesheet in the app crate.

mod button;
mod feature_card;
mod filter_pills;
mod recipe_card;
mod search_box;

pub use button::*;
pub use feature_card::*;
pub use filter_pills::*;
pub use recipe_card::*;
pub use search_box::*;
