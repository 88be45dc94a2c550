//! Recipe Finder Core Library
//!
//! Recipe catalog, selection engine and landing page state for the Recipe
//! Finder desktop app.
//!
//! ## Overview
//!
//! The landing page shows two recipe grids, each at most six cards wide:
//!
//! - **Featured**: the popular recipes, backfilled from the full catalog when
//!   fewer than six are popular. Never filtered.
//! - **Explore**: a random sample of the catalog narrowed by the active
//!   dietary filters.
//!
//! Everything here is plain data and synchronous functions so the UI crate
//! can call it from event handlers and memos.
//!
//! ## Quick Start
//!
//! ```ignore
//! use recipefinder_core::{select_explore, select_featured, FilterSet, RecipeCatalog, RecipeStore, Shuffler};
//!
//! let catalog = RecipeCatalog::bundled()?;
//! let shuffler = Shuffler::from_seed(7);
//!
//! let featured = select_featured(catalog.recipes(), catalog.popular_recipes());
//! let explore = shuffler.select_explore(catalog.recipes(), &FilterSet::new());
//! ```

pub mod error;
pub mod filter;
pub mod landing;
pub mod search;
pub mod selection;
pub mod store;
pub mod types;

// Re-exports
pub use error::{RecipeError, RecipeResult};
pub use filter::FilterSet;
pub use landing::LandingState;
pub use search::{submit_search, Navigator, SearchQuery, SearchRequest, SEARCH_PATH};
pub use selection::{
    select_explore, select_featured, DisplayList, Shuffler, DISPLAY_LIMIT, EXPLORE_SAMPLE_SIZE,
};
pub use store::{RecipeCatalog, RecipeStore};
pub use types::*;
