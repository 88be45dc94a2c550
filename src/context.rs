//! Context providers for Recipe Finder.
//!
//! The recipe catalog and the explore shuffler are provided once by `App`
//! and read by pages through hooks, so tests and the CLI can swap either.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let catalog = use_catalog();
//! let shuffler = use_shuffler();
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use recipefinder_core::{RecipeCatalog, Shuffler};

/// Startup configuration from the command line
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog file to load instead of the bundled sample
    pub catalog_path: Option<PathBuf>,
    /// Fixed seed for the explore shuffle
    pub seed: Option<u64>,
}

/// Get the app configuration.
/// Uses the global config set from command line args.
pub fn get_app_config() -> AppConfig {
    crate::get_app_config()
}

/// Bundled sample catalog, or an empty one if it fails to parse
pub fn initial_catalog() -> RecipeCatalog {
    RecipeCatalog::bundled().unwrap_or_else(|e| {
        tracing::error!("Failed to parse bundled catalog: {}", e);
        RecipeCatalog::default()
    })
}

/// Hook to access the current recipe catalog snapshot.
///
/// The signal is replaced wholesale when a catalog file finishes loading.
pub fn use_catalog() -> Signal<RecipeCatalog> {
    use_context::<Signal<RecipeCatalog>>()
}

/// Hook to access the shared explore shuffler.
pub fn use_shuffler() -> Shuffler {
    use_context::<Shuffler>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipefinder_core::RecipeStore;

    #[test]
    fn initial_catalog_has_recipes() {
        let catalog = initial_catalog();
        assert!(!catalog.recipes().is_empty());
    }

    #[test]
    fn default_config_uses_bundled_catalog() {
        let config = AppConfig::default();
        assert!(config.catalog_path.is_none());
        assert!(config.seed.is_none());
    }
}
