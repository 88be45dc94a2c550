//! Recipe store snapshots.
//!
//! The landing page only reads from the store. [`RecipeStore`] is the seam
//! the UI depends on; [`RecipeCatalog`] is the in-memory snapshot loaded from
//! a JSON catalog file (or the sample catalog bundled with the crate).
//!
//! ## Catalog format
//!
//! ```json
//! {
//!   "recipes": [
//!     { "id": "som-tam", "title": "ส้มตำ", "tags": ["มังสวิรัติ"], "ingredients": ["มะละกอ"] }
//!   ],
//!   "popular": ["som-tam"]
//! }
//! ```
//!
//! `popular` lists recipe ids in display order. Ids missing from `recipes`
//! are skipped.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{RecipeError, RecipeResult};
use crate::types::{Recipe, RecipeId};

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// Read-only access to the current recipe snapshot
pub trait RecipeStore {
    /// Every recipe, in catalog order
    fn recipes(&self) -> &[Recipe];

    /// Popular recipes, in popularity order
    fn popular_recipes(&self) -> &[Recipe];
}

#[derive(Deserialize)]
struct CatalogFile {
    recipes: Vec<Recipe>,
    #[serde(default)]
    popular: Vec<RecipeId>,
}

/// In-memory recipe snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    popular: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Build a snapshot directly from recipe lists
    pub fn new(recipes: Vec<Recipe>, popular: Vec<Recipe>) -> Self {
        Self { recipes, popular }
    }

    /// Parse a catalog from its JSON representation
    pub fn from_json_str(json: &str) -> RecipeResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut seen = HashSet::with_capacity(file.recipes.len());
        for recipe in &file.recipes {
            if !seen.insert(&recipe.id) {
                return Err(RecipeError::DuplicateRecipe(recipe.id.to_string()));
            }
        }

        let popular = file
            .popular
            .iter()
            .filter_map(|id| {
                let found = file.recipes.iter().find(|r| &r.id == id).cloned();
                if found.is_none() {
                    tracing::warn!(recipe_id = %id, "Popular recipe not in catalog, skipping");
                }
                found
            })
            .collect();

        Ok(Self {
            recipes: file.recipes,
            popular,
        })
    }

    /// Load a catalog file from disk
    pub async fn load(path: impl AsRef<Path>) -> RecipeResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            recipes = catalog.recipes.len(),
            popular = catalog.popular.len(),
            "Loaded recipe catalog"
        );
        Ok(catalog)
    }

    /// The sample catalog shipped with the crate
    pub fn bundled() -> RecipeResult<Self> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Look up a recipe by id
    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.id == id)
    }
}

impl RecipeStore for RecipeCatalog {
    fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    fn popular_recipes(&self) -> &[Recipe] {
        &self.popular
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = RecipeCatalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert!(!catalog.popular_recipes().is_empty());
    }

    #[test]
    fn test_popular_resolved_in_listed_order() {
        let json = r#"{
            "recipes": [
                { "id": "a", "title": "A" },
                { "id": "b", "title": "B" },
                { "id": "c", "title": "C" }
            ],
            "popular": ["c", "a"]
        }"#;
        let catalog = RecipeCatalog::from_json_str(json).unwrap();
        let popular: Vec<_> = catalog
            .popular_recipes()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(popular, vec!["c", "a"]);
    }

    #[test]
    fn test_unknown_popular_skipped() {
        let json = r#"{
            "recipes": [{ "id": "a", "title": "A" }],
            "popular": ["ghost", "a"]
        }"#;
        let catalog = RecipeCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.popular_recipes().len(), 1);
    }

    #[test]
    fn test_popular_defaults_to_empty() {
        let json = r#"{ "recipes": [{ "id": "a", "title": "A" }] }"#;
        let catalog = RecipeCatalog::from_json_str(json).unwrap();
        assert!(catalog.popular_recipes().is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"{
            "recipes": [{ "id": "a", "title": "A" }, { "id": "a", "title": "A again" }]
        }"#;
        let err = RecipeCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, RecipeError::DuplicateRecipe(id) if id == "a"));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = RecipeCatalog::new(vec![Recipe::new("a", "A")], vec![]);
        assert!(catalog.get(&RecipeId::new("a")).is_some());
        assert!(catalog.get(&RecipeId::new("b")).is_none());
    }
}
