//! Error types for Recipe Finder

use thiserror::Error;

/// Main error type for Recipe Finder operations
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Reading the catalog file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON could not be parsed
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two catalog entries share the same recipe id
    #[error("Duplicate recipe id: {0}")]
    DuplicateRecipe(String),
}

/// Result type alias using RecipeError
pub type RecipeResult<T> = Result<T, RecipeError>;
