//! Core types for Recipe Finder

use serde::{Deserialize, Serialize};

/// Unique identifier for a recipe
///
/// Stable across catalog reloads; used as the render key for recipe cards
/// and as the identity when deduplicating popular recipes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub String);

impl RecipeId {
    /// Create a RecipeId from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A recipe as shown on the landing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub cook_minutes: Option<u32>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Dietary/category labels. `None` means the recipe was never tagged.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl Recipe {
    /// Create an untagged recipe with only an id and title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: RecipeId::new(id),
            title: title.into(),
            description: None,
            image_url: None,
            cook_minutes: None,
            ingredients: Vec::new(),
            tags: None,
        }
    }

    /// Builder-style helper to attach tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Builder-style helper to attach ingredients
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the recipe carries the given tag. Untagged recipes carry none.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }

    /// Tags for display, empty when the recipe is untagged
    pub fn tag_list(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }
}

/// Dietary / category filter
///
/// The fixed vocabulary offered in the landing page filter panel. The label
/// doubles as the tag string recipes carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietaryFilter {
    Vegetarian,
    Halal,
    Keto,
    HighProtein,
    FastFood,
    /// Thai "jay" food: plant-based, no pungent vegetables
    Vegan,
    Clean,
    Healthy,
}

impl DietaryFilter {
    /// All filters in panel display order
    pub const ALL: [DietaryFilter; 8] = [
        DietaryFilter::Vegetarian,
        DietaryFilter::Halal,
        DietaryFilter::Keto,
        DietaryFilter::HighProtein,
        DietaryFilter::FastFood,
        DietaryFilter::Vegan,
        DietaryFilter::Clean,
        DietaryFilter::Healthy,
    ];

    /// Display label, also the tag string matched against recipes
    pub fn label(&self) -> &'static str {
        match self {
            DietaryFilter::Vegetarian => "มังสวิรัติ",
            DietaryFilter::Halal => "ฮาลาล",
            DietaryFilter::Keto => "คีโต",
            DietaryFilter::HighProtein => "โปรตีนสูง",
            DietaryFilter::FastFood => "ฟาสต์ฟู้ด",
            DietaryFilter::Vegan => "อาหารเจ",
            DietaryFilter::Clean => "อาหารคลีน",
            DietaryFilter::Healthy => "สุขภาพ",
        }
    }

    /// Look up a filter by its label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }
}

impl std::fmt::Display for DietaryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_recipe_has_no_tag() {
        let recipe = Recipe::new("r1", "Pad Thai");
        assert!(!recipe.has_tag("คีโต"));
        assert!(recipe.tag_list().is_empty());
    }

    #[test]
    fn test_has_tag() {
        let recipe = Recipe::new("r1", "Grilled chicken").with_tags(["คีโต", "โปรตีนสูง"]);
        assert!(recipe.has_tag("คีโต"));
        assert!(recipe.has_tag("โปรตีนสูง"));
        assert!(!recipe.has_tag("ฮาลาล"));
    }

    #[test]
    fn test_filter_labels_unique() {
        let mut labels: Vec<_> = DietaryFilter::ALL.iter().map(|f| f.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 8);
    }

    #[test]
    fn test_filter_label_roundtrip() {
        for filter in DietaryFilter::ALL {
            assert_eq!(DietaryFilter::from_label(filter.label()), Some(filter));
        }
        assert_eq!(DietaryFilter::from_label("pizza"), None);
    }

    #[test]
    fn test_recipe_deserialize_without_tags() {
        let json = r#"{ "id": "khao-man-gai", "title": "Khao man gai" }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, RecipeId::new("khao-man-gai"));
        assert!(recipe.tags.is_none());
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_recipe_id_display() {
        assert_eq!(RecipeId::new("som-tam").to_string(), "som-tam");
    }
}
