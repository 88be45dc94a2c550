//! Recipe Card Components
//!
//! A single recipe tile and the responsive grid that lays tiles out three
//! per row.

use dioxus::prelude::*;
use recipefinder_core::Recipe;

const PLACEHOLDER_IMAGE: &str = "https://images.unsplash.com/photo-1504674900247-0877df9cc836";

/// Recipe tile: image, title, cook time and tags
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     for recipe in recipes {
///         RecipeCard { key: "{recipe.id}", recipe: recipe.clone() }
///     }
/// }
/// ```
#[component]
pub fn RecipeCard(
    /// Recipe to render
    recipe: Recipe,
) -> Element {
    let image = recipe.image_url.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    rsx! {
        article { class: "recipe-card",
            div { class: "recipe-card__image",
                img { src: "{image}", alt: "{recipe.title}" }
            }
            div { class: "recipe-card__body",
                h3 { class: "recipe-card__title", "{recipe.title}" }
                if let Some(description) = &recipe.description {
                    p { class: "recipe-card__description", "{description}" }
                }
                if let Some(minutes) = recipe.cook_minutes {
                    span { class: "recipe-card__time", "\u{23F1} " {cook_time_label(minutes)} }
                }
                if !recipe.tag_list().is_empty() {
                    div { class: "recipe-card__tags",
                        for tag in recipe.tag_list().iter() {
                            span { key: "{tag}", class: "tag", "{tag}" }
                        }
                    }
                }
            }
        }
    }
}

/// Grid of recipe cards
///
/// Renders `empty_message` instead of the grid when there is nothing to show.
#[component]
pub fn RecipeGrid(
    /// Recipes in display order
    recipes: Vec<Recipe>,
    /// Shown when `recipes` is empty
    #[props(default)]
    empty_message: Option<String>,
) -> Element {
    if recipes.is_empty() {
        return match empty_message {
            Some(message) => rsx! {
                p { class: "recipe-grid__empty", "{message}" }
            },
            None => VNode::empty(),
        };
    }

    rsx! {
        div { class: "recipe-grid",
            for recipe in recipes.iter() {
                RecipeCard { key: "{recipe.id}", recipe: recipe.clone() }
            }
        }
    }
}

/// "25 นาที"
pub fn cook_time_label(minutes: u32) -> String {
    format!("{} นาที", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cook_time_label_formats_minutes() {
        assert_eq!(cook_time_label(25), "25 นาที");
        assert_eq!(cook_time_label(0), "0 นาที");
    }
}
