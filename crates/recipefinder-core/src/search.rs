//! Ingredient search.
//!
//! Submitting the hero search box turns the raw input into a
//! [`SearchRequest`] and hands it to a [`Navigator`]. The search page then
//! parses the query back into a [`SearchQuery`] to pick matching recipes.

use crate::types::Recipe;

/// Route path of the search results page
pub const SEARCH_PATH: &str = "/search";

/// Name of the query-string parameter carrying the search text
pub const QUERY_PARAM: &str = "q";

/// Navigation collaborator.
///
/// Receives a path and an already URL-encoded query string (without `?`).
pub trait Navigator {
    fn navigate(&mut self, path: &str, query: &str);
}

/// A search the user submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    raw: String,
}

impl SearchRequest {
    /// Build a request from the search box contents.
    ///
    /// Whitespace-only input yields `None`. Non-empty input is kept exactly
    /// as typed, surrounding whitespace included.
    pub fn from_input(input: &str) -> Option<Self> {
        if input.trim().is_empty() {
            return None;
        }
        Some(Self {
            raw: input.to_string(),
        })
    }

    /// The text as typed
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn path(&self) -> &'static str {
        SEARCH_PATH
    }

    /// `q=<percent-encoded input>`
    pub fn query_string(&self) -> String {
        format!("{}={}", QUERY_PARAM, urlencoding::encode(&self.raw))
    }

    /// Path and query joined, e.g. `/search?q=%E0%B9%84%E0%B8%82%E0%B9%88`
    pub fn href(&self) -> String {
        format!("{}?{}", self.path(), self.query_string())
    }
}

/// Submit the search box.
///
/// Navigates and returns `true` for non-blank input; blank input is ignored.
pub fn submit_search<N>(input: &str, navigator: &mut N) -> bool
where
    N: Navigator + ?Sized,
{
    match SearchRequest::from_input(input) {
        Some(request) => {
            tracing::info!(query = %request.raw(), "Submitting recipe search");
            navigator.navigate(request.path(), &request.query_string());
            true
        }
        None => {
            tracing::debug!("Ignoring blank search submission");
            false
        }
    }
}

/// Parsed search text used to match recipes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    terms: Vec<String>,
}

impl SearchQuery {
    /// Split on whitespace and commas; terms are lowercased.
    pub fn parse(text: &str) -> Self {
        let terms = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self { terms }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Every term appears in the title or in some ingredient
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let title = recipe.title.to_lowercase();
        let ingredients: Vec<String> = recipe.ingredients.iter().map(|i| i.to_lowercase()).collect();
        self.terms.iter().all(|term| {
            title.contains(term.as_str()) || ingredients.iter().any(|i| i.contains(term.as_str()))
        })
    }

    /// Matching recipes in catalog order. An empty query matches all.
    pub fn filter<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        recipes.iter().filter(|r| self.matches(r)).collect()
    }
}
