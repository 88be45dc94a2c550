use dioxus::prelude::*;
use recipefinder_core::search::QUERY_PARAM;
use recipefinder_core::{RecipeCatalog, Shuffler};

use crate::context::{get_app_config, initial_catalog};
use crate::pages::{Landing, Search};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with hero search, features and recipe grids
/// - `/search?q=...` - Recipes matching the ingredient query
#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/search?:..query")]
    Search { query: SearchParams },
}

/// Query of the search route.
///
/// Takes the whole query string rather than a `?:q` segment: the router
/// decodes the query before splitting it on `&`, so an encoded `&` inside
/// the search text would otherwise cut the text short.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Search text as typed
    pub q: String,
}

impl SearchParams {
    pub fn new(q: impl Into<String>) -> Self {
        Self { q: q.into() }
    }
}

impl FromQuery for SearchParams {
    /// `query` arrives already percent-decoded
    fn from_query(query: &str) -> Self {
        let q = query
            .strip_prefix(QUERY_PARAM)
            .and_then(|rest| rest.strip_prefix('='))
            .unwrap_or_default();
        Self::new(q)
    }
}

impl std::fmt::Display for SearchParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.q.is_empty() {
            return Ok(());
        }
        write!(f, "{}={}", QUERY_PARAM, urlencoding::encode(&self.q))
    }
}

/// Root application component.
///
/// Provides global styles, the recipe catalog, the explore shuffler and
/// routing.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_app_config);

    let mut catalog: Signal<RecipeCatalog> = use_signal(initial_catalog);
    let shuffler = use_hook(|| Shuffler::new(config.seed));

    use_context_provider(|| catalog);
    use_context_provider(|| shuffler);

    // Swap in the configured catalog once it is read from disk
    use_effect(move || {
        let Some(path) = get_app_config().catalog_path else {
            return;
        };
        spawn(async move {
            match RecipeCatalog::load(&path).await {
                Ok(loaded) => catalog.set(loaded),
                Err(e) => {
                    tracing::error!(
                        "Failed to load catalog {:?}, keeping bundled catalog: {}",
                        path,
                        e
                    );
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use recipefinder_core::{SearchQuery, SearchRequest};

    /// Search text the search page receives after `submit_search` navigates
    fn routed_search_text(input: &str) -> String {
        let href = SearchRequest::from_input(input).unwrap().href();
        match Route::from_str(&href) {
            Ok(Route::Search { query }) => query.q,
            other => panic!("{href} routed to {other:?}"),
        }
    }

    #[test]
    fn ampersand_survives_search_routing() {
        assert_eq!(routed_search_text("egg & rice"), "egg & rice");
        assert_eq!(
            SearchQuery::parse(&routed_search_text("egg & rice")).terms(),
            &["egg", "&", "rice"]
        );
    }

    #[test]
    fn search_routing_keeps_text_intact() {
        for input in ["ไข่", "a=b", " ไข่, หมูสับ ", "q=1&q=2", "100%"] {
            assert_eq!(routed_search_text(input), input);
        }
    }

    #[test]
    fn bare_search_route_has_empty_query() {
        assert_eq!(SearchParams::from_query(""), SearchParams::default());
        assert_eq!(SearchParams::from_query("other=1"), SearchParams::default());
    }

    #[test]
    fn empty_params_display_nothing() {
        assert_eq!(SearchParams::default().to_string(), "");
        assert_eq!(SearchParams::new("ไข่").to_string(), "q=%E0%B9%84%E0%B8%82%E0%B9%88");
    }
}
