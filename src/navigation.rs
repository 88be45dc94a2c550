//! Search navigation over the Dioxus router.

use dioxus::prelude::Navigator as RouterHandle;
use recipefinder_core::Navigator;

/// Pushes search destinations onto the app router
pub struct RouterNavigator {
    router: RouterHandle,
}

impl RouterNavigator {
    pub fn new(router: RouterHandle) -> Self {
        Self { router }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&mut self, path: &str, query: &str) {
        let target = destination(path, query);
        tracing::debug!(%target, "Navigating");
        if let Some(failure) = self.router.push(target) {
            tracing::warn!("Navigation failed: {:?}", failure);
        }
    }
}

/// `path?query`, or just `path` when the query is empty
pub fn destination(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipefinder_core::SearchRequest;

    #[test]
    fn destination_joins_path_and_query() {
        assert_eq!(destination("/search", "q=egg"), "/search?q=egg");
        assert_eq!(destination("/search", ""), "/search");
    }

    #[test]
    fn destination_matches_request_href() {
        let request = SearchRequest::from_input("ไข่").unwrap();
        assert_eq!(
            destination(request.path(), &request.query_string()),
            request.href()
        );
    }
}
