//! Local state of the landing page.
//!
//! Owned by one landing page instance and dropped with it, so every visit
//! starts with an empty search box, a hidden filter panel and no active
//! filters.

use crate::filter::FilterSet;
use crate::search::{submit_search, Navigator};
use crate::types::DietaryFilter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingState {
    /// Current search box contents
    pub search_text: String,
    /// Whether the filter panel is shown
    pub filters_visible: bool,
    /// Filters narrowing the explore grid
    pub filters: FilterSet,
}

impl LandingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Show or hide the filter panel. Active filters are kept either way.
    pub fn toggle_filters_visible(&mut self) {
        self.filters_visible = !self.filters_visible;
    }

    /// Returns `true` when `filter` is active afterwards
    pub fn toggle_filter(&mut self, filter: DietaryFilter) -> bool {
        let active = self.filters.toggle(filter);
        tracing::debug!(filter = %filter, active, "Toggled dietary filter");
        active
    }

    /// Submit the current search text. See [`submit_search`].
    pub fn submit_search<N>(&self, navigator: &mut N) -> bool
    where
        N: Navigator + ?Sized,
    {
        submit_search(&self.search_text, navigator)
    }
}
