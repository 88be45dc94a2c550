//! Active dietary filter set.
//!
//! Each of the eight filters is either active or inactive. Toggling flips a
//! single filter; filters never affect each other. Matching only looks at
//! membership, while iteration yields filters in the order they were
//! switched on so the UI can show them as picked.

use crate::types::{DietaryFilter, Recipe};

/// Set of active filters, preserving activation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    active: Vec<DietaryFilter>,
}

impl FilterSet {
    /// Empty set (no filters active)
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the membership of `filter`.
    ///
    /// Returns `true` when the filter is active afterwards.
    pub fn toggle(&mut self, filter: DietaryFilter) -> bool {
        if let Some(pos) = self.active.iter().position(|f| *f == filter) {
            self.active.remove(pos);
            false
        } else {
            self.active.push(filter);
            true
        }
    }

    pub fn contains(&self, filter: DietaryFilter) -> bool {
        self.active.contains(&filter)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Active filters in activation order
    pub fn iter(&self) -> impl Iterator<Item = DietaryFilter> + '_ {
        self.active.iter().copied()
    }

    /// Whether `recipe` carries every active filter's tag.
    ///
    /// An empty set matches everything. An untagged recipe matches nothing
    /// once any filter is active.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.active.iter().all(|f| recipe.has_tag(f.label()))
    }
}

impl FromIterator<DietaryFilter> for FilterSet {
    fn from_iter<I: IntoIterator<Item = DietaryFilter>>(iter: I) -> Self {
        let mut set = FilterSet::new();
        for filter in iter {
            if !set.contains(filter) {
                set.active.push(filter);
            }
        }
        set
    }
}
