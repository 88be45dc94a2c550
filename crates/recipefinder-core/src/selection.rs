//! Selection engine for the landing page grids.
//!
//! Two independent selections feed two grids:
//!
//! - [`select_explore`]: shuffle the catalog, keep a sample of
//!   [`EXPLORE_SAMPLE_SIZE`], narrow it by the active filters and show up to
//!   [`DISPLAY_LIMIT`].
//! - [`select_featured`]: the popular recipes, backfilled from the catalog
//!   when there are fewer than [`DISPLAY_LIMIT`]. Filters never apply.
//!
//! Both return borrowed recipes; nothing here copies or mutates the catalog.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::filter::FilterSet;
use crate::types::Recipe;

/// Maximum number of cards in a landing page grid
pub const DISPLAY_LIMIT: usize = 6;

/// Size of the shuffled sample the explore grid is filtered from
pub const EXPLORE_SAMPLE_SIZE: usize = 20;

/// Ordered recipes shown in one grid
pub type DisplayList<'a> = Vec<&'a Recipe>;

/// Random sample of `recipes` narrowed by `filters`.
///
/// The first [`EXPLORE_SAMPLE_SIZE`] recipes of a fresh shuffle are filtered,
/// so with active filters the result can be shorter than [`DISPLAY_LIMIT`]
/// (or empty) even when the catalog holds more matches.
pub fn select_explore<'a, R>(recipes: &'a [Recipe], filters: &FilterSet, rng: &mut R) -> DisplayList<'a>
where
    R: Rng + ?Sized,
{
    let mut sample: Vec<&Recipe> = recipes.iter().collect();
    sample.shuffle(rng);
    sample.truncate(EXPLORE_SAMPLE_SIZE);

    let selected: DisplayList<'a> = sample
        .into_iter()
        .filter(|recipe| filters.matches(recipe))
        .take(DISPLAY_LIMIT)
        .collect();

    tracing::debug!(
        catalog = recipes.len(),
        active_filters = filters.len(),
        selected = selected.len(),
        "Selected explore recipes"
    );

    selected
}

/// Popular recipes padded toward [`DISPLAY_LIMIT`] from the full catalog.
///
/// With enough popular recipes the first [`DISPLAY_LIMIT`] are returned
/// untouched. Otherwise catalog recipes whose id is not already popular are
/// appended in catalog order. Never padded with placeholders.
pub fn select_featured<'a>(recipes: &'a [Recipe], popular: &'a [Recipe]) -> DisplayList<'a> {
    if popular.len() >= DISPLAY_LIMIT {
        return popular.iter().take(DISPLAY_LIMIT).collect();
    }

    let mut featured: DisplayList<'a> = popular.iter().collect();
    let backfill = recipes
        .iter()
        .filter(|recipe| !popular.iter().any(|p| p.id == recipe.id))
        .take(DISPLAY_LIMIT - popular.len());
    featured.extend(backfill);

    tracing::debug!(
        popular = popular.len(),
        featured = featured.len(),
        "Backfilled featured recipes"
    );

    featured
}

/// Shared random source for explore selections.
///
/// Clones share one RNG stream, so every grid recomputation draws a fresh
/// permutation. Seeding makes the stream reproducible.
#[derive(Clone)]
pub struct Shuffler {
    rng: Arc<Mutex<StdRng>>,
}

impl Shuffler {
    /// Deterministic shuffler
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    /// Shuffler seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::from_os_rng())),
        }
    }

    /// Seeded when `seed` is given, otherwise from entropy
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// [`select_explore`] using this shuffler's RNG
    pub fn select_explore<'a>(&self, recipes: &'a [Recipe], filters: &FilterSet) -> DisplayList<'a> {
        let mut rng = self.rng.lock();
        select_explore(recipes, filters, &mut *rng)
    }
}

impl std::fmt::Debug for Shuffler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shuffler").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::types::{DietaryFilter, RecipeId};

    fn catalog(n: usize) -> Vec<Recipe> {
        (0..n)
            .map(|i| Recipe::new(format!("r{i}"), format!("Recipe {i}")))
            .collect()
    }

    fn ids(list: &DisplayList<'_>) -> Vec<String> {
        list.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_explore_empty_catalog() {
        let mut rng = StdRng::seed_from_u64(1);
        let list = select_explore(&[], &FilterSet::new(), &mut rng);
        assert!(list.is_empty());
    }

    #[test]
    fn test_explore_no_filters_caps_at_six() {
        let recipes = catalog(50);
        let mut rng = StdRng::seed_from_u64(1);
        let list = select_explore(&recipes, &FilterSet::new(), &mut rng);
        assert_eq!(list.len(), DISPLAY_LIMIT);
    }

    #[test]
    fn test_explore_small_catalog_not_padded() {
        let recipes = catalog(4);
        let mut rng = StdRng::seed_from_u64(1);
        let list = select_explore(&recipes, &FilterSet::new(), &mut rng);
        assert_eq!(list.len(), 4);

        let unique: HashSet<_> = ids(&list).into_iter().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn test_explore_filters_untagged_out() {
        let recipes = catalog(10);
        let filters = FilterSet::from_iter([DietaryFilter::Halal]);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select_explore(&recipes, &filters, &mut rng).is_empty());
    }

    #[test]
    fn test_explore_filters_only_from_sample() {
        // 30 recipes, only one tagged: it matches only when it lands in the
        // 20-recipe sample.
        let mut recipes = catalog(29);
        recipes.push(Recipe::new("keto", "Keto bowl").with_tags(["คีโต"]));
        let filters = FilterSet::from_iter([DietaryFilter::Keto]);

        let mut rng = StdRng::seed_from_u64(3);
        let mut seen_hit = false;
        let mut seen_miss = false;
        for _ in 0..200 {
            let list = select_explore(&recipes, &filters, &mut rng);
            match list.len() {
                0 => seen_miss = true,
                1 => {
                    assert_eq!(list[0].id, RecipeId::new("keto"));
                    seen_hit = true;
                }
                n => panic!("unexpected explore length {n}"),
            }
        }
        assert!(seen_hit && seen_miss);
    }

    #[test]
    fn test_explore_reaches_every_recipe() {
        let recipes = catalog(30);
        let shuffler = Shuffler::from_seed(42);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            for recipe in shuffler.select_explore(&recipes, &FilterSet::new()) {
                seen.insert(recipe.id.clone());
            }
        }
        assert_eq!(seen.len(), 30);
    }

    #[test]
    fn test_seeded_shufflers_agree() {
        let recipes = catalog(30);
        let a = Shuffler::from_seed(9);
        let b = Shuffler::from_seed(9);
        for _ in 0..5 {
            assert_eq!(
                ids(&a.select_explore(&recipes, &FilterSet::new())),
                ids(&b.select_explore(&recipes, &FilterSet::new()))
            );
        }
    }

    #[test]
    fn test_shuffler_clones_share_stream() {
        let recipes = catalog(30);
        let original = Shuffler::from_seed(5);
        let clone = original.clone();
        let reference = Shuffler::from_seed(5);

        let first = ids(&original.select_explore(&recipes, &FilterSet::new()));
        let second = ids(&clone.select_explore(&recipes, &FilterSet::new()));

        assert_eq!(first, ids(&reference.select_explore(&recipes, &FilterSet::new())));
        assert_eq!(second, ids(&reference.select_explore(&recipes, &FilterSet::new())));
    }

    #[test]
    fn test_featured_enough_popular() {
        let recipes = catalog(3);
        let popular = catalog(8);
        let list = select_featured(&recipes, &popular);
        assert_eq!(ids(&list), vec!["r0", "r1", "r2", "r3", "r4", "r5"]);
    }

    #[test]
    fn test_featured_backfills_in_catalog_order() {
        let recipes = catalog(10);
        let popular = vec![
            Recipe::new("p0", "Popular 0"),
            Recipe::new("p1", "Popular 1"),
            Recipe::new("p2", "Popular 2"),
        ];
        let list = select_featured(&recipes, &popular);
        assert_eq!(ids(&list), vec!["p0", "p1", "p2", "r0", "r1", "r2"]);
    }

    #[test]
    fn test_featured_skips_already_popular() {
        let recipes = catalog(5);
        let popular = vec![recipes[1].clone(), recipes[3].clone()];
        let list = select_featured(&recipes, &popular);
        assert_eq!(ids(&list), vec!["r1", "r3", "r0", "r2", "r4"]);
    }

    #[test]
    fn test_featured_empty_everything() {
        assert!(select_featured(&[], &[]).is_empty());
    }

    #[test]
    fn test_featured_ignores_tags() {
        let recipes = vec![Recipe::new("a", "A"), Recipe::new("b", "B").with_tags(["คีโต"])];
        let list = select_featured(&recipes, &[]);
        assert_eq!(ids(&list), vec!["a", "b"]);
    }
}
