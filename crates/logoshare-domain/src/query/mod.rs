//! List derivation: turns the full logo collection into the list shown for
//! the selected navigation category and search term.
//!
//! The category transform runs first, then the search filter. The result is
//! always a freshly allocated `Vec`; the input slice is never reordered.

use crate::search::{CompositeSearcher, LogoSearcher};
use crate::sort::{OrderedSorter, SortBy, SortOrder};
use crate::{Logo, NavCategory};

/// How many logos the Starred category shows. There is no persisted starred
/// flag, so the first entries of the collection stand in for it.
pub const STARRED_PLACEHOLDER_COUNT: usize = 2;

/// Derive the displayed logos for a category and search term.
///
/// # Arguments
/// * `logos` - The full collection, in stored order
/// * `category` - The active navigation category
/// * `search` - Free-text search; empty means no filtering
pub fn derive_logos(logos: &[Logo], category: NavCategory, search: &str) -> Vec<Logo> {
    let mut derived = apply_category(logos, category);

    if !search.is_empty() {
        let searcher = CompositeSearcher::all(search);
        derived.retain(|logo| searcher.matches(logo));
    }

    tracing::debug!(
        "Derived {} of {} logos for {} (search: {:?})",
        derived.len(),
        logos.len(),
        category,
        search
    );
    derived
}

fn apply_category(logos: &[Logo], category: NavCategory) -> Vec<Logo> {
    match category {
        NavCategory::Recent => {
            let mut recent = logos.to_vec();
            OrderedSorter::new(SortBy::CreatedAt, SortOrder::Descending).sort(&mut recent);
            recent
        }
        NavCategory::Trash => Vec::new(),
        NavCategory::Starred => logos
            .iter()
            .take(STARRED_PLACEHOLDER_COUNT)
            .cloned()
            .collect(),
        NavCategory::Projects | NavCategory::Admin => logos.to_vec(),
    }
}

/// Builder for constructing logo queries with fluent API.
pub struct LogoQueryBuilder<'a> {
    logos: &'a [Logo],
    category: NavCategory,
    search: String,
}

impl<'a> LogoQueryBuilder<'a> {
    pub fn new(logos: &'a [Logo]) -> Self {
        Self {
            logos,
            category: NavCategory::default(),
            search: String::new(),
        }
    }

    pub fn category(mut self, category: NavCategory) -> Self {
        self.category = category;
        self
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = query.into();
        self
    }

    pub fn execute(self) -> Vec<Logo> {
        derive_logos(self.logos, self.category, &self.search)
    }
}
