use std::sync::Arc;

use super::badges::Badge;
use super::navigator::QueryNavigator;
use super::pagination::{Pagination, PAGE_KEY};
use super::query::{decode_query, encode_query};
use super::storage::FilterSnapshot;
use super::value::{FilterSet, FilterValue};

/// Keeps one page's filter set, its URL query and its stored snapshot in step
///
/// Every mutation goes through [`FilterSync::update_query`], which prunes
/// blank values, rewrites the URL in place and saves the snapshot.
pub struct FilterSync<N: QueryNavigator> {
    current: FilterSet,
    navigator: N,
    snapshot: Option<Arc<dyn FilterSnapshot>>,
    ephemeral: Vec<String>,
}

impl<N: QueryNavigator> FilterSync<N> {
    /// Start from whatever the URL currently carries
    pub fn new(navigator: N) -> Self {
        let current = decode_query(&navigator.current_query()).pruned();
        Self {
            current,
            navigator,
            snapshot: None,
            ephemeral: Vec::new(),
        }
    }

    pub fn with_snapshot(mut self, snapshot: impl FilterSnapshot) -> Self {
        self.snapshot = Some(Arc::new(snapshot));
        self
    }

    /// Keys kept out of the stored snapshot (paging, open panels)
    pub fn with_ephemeral(mut self, keys: &[&str]) -> Self {
        self.ephemeral = keys.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn current(&self) -> &FilterSet {
        &self.current
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Merge the stored snapshot under the URL parameters and commit
    pub fn restore(&mut self) -> &FilterSet {
        let Some(stored) = self.snapshot.as_ref().and_then(|s| s.load()) else {
            return &self.current;
        };
        let restored = stored.without(&self.ephemeral).merged(&self.current);
        log::debug!("restored {} stored filter(s)", stored.len());
        self.update_query(restored)
    }

    /// `{...current, ...filters}`, then commit
    pub fn apply_filter(&mut self, filters: FilterSet) -> &FilterSet {
        let merged = self.current.merged(&filters);
        self.update_query(merged)
    }

    /// Commit `filters` as the new current set
    pub fn update_query(&mut self, filters: FilterSet) -> &FilterSet {
        let pruned = filters.pruned();
        let query = encode_query(&pruned);
        self.navigator.replace_query(&query);
        if let Some(snapshot) = &self.snapshot {
            snapshot.save(&pruned.without(&self.ephemeral));
        }
        log::debug!("filters committed: ?{}", query);
        self.current = pruned;
        &self.current
    }

    pub fn clear<S: AsRef<str>>(&mut self, keys: &[S]) -> &FilterSet {
        let cleared = self.current.cleared(keys);
        self.update_query(cleared)
    }

    pub fn remove_badge(&mut self, badge: &Badge) -> &FilterSet {
        let next = badge.apply_to(&self.current);
        self.update_query(next)
    }

    pub fn set_page(&mut self, pagination: Pagination) -> &FilterSet {
        self.apply_filter(pagination.to_filters())
    }

    /// Change a search term and go back to the first page
    pub fn search(&mut self, key: &str, term: impl Into<FilterValue>) -> &FilterSet {
        self.apply_filter(FilterSet::new().with(key, term).with(PAGE_KEY, 1u32))
    }

    /// Leave the page; the filter state is dropped with it
    pub fn navigate(&self, path: &str) {
        self.navigator.push_path(path);
    }
}
