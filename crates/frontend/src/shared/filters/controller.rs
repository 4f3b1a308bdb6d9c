use leptos::prelude::*;

use super::badges::Badge;
use super::navigator::{BrowserHistory, QueryNavigator};
use super::pagination::Pagination;
use super::storage::FilterSnapshot;
use super::sync::FilterSync;
use super::value::{FilterSet, FilterValue};

/// Reactive handle over a page's [`FilterSync`]
///
/// The filter signal changes after every committed update; list pages
/// track it in an `Effect` and refetch.
pub struct FilterController<N: QueryNavigator = BrowserHistory> {
    sync: StoredValue<FilterSync<N>>,
    filters: RwSignal<FilterSet>,
}

impl<N: QueryNavigator> Clone for FilterController<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N: QueryNavigator> Copy for FilterController<N> {}

impl FilterController<BrowserHistory> {
    /// Controller for the current browser page
    pub fn browser() -> Self {
        Self::new(FilterSync::new(BrowserHistory))
    }

    /// Browser controller mirrored to storage, restored on creation
    pub fn browser_persisted(snapshot: impl FilterSnapshot, ephemeral: &[&str]) -> Self {
        Self::persisted(BrowserHistory, snapshot, ephemeral)
    }
}

impl<N: QueryNavigator> FilterController<N> {
    pub fn new(sync: FilterSync<N>) -> Self {
        let filters = RwSignal::new(sync.current().clone());
        Self {
            sync: StoredValue::new(sync),
            filters,
        }
    }

    /// Controller mirrored to `snapshot`; the stored set is merged under the URL
    pub fn persisted(navigator: N, snapshot: impl FilterSnapshot, ephemeral: &[&str]) -> Self {
        let sync = FilterSync::new(navigator)
            .with_snapshot(snapshot)
            .with_ephemeral(ephemeral);
        let controller = Self::new(sync);
        controller.restore();
        controller
    }

    pub fn filters(&self) -> ReadSignal<FilterSet> {
        self.filters.read_only()
    }

    pub fn current(&self) -> FilterSet {
        self.filters.get_untracked()
    }

    pub fn pagination(&self, default_limit: u32) -> Pagination {
        self.filters
            .with(|filters| Pagination::from_filters(filters, default_limit))
    }

    fn commit(&self, step: impl FnOnce(&mut FilterSync<N>) -> FilterSet) {
        let Some(next) = self.sync.try_update_value(step) else {
            log::warn!("filter controller used after its page was disposed");
            return;
        };
        if self.filters.with_untracked(|current| current != &next) {
            self.filters.set(next);
        }
    }

    pub fn restore(&self) {
        self.commit(|sync| sync.restore().clone());
    }

    pub fn apply_filter(&self, filters: FilterSet) {
        self.commit(|sync| sync.apply_filter(filters).clone());
    }

    pub fn update_query(&self, filters: FilterSet) {
        self.commit(|sync| sync.update_query(filters).clone());
    }

    pub fn clear(&self, keys: &[&str]) {
        self.commit(|sync| sync.clear(keys).clone());
    }

    pub fn remove_badge(&self, badge: &Badge) {
        self.commit(|sync| sync.remove_badge(badge).clone());
    }

    pub fn set_page(&self, page: u32, default_limit: u32) {
        let limit = self.current_pagination(default_limit).limit;
        self.commit(|sync| sync.set_page(Pagination::new(page, limit)).clone());
    }

    pub fn set_limit(&self, limit: u32) {
        self.commit(|sync| sync.set_page(Pagination::new(1, limit)).clone());
    }

    pub fn search(&self, key: &str, term: impl Into<FilterValue>) {
        let term = term.into();
        self.commit(|sync| sync.search(key, term).clone());
    }

    pub fn navigate(&self, path: &str) {
        self.sync.with_value(|sync| sync.navigate(path));
    }

    fn current_pagination(&self, default_limit: u32) -> Pagination {
        self.filters
            .with_untracked(|filters| Pagination::from_filters(filters, default_limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::badges::{reconcile_badges, BadgeSpec};
    use crate::shared::filters::navigator::MemoryHistory;
    use crate::shared::filters::storage::{MemoryStorage, PersistedFilters};

    fn controller_at(url: &str) -> (FilterController<MemoryHistory>, MemoryHistory) {
        let history = MemoryHistory::new(url);
        (FilterController::new(FilterSync::new(history.clone())), history)
    }

    #[test]
    fn test_signal_follows_commits() {
        let (controller, history) = controller_at("/assets?status=ACTIVE&page=2");
        controller.apply_filter(FilterSet::new().with("status", "TRANSFER_IN_PROGRESS"));

        let filters = controller.current();
        assert_eq!(filters.text("status").as_deref(), Some("TRANSFER_IN_PROGRESS"));
        assert_eq!(filters.integer("page"), Some(2));
        assert_eq!(history.current_url(), "/assets?page=2&status=TRANSFER_IN_PROGRESS");
    }

    #[test]
    fn test_set_page_keeps_limit() {
        let (controller, history) = controller_at("/assets?limit=14");
        controller.set_page(3, 20);

        assert_eq!(controller.pagination(20), Pagination::new(3, 14));
        assert_eq!(history.current_url(), "/assets?limit=14&page=3");
    }

    #[test]
    fn test_remove_badge_through_controller() {
        let (controller, history) = controller_at("/assets?facility=f1&location=l2&search=pump");
        let badges = reconcile_badges(
            &controller.current(),
            &[BadgeSpec::linked("Facility", "facility", &["location"])],
            |_, _| None,
        );
        controller.remove_badge(&badges[0]);

        assert_eq!(controller.current(), FilterSet::new().with("search", "pump"));
        assert_eq!(history.current_url(), "/assets?search=pump");
    }

    #[test]
    fn test_navigate_adds_history_entry() {
        let (controller, history) = controller_at("/facility/create");
        controller.navigate("/facility/x1/bed");
        assert_eq!(history.entries().len(), 2);
    }

    #[test]
    fn test_persisted_controller_seeds_signal_and_writes_back() {
        let storage = MemoryStorage::new();
        PersistedFilters::new(storage.clone(), "external-filters").save(
            &FilterSet::new()
                .with("name", "stored")
                .with("srf_id", "S-9")
                .with("page", 7u32),
        );
        let history = MemoryHistory::new("/external_results?name=url&page=2");

        let controller = FilterController::persisted(
            history.clone(),
            PersistedFilters::new(storage.clone(), "external-filters"),
            &["page", "limit"],
        );

        assert_eq!(
            controller.filters().get_untracked(),
            FilterSet::new()
                .with("name", "url")
                .with("page", "2")
                .with("srf_id", "S-9")
        );
        assert_eq!(
            history.current_url(),
            "/external_results?name=url&page=2&srf_id=S-9"
        );

        controller.apply_filter(FilterSet::new().with("result", "POSITIVE").with("page", 1u32));

        let stored = PersistedFilters::new(storage, "external-filters").load();
        assert_eq!(
            stored,
            Some(
                FilterSet::new()
                    .with("name", "url")
                    .with("result", "POSITIVE")
                    .with("srf_id", "S-9")
            )
        );
        assert_eq!(controller.current().integer("page"), Some(1));
    }
}
