//! View Controller
//!
//! Owns the record store plus the UI-driven filter and sort state, and keeps
//! the displayed sequence current. Every event is processed to completion:
//! the state transition is applied, then the view is recomputed as
//! `sort(filter(records, query, scope), key, direction)`.
//!
//! The computed view is memoized on `(normalized query, scope, sort config,
//! store version)`. Replacing the store bumps the version, so a stale view
//! is never served after a refresh.

use {
    super::{
        filter::{filter, FilterScope, FilterState},
        metrics::{aggregate, SummaryMetrics, TopArtistRanking},
        sort::{sort, SortConfig},
    },
    crate::{
        error::EngineError,
        store::{RecordField, RecordStore, StreamRecord},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewKey {
    query: String,
    scope: FilterScope,
    sort: SortConfig,
    store_version: u64,
}

#[derive(Debug)]
struct CachedView {
    key: ViewKey,
    /// Record ids in display order
    ids: Vec<u64>,
}

pub struct ViewController {
    store: RecordStore,
    store_version: u64,
    filter: FilterState,
    sort: SortConfig,
    ranking: TopArtistRanking,
    metrics: SummaryMetrics,
    view: CachedView,
    recomputations: u64,
}

impl ViewController {
    /// Controller with an empty query, scope `All` and newest-first sorting
    pub fn new(store: RecordStore, ranking: TopArtistRanking) -> Self {
        Self::with_state(store, ranking, FilterState::default(), SortConfig::default())
    }

    pub fn with_state(
        store: RecordStore,
        ranking: TopArtistRanking,
        filter: FilterState,
        sort: SortConfig,
    ) -> Self {
        let metrics = compute_metrics(&store, ranking);
        let mut controller = Self {
            store,
            store_version: 0,
            filter,
            sort,
            ranking,
            metrics,
            view: CachedView {
                key: ViewKey {
                    query: String::new(),
                    scope: FilterScope::All,
                    sort: SortConfig::default(),
                    store_version: 0,
                },
                ids: Vec::new(),
            },
            recomputations: 0,
        };
        controller.rebuild_view();
        controller
    }

    /// `onQueryChange`
    pub fn on_query_change(&mut self, text: impl Into<String>) {
        self.filter.query = text.into();
        self.refresh_view();
    }

    /// `onScopeChange`
    pub fn on_scope_change(&mut self, scope: FilterScope) {
        self.filter.scope = scope;
        self.refresh_view();
    }

    /// `onHeaderClick` by key name.
    ///
    /// An unknown key is rejected and the prior sort config is kept.
    pub fn on_header_click(&mut self, key: &str) -> Result<(), EngineError> {
        if let Err(e) = self.sort.request_key(key) {
            log::warn!("Ignoring header click: {}", e);
            return Err(e);
        }
        self.refresh_view();
        Ok(())
    }

    pub fn on_header_field(&mut self, field: RecordField) {
        self.sort.request(field);
        self.refresh_view();
    }

    /// Swap in a new store. Metrics and view are recomputed against it.
    pub fn replace_store(&mut self, store: RecordStore) {
        self.store = store;
        self.store_version += 1;
        self.metrics = compute_metrics(&self.store, self.ranking);
        log::info!(
            "🔄 Record store replaced (version {}, {} records)",
            self.store_version,
            self.store.len()
        );
        self.refresh_view();
    }

    /// Current display sequence, post filter and sort
    pub fn view(&self) -> Vec<&StreamRecord> {
        self.view
            .ids
            .iter()
            .filter_map(|&id| self.store.get(id))
            .collect()
    }

    pub fn view_len(&self) -> usize {
        self.view.ids.len()
    }

    pub fn metrics(&self) -> &SummaryMetrics {
        &self.metrics
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort_config(&self) -> SortConfig {
        self.sort
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn store_version(&self) -> u64 {
        self.store_version
    }

    /// Number of times the view was actually recomputed (memo misses)
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    fn current_key(&self) -> ViewKey {
        ViewKey {
            query: self.filter.normalized_query(),
            scope: self.filter.scope,
            sort: self.sort,
            store_version: self.store_version,
        }
    }

    fn refresh_view(&mut self) {
        if self.view.key == self.current_key() {
            log::debug!("View unchanged, reusing {} rows", self.view.ids.len());
            return;
        }
        self.rebuild_view();
    }

    fn rebuild_view(&mut self) {
        let key = self.current_key();

        let filtered = filter(self.store.records(), &key.query, key.scope);
        let sorted = sort(filtered, key.sort.key, key.sort.direction);
        let ids = sorted.iter().map(|record| record.id).collect::<Vec<_>>();

        log::debug!(
            "View recomputed: query={:?} scope={:?} sort={}:{:?} -> {} of {} rows",
            key.query,
            key.scope,
            key.sort.key,
            key.sort.direction,
            ids.len(),
            self.store.len()
        );

        self.view = CachedView { key, ids };
        self.recomputations += 1;
    }
}

fn compute_metrics(store: &RecordStore, ranking: TopArtistRanking) -> SummaryMetrics {
    aggregate(store.user_growth(), store.revenue(), store.top_songs(), ranking)
}
