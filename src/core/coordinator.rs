//! Paginated fetch coordination.
//!
//! Owns the current search parameters and the `idle → loading → {ready,
//! failed}` lifecycle. Every trigger (query, filter or page change, manual
//! refetch) tags its request with a monotonically increasing sequence number;
//! a completion whose sequence is no longer the latest is discarded, so the
//! `Ready` state always reflects the most recently initiated request even
//! when responses arrive out of order.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::model::{FetchState, SearchFilters, SearchRequest};
use crate::domain::ports::{Notifier, NoticeKind, Registry};

pub struct FetchCoordinator<R: Registry> {
    registry: Arc<R>,
    notifier: Arc<dyn Notifier>,
    request: Mutex<SearchRequest>,
    state: Mutex<FetchState>,
    seq: AtomicU64,
    detached: AtomicBool,
}

impl<R: Registry> FetchCoordinator<R> {
    pub fn new(registry: Arc<R>, notifier: Arc<dyn Notifier>, initial: SearchRequest) -> Self {
        Self {
            registry,
            notifier,
            request: Mutex::new(initial),
            state: Mutex::new(FetchState::Idle),
            seq: AtomicU64::new(0),
            detached: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current lifecycle state.
    pub fn state(&self) -> FetchState {
        self.state.lock().unwrap().clone()
    }

    /// Snapshot of the current request parameters.
    pub fn request(&self) -> SearchRequest {
        self.request.lock().unwrap().clone()
    }

    /// Change the free-text query and fetch. Resets to the first page.
    pub async fn set_query(&self, query: impl Into<String>) {
        {
            let mut request = self.request.lock().unwrap();
            request.query = query.into();
            request.page = 0;
        }
        self.fetch().await;
    }

    /// Replace the filter selection and fetch. Resets to the first page.
    pub async fn set_filters(&self, filters: SearchFilters) {
        {
            let mut request = self.request.lock().unwrap();
            request.filters = filters;
            request.page = 0;
        }
        self.fetch().await;
    }

    /// Jump to a page and fetch.
    pub async fn set_page(&self, page: usize) {
        self.request.lock().unwrap().page = page;
        self.fetch().await;
    }

    /// Re-issue the current parameters unconditionally.
    pub async fn refetch(&self) {
        self.fetch().await;
    }

    /// Navigation-away hook: all in-flight completions after this point are
    /// dropped without touching state.
    pub fn detach(&self) {
        self.detached.store(true, Ordering::SeqCst);
    }

    async fn fetch(&self) {
        if self.detached.load(Ordering::SeqCst) {
            return;
        }

        let request = self.request.lock().unwrap().clone();
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        *self.state.lock().unwrap() = FetchState::Loading;

        tracing::debug!(
            "Fetching page {} (size {}) for query '{}' [seq {}]",
            request.page,
            request.page_size,
            request.query,
            seq
        );

        let outcome = self.registry.search(&request).await;

        // Superseded or detached: a newer trigger owns the state now.
        if self.detached.load(Ordering::SeqCst) || self.seq.load(Ordering::SeqCst) != seq {
            tracing::debug!("Discarding stale completion [seq {}]", seq);
            return;
        }

        match outcome {
            Ok(result) => {
                tracing::info!(
                    "Fetched {} of {} records (page {}/{})",
                    result.records.len(),
                    result.total_count,
                    request.page + 1,
                    result.total_pages.max(1)
                );
                *self.state.lock().unwrap() = FetchState::Ready(result);
            }
            Err(e) => {
                tracing::warn!("Search request failed: {e}");
                *self.state.lock().unwrap() = FetchState::Failed(e.to_string());
                self.notifier
                    .notify(NoticeKind::Error, "Nie udało się pobrać listy obiektów");
            }
        }
    }
}
