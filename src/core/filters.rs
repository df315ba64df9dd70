//! Cascading location filters: voivodeship → district → municipality.
//!
//! The top level is the fixed set of administrative regions. The lower levels
//! are derived on demand from the registry itself, by probing a page of
//! records scoped to the parent selection and collecting the observed values.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::model::{Record, SearchFilters, SearchRequest};
use crate::domain::ports::{Notifier, NoticeKind, Registry};

/// The 16 top-level administrative regions, in display order.
pub const REGIONS: [&str; 16] = [
    "dolnośląskie",
    "kujawsko-pomorskie",
    "lubelskie",
    "lubuskie",
    "łódzkie",
    "małopolskie",
    "mazowieckie",
    "opolskie",
    "podkarpackie",
    "podlaskie",
    "pomorskie",
    "śląskie",
    "świętokrzyskie",
    "warmińsko-mazurskie",
    "wielkopolskie",
    "zachodniopomorskie",
];

/// Page size used when probing the registry for observed districts or
/// municipalities. Large enough to approximate completeness for one scope.
pub const DEFAULT_PROBE_SIZE: usize = 500;

pub struct LocationFilters<R: Registry> {
    registry: Arc<R>,
    notifier: Arc<dyn Notifier>,
    probe_size: usize,
}

impl<R: Registry> LocationFilters<R> {
    pub fn new(registry: Arc<R>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            registry,
            notifier,
            probe_size: DEFAULT_PROBE_SIZE,
        }
    }

    pub fn with_probe_size(mut self, probe_size: usize) -> Self {
        self.probe_size = probe_size;
        self
    }

    /// Static ordered list of top-level regions.
    pub fn regions(&self) -> Vec<String> {
        REGIONS.iter().map(|r| r.to_string()).collect()
    }

    /// Districts observed under the given region, deduplicated and sorted.
    /// Empty region selection yields an empty set without a request. A failed
    /// request also yields an empty set, after one error notification.
    pub async fn districts(&self, region: &str) -> Vec<String> {
        if region.is_empty() {
            return Vec::new();
        }

        let mut filters = SearchFilters::default();
        filters.set_region(region);

        self.probe(filters, |record| record.district.clone(), "powiatów")
            .await
    }

    /// Municipalities observed under the given region and district.
    pub async fn municipalities(&self, region: &str, district: &str) -> Vec<String> {
        if region.is_empty() || district.is_empty() {
            return Vec::new();
        }

        let mut filters = SearchFilters::default();
        filters.set_region(region);
        filters.set_district(district);

        self.probe(filters, |record| record.municipality.clone(), "gmin")
            .await
    }

    async fn probe(
        &self,
        filters: SearchFilters,
        field: impl Fn(&Record) -> String,
        what: &str,
    ) -> Vec<String> {
        let request = SearchRequest {
            query: String::new(),
            filters,
            page: 0,
            page_size: self.probe_size,
        };

        match self.registry.search(&request).await {
            Ok(result) => {
                let values: BTreeSet<String> = result
                    .records
                    .iter()
                    .map(|record| field(record))
                    .filter(|value| !value.is_empty())
                    .collect();
                tracing::debug!("Derived {} {} from {} records", values.len(), what, result.records.len());
                values.into_iter().collect()
            }
            Err(e) => {
                tracing::warn!("Filter probe failed: {e}");
                self.notifier.notify(
                    NoticeKind::Error,
                    &format!("Nie udało się pobrać listy {what}"),
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Record, RecordDetail, SearchResult};
    use crate::domain::ports::Registry;
    use crate::utils::error::{RegistryError, Result};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubRegistry {
        districts: Vec<&'static str>,
        fail: bool,
        calls: Mutex<Vec<SearchRequest>>,
    }

    #[async_trait]
    impl Registry for StubRegistry {
        async fn search(&self, request: &SearchRequest) -> Result<SearchResult> {
            self.calls.lock().unwrap().push(request.clone());
            if self.fail {
                return Err(RegistryError::HttpStatusError {
                    status: 503,
                    url: "stub".to_string(),
                });
            }
            let records = self
                .districts
                .iter()
                .map(|d| Record {
                    district: d.to_string(),
                    ..Record::default()
                })
                .collect();
            Ok(SearchResult {
                records,
                total_count: self.districts.len() as u64,
                total_pages: 1,
            })
        }

        async fn detail(&self, _uid: &str) -> Result<RecordDetail> {
            unimplemented!("not used by filter probes")
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        errors: Mutex<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, kind: NoticeKind, message: &str) {
            if kind == NoticeKind::Error {
                self.errors.lock().unwrap().push(message.to_string());
            }
        }
    }

    fn provider(
        districts: Vec<&'static str>,
        fail: bool,
    ) -> (LocationFilters<StubRegistry>, Arc<StubRegistry>, Arc<RecordingNotifier>) {
        let registry = Arc::new(StubRegistry {
            districts,
            fail,
            calls: Mutex::new(Vec::new()),
        });
        let notifier = Arc::new(RecordingNotifier::default());
        let filters = LocationFilters::new(registry.clone(), notifier.clone()).with_probe_size(100);
        (filters, registry, notifier)
    }

    #[test]
    fn region_list_is_the_fixed_enumeration() {
        let (filters, _, _) = provider(vec![], false);
        let regions = filters.regions();
        assert_eq!(regions.len(), 16);
        assert_eq!(regions[0], "dolnośląskie");
        assert_eq!(regions[15], "zachodniopomorskie");
    }

    #[tokio::test]
    async fn districts_are_deduplicated_and_sorted() {
        let (filters, registry, _) =
            provider(vec!["warszawski", "grodziski", "warszawski", "", "grodziski"], false);

        let districts = filters.districts("mazowieckie").await;
        assert_eq!(districts, vec!["grodziski", "warszawski"]);

        let calls = registry.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].filters.region, "mazowieckie");
        assert_eq!(calls[0].page_size, 100);
    }

    #[tokio::test]
    async fn empty_parent_yields_empty_set_without_a_request() {
        let (filters, registry, _) = provider(vec!["warszawski"], false);

        assert!(filters.districts("").await.is_empty());
        assert!(filters.municipalities("", "warszawski").await.is_empty());
        assert!(filters.municipalities("mazowieckie", "").await.is_empty());
        assert!(registry.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn probe_failure_notifies_once_and_returns_empty() {
        let (filters, _, notifier) = provider(vec![], true);

        let districts = filters.districts("mazowieckie").await;
        assert!(districts.is_empty());
        assert_eq!(notifier.errors.lock().unwrap().len(), 1);
    }
}
