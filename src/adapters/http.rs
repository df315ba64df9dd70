//! HTTP adapter for the registry's listing and detail endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::core::{mapper, query};
use crate::domain::model::{RecordDetail, SearchRequest, SearchResult};
use crate::domain::ports::Registry;
use crate::utils::error::{RegistryError, Result};

const LISTING_PATH: &str = "api/cwoh";

pub struct HttpRegistry {
    client: Client,
    base_url: Url,
}

impl HttpRegistry {
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    fn listing_url(&self, request: &SearchRequest) -> Result<Url> {
        let mut url = self.base_url.join(LISTING_PATH)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query::build_params(request) {
                pairs.append_pair(name, &value);
            }
        }
        Ok(url)
    }

    fn detail_url(&self, uid: &str) -> Result<Url> {
        let mut url = self.base_url.join(LISTING_PATH)?;
        url.path_segments_mut()
            .map_err(|_| RegistryError::ConfigError {
                message: format!("API base URL cannot carry path segments: {}", self.base_url),
            })?
            .push(uid);
        Ok(url)
    }

    async fn get_json(&self, url: Url) -> Result<serde_json::Value> {
        tracing::debug!("GET {url}");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::HttpStatusError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl Registry for HttpRegistry {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult> {
        let payload = self.get_json(self.listing_url(request)?).await?;
        mapper::map_list_payload(payload)
    }

    async fn detail(&self, uid: &str) -> Result<RecordDetail> {
        let payload = self.get_json(self.detail_url(uid)?).await?;
        mapper::map_detail_payload(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SearchFilters;

    fn registry() -> HttpRegistry {
        HttpRegistry::new("https://api.turystyka.gov.pl", 30, "cwoh-browser/0.1").unwrap()
    }

    #[test]
    fn listing_url_carries_only_set_parameters() {
        let mut filters = SearchFilters::default();
        filters.set_region("mazowieckie");

        let url = registry()
            .listing_url(&SearchRequest {
                query: "Bristol".to_string(),
                filters,
                page: 0,
                page_size: 20,
            })
            .unwrap();

        assert_eq!(url.path(), "/api/cwoh");
        assert_eq!(
            url.query(),
            Some("page=0&size=20&name=Bristol&voivodeship=mazowieckie")
        );
    }

    #[test]
    fn detail_url_percent_encodes_the_uid() {
        let url = registry().detail_url("CWOH/2020 1").unwrap();
        assert_eq!(url.path(), "/api/cwoh/CWOH%2F2020%201");
    }
}
