use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel emitted by selection widgets for "no restriction". Normalized to an
/// absent field before a request is built; never transmitted literally.
pub const MATCH_ALL: &str = "all";

/// Active filter selection. Empty string means "not set".
///
/// `district` is only meaningful under a selected `region`, `municipality` only
/// under a selected `district`. The setters keep that hierarchy consistent:
/// changing or clearing a parent clears everything below it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub region: String,
    pub district: String,
    pub municipality: String,
    pub kind: String,
    pub category: String,
}

impl SearchFilters {
    pub fn set_region(&mut self, region: impl Into<String>) {
        let region = normalize_selection(region.into());
        if region != self.region {
            self.district.clear();
            self.municipality.clear();
        }
        self.region = region;
    }

    pub fn set_district(&mut self, district: impl Into<String>) {
        let district = normalize_selection(district.into());
        if district != self.district {
            self.municipality.clear();
        }
        self.district = district;
    }

    pub fn set_municipality(&mut self, municipality: impl Into<String>) {
        self.municipality = normalize_selection(municipality.into());
    }

    pub fn set_kind(&mut self, kind: impl Into<String>) {
        self.kind = normalize_selection(kind.into());
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = normalize_selection(category.into());
    }

    /// Reset every field to "not set".
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn normalize_selection(value: String) -> String {
    if value == MATCH_ALL {
        String::new()
    } else {
        value
    }
}

/// Parameters of one listing request, derived deterministically from UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub filters: SearchFilters,
    /// 0-based page index.
    pub page: usize,
    pub page_size: usize,
}

/// One page of listing results.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResult {
    pub records: Vec<Record>,
    pub total_count: u64,
    pub total_pages: u64,
}

/// One lodging establishment as listed by the registry.
///
/// `kind` and `category` hold the registry's enumerated codes (`RODZ_HOT`,
/// `KAT_3ST_HOT`, ...); display labels come from the mapper's lookup tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    pub uid: String,
    pub name: String,
    pub kind: String,
    pub category: String,
    pub region: String,
    pub district: String,
    pub municipality: String,
    pub city: String,
    pub street: String,
    pub postal_code: String,
    pub status: String,
    pub decision_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
}

/// Full detail payload for one establishment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordDetail {
    pub record: Record,
    pub description: Option<String>,
    pub registry_number: Option<String>,
    pub decision_number: Option<String>,
    pub bed_count: Option<u32>,
    pub unit_count: Option<u32>,
    pub accessible: Option<bool>,
    pub affiliated: Option<bool>,
}

/// Lifecycle of the paginated fetch coordinator.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Ready(SearchResult),
    Failed(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn result(&self) -> Option<&SearchResult> {
        match self {
            FetchState::Ready(result) => Some(result),
            _ => None,
        }
    }
}
