//! Builds the registry's query-parameter set from a search request.
//!
//! The registry uses its own external field names (`voivodeship`, `community`)
//! which differ from the internal model names (`region`, `municipality`).

use crate::domain::model::{SearchRequest, MATCH_ALL};

/// Convert a request into ordered `(name, value)` pairs for the listing
/// endpoint. Empty fields and the match-all sentinel are omitted entirely.
pub fn build_params(request: &SearchRequest) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("page", request.page.to_string()),
        ("size", request.page_size.to_string()),
    ];

    push_if_set(&mut params, "name", &request.query);
    push_if_set(&mut params, "voivodeship", &request.filters.region);
    push_if_set(&mut params, "district", &request.filters.district);
    push_if_set(&mut params, "community", &request.filters.municipality);
    push_if_set(&mut params, "kind", &request.filters.kind);
    push_if_set(&mut params, "category", &request.filters.category);

    params
}

fn push_if_set(params: &mut Vec<(&'static str, String)>, name: &'static str, value: &str) {
    let value = value.trim();
    if !value.is_empty() && value != MATCH_ALL {
        params.push((name, value.to_string()));
    }
}
