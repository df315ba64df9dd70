pub mod coordinator;
pub mod export;
pub mod filters;
pub mod mapper;
pub mod query;

pub use crate::domain::model::{
    FetchState, Record, RecordDetail, SearchFilters, SearchRequest, SearchResult, MATCH_ALL,
};
pub use crate::domain::ports::{Notifier, NoticeKind, Registry, Storage};
pub use crate::utils::error::Result;
