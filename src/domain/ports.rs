use crate::domain::model::{RecordDetail, SearchRequest, SearchResult};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Gateway to the remote lodging registry. The registry is read-only from this
/// client's perspective.
#[async_trait]
pub trait Registry: Send + Sync {
    /// Run a paginated listing search.
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult>;

    /// Fetch one establishment by its registry identifier.
    async fn detail(&self, uid: &str) -> Result<RecordDetail>;
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// Injected toast/notification capability. The global notification surface is
/// an external collaborator; core code only ever talks to this trait.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Sink for the CSV download side effect.
pub trait Storage: Send + Sync {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
