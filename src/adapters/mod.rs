// Adapters layer: concrete implementations of the domain ports (registry HTTP
// client, notification surface, download sink).

pub mod http;
pub mod notify;
pub mod storage;

pub use http::HttpRegistry;
pub use notify::TermNotifier;
pub use storage::LocalStorage;
