pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, Command};

pub use crate::adapters::{HttpRegistry, LocalStorage, TermNotifier};
pub use crate::core::coordinator::FetchCoordinator;
pub use crate::core::export::CsvExporter;
pub use crate::core::filters::LocationFilters;
pub use crate::utils::error::{RegistryError, Result};
