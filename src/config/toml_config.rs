use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_API_BASE: &str = "https://api.turystyka.gov.pl";
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("cwoh-browser/", env!("CARGO_PKG_VERSION"));

/// File configuration, optional: every field has a working default.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub api_base: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
    pub page_size: usize,
    /// Page size for district/municipality probes.
    pub probe_page_size: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            probe_page_size: crate::core::filters::DEFAULT_PROBE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_path: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: "./output".to_string(),
        }
    }
}

impl TomlConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("registry.api_base", &self.registry.api_base)?;
        validate_range("registry.page_size", self.registry.page_size, 1, 500)?;
        validate_range("registry.probe_page_size", self.registry.probe_page_size, 1, 1000)?;
        validate_range(
            "registry.timeout_seconds",
            self.registry.timeout_seconds as usize,
            1,
            600,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_public_registry() {
        let config = TomlConfig::default();
        assert_eq!(config.registry.api_base, DEFAULT_API_BASE);
        assert_eq!(config.registry.page_size, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: TomlConfig = toml::from_str(
            r#"
            [registry]
            api_base = "http://localhost:8080"
            timeout_seconds = 5
            user_agent = "test"
            page_size = 10
            probe_page_size = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.registry.api_base, "http://localhost:8080");
        assert_eq!(config.export.output_path, "./output");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn out_of_range_page_size_fails_validation() {
        let mut config = TomlConfig::default();
        config.registry.page_size = 0;
        assert!(config.validate().is_err());

        config.registry.page_size = 501;
        assert!(config.validate().is_err());
    }

    #[test]
    fn bad_api_base_fails_validation() {
        let mut config = TomlConfig::default();
        config.registry.api_base = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }
}
