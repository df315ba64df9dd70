use crate::config::toml_config::{TomlConfig, DEFAULT_PAGE_SIZE};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cwoh-browser")]
#[command(about = "Browse the CWOH lodging registry: search, filters, details, CSV export")]
pub struct CliConfig {
    /// Registry API base URL (overrides the config file)
    #[arg(long)]
    pub api_base: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for exported CSV files (overrides the config file)
    #[arg(long)]
    pub output_path: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Search the listing, with optional filters and paging
    Search {
        /// Free-text name query
        query: Option<String>,

        /// Voivodeship filter
        #[arg(long)]
        region: Option<String>,

        /// District filter (requires --region)
        #[arg(long)]
        district: Option<String>,

        /// Municipality filter (requires --district)
        #[arg(long)]
        municipality: Option<String>,

        /// Lodging kind code, e.g. RODZ_HOT
        #[arg(long)]
        kind: Option<String>,

        /// Category code, e.g. KAT_3ST_HOT
        #[arg(long)]
        category: Option<String>,

        /// 0-based page index
        #[arg(long, default_value = "0")]
        page: usize,

        /// Page size
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: usize,

        /// Export the fetched page to CSV
        #[arg(long)]
        export: bool,
    },

    /// Show one establishment by uid
    Detail {
        uid: String,

        /// Export the detail record to CSV
        #[arg(long)]
        export: bool,
    },

    /// List the top-level regions
    Regions,

    /// List districts observed under a region
    Districts { region: String },

    /// List municipalities observed under a region and district
    Municipalities { region: String, district: String },
}

impl CliConfig {
    /// Resolve the effective configuration: file (if given), then flag
    /// overrides on top.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(api_base) = &self.api_base {
            config.registry.api_base = api_base.clone();
        }
        if let Some(output_path) = &self.output_path {
            config.export.output_path = output_path.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_win_over_defaults() {
        let cli = CliConfig::parse_from([
            "cwoh-browser",
            "--api-base",
            "http://localhost:9000",
            "regions",
        ]);
        let config = cli.resolve().unwrap();
        assert_eq!(config.registry.api_base, "http://localhost:9000");
    }

    #[test]
    fn invalid_override_is_rejected() {
        let cli = CliConfig::parse_from(["cwoh-browser", "--api-base", "not a url", "regions"]);
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn search_defaults_to_first_page_of_twenty() {
        let cli = CliConfig::parse_from(["cwoh-browser", "search", "Bristol"]);
        match cli.command {
            Command::Search { query, page, size, .. } => {
                assert_eq!(query.as_deref(), Some("Bristol"));
                assert_eq!(page, 0);
                assert_eq!(size, 20);
            }
            _ => panic!("expected a search command"),
        }
    }
}
