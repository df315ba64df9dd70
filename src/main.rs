use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use cwoh_browser::app::views;
use cwoh_browser::domain::model::{FetchState, SearchFilters, SearchRequest};
use cwoh_browser::domain::ports::{Notifier, NoticeKind, Registry};
use cwoh_browser::utils::logger;
use cwoh_browser::{
    CliConfig, Command, CsvExporter, FetchCoordinator, HttpRegistry, LocalStorage,
    LocationFilters, TermNotifier,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    logger::init_cli_logger(cli.verbose);

    let config = cli.resolve().context("invalid configuration")?;
    tracing::debug!("Using registry at {}", config.registry.api_base);

    let registry = Arc::new(
        HttpRegistry::new(
            &config.registry.api_base,
            config.registry.timeout_seconds,
            &config.registry.user_agent,
        )
        .context("cannot build the registry client")?,
    );
    let notifier: Arc<dyn Notifier> = Arc::new(TermNotifier);

    match cli.command {
        Command::Search {
            query,
            region,
            district,
            municipality,
            kind,
            category,
            page,
            size,
            export,
        } => {
            let mut filters = SearchFilters::default();
            if let Some(region) = region {
                filters.set_region(region);
            }
            if let Some(district) = district {
                filters.set_district(district);
            }
            if let Some(municipality) = municipality {
                filters.set_municipality(municipality);
            }
            if let Some(kind) = kind {
                filters.set_kind(kind);
            }
            if let Some(category) = category {
                filters.set_category(category);
            }

            let request = SearchRequest {
                query: query.unwrap_or_default(),
                filters,
                page,
                page_size: size,
            };
            let page_index = request.page;

            let coordinator =
                FetchCoordinator::new(registry.clone(), notifier.clone(), request);
            coordinator.refetch().await;

            let state = coordinator.state();
            println!("{}", views::render_list(&state));
            if let Some(result) = state.result() {
                if result.total_pages > 1 {
                    println!("\n{}", views::render_pagination(page_index, result.total_pages));
                }
                if export {
                    let exporter = CsvExporter::new(
                        LocalStorage::new(config.export.output_path.clone()),
                        notifier.clone(),
                    );
                    let today = chrono::Local::now().date_naive();
                    if let Ok(filename) = exporter.export_list(&result.records, today) {
                        println!(
                            "📁 {}",
                            LocalStorage::new(config.export.output_path.clone())
                                .resolve(&filename)
                                .display()
                        );
                    }
                }
            } else if matches!(state, FetchState::Failed(_)) {
                std::process::exit(1);
            }
        }

        Command::Detail { uid, export } => {
            match registry.detail(&uid).await {
                Ok(detail) => {
                    println!("{}", views::render_detail(&detail));
                    if export {
                        let exporter = CsvExporter::new(
                            LocalStorage::new(config.export.output_path.clone()),
                            notifier.clone(),
                        );
                        let today = chrono::Local::now().date_naive();
                        let _ = exporter.export_detail(&detail, today);
                    }
                }
                Err(e) => {
                    tracing::warn!("Detail request failed: {e}");
                    notifier.notify(NoticeKind::Error, "Nie udało się pobrać szczegółów obiektu");
                    std::process::exit(1);
                }
            }
        }

        Command::Regions => {
            let filters = LocationFilters::new(registry.clone(), notifier.clone());
            for region in filters.regions() {
                println!("{region}");
            }
        }

        Command::Districts { region } => {
            let filters = LocationFilters::new(registry.clone(), notifier.clone())
                .with_probe_size(config.registry.probe_page_size);
            for district in filters.districts(&region).await {
                println!("{district}");
            }
        }

        Command::Municipalities { region, district } => {
            let filters = LocationFilters::new(registry.clone(), notifier.clone())
                .with_probe_size(config.registry.probe_page_size);
            for municipality in filters.municipalities(&region, &district).await {
                println!("{municipality}");
            }
        }
    }

    Ok(())
}
