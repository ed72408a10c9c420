// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::theme_service::ThemeService;
use crate::infrastructure::config::load_config;
use crate::infrastructure::file_theme_store::FileThemeStore;
use crate::infrastructure::json_dataset_repository::JsonDatasetRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::router::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_config()?;

    // Create adapters (infrastructure layer)
    let dataset_repository = Arc::new(JsonDatasetRepository::new(&config.dataset.path));
    let theme_store = Arc::new(FileThemeStore::new(&config.theme.path));

    // Create services (application layer); the dataset is read exactly once here
    let dashboard_service = DashboardService::load(dataset_repository, config.chart.clone()).await?;
    let theme_service = Arc::new(ThemeService::load(theme_store).await);

    let state = Arc::new(AppState {
        dashboard_service,
        theme_service,
    });

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Starting conversion-dashboard on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
