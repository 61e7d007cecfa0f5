// Main entry point - Dependency injection and migration run
mod application;
mod domain;
mod error;
mod infrastructure;
mod presentation;
#[cfg(test)]
mod test_support;

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::migration_service::{MigrationService, PublishMode};
use crate::infrastructure::config::load_settings;
use crate::infrastructure::grafana_rest_repository::GrafanaRestRepository;
use crate::infrastructure::ksc_config::load_ksc_reports;
use crate::infrastructure::opennms_repository::OpenNmsRepository;
use crate::infrastructure::rest_client::RestClient;
use crate::infrastructure::rrd_graph_converter::RrdGraphConverter;
use crate::presentation::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing, RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration; a bad KSC file fails before any network call
    let settings = load_settings(&cli.overrides()).context("Cannot load settings")?;
    let reports = load_ksc_reports(&cli.ksc_reports_config_file)?;

    // Create repositories (infrastructure layer)
    let onms = Arc::new(OpenNmsRepository::new(RestClient::new(&settings.onms)));
    let grafana = Arc::new(GrafanaRestRepository::new(RestClient::new(&settings.grafana)));

    // Create services (application layer)
    let dashboards = DashboardService::new(Arc::new(RrdGraphConverter));
    let mode = if cli.dry_run {
        PublishMode::DryRun
    } else {
        PublishMode::Publish
    };
    let service = MigrationService::new(onms, grafana, dashboards, mode);

    service
        .migrate(&reports)
        .await
        .context("Something unexpected has happened while processing the KSC reports")?
        .ensure_success()?;

    Ok(())
}
