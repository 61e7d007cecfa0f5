// Migration service - Use case converting KSC reports into Grafana dashboards
use crate::application::dashboard_service::DashboardService;
use crate::application::datasource_resolver::resolve_performance_data_source;
use crate::application::grafana_repository::GrafanaRepository;
use crate::application::graph_template_repository::GraphTemplateRepository;
use crate::application::panel_builder::ConversionContext;
use crate::application::publisher::publish_dashboard;
use crate::application::template_resolver::resolve_graph_templates;
use crate::domain::dashboard::SavedDashboard;
use crate::domain::report::Report;
use crate::error::MigrationError;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishMode {
    /// Save every dashboard through the Grafana API
    Publish,
    /// Print the dashboard JSON instead of saving it
    DryRun,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    Published(SavedDashboard),
    Rendered(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportFailure {
    pub title: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct MigrationSummary {
    pub succeeded: Vec<(String, ReportOutcome)>,
    pub failed: Vec<ReportFailure>,
}

impl MigrationSummary {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// Turn any per-report failure into an error for the caller.
    pub fn ensure_success(self) -> Result<Self, MigrationError> {
        if self.failed.is_empty() {
            Ok(self)
        } else {
            Err(MigrationError::ReportsFailed {
                failed: self.failed.len(),
                total: self.total(),
            })
        }
    }
}

#[derive(Clone)]
pub struct MigrationService {
    onms: Arc<dyn GraphTemplateRepository>,
    grafana: Arc<dyn GrafanaRepository>,
    dashboards: DashboardService,
    mode: PublishMode,
}

impl MigrationService {
    pub fn new(
        onms: Arc<dyn GraphTemplateRepository>,
        grafana: Arc<dyn GrafanaRepository>,
        dashboards: DashboardService,
        mode: PublishMode,
    ) -> Self {
        Self {
            onms,
            grafana,
            dashboards,
            mode,
        }
    }

    /// Run the whole migration.
    ///
    /// A missing performance data source or a failed template fetch aborts
    /// the run. Reports are then processed in order; each report failure is
    /// logged and recorded in the summary without stopping the others.
    pub async fn migrate(&self, reports: &[Report]) -> Result<MigrationSummary, MigrationError> {
        let datasource = resolve_performance_data_source(self.grafana.as_ref())
            .await?
            .ok_or(MigrationError::NoPerformanceDataSource)?;
        tracing::info!("Using performance data source {}", datasource);

        if reports.is_empty() {
            tracing::warn!("There are no reports on the configuration file");
            return Ok(MigrationSummary::default());
        }

        let templates = resolve_graph_templates(reports, self.onms.as_ref()).await?;
        let context = ConversionContext::new(templates, datasource);

        let mut summary = MigrationSummary::default();
        for report in reports {
            match self.migrate_report(&context, report).await {
                Ok(outcome) => summary.succeeded.push((report.title.clone(), outcome)),
                Err(e) => {
                    tracing::error!("Cannot migrate report {}: {}", report.title, e);
                    summary.failed.push(ReportFailure {
                        title: report.title.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            "Migrated {} of {} reports",
            summary.succeeded.len(),
            summary.total()
        );
        Ok(summary)
    }

    async fn migrate_report(
        &self,
        context: &ConversionContext,
        report: &Report,
    ) -> Result<ReportOutcome, MigrationError> {
        let dashboard = self.dashboards.build_dashboard(context, report)?;

        match self.mode {
            PublishMode::Publish => {
                let saved = publish_dashboard(self.grafana.as_ref(), dashboard).await?;
                Ok(ReportOutcome::Published(saved))
            }
            PublishMode::DryRun => {
                let json = serde_json::to_string_pretty(&dashboard)?;
                println!("{}", json);
                Ok(ReportOutcome::Rendered(json))
            }
        }
    }
}
