// Publisher - Save dashboards to Grafana
use crate::application::grafana_repository::{GrafanaRepository, SaveDashboardRequest};
use crate::domain::dashboard::{Dashboard, SavedDashboard};
use crate::error::MigrationError;

/// Save a dashboard into the root folder, overwriting any dashboard with the same title.
pub async fn publish_dashboard(
    repository: &dyn GrafanaRepository,
    dashboard: Dashboard,
) -> Result<SavedDashboard, MigrationError> {
    tracing::info!("Saving dashboard {}...", dashboard.title);

    let request = SaveDashboardRequest::overwrite_in_root(dashboard);
    let saved = repository.save_dashboard(&request).await?;

    tracing::info!(
        "Dashboard created; id={}, uid={}, url={}",
        saved.id,
        saved.uid,
        saved.url
    );
    Ok(saved)
}
