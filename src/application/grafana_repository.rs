// Repository trait for Grafana API access
use crate::domain::dashboard::{Dashboard, SavedDashboard};
use crate::domain::datasource::DataSource;
use crate::error::MigrationError;
use async_trait::async_trait;
use serde::Serialize;

/// Body of `POST /api/dashboards/db`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveDashboardRequest {
    pub dashboard: Dashboard,
    pub folder_id: u64,
    pub overwrite: bool,
    /// Legacy spelling, sent alongside `overwrite`
    #[serde(rename = "override")]
    pub override_existing: bool,
}

impl SaveDashboardRequest {
    /// Save into the General folder, replacing any dashboard with the same title.
    pub fn overwrite_in_root(dashboard: Dashboard) -> Self {
        Self {
            dashboard,
            folder_id: 0,
            overwrite: true,
            override_existing: true,
        }
    }
}

#[async_trait]
pub trait GrafanaRepository: Send + Sync {
    /// List all configured data sources
    async fn list_data_sources(&self) -> Result<Vec<DataSource>, MigrationError>;

    /// Create or replace a dashboard
    async fn save_dashboard(&self, request: &SaveDashboardRequest) -> Result<SavedDashboard, MigrationError>;
}
