// Grafana HTTP API repository implementation
use crate::application::grafana_repository::{GrafanaRepository, SaveDashboardRequest};
use crate::domain::dashboard::SavedDashboard;
use crate::domain::datasource::DataSource;
use crate::error::MigrationError;
use crate::infrastructure::rest_client::RestClient;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct GrafanaRestRepository {
    client: RestClient,
}

impl GrafanaRestRepository {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GrafanaRepository for GrafanaRestRepository {
    async fn list_data_sources(&self) -> Result<Vec<DataSource>, MigrationError> {
        self.client.get_json("/api/datasources").await
    }

    async fn save_dashboard(&self, request: &SaveDashboardRequest) -> Result<SavedDashboard, MigrationError> {
        self.client.post_json("/api/dashboards/db", request).await
    }
}
