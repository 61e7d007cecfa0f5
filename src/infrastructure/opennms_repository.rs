// OpenNMS ReST API repository implementation
use crate::application::graph_template_repository::GraphTemplateRepository;
use crate::domain::graph_model::GraphTemplate;
use crate::error::MigrationError;
use crate::infrastructure::rest_client::RestClient;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct OpenNmsRepository {
    client: RestClient,
}

impl OpenNmsRepository {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GraphTemplateRepository for OpenNmsRepository {
    async fn fetch_graph_template(&self, graph_type: &str) -> Result<GraphTemplate, MigrationError> {
        tracing::info!("Getting template for {}...", graph_type);
        let path = format!("/rest/graphs/{}", urlencoding::encode(graph_type));
        self.client.get_json(&path).await
    }
}
