// Repository trait for OpenNMS graph template access
use crate::domain::graph_model::GraphTemplate;
use crate::error::MigrationError;
use async_trait::async_trait;

#[async_trait]
pub trait GraphTemplateRepository: Send + Sync {
    /// Fetch the prefab graph definition for a graph type
    async fn fetch_graph_template(&self, graph_type: &str) -> Result<GraphTemplate, MigrationError>;
}
