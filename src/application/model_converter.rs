// Conversion capability from a graph template to a normalized model
use crate::domain::graph_model::{GraphTemplate, NormalizedModel};
use crate::error::MigrationError;

pub trait ModelConverter: Send + Sync {
    /// Build the metrics and series a template renders for one resource
    fn convert(&self, template: &GraphTemplate, resource_id: &str) -> Result<NormalizedModel, MigrationError>;
}
