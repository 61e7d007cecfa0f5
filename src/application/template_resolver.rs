// Graph template resolver - Fetch every template referenced by the reports
use crate::application::graph_template_repository::GraphTemplateRepository;
use crate::domain::graph_model::GraphTemplate;
use crate::domain::report::{distinct_graph_types, Report};
use crate::error::MigrationError;
use futures::future::try_join_all;
use std::collections::HashMap;

/// Fetch all distinct graph templates in parallel, keyed by the template name.
///
/// The first failed request fails the whole batch.
pub async fn resolve_graph_templates(
    reports: &[Report],
    repository: &dyn GraphTemplateRepository,
) -> Result<HashMap<String, GraphTemplate>, MigrationError> {
    let graph_types = distinct_graph_types(reports);
    tracing::debug!("Fetching {} distinct graph templates", graph_types.len());

    let templates = try_join_all(
        graph_types
            .iter()
            .map(|graph_type| repository.fetch_graph_template(graph_type)),
    )
    .await?;

    Ok(templates
        .into_iter()
        .map(|template| (template.name.clone(), template))
        .collect())
}
