// Data source resolver - Locate the Helm performance data source
use crate::application::grafana_repository::GrafanaRepository;
use crate::domain::datasource::DataSource;
use crate::error::MigrationError;

/// Name of the first performance data source in the list.
pub fn find_performance_data_source(data_sources: &[DataSource]) -> Option<&str> {
    data_sources
        .iter()
        .find(|ds| ds.is_performance())
        .map(|ds| ds.name.as_str())
}

/// Fetch Grafana's data sources and return the performance one, if configured.
pub async fn resolve_performance_data_source(
    repository: &dyn GrafanaRepository,
) -> Result<Option<String>, MigrationError> {
    let data_sources = repository.list_data_sources().await?;
    tracing::debug!("Grafana has {} data sources", data_sources.len());

    Ok(find_performance_data_source(&data_sources).map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::datasource::PERFORMANCE_DATASOURCE_TYPE;

    #[test]
    fn test_find_performance_data_source() {
        let data_sources = vec![
            DataSource::new("Prometheus", "prometheus"),
            DataSource::new("ONMS Performance", PERFORMANCE_DATASOURCE_TYPE),
            DataSource::new("ONMS Performance 2", PERFORMANCE_DATASOURCE_TYPE),
        ];

        assert_eq!(find_performance_data_source(&data_sources), Some("ONMS Performance"));
    }

    #[test]
    fn test_missing_performance_data_source() {
        let data_sources = vec![
            DataSource::new("Prometheus", "prometheus"),
            DataSource::new("ONMS Flows", "opennms-helm-flow-datasource"),
        ];

        assert_eq!(find_performance_data_source(&data_sources), None);
        assert_eq!(find_performance_data_source(&[]), None);
    }
}
