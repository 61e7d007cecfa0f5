// Grafana data source
use serde::Deserialize;

/// Plugin type of the OpenNMS Helm performance data source.
pub const PERFORMANCE_DATASOURCE_TYPE: &str = "opennms-helm-performance-datasource";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DataSource {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl DataSource {
    #[cfg(test)]
    pub fn new(name: &str, kind: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            kind: kind.to_string(),
            url: None,
        }
    }

    pub fn is_performance(&self) -> bool {
        self.kind == PERFORMANCE_DATASOURCE_TYPE
    }
}
