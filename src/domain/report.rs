// KSC report domain model
use serde::Deserialize;
use std::collections::HashSet;

/// Root element of a KSC configuration file (`ksc-performance-reports.xml`).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ReportsList {
    #[serde(rename = "Report", default)]
    pub reports: Vec<Report>,
}

/// A named grid of graphs, converted into exactly one Grafana dashboard.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Report {
    #[serde(rename = "@title")]
    pub title: String,
    #[serde(rename = "@graphs_per_line", default)]
    pub graphs_per_line: u32,
    #[serde(rename = "Graph", default)]
    pub graphs: Vec<GraphReference>,
}

/// One graph of a report: which prefab graph to render for which resource.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GraphReference {
    #[serde(rename = "@graphtype")]
    pub graph_type: String,
    #[serde(rename = "@resourceId")]
    pub resource_id: String,
    #[serde(rename = "@title", default)]
    pub title: String,
}

impl GraphReference {
    #[cfg(test)]
    pub fn new(graph_type: &str, resource_id: &str, title: &str) -> Self {
        Self {
            graph_type: graph_type.to_string(),
            resource_id: resource_id.to_string(),
            title: title.to_string(),
        }
    }
}

/// Distinct graph types referenced by any report, in first-seen order.
pub fn distinct_graph_types(reports: &[Report]) -> Vec<String> {
    let mut seen = HashSet::new();
    reports
        .iter()
        .flat_map(|r| r.graphs.iter())
        .filter(|g| seen.insert(g.graph_type.as_str()))
        .map(|g| g.graph_type.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(title: &str, graph_types: &[&str]) -> Report {
        Report {
            title: title.to_string(),
            graphs_per_line: 1,
            graphs: graph_types
                .iter()
                .map(|t| GraphReference::new(t, "node[1].nodeSnmp[]", t))
                .collect(),
        }
    }

    #[test]
    fn test_distinct_graph_types() {
        let reports = vec![
            report("A", &["mib2.HCbits", "netsnmp.cpuStats"]),
            report("B", &["netsnmp.cpuStats", "mib2.HCbits", "icmp"]),
            report("C", &[]),
        ];

        assert_eq!(
            distinct_graph_types(&reports),
            vec!["mib2.HCbits", "netsnmp.cpuStats", "icmp"]
        );
    }
}
