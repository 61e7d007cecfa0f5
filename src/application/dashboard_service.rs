// Dashboard service - Lay out a KSC report as a Grafana dashboard
use crate::application::model_converter::ModelConverter;
use crate::application::panel_builder::{build_panel, ConversionContext};
use crate::domain::dashboard::{Dashboard, Row, GRID_COLUMNS};
use crate::domain::report::Report;
use crate::error::MigrationError;
use std::sync::Arc;

/// Graphs per row, correcting the meaningless 0 to 1.
pub fn effective_graphs_per_line(graphs_per_line: u32) -> usize {
    (graphs_per_line as usize).max(1)
}

/// Columns each panel spans; leftover columns stay empty.
pub fn column_span(graphs_per_line: usize) -> usize {
    (GRID_COLUMNS / graphs_per_line.max(1)).max(1)
}

#[derive(Clone)]
pub struct DashboardService {
    converter: Arc<dyn ModelConverter>,
}

impl DashboardService {
    pub fn new(converter: Arc<dyn ModelConverter>) -> Self {
        Self { converter }
    }

    /// Build the dashboard for a report. Rows are filled left to right and
    /// only as many rows as the graphs need are emitted.
    pub fn build_dashboard(
        &self,
        context: &ConversionContext,
        report: &Report,
    ) -> Result<Dashboard, MigrationError> {
        tracing::info!("Creating dashboard for report {}...", report.title);

        let graphs_per_line = effective_graphs_per_line(report.graphs_per_line);
        let span = column_span(graphs_per_line);

        let mut rows = Vec::with_capacity(report.graphs.len().div_ceil(graphs_per_line));
        let mut panel_id = 0;

        for (index, graphs) in report.graphs.chunks(graphs_per_line).enumerate() {
            let mut panels = Vec::with_capacity(graphs.len());
            for graph in graphs {
                panel_id += 1;
                panels.push(build_panel(
                    context,
                    self.converter.as_ref(),
                    graph,
                    span,
                    panel_id,
                )?);
            }
            rows.push(Row::new(format!("KSC Row {}", index), panels));
        }

        let dashboard = Dashboard::new(report.title.clone(), rows);
        tracing::debug!(
            "Dashboard {} has {} rows and {} panels",
            dashboard.title,
            dashboard.rows.len(),
            dashboard.panels().count()
        );
        Ok(dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::GraphReference;
    use crate::test_support::{mib2_hcbits_template, FixedModelConverter, OFFICE_GATEWAY_RESOURCE};
    use std::collections::HashMap;

    fn service() -> DashboardService {
        DashboardService::new(Arc::new(FixedModelConverter))
    }

    fn context() -> ConversionContext {
        let template = mib2_hcbits_template();
        ConversionContext::new(
            HashMap::from([(template.name.clone(), template)]),
            "ONMS Performance".to_string(),
        )
    }

    fn report(graph_count: usize, graphs_per_line: u32) -> Report {
        Report {
            title: "Office".to_string(),
            graphs_per_line,
            graphs: (0..graph_count)
                .map(|i| {
                    GraphReference::new(
                        "mib2.HCbits",
                        &format!("node[1].interfaceSnmp[eth{}]", i),
                        &format!("eth{}", i),
                    )
                })
                .collect(),
        }
    }

    fn row_sizes(dashboard: &Dashboard) -> Vec<usize> {
        dashboard.rows.iter().map(|r| r.panels.len()).collect()
    }

    #[test]
    fn test_effective_graphs_per_line() {
        assert_eq!(effective_graphs_per_line(0), 1);
        assert_eq!(effective_graphs_per_line(1), 1);
        assert_eq!(effective_graphs_per_line(3), 3);
    }

    #[test]
    fn test_column_span() {
        assert_eq!(column_span(1), 12);
        assert_eq!(column_span(5), 2);
        assert_eq!(column_span(6), 2);
        assert_eq!(column_span(7), 1);
        assert_eq!(column_span(24), 1);
    }

    #[test]
    fn test_single_graph_six_per_line() {
        let dashboard = service().build_dashboard(&context(), &report(1, 6)).unwrap();

        assert_eq!(dashboard.title, "Office");
        assert_eq!(row_sizes(&dashboard), vec![1]);
        assert_eq!(dashboard.rows[0].panels[0].span, 2);
    }

    #[test]
    fn test_zero_graphs_per_line_means_one() {
        let dashboard = service().build_dashboard(&context(), &report(3, 0)).unwrap();

        assert_eq!(row_sizes(&dashboard), vec![1, 1, 1]);
        assert!(dashboard.panels().all(|p| p.span == 12));
    }

    #[test]
    fn test_rows_filled_in_order_without_trailing_empty_row() {
        let dashboard = service().build_dashboard(&context(), &report(5, 2)).unwrap();

        assert_eq!(row_sizes(&dashboard), vec![2, 2, 1]);
        let titles: Vec<&str> = dashboard.panels().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["eth0", "eth1", "eth2", "eth3", "eth4"]);
        let ids: Vec<u32> = dashboard.panels().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(dashboard.rows[2].title, "KSC Row 2");

        // Exact multiple of graphs per line
        let dashboard = service().build_dashboard(&context(), &report(4, 2)).unwrap();
        assert_eq!(row_sizes(&dashboard), vec![2, 2]);
    }

    #[test]
    fn test_report_without_graphs() {
        let dashboard = service().build_dashboard(&context(), &report(0, 2)).unwrap();
        assert!(dashboard.rows.is_empty());
    }

    #[test]
    fn test_reference_report_has_two_visible_targets() {
        let mut report = report(1, 1);
        report.graphs[0].resource_id = OFFICE_GATEWAY_RESOURCE.to_string();
        let dashboard = service().build_dashboard(&context(), &report).unwrap();

        assert_eq!(dashboard.rows.len(), 1);
        assert_eq!(dashboard.rows[0].panels.len(), 1);
        assert_eq!(dashboard.rows[0].panels[0].visible_targets().count(), 2);
    }

    #[test]
    fn test_build_is_deterministic() {
        let report = report(3, 2);
        let first = service().build_dashboard(&context(), &report).unwrap();
        let second = service().build_dashboard(&context(), &report).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
