// Panel builder - Map a normalized graph model onto a Grafana graph panel
use crate::application::model_converter::ModelConverter;
use crate::domain::dashboard::{AttributeTarget, ExpressionTarget, Panel, SeriesOverride, Target};
use crate::domain::graph_model::{GraphTemplate, Metric, NormalizedModel, Series, SeriesType};
use crate::domain::report::GraphReference;
use crate::error::MigrationError;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static NODE_RESOURCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^node\[(.*?)\]\.(.*)$").expect("valid node resource pattern"));

/// State resolved once per run and shared by every panel.
#[derive(Debug, Clone)]
pub struct ConversionContext {
    pub templates: HashMap<String, GraphTemplate>,
    pub datasource: String,
}

impl ConversionContext {
    pub fn new(templates: HashMap<String, GraphTemplate>, datasource: String) -> Self {
        Self {
            templates,
            datasource,
        }
    }

    pub fn template(&self, graph_type: &str) -> Result<&GraphTemplate, MigrationError> {
        self.templates
            .get(graph_type)
            .ok_or_else(|| MigrationError::UnknownGraphTemplate {
                graph_type: graph_type.to_string(),
            })
    }
}

/// Node id and resource path of a `node[<nodeId>].<resourcePath>` resource id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeResource<'a> {
    pub node_id: &'a str,
    pub resource_path: &'a str,
}

pub fn parse_node_resource(resource_id: &str) -> Option<NodeResource<'_>> {
    let captures = NODE_RESOURCE_RE.captures(resource_id)?;
    Some(NodeResource {
        node_id: captures.get(1)?.as_str(),
        resource_path: captures.get(2)?.as_str(),
    })
}

/// A target is hidden unless a named series plots its metric.
pub fn should_hide_target(model: &NormalizedModel, metric: &Metric) -> bool {
    model.first_named_series(metric.name()).is_none()
}

/// Legend label: name of the first named series plotting the metric, else the metric name.
pub fn target_label(model: &NormalizedModel, metric: &Metric) -> String {
    model
        .first_named_series(metric.name())
        .and_then(|s| s.display_name())
        .unwrap_or(metric.name())
        .to_string()
}

/// Grafana query reference: A..Z, then AA, AB, ...
fn ref_id(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

/// Targets for every plottable metric of the model, in metric order.
pub fn build_targets(model: &NormalizedModel) -> Vec<Target> {
    let mut targets = Vec::with_capacity(model.metrics.len());

    for metric in &model.metrics {
        let label = target_label(model, metric);
        let hide = should_hide_target(model, metric);
        let ref_id = ref_id(targets.len());

        match metric {
            Metric::Attribute(attribute) => {
                let Some(resource) = parse_node_resource(&attribute.resource_id) else {
                    tracing::debug!(
                        "Skipping metric {} - resource id {} is not a node resource",
                        attribute.name,
                        attribute.resource_id
                    );
                    continue;
                };
                targets.push(Target::Attribute(AttributeTarget {
                    ref_id,
                    label,
                    node_id: resource.node_id.to_string(),
                    resource_id: resource.resource_path.to_string(),
                    attribute: attribute.attribute.clone(),
                    aggregation: attribute.aggregation.clone(),
                    hide,
                }));
            }
            Metric::Expression(expression) => {
                targets.push(Target::Expression(ExpressionTarget {
                    ref_id,
                    label,
                    expression: expression.expression.clone(),
                    hide,
                }));
            }
        }
    }

    targets
}

/// Colour, fill and stacking of every visible target, taken from the series plotting its metric.
pub fn build_series_overrides(model: &NormalizedModel, targets: &[Target]) -> Vec<SeriesOverride> {
    model
        .metrics
        .iter()
        .filter(|metric| !should_hide_target(model, metric))
        .map(|metric| {
            let series: Vec<&Series> = model
                .series
                .iter()
                .filter(|s| s.metric == metric.name())
                .collect();
            let color = model
                .first_named_series(metric.name())
                .and_then(|s| s.color.clone())
                .or_else(|| series.iter().find_map(|s| s.color.clone()));

            SeriesOverride {
                alias: target_label(model, metric),
                color,
                fill: u32::from(series.iter().any(|s| s.series_type == SeriesType::Area)),
                stack: series.iter().any(|s| s.series_type == SeriesType::Stack),
            }
        })
        .filter(|o| targets.iter().any(|t| !t.is_hidden() && t.label() == o.alias))
        .collect()
}

/// Build the graph panel for one KSC graph. An untitled graph takes the template title.
pub fn build_panel(
    context: &ConversionContext,
    converter: &dyn ModelConverter,
    graph: &GraphReference,
    span: usize,
    panel_id: u32,
) -> Result<Panel, MigrationError> {
    let template = context.template(&graph.graph_type)?;
    let model = converter.convert(template, &graph.resource_id)?;

    let title = match model.title.as_deref() {
        Some(title) if graph.title.trim().is_empty() => title.to_string(),
        _ => graph.title.clone(),
    };

    let mut panel = Panel::graph(panel_id, title, context.datasource.clone(), span)
        .with_vertical_label(model.vertical_label.clone());
    panel.targets = build_targets(&model);
    panel.series_overrides = build_series_overrides(&model, &panel.targets);

    let visible: Vec<&str> = panel.visible_targets().map(Target::label).collect();
    tracing::debug!(
        "Panel {} has {} targets, visible: {:?}",
        panel.title,
        panel.targets.len(),
        visible
    );

    Ok(panel)
}
