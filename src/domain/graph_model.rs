// Graph template and normalized time-series model
use serde::{Deserialize, Serialize};

/// OpenNMS prefab graph definition as returned by `/rest/graphs/{name}`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct GraphTemplate {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub suppress: Vec<String>,
    /// rrdtool graph command with `{rrdN}` placeholders
    #[serde(default)]
    pub command: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttributeMetric {
    pub name: String,
    pub resource_id: String,
    pub attribute: String,
    pub datasource: String,
    pub aggregation: String,
    pub transient: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionMetric {
    pub name: String,
    pub expression: String,
    pub transient: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Metric {
    Attribute(AttributeMetric),
    Expression(ExpressionMetric),
}

impl Metric {
    pub fn name(&self) -> &str {
        match self {
            Metric::Attribute(m) => &m.name,
            Metric::Expression(m) => &m.name,
        }
    }

    #[cfg(test)]
    pub fn is_transient(&self) -> bool {
        match self {
            Metric::Attribute(m) => m.transient,
            Metric::Expression(m) => m.transient,
        }
    }

    pub fn set_transient(&mut self, transient: bool) {
        match self {
            Metric::Attribute(m) => m.transient = transient,
            Metric::Expression(m) => m.transient = transient,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesType {
    Area,
    Line,
    Stack,
    Hidden,
}

/// Legend directive binding a metric to a display name and render style.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub metric: String,
    pub name: Option<String>,
    pub series_type: SeriesType,
    pub color: Option<String>,
}

impl Series {
    pub fn new(metric: &str, name: Option<&str>, series_type: SeriesType, color: Option<&str>) -> Self {
        Self {
            metric: metric.to_string(),
            name: name.map(str::to_string),
            series_type,
            color: color.map(str::to_string),
        }
    }

    pub fn hidden(metric: &str) -> Self {
        Self::new(metric, None, SeriesType::Hidden, None)
    }

    /// Display name, if present and not blank.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedModel {
    pub title: Option<String>,
    pub vertical_label: Option<String>,
    pub metrics: Vec<Metric>,
    pub series: Vec<Series>,
}

impl NormalizedModel {
    /// First series, in model order, that references `metric` and carries a display name.
    pub fn first_named_series(&self, metric: &str) -> Option<&Series> {
        self.series
            .iter()
            .find(|s| s.metric == metric && s.display_name().is_some())
    }

    pub fn is_plotted(&self, metric: &str) -> bool {
        self.series.iter().any(|s| s.metric == metric)
    }

    pub fn metric(&self, name: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.name() == name)
    }
}
