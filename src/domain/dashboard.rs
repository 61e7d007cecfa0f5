// Grafana dashboard domain model (row based dashboard JSON)
use serde::{Deserialize, Serialize};

/// Number of grid columns in a Grafana row.
pub const GRID_COLUMNS: usize = 12;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub id: Option<u64>,
    pub title: String,
    pub tags: Vec<String>,
    pub style: String,
    pub timezone: String,
    pub editable: bool,
    pub hide_controls: bool,
    pub shared_crosshair: bool,
    pub time: TimeRange,
    pub schema_version: u32,
    pub version: u32,
    pub rows: Vec<Row>,
}

impl Dashboard {
    pub fn new(title: String, rows: Vec<Row>) -> Self {
        Self {
            id: None,
            title,
            tags: vec!["ksc".to_string()],
            style: "dark".to_string(),
            timezone: "browser".to_string(),
            editable: true,
            hide_controls: false,
            shared_crosshair: false,
            time: TimeRange::default(),
            schema_version: 16,
            version: 0,
            rows,
        }
    }

    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.rows.iter().flat_map(|r| r.panels.iter())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
}

impl Default for TimeRange {
    fn default() -> Self {
        Self {
            from: "now-24h".to_string(),
            to: "now".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub title: String,
    pub show_title: bool,
    pub collapse: bool,
    pub editable: bool,
    pub height: String,
    pub panels: Vec<Panel>,
}

impl Row {
    pub fn new(title: String, panels: Vec<Panel>) -> Self {
        Self {
            title,
            show_title: false,
            collapse: false,
            editable: true,
            height: "250px".to_string(),
            panels,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub datasource: String,
    pub span: usize,
    pub legend: Legend,
    pub lines: bool,
    pub fill: u32,
    pub linewidth: u32,
    pub yaxes: Vec<YAxis>,
    pub series_overrides: Vec<SeriesOverride>,
    pub targets: Vec<Target>,
}

impl Panel {
    pub fn graph(id: u32, title: String, datasource: String, span: usize) -> Self {
        Self {
            id,
            kind: "graph".to_string(),
            title,
            datasource,
            span,
            legend: Legend::default(),
            lines: true,
            fill: 1,
            linewidth: 2,
            yaxes: vec![YAxis::default(), YAxis::default()],
            series_overrides: Vec::new(),
            targets: Vec::new(),
        }
    }

    pub fn with_vertical_label(mut self, label: Option<String>) -> Self {
        if let Some(axis) = self.yaxes.first_mut() {
            axis.label = label;
        }
        self
    }

    pub fn visible_targets(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter().filter(|t| !t.is_hidden())
    }
}

/// Table aligned legend showing min, max, average and current values.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub show: bool,
    pub align_as_table: bool,
    pub min: bool,
    pub max: bool,
    pub avg: bool,
    pub current: bool,
    pub values: bool,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            show: true,
            align_as_table: true,
            min: true,
            max: true,
            avg: true,
            current: true,
            values: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YAxis {
    pub format: String,
    pub label: Option<String>,
    pub show: bool,
}

impl Default for YAxis {
    fn default() -> Self {
        Self {
            format: "short".to_string(),
            label: None,
            show: true,
        }
    }
}

/// Per-series render settings, matched on the target label.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesOverride {
    pub alias: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub fill: u32,
    pub stack: bool,
}

/// Helm performance data source query.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Target {
    Attribute(AttributeTarget),
    Expression(ExpressionTarget),
}

impl Target {
    pub fn label(&self) -> &str {
        match self {
            Target::Attribute(t) => &t.label,
            Target::Expression(t) => &t.label,
        }
    }

    pub fn is_hidden(&self) -> bool {
        match self {
            Target::Attribute(t) => t.hide,
            Target::Expression(t) => t.hide,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttributeTarget {
    pub ref_id: String,
    pub label: String,
    pub node_id: String,
    pub resource_id: String,
    pub attribute: String,
    pub aggregation: String,
    pub hide: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionTarget {
    pub ref_id: String,
    pub label: String,
    pub expression: String,
    pub hide: bool,
}

/// Grafana response to `POST /api/dashboards/db`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SavedDashboard {
    pub id: u64,
    pub uid: String,
    pub url: String,
}
