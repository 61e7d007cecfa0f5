// Error taxonomy for a KSC to Grafana migration run
use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("cannot read config file {}: {source}", .path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse KSC configuration XML: {0}")]
    InvalidXml(String),

    #[error("the provided XML is not a KSC configuration XML file (root element is <{root}>)")]
    NotKscConfiguration { root: String },

    #[error("there is no Helm performance data source, please configure one in Grafana")]
    NoPerformanceDataSource,

    #[error("request to {url} failed with status {status}: {body}")]
    Http {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("graph template {graph_type} has not been fetched from OpenNMS")]
    UnknownGraphTemplate { graph_type: String },

    #[error("graph template {template} has an invalid command token '{token}'")]
    InvalidGraphCommand { template: String, token: String },

    #[error("cannot convert RPN expression '{expression}' of metric {metric}: {reason}")]
    InvalidRpn {
        metric: String,
        expression: String,
        reason: String,
    },

    #[error("cannot serialize dashboard: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{failed} of {total} reports could not be migrated")]
    ReportsFailed { failed: usize, total: usize },
}
