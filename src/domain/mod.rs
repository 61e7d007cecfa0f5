// Domain layer - Reports, graph models and Grafana objects
pub mod dashboard;
pub mod datasource;
pub mod graph_model;
pub mod report;
