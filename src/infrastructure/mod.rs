// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod grafana_rest_repository;
pub mod ksc_config;
pub mod opennms_repository;
pub mod rest_client;
pub mod rpn;
pub mod rrd_graph_converter;
