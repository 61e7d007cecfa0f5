// Application layer - Use cases and the ports they depend on
pub mod dashboard_service;
pub mod datasource_resolver;
pub mod grafana_repository;
pub mod graph_template_repository;
pub mod migration_service;
pub mod model_converter;
pub mod panel_builder;
pub mod publisher;
pub mod template_resolver;
