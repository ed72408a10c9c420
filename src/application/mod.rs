// Application layer - Use cases and ports
pub mod dashboard_service;
pub mod dataset_repository;
pub mod series_builder;
pub mod theme_service;
pub mod theme_store;
pub mod view_pipeline;
