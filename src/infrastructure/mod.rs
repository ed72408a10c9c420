// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod error;
pub mod file_theme_store;
pub mod http_response;
pub mod json_dataset_repository;
