// Ingestion layer - configuration and the JSON boundary to the backend
pub mod config;
pub mod series_source;
