/// OpenAPI documentation generation.
pub mod documentation;
/// Liveness service.
pub mod health_service;
