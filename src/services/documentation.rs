use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Foyer Back.
#[openapi(
    paths(crate::routes::health::health),
    components(schemas(crate::dto::health::HealthStatus)),
    tags((name = "health", description = "Liveness probe"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_health_route() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
