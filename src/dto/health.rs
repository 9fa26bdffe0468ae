use serde::Serialize;
use utoipa::ToSchema;

/// Liveness payload returned by the `/health` route.
///
/// Built fresh for every request and dropped once serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthStatus {
    /// Confirmation that the process is accepting requests.
    #[schema(example = "TP Foyer is running ✅")]
    pub message: String,
}

impl HealthStatus {
    /// Create the liveness marker for `service_name`.
    pub fn running(service_name: &str) -> Self {
        Self {
            message: format!("{service_name} is running ✅"),
        }
    }
}
