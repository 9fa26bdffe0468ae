use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, header::ACCEPT},
    response::{IntoResponse, Response},
    routing::get,
};
use crate::{dto::health::HealthStatus, services::health_service, state::SharedState};

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Process is alive", content(
            (String = "text/plain"),
            (HealthStatus = "application/json")
        ))
    )
)]
/// Liveness probe: answers with a fixed confirmation message while the process is running.
///
/// Plain text by default, JSON when the client prefers `application/json`.
pub async fn health(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let status = health_service::health_status(&state);

    if accepts_json(&headers) {
        Json(status).into_response()
    } else {
        status.message.into_response()
    }
}

/// Whether the client prefers JSON over plain text.
///
/// JSON wins only when `application/json` carries a non-zero quality strictly above the
/// best of `text/plain`, `text/*` and `*/*`.
fn accepts_json(headers: &HeaderMap) -> bool {
    let mut json_q: f32 = 0.0;
    let mut text_q: f32 = 0.0;

    let ranges = headers
        .get_all(ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .filter_map(parse_media_range);

    for (essence, q) in ranges {
        if essence.eq_ignore_ascii_case("application/json") {
            json_q = json_q.max(q);
        } else if essence.eq_ignore_ascii_case("text/plain")
            || essence.eq_ignore_ascii_case("text/*")
            || essence == "*/*"
        {
            text_q = text_q.max(q);
        }
    }

    json_q > 0.0 && json_q > text_q
}

/// Split one `Accept` entry into its media type and quality. Entries with a malformed
/// `q` are skipped.
fn parse_media_range(range: &str) -> Option<(&str, f32)> {
    let mut parts = range.split(';');
    let essence = parts.next()?.trim();
    if essence.is_empty() {
        return None;
    }

    let mut q = 1.0;
    for param in parts {
        if let Some((name, value)) = param.split_once('=') {
            if name.trim().eq_ignore_ascii_case("q") {
                q = value
                    .trim()
                    .parse::<f32>()
                    .ok()
                    .filter(|weight| (0.0..=1.0).contains(weight))?;
            }
        }
    }

    Some((essence, q))
}

/// Configure the health routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn with_accept(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn missing_accept_means_plain_text() {
        assert!(!accepts_json(&HeaderMap::new()));
    }

    #[test]
    fn wildcard_accept_means_plain_text() {
        assert!(!accepts_json(&with_accept("*/*")));
    }

    #[test]
    fn json_is_detected_among_alternatives() {
        assert!(accepts_json(&with_accept("text/html, application/json;q=0.9")));
        assert!(accepts_json(&with_accept("Application/JSON")));
    }

    #[test]
    fn refused_json_means_plain_text() {
        assert!(!accepts_json(&with_accept("application/json;q=0")));
        assert!(!accepts_json(&with_accept("text/plain, application/json;q=0")));
    }

    #[test]
    fn higher_ranked_text_means_plain_text() {
        assert!(!accepts_json(&with_accept("text/plain;q=1, application/json;q=0.5")));
        assert!(!accepts_json(&with_accept("application/json;q=0.8, text/*;q=0.8")));
        assert!(!accepts_json(&with_accept("application/json;q=0.5, */*")));
    }

    #[test]
    fn json_ranked_above_wildcard_is_json() {
        assert!(accepts_json(&with_accept("application/json, */*;q=0.8")));
    }

    #[test]
    fn malformed_quality_is_ignored() {
        assert!(!accepts_json(&with_accept("application/json;q=high")));
        assert!(accepts_json(&with_accept("application/json;q=2, application/json")));
    }

    #[test]
    fn json_suffix_types_are_not_json() {
        assert!(!accepts_json(&with_accept("application/problem+json")));
    }
}
