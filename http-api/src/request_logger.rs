//! Request logging middleware for the HTTP API
//!
//! Emits a single structured event per request with method, path,
//! status, and timing.

use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};
use std::time::Instant;

/// Maximum length for logged query strings before truncation
const MAX_QUERY_LENGTH: usize = 120;

/// Truncation suffix for long query strings
const TRUNCATION_SUFFIX: &str = "...";

/// Per-request logging middleware
pub async fn request_logging_middleware(
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let start_time = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request
        .uri()
        .query()
        .map(|q| truncate_string(q, MAX_QUERY_LENGTH));

    let response = next.run(request).await;
    let duration = start_time.elapsed();
    let status = response.status();

    tracing::info!(
        method = %method,
        path = %path,
        query = query.as_deref().unwrap_or(""),
        status = status.as_u16(),
        duration_ms = duration.as_millis() as u64,
        "request completed"
    );

    Ok(response)
}

/// Truncate string to max length with suffix
fn truncate_string(input: &str, max_length: usize) -> String {
    if input.len() <= max_length {
        input.to_string()
    } else {
        let truncated_length = max_length.saturating_sub(TRUNCATION_SUFFIX.len());
        format!("{}{}", &input[..truncated_length], TRUNCATION_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(
            truncate_string("this is a very long string", 10),
            "this is..."
        );
        assert_eq!(truncate_string("exactly10c", 10), "exactly10c");
    }
}
