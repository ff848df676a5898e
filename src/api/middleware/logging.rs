//! Request/response logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::info;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Log every request and its outcome, tagging both with a request id.
///
/// The id is taken from `x-request-id` when the client sends one and echoed
/// back on the response. No span is opened here; `TraceLayer` owns spans.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = extract_path(&request);
    let request_id = extract_request_id(&request);
    let headers_log = redact_headers(&request);

    info!(
        method = %method,
        path = %path,
        request_id = %request_id,
        headers = %headers_log,
        "Incoming request"
    );

    let mut response = next.run(request).await;

    info!(
        method = %method,
        path = %path,
        status = %response.status().as_u16(),
        duration_ms = %start.elapsed().as_millis(),
        request_id = %request_id,
        "Request completed"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

fn extract_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn extract_request_id(request: &Request<Body>) -> String {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

/// Render the loggable headers, hiding credentials
fn redact_headers(request: &Request<Body>) -> String {
    request
        .headers()
        .iter()
        .filter(|(name, _)| should_log_header(name.as_str()))
        .map(|(name, value)| {
            let value = if is_sensitive_header(name.as_str()) {
                "[REDACTED]"
            } else {
                value.to_str().unwrap_or("[invalid]")
            };
            format!("{}={}", name.as_str(), value)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_sensitive_header(name: &str) -> bool {
    matches!(
        name,
        "authorization" | "cookie" | "set-cookie" | "proxy-authorization"
    )
}

fn should_log_header(name: &str) -> bool {
    matches!(
        name,
        "content-type"
            | "content-length"
            | "accept"
            | "user-agent"
            | "referer"
            | "x-request-id"
            | "x-forwarded-for"
            | "authorization"
            | "cookie"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sensitive_header() {
        assert!(is_sensitive_header("authorization"));
        assert!(is_sensitive_header("cookie"));
        assert!(!is_sensitive_header("content-type"));
    }

    #[test]
    fn test_redact_headers() {
        let request = Request::post("/predict")
            .header("content-type", "application/x-www-form-urlencoded")
            .header("cookie", "session=abc")
            .header("cache-control", "no-cache")
            .body(Body::empty())
            .unwrap();

        let logged = redact_headers(&request);
        assert!(logged.contains("content-type=application/x-www-form-urlencoded"));
        assert!(logged.contains("cookie=[REDACTED]"));
        assert!(!logged.contains("session=abc"));
        assert!(!logged.contains("cache-control"));
    }

    #[test]
    fn test_request_id_from_header() {
        let request = Request::get("/")
            .header(REQUEST_ID_HEADER, "req-42")
            .body(Body::empty())
            .unwrap();

        assert_eq!(extract_request_id(&request), "req-42");
    }

    #[test]
    fn test_request_id_generated() {
        let request = Request::get("/").body(Body::empty()).unwrap();

        assert!(uuid::Uuid::parse_str(&extract_request_id(&request)).is_ok());
    }
}
