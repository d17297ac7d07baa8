use serde::Serialize;
use warp::reply::{self, Response};
use warp::Reply;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// `GET /health`: liveness probe, always `{"status":"ok"}` while the server runs.
pub fn health() -> Response {
    reply::json(&HealthStatus { status: "ok" }).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_ok() {
        let body = serde_json::to_string(&HealthStatus { status: "ok" }).unwrap();
        assert_eq!(body, r#"{"status":"ok"}"#);
        assert_eq!(health().status(), warp::http::StatusCode::OK);
    }
}
