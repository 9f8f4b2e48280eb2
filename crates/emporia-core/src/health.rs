use axum::http::StatusCode;

/// Handler for `GET /healthz` — process liveness only. Readiness lives in
/// each service, where it can ping the service's own database.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
