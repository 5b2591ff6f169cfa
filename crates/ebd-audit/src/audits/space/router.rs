use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::batch;
use super::intake::SpaceAuditRequest;
use super::service::{AuditServiceError, SpaceAuditService};

/// Router builder exposing the audit engine over HTTP.
pub fn audit_router(service: Arc<SpaceAuditService>) -> Router {
    Router::new()
        .route("/api/v1/audits", post(audit_handler))
        .route("/api/v1/audits/batch", post(batch_handler))
        .with_state(service)
}

pub(crate) async fn audit_handler(
    State(service): State<Arc<SpaceAuditService>>,
    axum::Json(request): axum::Json<SpaceAuditRequest>,
) -> Response {
    match service.audit(request) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(AuditServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn batch_handler(
    State(service): State<Arc<SpaceAuditService>>,
    body: String,
) -> Response {
    match batch::audit_csv(body.as_bytes(), &service) {
        Ok(outcome) => {
            let payload = json!({
                "non_compliant": outcome.non_compliant(),
                "reports": outcome.reports,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}
