use crate::model::ErrorResponse;
use axum::http::{Method, StatusCode, Uri};
use axum::Json;
use tracing::debug;

/// Answers every request no route claims, including a known path with an
/// unregistered method.
pub async fn unknown_endpoint(method: Method, uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    debug!(%method, %uri, "unknown endpoint");
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("unknown endpoint")),
    )
}
