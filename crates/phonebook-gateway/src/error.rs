use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use phonebook_core::StoreError;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

/// Every failure a handler can report.
///
/// The set is closed: each variant carries its own status and body, so
/// nothing reaches the client without a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("content missing")]
    MissingField,
    #[error("name must be unique")]
    DuplicateName,
    #[error("not found")]
    NotFound,
    #[error("malformatted id")]
    MalformedId,
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingField
            | AppError::DuplicateName
            | AppError::MalformedId
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::DuplicateName(_) => AppError::DuplicateName,
            StoreError::MalformedId(_) => AppError::MalformedId,
            StoreError::Validation(message) => AppError::Validation(message),
            StoreError::Unsupported(_)
            | StoreError::Unavailable(_)
            | StoreError::Timeout(_)
            | StoreError::Query(_)
            | StoreError::InvalidData(_) => AppError::Internal(error.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::NotFound => {
                debug!("record not found");
                return status.into_response();
            }
            AppError::Internal(message) => error!(error = %message, "request failed"),
            other => warn!(error = %other, status = status.as_u16(), "request rejected"),
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(error: AppError) -> (StatusCode, String) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn store_errors_map_to_one_variant_each() {
        assert_eq!(
            AppError::from(StoreError::DuplicateName("Ada".into())),
            AppError::DuplicateName
        );
        assert_eq!(
            AppError::from(StoreError::MalformedId("x".into())),
            AppError::MalformedId
        );
        assert_eq!(
            AppError::from(StoreError::Validation("too short".into())),
            AppError::Validation("too short".into())
        );
        assert_eq!(
            AppError::from(StoreError::Timeout("pool".into())),
            AppError::Internal("storage operation timed out: pool".into())
        );
        assert_eq!(
            AppError::from(StoreError::Unsupported("update")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn missing_field_body() {
        let (status, body) = body_of(AppError::MissingField).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"content missing"}"#);
    }

    #[tokio::test]
    async fn duplicate_name_body() {
        let (status, body) = body_of(AppError::DuplicateName).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"name must be unique"}"#);
    }

    #[tokio::test]
    async fn malformed_id_body() {
        let (status, body) = body_of(AppError::MalformedId).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"malformatted id"}"#);
    }

    #[tokio::test]
    async fn validation_echoes_message() {
        let (status, body) = body_of(AppError::Validation("name too short".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"name too short"}"#);
    }

    #[tokio::test]
    async fn internal_echoes_message() {
        let (status, body) = body_of(AppError::Internal("db down".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"error":"db down"}"#);
    }

    #[tokio::test]
    async fn not_found_has_empty_body() {
        let (status, body) = body_of(AppError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }
}
