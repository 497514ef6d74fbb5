use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use folio_core::CatalogError;
use folio_core::api::types::ApiResponse;

pub type AppResult<T> = Result<T, AppError>;

/// HTTP-facing error carrying the status code and the envelope message.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ApiResponse::<()>::failure(self.message));

        (self.status, body).into_response()
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(msg) => Self::not_found(msg),
            // Duplicate names answer 200 with a failure message. Long-standing
            // API behavior that clients rely on, so it stays.
            CatalogError::AlreadyExists(msg) => Self::new(StatusCode::OK, msg),
            CatalogError::Internal(msg) => Self::internal(msg),
            _ => Self::internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_with_inner_message() {
        let err = AppError::from(CatalogError::NotFound(
            "cannot find author with id 1".to_string(),
        ));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "cannot find author with id 1");
    }

    #[test]
    fn already_exists_answers_200() {
        let err = AppError::from(CatalogError::AlreadyExists(
            "book with name Dune already exists".to_string(),
        ));
        assert_eq!(err.status, StatusCode::OK);
        assert_eq!(err.message, "book with name Dune already exists");
    }

    #[test]
    fn unexpected_failures_collapse_to_500() {
        let err = AppError::from(CatalogError::Internal("pool exhausted".to_string()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "pool exhausted");
    }
}
