//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error responses so the
//! presentation layer can render every failure directly. Domain outcomes
//! (conflict, policy block, PIN mismatch, not found) are ordinary values;
//! only storage failures surface as 500s.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use roombook_core::errors::BookingError;

/// Application error wrapper that provides HTTP status code mapping.
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::Conflict(_) => StatusCode::CONFLICT,
            BookingError::PolicyBlocked(_) => StatusCode::UNPROCESSABLE_ENTITY,
            BookingError::PinMismatch => StatusCode::FORBIDDEN,
            BookingError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            BookingError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.0.to_string();
        let body = Json(json!({ "success": false, "error": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on functions returning `BookingResult` inside handlers.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Wraps raw storage-layer failures.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Storage(err))
    }
}
