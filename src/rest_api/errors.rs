//! # REST API Errors
//!
//! Every failure the API reports goes through [`ApiError`], which renders
//! the uniform `{message, reason?}` body with the status carried separately.

use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::{log_event_with_fields, Event};
use crate::validation::ValidationError;

/// Result type for REST handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// No book with the requested id
    #[error("Book not found")]
    BookNotFound,

    /// No route for this method and path
    #[error("Endpoint [{method}] {path} does not exist")]
    EndpointNotFound { method: String, path: String },

    /// Payload failed validation
    #[error("Validation failed")]
    Validation(#[from] ValidationError),

    /// Body is not valid JSON
    #[error("Malformed JSON body")]
    MalformedBody(String),

    /// Request could not be extracted (bad path segment, body too large).
    /// Keeps the extractor's status; its text becomes the reason.
    #[error("Invalid request")]
    Rejected { status: StatusCode, detail: String },

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Anything else. The detail is logged, never sent to the client.
    #[error("Unknown error happened")]
    Internal(String),
}

impl ApiError {
    pub fn endpoint_not_found(method: &Method, path: &str) -> Self {
        ApiError::EndpointNotFound {
            method: method.to_string(),
            path: path.to_string(),
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BookNotFound | ApiError::EndpointNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Optional detail sent alongside the message
    pub fn reason(&self) -> Option<String> {
        match self {
            ApiError::Validation(err) => Some(err.to_string()),
            ApiError::MalformedBody(detail) | ApiError::Rejected { detail, .. } => {
                Some(detail.clone())
            }
            ApiError::BookNotFound
            | ApiError::EndpointNotFound { .. }
            | ApiError::Internal(_) => None,
        }
    }

    fn log(&self) {
        let status = self.status_code();

        if let ApiError::Internal(detail) = self {
            log_event_with_fields(
                Event::RequestFailed,
                &[("status", status.as_str()), ("detail", detail.as_str())],
            );
            return;
        }

        let message = self.to_string();
        let reason = self.reason();
        let fields = rejection_fields(status.as_str(), &message, reason.as_deref());
        log_event_with_fields(Event::RequestRejected, &fields);
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

/// Log fields for a client error. `reason` is left out when there is none.
fn rejection_fields<'a>(
    status: &'a str,
    message: &'a str,
    reason: Option<&'a str>,
) -> Vec<(&'static str, &'a str)> {
    let mut fields = vec![("status", status), ("message", message)];
    if let Some(reason) = reason {
        fields.push(("reason", reason));
    }
    fields
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            message: err.to_string(),
            reason: err.reason(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::BookNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::endpoint_not_found(&Method::PATCH, "/nope").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(ValidationError::EmptyUpdate).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::MalformedBody("eof".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("lock poisoned".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_endpoint_message() {
        let err = ApiError::endpoint_not_found(&Method::POST, "/api/authors");
        assert_eq!(err.to_string(), "Endpoint [POST] /api/authors does not exist");
    }

    #[test]
    fn test_validation_body_carries_reason() {
        let body = ErrorResponse::from(&ApiError::from(ValidationError::EmptyUpdate));
        assert_eq!(body.message, "Validation failed");
        assert_eq!(body.reason.as_deref(), Some("Provide properties to update"));
    }

    #[test]
    fn test_reason_omitted_when_absent() {
        let json = serde_json::to_value(ErrorResponse::from(&ApiError::BookNotFound)).unwrap();
        assert_eq!(json["message"], "Book not found");
        assert!(json.get("reason").is_none());
    }

    #[test]
    fn test_rejection_keeps_status_and_detail() {
        let err = ApiError::Rejected {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            detail: "length limit exceeded".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);

        let body = ErrorResponse::from(&err);
        assert_eq!(body.message, "Invalid request");
        assert_eq!(body.reason.as_deref(), Some("length limit exceeded"));
    }

    #[test]
    fn test_rejection_log_fields_omit_missing_reason() {
        let fields = rejection_fields("404", "Book not found", None);
        assert_eq!(fields, vec![("status", "404"), ("message", "Book not found")]);

        let fields = rejection_fields("422", "Validation failed", Some("Title too short"));
        assert_eq!(fields.last(), Some(&("reason", "Title too short")));
    }

    #[test]
    fn test_internal_detail_not_exposed() {
        let body = ErrorResponse::from(&ApiError::Internal("lock poisoned".to_string()));
        assert_eq!(body.message, "Unknown error happened");
        assert_eq!(body.reason, None);
    }
}
