//! # API Errors
//!
//! HTTP mapping for [`Error`]: status code selection, the JSON error body, and
//! conversions from axum extractor rejections.

use crate::errors::Error;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

impl Error {
    /// Get HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } | Self::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Config { .. }
            | Self::Database(_)
            | Self::Write { .. }
            | Self::PasswordHash { .. }
            | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// HTTP status code, repeated for clients that only see the body
    pub code: u16,
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let not_found = Error::NotFound {
            resource: "Budget",
            id: 1,
        };
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            Error::validation("bad").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        let write = Error::Write {
            resource: "budget",
            message: "constraint failed".to_string(),
        };
        assert_eq!(write.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_body() {
        let err = Error::NotFound {
            resource: "Budget",
            id: 12,
        };
        let body = ErrorResponse::from(&err);
        assert_eq!(body.code, 404);
        assert_eq!(body.error, "Budget not found: 12");
    }

    #[test]
    fn test_unknown_route_body() {
        let err = Error::RouteNotFound {
            path: "/nowhere".to_string(),
        };
        let body = ErrorResponse::from(&err);
        assert_eq!(body.code, 404);
        assert_eq!(body.error, "No route for /nowhere");
    }
}
