use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use service::errors::ServiceError;

use crate::payload::ErrorBody;

/// Error returned by every handler.
///
/// `Domain` keeps the status and message decided by the service layer;
/// `Internal` becomes a bare 500 so nothing about the failure leaks.
#[derive(Debug, PartialEq)]
pub enum ApiError {
    Domain { status: u16, message: String },
    Internal,
}

impl From<&ServiceError> for ApiError {
    fn from(e: &ServiceError) -> Self {
        match (e.status_code(), e.domain_message()) {
            (Some(status), Some(message)) => ApiError::Domain { status, message: message.to_string() },
            _ => ApiError::Internal,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Domain { status, message } => {
                let code = match StatusCode::from_u16(status) {
                    Ok(code) if (100..600).contains(&status) => code,
                    _ => {
                        error!(status, message = %message, "domain error carries an invalid HTTP status");
                        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
                    }
                };
                let body = ErrorBody {
                    status,
                    error: code.canonical_reason().unwrap_or_default().to_string(),
                    message,
                };
                (code, Json(body)).into_response()
            }
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn domain_errors_keep_status_and_message() {
        let err = ApiError::from(&ServiceError::not_found("Store"));
        assert_eq!(err, ApiError::Domain { status: 404, message: "Store not found".into() });
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_failures_are_internal() {
        assert_eq!(ApiError::from(&ServiceError::Db("timeout".into())), ApiError::Internal);
        assert_eq!(ApiError::from(&ServiceError::Model(ModelError::Db("x".into()))), ApiError::Internal);
    }

    #[test]
    fn invalid_status_becomes_500() {
        for status in [0u16, 42, 600, 1000] {
            let resp = ApiError::Domain { status, message: "odd".into() }.into_response();
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
