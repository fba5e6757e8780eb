use thiserror::Error;

use models::errors::ModelError;

/// Failures surfaced by the service layer.
///
/// Domain errors (`Validation`, `NotFound`, `Conflict`, `Rejected` and model
/// validation failures) carry an HTTP-equivalent status and a message meant for
/// the client. `Db` and model database failures are unexpected and must not be
/// shown to clients.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Status code of a domain error; `None` for unexpected failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ServiceError::Validation(_) => Some(400),
            ServiceError::NotFound(_) => Some(404),
            ServiceError::Conflict(_) => Some(409),
            ServiceError::Rejected { status, .. } => Some(*status),
            ServiceError::Model(ModelError::Validation(_)) => Some(400),
            ServiceError::Db(_) | ServiceError::Model(ModelError::Db(_)) => None,
        }
    }

    /// Client-facing message of a domain error, without the variant prefix.
    pub fn domain_message(&self) -> Option<&str> {
        match self {
            ServiceError::Validation(m)
            | ServiceError::NotFound(m)
            | ServiceError::Conflict(m)
            | ServiceError::Rejected { message: m, .. }
            | ServiceError::Model(ModelError::Validation(m)) => Some(m),
            ServiceError::Db(_) | ServiceError::Model(ModelError::Db(_)) => None,
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Db(e.to_string()) }
}
