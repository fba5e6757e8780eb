//! The one place where handler failures are logged, counted and translated.

use std::future::Future;

use axum::Json;
use thiserror::Error;
use tracing::{debug, error};

use service::errors::ServiceError;

use crate::errors::ApiError;
use crate::mapper::MappingError;
use crate::metrics::{OPERATIONS_TOTAL, OPERATION_DURATION};

/// Anything a handler body can fail with.
#[derive(Debug, Error)]
pub enum Failure {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl From<&Failure> for ApiError {
    fn from(f: &Failure) -> Self {
        match f {
            Failure::Service(e) => ApiError::from(e),
            Failure::Mapping(_) => ApiError::Internal,
        }
    }
}

/// A named endpoint invocation and the identifiers it was called with.
#[derive(Debug, Clone, Copy)]
pub struct Operation<'a> {
    name: &'static str,
    owner_id: &'a str,
    store_id: Option<&'a str>,
    item_id: Option<&'a str>,
}

impl<'a> Operation<'a> {
    pub fn new(name: &'static str, owner_id: &'a str) -> Self {
        Self { name, owner_id, store_id: None, item_id: None }
    }

    pub fn store(mut self, store_id: &'a str) -> Self {
        self.store_id = Some(store_id);
        self
    }

    pub fn item(mut self, item_id: &'a str) -> Self {
        self.item_id = Some(item_id);
        self
    }

    /// Runs `body` and turns its outcome into the handler's response.
    pub async fn run<T, F>(self, body: F) -> Result<Json<T>, ApiError>
    where
        F: Future<Output = Result<T, Failure>>,
    {
        debug!(
            operation = self.name,
            owner_id = self.owner_id,
            store_id = ?self.store_id,
            item_id = ?self.item_id,
            "operation started"
        );
        let timer = OPERATION_DURATION.with_label_values(&[self.name]).start_timer();
        let result = body.await;
        timer.observe_duration();

        match result {
            Ok(value) => {
                OPERATIONS_TOTAL.with_label_values(&[self.name, "ok"]).inc();
                Ok(Json(value))
            }
            Err(failure) => {
                let api_error = ApiError::from(&failure);
                let outcome = match api_error {
                    ApiError::Domain { .. } => "domain_error",
                    ApiError::Internal => "internal_error",
                };
                error!(
                    operation = self.name,
                    owner_id = self.owner_id,
                    store_id = ?self.store_id,
                    item_id = ?self.item_id,
                    outcome,
                    error = %failure,
                    "operation failed"
                );
                OPERATIONS_TOTAL.with_label_values(&[self.name, outcome]).inc();
                Err(api_error)
            }
        }
    }
}
