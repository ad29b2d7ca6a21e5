//! Response types for the salary simulator API.
//!
//! This module defines the success and error response structures and maps
//! engine errors onto HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::CalculationProposal;

/// Response body for the `/proposals` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalsResponse {
    /// One proposal per benefit percentage, ascending.
    pub proposals: Vec<CalculationProposal>,
}

/// Error body returned by every endpoint on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Stable machine-readable code, e.g. `VALIDATION_ERROR`.
    pub code: String,
    /// Message for the caller.
    pub message: String,
    /// Extra context, omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Builds an error body without details.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Builds an error body carrying details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// `VALIDATION_ERROR` body.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// `MALFORMED_JSON` body.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an error for a dataset that does not fit the engine.
    pub fn dataset_error(message: impl Into<String>) -> Self {
        Self::with_details(
            "DATASET_ERROR",
            message,
            "The withholding rate dataset is corrupt or incompatible with this engine",
        )
    }
}

/// An error body paired with the status it is sent with.
pub struct ApiErrorResponse {
    /// Response status.
    pub status: StatusCode,
    /// Response body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidDataset { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::DatasetNotLoaded => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::new("DATASET_NOT_LOADED", message),
            },
            EngineError::Validation { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
            EngineError::TableNotFound { .. }
            | EngineError::BandNotFound { .. }
            | EngineError::UnsupportedFormula { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::dataset_error(message),
            },
        }
    }
}
