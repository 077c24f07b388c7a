//! Caller-facing errors of the recommendation service and their HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use data_loader::DataLoadError;
use pipeline::FilterError;
use serde_json::json;

/// Errors a request can end in
#[derive(thiserror::Error, Debug)]
pub enum RecommendError {
    /// Required criteria missing or malformed
    #[error("{0}")]
    Validation(String),

    /// Valid request, but no movie matches the filters
    #[error("{0}")]
    NoMatch(String),

    /// Options requested for an unsupported category
    #[error("{0}")]
    InvalidCategory(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl RecommendError {
    pub fn status(&self) -> StatusCode {
        match self {
            RecommendError::Validation(_) | RecommendError::InvalidCategory(_) => {
                StatusCode::BAD_REQUEST
            }
            RecommendError::NoMatch(_) => StatusCode::NOT_FOUND,
            RecommendError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FilterError> for RecommendError {
    fn from(err: FilterError) -> Self {
        match err {
            FilterError::Validation(_) => RecommendError::Validation(err.to_string()),
            FilterError::NoMatch { .. } => RecommendError::NoMatch(err.to_string()),
        }
    }
}

impl From<DataLoadError> for RecommendError {
    fn from(err: DataLoadError) -> Self {
        if err.is_caller_error() {
            RecommendError::InvalidCategory(err.to_string())
        } else {
            RecommendError::Internal(err.to_string())
        }
    }
}

impl IntoResponse for RecommendError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type RecommendResult<T> = Result<T, RecommendError>;
