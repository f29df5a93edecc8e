use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::estimator::EstimateError;
use crate::flow::FlowError;
use crate::gate::AccessError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    InvalidInput(#[from] EstimateError),

    /// Request body that could not be read as estimator input.
    #[error("{0}")]
    MalformedBody(String),

    #[error("Session not found")]
    SessionNotFound,
}

impl From<FlowError> for ApiError {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::Access(e) => Self::Access(e),
            FlowError::Estimate(e) => Self::InvalidInput(e),
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Access(AccessError::EmptyCredential | AccessError::InvalidCredential) => {
                StatusCode::UNAUTHORIZED
            }
            Self::Access(AccessError::DisclaimerNotAccepted) => StatusCode::FORBIDDEN,
            Self::InvalidInput(_) | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::SessionNotFound => StatusCode::NOT_FOUND,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Access(e) => e.kind(),
            Self::InvalidInput(_) | Self::MalformedBody(_) => "invalid_input",
            Self::SessionNotFound => "session_not_found",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "type": self.kind(),
                "message": self.to_string(),
            }
        }));

        (self.status(), body).into_response()
    }
}
