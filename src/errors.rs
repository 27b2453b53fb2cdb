use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a failed call to the model provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UpstreamFailure {
    #[error("The model provider timed out, please try again")]
    Timeout,

    #[error("The model provider rejected the configured credential")]
    AuthFailure,

    #[error("The model provider rate limit was reached, please wait and try again")]
    RateLimit,

    #[error("Failed to generate questions")]
    Generic,
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Model provider credential is not configured")]
    AuthenticationError,

    #[error("{0}")]
    UpstreamError(UpstreamFailure),

    #[error("The model returned an empty response")]
    EmptyResponse,

    // raw model text stays out of the message; it is logged where the error is raised
    #[error("Failed to parse the generated questions, please try again")]
    ParseError { raw: String },

    #[error("Generated questions did not match the request: {0}")]
    InvalidModelOutput(String),

    #[error("Generation request failed: {0}")]
    RequestFailed(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::AuthenticationError => "AUTHENTICATION_ERROR",
            AppError::UpstreamError(UpstreamFailure::Timeout) => "UPSTREAM_TIMEOUT",
            AppError::UpstreamError(UpstreamFailure::AuthFailure) => "UPSTREAM_AUTH_FAILURE",
            AppError::UpstreamError(UpstreamFailure::RateLimit) => "UPSTREAM_RATE_LIMIT",
            AppError::UpstreamError(UpstreamFailure::Generic) => "UPSTREAM_ERROR",
            AppError::EmptyResponse => "EMPTY_RESPONSE",
            AppError::ParseError { .. } => "PARSE_ERROR",
            AppError::InvalidModelOutput(_) => "INVALID_MODEL_OUTPUT",
            AppError::RequestFailed(_) => "REQUEST_FAILED",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::RequestFailed(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
