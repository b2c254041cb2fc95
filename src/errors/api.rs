use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use crate::errors::account::AccountError;
use crate::services::request_validator::ValidationError;
use crate::types::dto::common::ErrorResponse;

/// Error responses for the account endpoints
#[derive(ApiResponse, Debug)]
pub enum AccountApiError {
    /// Request failed validation before reaching the service
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorResponse>),

    /// Email or secret did not match any account
    #[oai(status = 401)]
    InvalidCredentials(Json<ErrorResponse>),

    /// No account with the requested id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// An account with the requested email already exists
    #[oai(status = 409)]
    DuplicateEmail(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl AccountApiError {
    /// Create a ValidationFailed error
    pub fn validation_failed(message: String) -> Self {
        AccountApiError::ValidationFailed(Json(ErrorResponse {
            error: "validation_failed".to_string(),
            message,
            status_code: 400,
        }))
    }

    /// Create an InvalidCredentials error
    ///
    /// The message is fixed so the response cannot reveal whether the email
    /// or the secret was wrong.
    pub fn invalid_credentials() -> Self {
        AccountApiError::InvalidCredentials(Json(ErrorResponse {
            error: "invalid_credentials".to_string(),
            message: "Invalid email or password.".to_string(),
            status_code: 401,
        }))
    }

    /// Create a NotFound error
    pub fn not_found(id: i32) -> Self {
        AccountApiError::NotFound(Json(ErrorResponse {
            error: "not_found".to_string(),
            message: format!("No account with id {}", id),
            status_code: 404,
        }))
    }

    /// Create a DuplicateEmail error
    pub fn duplicate_email() -> Self {
        AccountApiError::DuplicateEmail(Json(ErrorResponse {
            error: "duplicate_email".to_string(),
            message: "This e-mail is already in use.".to_string(),
            status_code: 409,
        }))
    }

    /// Create an InternalError
    pub fn internal_error(message: String) -> Self {
        AccountApiError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message,
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AccountApiError::ValidationFailed(json) => json.0.message.clone(),
            AccountApiError::InvalidCredentials(json) => json.0.message.clone(),
            AccountApiError::NotFound(json) => json.0.message.clone(),
            AccountApiError::DuplicateEmail(json) => json.0.message.clone(),
            AccountApiError::InternalError(json) => json.0.message.clone(),
        }
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        match self {
            AccountApiError::ValidationFailed(json) => json.0.status_code,
            AccountApiError::InvalidCredentials(json) => json.0.status_code,
            AccountApiError::NotFound(json) => json.0.status_code,
            AccountApiError::DuplicateEmail(json) => json.0.status_code,
            AccountApiError::InternalError(json) => json.0.status_code,
        }
    }
}

impl fmt::Display for AccountApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<AccountError> for AccountApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::DuplicateEmail { .. } => Self::duplicate_email(),
            AccountError::NotFound { id } => Self::not_found(id),
            AccountError::Store(e) => {
                tracing::error!(error = %e, "store failure");
                Self::internal_error("Internal server error".to_string())
            }
            AccountError::Hash(e) => {
                tracing::error!(error = %e, "password hasher failure");
                Self::internal_error("Internal server error".to_string())
            }
        }
    }
}

impl From<ValidationError> for AccountApiError {
    fn from(err: ValidationError) -> Self {
        Self::validation_failed(err.to_string())
    }
}
