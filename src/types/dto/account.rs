use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::internal::account::RedactedAccount;

/// Request model for account registration
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    /// Display name for the new account
    pub name: String,

    /// Email address, unique across all accounts
    pub email: String,

    /// Plaintext secret, stored only as a one-way hash
    pub secret: String,
}

/// Request model for partial account updates
///
/// Absent fields are left unchanged.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateAccountRequest {
    /// New display name
    pub name: Option<String>,

    /// New email address
    pub email: Option<String>,

    /// New plaintext secret, re-hashed before storage
    pub secret: Option<String>,
}

/// Request model for login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address of the account
    pub email: String,

    /// Plaintext secret to verify
    pub secret: String,
}

/// Account representation returned by the API
///
/// Never carries the secret in any form.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct AccountResponse {
    /// System-assigned account id
    pub id: i32,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,
}

impl From<RedactedAccount> for AccountResponse {
    fn from(account: RedactedAccount) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
        }
    }
}

/// Response model for successful login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Success message
    pub message: String,

    /// The authenticated account, secret omitted
    pub account: AccountResponse,
}

/// API response for account creation
#[derive(ApiResponse)]
pub enum CreateAccountApiResponse {
    /// Account created
    #[oai(status = 201)]
    Created(Json<AccountResponse>),
}

/// API response for account deletion
#[derive(ApiResponse)]
pub enum DeleteAccountApiResponse {
    /// Account removed
    #[oai(status = 204)]
    NoContent,
}
