use thiserror::Error;

use crate::errors::store::StoreError;
use crate::services::password_hasher::PasswordHashError;

/// Failures reported by the account service.
///
/// A failed credential validation is not an error; `validate` returns
/// `Ok(None)` for that case.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("an account with email {email} already exists")]
    DuplicateEmail { email: String },

    #[error("no account with id {id}")]
    NotFound { id: i32 },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Hash(#[from] PasswordHashError),
}
