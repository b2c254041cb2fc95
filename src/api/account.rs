use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::errors::api::AccountApiError;
use crate::services::account_service::AccountService;
use crate::services::request_validator;
use crate::types::dto::account::{
    AccountResponse, CreateAccountApiResponse, CreateAccountRequest, DeleteAccountApiResponse,
    LoginRequest, LoginResponse, UpdateAccountRequest,
};
use crate::types::internal::account::UpdateAccount;

/// Account API endpoints
pub struct AccountApi {
    account_service: Arc<AccountService>,
}

impl AccountApi {
    /// Create a new AccountApi with the given AccountService
    pub fn new(account_service: Arc<AccountService>) -> Self {
        Self { account_service }
    }
}

/// API tags for account endpoints
#[derive(Tags)]
enum AccountTags {
    /// Account lifecycle and login endpoints
    Accounts,
}

#[OpenApi(prefix_path = "/user")]
impl AccountApi {
    /// Register a new account
    #[oai(path = "/", method = "post", tag = "AccountTags::Accounts")]
    async fn create(
        &self,
        body: Json<CreateAccountRequest>,
    ) -> Result<CreateAccountApiResponse, AccountApiError> {
        request_validator::validate_create(&body.name, &body.email, &body.secret)?;

        let account = self
            .account_service
            .create(&body.name, &body.email, &body.secret)
            .await?;

        Ok(CreateAccountApiResponse::Created(Json(account.into())))
    }

    /// Log in with email and secret
    #[oai(path = "/login", method = "post", tag = "AccountTags::Accounts")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<Json<LoginResponse>, AccountApiError> {
        request_validator::validate_login(&body.email, &body.secret)?;

        // The service returns the same sentinel for unknown email and wrong
        // secret; it becomes a 401 only here.
        match self.account_service.validate(&body.email, &body.secret).await? {
            Some(account) => Ok(Json(LoginResponse {
                message: "Login successful!".to_string(),
                account: account.into(),
            })),
            None => Err(AccountApiError::invalid_credentials()),
        }
    }

    /// List all accounts
    #[oai(path = "/", method = "get", tag = "AccountTags::Accounts")]
    async fn find_all(&self) -> Result<Json<Vec<AccountResponse>>, AccountApiError> {
        let accounts = self.account_service.find_all().await?;

        Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
    }

    /// Fetch one account by id
    #[oai(path = "/:id", method = "get", tag = "AccountTags::Accounts")]
    async fn find_one(&self, id: Path<i32>) -> Result<Json<AccountResponse>, AccountApiError> {
        let account = self.account_service.find_one(id.0).await?;

        Ok(Json(account.into()))
    }

    /// Apply a partial update to an account
    #[oai(path = "/:id", method = "patch", tag = "AccountTags::Accounts")]
    async fn update(
        &self,
        id: Path<i32>,
        body: Json<UpdateAccountRequest>,
    ) -> Result<Json<AccountResponse>, AccountApiError> {
        let Json(changes) = body;
        request_validator::validate_update(
            changes.name.as_deref(),
            changes.email.as_deref(),
            changes.secret.as_deref(),
        )?;

        let account = self
            .account_service
            .update(
                id.0,
                UpdateAccount {
                    name: changes.name,
                    email: changes.email,
                    secret: changes.secret,
                },
            )
            .await?;

        Ok(Json(account.into()))
    }

    /// Delete an account
    #[oai(path = "/:id", method = "delete", tag = "AccountTags::Accounts")]
    async fn remove(&self, id: Path<i32>) -> Result<DeleteAccountApiResponse, AccountApiError> {
        self.account_service.remove(id.0).await?;

        Ok(DeleteAccountApiResponse::NoContent)
    }
}
