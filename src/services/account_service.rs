use std::sync::Arc;

use crate::errors::account::AccountError;
use crate::errors::store::StoreError;
use crate::services::password_hasher::PasswordHasher;
use crate::stores::account_store::AccountStore;
use crate::types::internal::account::{
    AccountChanges, NewAccountRecord, RedactedAccount, UpdateAccount,
};

/// Adaptive cost factor used when hashing account secrets
pub const SECRET_HASH_COST: u32 = 10;

/// Single authority for account lifecycle and credential checks.
///
/// All persistence access is mediated through the injected store, and
/// secrets are hashed before they reach it. Every value handed back to a
/// caller is a [`RedactedAccount`]; the stored hash never leaves this
/// layer. The service holds no state between calls.
pub struct AccountService {
    store: Arc<dyn AccountStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl AccountService {
    /// Create a new AccountService with the given store and hasher
    pub fn new(store: Arc<dyn AccountStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// Register a new account
    ///
    /// Inputs are assumed syntactically valid; the transport layer runs the
    /// request validator before calling in here.
    ///
    /// # Returns
    /// * `Ok(RedactedAccount)` - The created account with its assigned id
    /// * `Err(AccountError::DuplicateEmail)` - An account with this email exists
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        secret: &str,
    ) -> Result<RedactedAccount, AccountError> {
        if self.store.find_by_email(email).await?.is_some() {
            return Err(AccountError::DuplicateEmail {
                email: email.to_string(),
            });
        }

        let secret_hash = self.hasher.hash(secret, SECRET_HASH_COST)?;

        // The pre-check above is not transactional; the unique constraint
        // on accounts.email is the authoritative guard when two creates
        // race between check and insert.
        let created = match self
            .store
            .insert(NewAccountRecord {
                name: name.to_string(),
                email: email.to_string(),
                secret_hash,
            })
            .await
        {
            Ok(model) => model,
            Err(StoreError::UniqueViolation { .. }) => {
                return Err(AccountError::DuplicateEmail {
                    email: email.to_string(),
                })
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(account_id = created.id, "account created");
        Ok(created.into())
    }

    /// Check credentials against the stored hash
    ///
    /// Returns `Ok(None)` for an unknown email and for a secret mismatch
    /// alike; callers cannot tell the two apart from the return value.
    pub async fn validate(
        &self,
        email: &str,
        secret: &str,
    ) -> Result<Option<RedactedAccount>, AccountError> {
        let Some(existing) = self.store.find_by_email(email).await? else {
            tracing::debug!(email, "validation miss: no account for email");
            return Ok(None);
        };

        if self.hasher.verify(secret, &existing.secret_hash)? {
            Ok(Some(existing.into()))
        } else {
            tracing::debug!(account_id = existing.id, "validation miss: secret mismatch");
            Ok(None)
        }
    }

    /// List every account, secrets omitted, in storage order
    pub async fn find_all(&self) -> Result<Vec<RedactedAccount>, AccountError> {
        Ok(self
            .store
            .list_all()
            .await?
            .into_iter()
            .map(RedactedAccount::from)
            .collect())
    }

    /// Fetch one account by id
    ///
    /// # Returns
    /// * `Ok(RedactedAccount)` - The account
    /// * `Err(AccountError::NotFound)` - No account has that id
    pub async fn find_one(&self, id: i32) -> Result<RedactedAccount, AccountError> {
        self.store
            .find_by_id(id)
            .await?
            .map(RedactedAccount::from)
            .ok_or(AccountError::NotFound { id })
    }

    /// Apply a partial update
    ///
    /// Absent fields are left unchanged. A new secret is re-hashed before
    /// the merge; a changed email is re-checked for uniqueness.
    pub async fn update(
        &self,
        id: i32,
        update: UpdateAccount,
    ) -> Result<RedactedAccount, AccountError> {
        let existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(AccountError::NotFound { id })?;

        if let Some(new_email) = update.email.as_deref() {
            if new_email != existing.email && self.store.find_by_email(new_email).await?.is_some() {
                return Err(AccountError::DuplicateEmail {
                    email: new_email.to_string(),
                });
            }
        }

        let secret_hash = match update.secret {
            Some(secret) => Some(self.hasher.hash(&secret, SECRET_HASH_COST)?),
            None => None,
        };

        let requested_email = update.email.clone();
        let changes = AccountChanges {
            name: update.name,
            email: update.email,
            secret_hash,
        };

        let merged = match self.store.merge_and_save(existing, changes).await {
            Ok(model) => model,
            // Same race window as create: the unique constraint wins.
            Err(StoreError::UniqueViolation { .. }) => {
                return Err(AccountError::DuplicateEmail {
                    email: requested_email.unwrap_or_default(),
                })
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(account_id = id, "account updated");
        Ok(merged.into())
    }

    /// Delete an account permanently
    ///
    /// # Returns
    /// * `Ok(())` - The row was removed
    /// * `Err(AccountError::NotFound)` - No account has that id
    pub async fn remove(&self, id: i32) -> Result<(), AccountError> {
        let existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(AccountError::NotFound { id })?;

        self.store.delete(existing).await?;

        tracing::info!(account_id = id, "account removed");
        Ok(())
    }
}
