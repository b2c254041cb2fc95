use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
};

use crate::errors::store::StoreError;
use crate::types::db::account::{self, Entity as Account};
use crate::types::internal::account::{AccountChanges, NewAccountRecord};

/// Persistence contract the account service depends on.
///
/// Implementations own all row access for the accounts table. Ids are
/// assigned by the store on insert; callers never pick them.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<account::Model>, StoreError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<account::Model>, StoreError>;

    async fn insert(&self, record: NewAccountRecord) -> Result<account::Model, StoreError>;

    /// Merge partial changes into an existing row and persist the result.
    /// Absent fields keep their stored values.
    async fn merge_and_save(
        &self,
        existing: account::Model,
        changes: AccountChanges,
    ) -> Result<account::Model, StoreError>;

    async fn delete(&self, existing: account::Model) -> Result<(), StoreError>;

    /// Every row, in storage order
    async fn list_all(&self) -> Result<Vec<account::Model>, StoreError>;
}

/// SeaORM-backed account store over a shared database connection
pub struct SeaOrmAccountStore {
    db: DatabaseConnection,
}

impl SeaOrmAccountStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// SQLite and Postgres both put "UNIQUE" in the violation message
fn classify_write_error(operation: &str, err: sea_orm::DbErr) -> StoreError {
    if err.to_string().to_uppercase().contains("UNIQUE") {
        StoreError::UniqueViolation {
            operation: operation.to_string(),
        }
    } else {
        StoreError::operation(operation, err)
    }
}

#[async_trait]
impl AccountStore for SeaOrmAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<account::Model>, StoreError> {
        Account::find()
            .filter(account::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| StoreError::operation("find_by_email", e))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<account::Model>, StoreError> {
        Account::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| StoreError::operation("find_by_id", e))
    }

    async fn insert(&self, record: NewAccountRecord) -> Result<account::Model, StoreError> {
        let new_account = account::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            name: Set(record.name),
            email: Set(record.email),
            secret_hash: Set(record.secret_hash),
        };

        new_account
            .insert(&self.db)
            .await
            .map_err(|e| classify_write_error("insert", e))
    }

    async fn merge_and_save(
        &self,
        existing: account::Model,
        changes: AccountChanges,
    ) -> Result<account::Model, StoreError> {
        // An empty change set would produce an UPDATE with no SET clause
        if changes.name.is_none() && changes.email.is_none() && changes.secret_hash.is_none() {
            return Ok(existing);
        }

        let mut merged: account::ActiveModel = existing.into();
        if let Some(name) = changes.name {
            merged.name = Set(name);
        }
        if let Some(email) = changes.email {
            merged.email = Set(email);
        }
        if let Some(secret_hash) = changes.secret_hash {
            merged.secret_hash = Set(secret_hash);
        }

        merged
            .update(&self.db)
            .await
            .map_err(|e| classify_write_error("merge_and_save", e))
    }

    async fn delete(&self, existing: account::Model) -> Result<(), StoreError> {
        existing
            .delete(&self.db)
            .await
            .map(|_| ())
            .map_err(|e| StoreError::operation("delete", e))
    }

    async fn list_all(&self) -> Result<Vec<account::Model>, StoreError> {
        Account::find()
            .all(&self.db)
            .await
            .map_err(|e| StoreError::operation("list_all", e))
    }
}
