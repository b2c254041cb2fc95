// Common test utilities for integration tests

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use userstash_backend::services::{AccountService, BcryptHasher};
use userstash_backend::stores::SeaOrmAccountStore;

/// Creates a test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates an account service wired to a fresh in-memory database
pub async fn setup_account_service() -> Arc<AccountService> {
    let db = setup_test_db().await;
    let store = Arc::new(SeaOrmAccountStore::new(db));
    let hasher = Arc::new(BcryptHasher::new());

    Arc::new(AccountService::new(store, hasher))
}
