use serde::Serialize;

use crate::types::db::account;

/// Account representation handed back to callers.
///
/// The stored secret hash is not carried on this type at all; the
/// conversion from the entity below is the single place it gets dropped.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RedactedAccount {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<account::Model> for RedactedAccount {
    fn from(model: account::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
        }
    }
}

/// Column values for a row the store has not assigned an id to yet.
///
/// The secret arrives here already hashed; plaintext never crosses the
/// store boundary.
#[derive(Clone, Debug)]
pub struct NewAccountRecord {
    pub name: String,
    pub email: String,
    pub secret_hash: String,
}

/// Partial column changes applied by `merge_and_save`.
///
/// `None` leaves the stored value untouched.
#[derive(Clone, Debug, Default)]
pub struct AccountChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub secret_hash: Option<String>,
}

/// Caller-facing partial update.
///
/// The secret is still plaintext here; the service hashes it before
/// anything reaches the store.
#[derive(Clone, Debug, Default)]
pub struct UpdateAccount {
    pub name: Option<String>,
    pub email: Option<String>,
    pub secret: Option<String>,
}
