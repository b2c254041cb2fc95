use thiserror::Error;

/// Persistence failures surfaced by the account store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database rejected the row because the unique constraint on
    /// accounts.email already holds the value.
    #[error("unique constraint violated during {operation}")]
    UniqueViolation { operation: String },

    /// Any other database failure, tagged with the failed operation.
    #[error("database error during {operation}: {source}")]
    Operation {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },
}

impl StoreError {
    pub fn operation(operation: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::Operation {
            operation: operation.into(),
            source,
        }
    }
}
