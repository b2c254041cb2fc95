// Stores layer - Data access and repository pattern
pub mod account_store;

pub use account_store::{AccountStore, SeaOrmAccountStore};
