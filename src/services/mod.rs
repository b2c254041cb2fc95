// Services layer - Business logic and orchestration
pub mod account_service;
pub mod password_hasher;
pub mod request_validator;

pub use account_service::{AccountService, SECRET_HASH_COST};
pub use password_hasher::{BcryptHasher, PasswordHashError, PasswordHasher};
pub use request_validator::ValidationError;
