// API layer - HTTP endpoints
pub mod account;
pub mod health;

pub use account::AccountApi;
pub use health::HealthApi;
