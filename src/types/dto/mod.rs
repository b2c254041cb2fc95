// Data transfer objects - request and response models
pub mod account;
pub mod common;
