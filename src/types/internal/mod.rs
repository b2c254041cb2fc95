// Internal types shared between the service and store layers
pub mod account;

pub use account::{AccountChanges, NewAccountRecord, RedactedAccount, UpdateAccount};
