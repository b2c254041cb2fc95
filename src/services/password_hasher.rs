use thiserror::Error;

/// Failure inside the hashing backend (malformed stored hash, bad cost
/// factor). Verification mismatches are not errors; `verify` reports those
/// as `Ok(false)`.
#[derive(Debug, Error)]
#[error("password hashing failed: {0}")]
pub struct PasswordHashError(#[from] bcrypt::BcryptError);

/// One-way hashing of account secrets.
///
/// Implementations must generate a fresh salt per call and compare via the
/// backend's timing-safe verify, never by string equality.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext secret at the given adaptive cost factor
    fn hash(&self, plaintext: &str, cost: u32) -> Result<String, PasswordHashError>;

    /// Verify a plaintext secret against a stored hash
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, PasswordHashError>;
}

/// bcrypt-backed hasher
pub struct BcryptHasher;

impl BcryptHasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str, cost: u32) -> Result<String, PasswordHashError> {
        Ok(bcrypt::hash(plaintext, cost)?)
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, PasswordHashError> {
        Ok(bcrypt::verify(plaintext, hash)?)
    }
}
