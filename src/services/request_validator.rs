use thiserror::Error;

/// Minimum length accepted for a plaintext secret
pub const MIN_SECRET_LENGTH: usize = 6;

/// Errors that can occur during request validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is missing or blank
    #[error("Name must not be empty")]
    EmptyName,

    /// Email is missing or blank
    #[error("Email must not be empty")]
    EmptyEmail,

    /// Email does not look like an address
    #[error("Email is not a valid address")]
    MalformedEmail,

    /// Secret is missing or blank
    #[error("Secret must not be empty")]
    EmptySecret,

    /// Secret is shorter than the minimum required length
    #[error("Secret must be at least {0} characters")]
    SecretTooShort(usize),
}

/// Syntactic email check: one `@`, a non-empty local part, a dotted domain,
/// no whitespace. Deliverability is not this layer's concern.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if email.chars().any(char::is_whitespace) {
        return Err(ValidationError::MalformedEmail);
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::MalformedEmail);
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(ValidationError::MalformedEmail);
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(ValidationError::MalformedEmail);
    }

    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

pub fn validate_secret(secret: &str) -> Result<(), ValidationError> {
    if secret.chars().count() < MIN_SECRET_LENGTH {
        return Err(ValidationError::SecretTooShort(MIN_SECRET_LENGTH));
    }
    Ok(())
}

/// Validate a registration request (fail fast, first violation wins)
pub fn validate_create(name: &str, email: &str, secret: &str) -> Result<(), ValidationError> {
    validate_name(name)?;
    validate_email(email)?;
    validate_secret(secret)?;
    Ok(())
}

/// Validate a partial update; absent fields are skipped
pub fn validate_update(
    name: Option<&str>,
    email: Option<&str>,
    secret: Option<&str>,
) -> Result<(), ValidationError> {
    if let Some(name) = name {
        validate_name(name)?;
    }
    if let Some(email) = email {
        validate_email(email)?;
    }
    if let Some(secret) = secret {
        validate_secret(secret)?;
    }
    Ok(())
}

/// Validate a login request
pub fn validate_login(email: &str, secret: &str) -> Result<(), ValidationError> {
    validate_email(email)?;
    if secret.is_empty() {
        return Err(ValidationError::EmptySecret);
    }
    Ok(())
}
