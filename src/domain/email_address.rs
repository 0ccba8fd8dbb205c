//! src/domain/email_address.rs

use validator::ValidateEmail;

use crate::domain::ValidationError;

/// A validated email address. Used for the visitor's address as well as the
/// configured sender and recipient.
#[derive(Debug, Clone)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(s: String) -> Result<EmailAddress, ValidationError> {
        let trimmed = s.trim().to_owned();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingField);
        }
        if trimmed.validate_email() {
            Ok(Self(trimmed))
        } else {
            Err(ValidationError::InvalidEmail(trimmed))
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
