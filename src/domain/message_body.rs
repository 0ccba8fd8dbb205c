//! src/domain/message_body.rs

use crate::domain::ValidationError;

/// Free-text message of a contact submission. Trimmed and non-empty; beyond
/// that the content is carried verbatim (escaping happens at the point where
/// it is interpolated into HTML).
#[derive(Debug, Clone)]
pub struct MessageBody(String);

impl MessageBody {
    pub fn parse(s: String) -> Result<MessageBody, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingField);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
