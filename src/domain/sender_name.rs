//! src/domain/sender_name.rs

use unicode_segmentation::UnicodeSegmentation;

use crate::domain::ValidationError;

/// Display name of the visitor submitting the contact form.
#[derive(Debug, Clone)]
pub struct SenderName(String);

impl SenderName {
    /// Returns an instance of `SenderName` if the input satisfies all
    /// our validation constraints on sender names.
    /// It returns a `ValidationError` otherwise.
    pub fn parse(s: String) -> Result<SenderName, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingField);
        }

        // A grapheme is defined by the Unicode standard as a "user-perceived"
        // character: `å` is a single grapheme, but it is composed of two characters.
        let is_too_long = trimmed.graphemes(true).count() > 256;

        // The name ends up in an email subject line and in markup, so reject
        // characters usable for header or tag injection.
        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        let contains_forbidden_characters = trimmed
            .chars()
            .any(|g| forbidden_characters.contains(&g));

        if is_too_long || contains_forbidden_characters {
            Err(ValidationError::InvalidName(trimmed.to_owned()))
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }
}

impl AsRef<str> for SenderName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SenderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
