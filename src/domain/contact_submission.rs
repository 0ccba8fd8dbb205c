//! src/domain/contact_submission.rs

use crate::domain::EmailAddress;
use crate::domain::MessageBody;
use crate::domain::SenderName;

/// A fully validated contact-form submission. Lives only for the duration of
/// one request; never persisted.
#[derive(Debug)]
pub struct ContactSubmission {
    pub name: SenderName,
    pub email: EmailAddress,
    pub message: MessageBody,
}
