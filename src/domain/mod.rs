//! src/domain/mod.rs

mod contact_submission;
mod email_address;
mod message_body;
mod sender_name;

pub use contact_submission::ContactSubmission;
pub use email_address::EmailAddress;
pub use message_body::MessageBody;
pub use sender_name::SenderName;

/// Validation error for domain data
#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    /// One of the required fields is empty or whitespace-only. The display
    /// text is part of the wire contract of `POST /api/contact`.
    #[error("Missing fields")]
    MissingField,
    #[error("`{0}` is not a valid email address.")]
    InvalidEmail(String),
    #[error("`{0}` is not a valid sender name.")]
    InvalidName(String),
}
