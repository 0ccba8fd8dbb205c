//! src/client.rs
//!
//! Headless counterpart of the contact form: validates user input locally,
//! drops honeypot-tripped submissions without a network call and posts the
//! rest to `POST /api/contact`. The local checks mirror the server's but are
//! a UX convenience only; the server re-validates everything.

use crate::domain::{EmailAddress, MessageBody, SenderName, ValidationError};

/// Raw field values as collected from the form, untrimmed.
#[derive(Debug, Default, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Hidden honeypot field. Humans never see it; a non-empty value marks
    /// the submission as automated spam.
    pub company: String,
}

#[derive(thiserror::Error, Debug)]
pub enum SubmissionError {
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),
    #[error("Failed to reach the contact endpoint")]
    Transport(#[from] reqwest::Error),
    /// The server answered but did not acknowledge the submission; carries
    /// the server-provided error text or a generic fallback.
    #[error("{0}")]
    Rejected(String),
}

#[derive(serde::Deserialize, Default)]
struct SubmissionAck {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

pub struct SubmissionClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl SubmissionClient {
    pub fn new(base_url: String, timeout: std::time::Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Submit one form. Takes `&mut self` so a single form instance can never
    /// have two requests in flight, the moral equivalent of disabling the
    /// submit button. A failed attempt is not retried; the caller resubmits.
    pub async fn submit(&mut self, form: ContactForm) -> Result<(), SubmissionError> {
        // Bots fill every field they can see. Pretend success and drop it.
        if !form.company.trim().is_empty() {
            tracing::info!("Discarding submission with populated honeypot field.");
            return Ok(());
        }

        let name = SenderName::parse(form.name)?;
        let email = EmailAddress::parse(form.email)?;
        let message = MessageBody::parse(form.message)?;

        let response = self
            .http_client
            .post(format!("{}/api/contact", self.base_url))
            .json(&serde_json::json!({
                "name": name.as_ref(),
                "email": email.as_ref(),
                "message": message.as_ref(),
            }))
            .send()
            .await?;

        let status = response.status();
        // A malformed/empty body is treated the same as a missing ack.
        let ack: SubmissionAck = response.json().await.unwrap_or_default();
        if !status.is_success() || !ack.ok {
            return Err(SubmissionError::Rejected(
                ack.error.unwrap_or_else(|| "Failed".to_string()),
            ));
        }
        Ok(())
    }
}
