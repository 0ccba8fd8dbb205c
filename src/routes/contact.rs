//! src/routes/contact.rs

use actix_web::{web, HttpResponse};
use htmlescape::encode_minimal;

use crate::domain::{ContactSubmission, EmailAddress, MessageBody, SenderName, ValidationError};
use crate::email_client::EmailClient;
use crate::error::{ApiError, ApiResult};
use crate::startup::{ContactRecipient, ErrorVerbosity};

#[derive(serde::Deserialize)]
pub struct ContactFormData {
    // All fields are optional at the transport level and default to the
    // empty string; validation rejects them afterwards.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl TryFrom<ContactFormData> for ContactSubmission {
    type Error = ValidationError;

    fn try_from(value: ContactFormData) -> Result<Self, Self::Error> {
        let name = SenderName::parse(value.name)?;
        let email = EmailAddress::parse(value.email)?;
        let message = MessageBody::parse(value.message)?;
        Ok(Self {
            name,
            email,
            message,
        })
    }
}

#[tracing::instrument(
    name = "Relaying a contact form submission.",
    skip(form, email_client, recipient, verbosity),
    fields(
        sender_email = %form.email,
        sender_name = %form.name
    )
)]
pub async fn relay_contact_message(
    form: web::Json<ContactFormData>,
    email_client: web::Data<EmailClient>,
    recipient: web::Data<ContactRecipient>,
    verbosity: web::Data<ErrorVerbosity>,
) -> ApiResult<HttpResponse> {
    // Server-side validation is the trust boundary; the submission client's
    // checks are a UX convenience only.
    let submission: ContactSubmission = form.0.try_into()?;
    send_contact_notification(&email_client, &recipient.0, &submission)
        .await
        .map_err(|e| ApiError::DeliveryError {
            source: e.into(),
            verbose: verbosity.0,
        })?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "ok": true })))
}

#[tracing::instrument(
    name = "Forwarding a contact message to the mail API.",
    skip(email_client, recipient, submission)
)]
pub async fn send_contact_notification(
    email_client: &EmailClient,
    recipient: &EmailAddress,
    submission: &ContactSubmission,
) -> Result<(), reqwest::Error> {
    let subject = format!("New message from {}", submission.name.as_ref());
    let text_body = format!(
        "From: {} <{}>\n\n{}",
        submission.name.as_ref(),
        submission.email.as_ref(),
        submission.message.as_ref()
    );
    let html_body = render_html_body(submission);
    email_client
        .send_email(
            recipient,
            // Reply-to points at the visitor so the owner can answer directly.
            &submission.email,
            &subject,
            &html_body,
            &text_body,
        )
        .await
}

/// Interpolated values must be escaped to keep visitor-controlled input from
/// becoming live markup in the notification email.
fn render_html_body(submission: &ContactSubmission) -> String {
    format!(
        "<p><b>Name:</b> {}</p><p><b>Email:</b> {}</p><p>{}</p>",
        encode_minimal(submission.name.as_ref()),
        encode_minimal(submission.email.as_ref()),
        encode_minimal(submission.message.as_ref()).replace('\n', "<br />")
    )
}
