//! src/email_client.rs

use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::domain::EmailAddress;

/// Client for a Postmark-style transactional email HTTP API.
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: EmailAddress,
    sender_name: String,
    authorization_token: Secret<String>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: EmailAddress,
        sender_name: String,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
            sender,
            sender_name,
            authorization_token,
        })
    }

    /// Submit one email to the API. At-most-once: a failed call is reported
    /// to the caller and never retried here.
    pub async fn send_email(
        &self,
        recipient: &EmailAddress,
        reply_to: &EmailAddress,
        subject: &str,
        html_content: &str,
        text_content: &str,
    ) -> Result<(), reqwest::Error> {
        let url = format!("{}/email", self.base_url);
        let request_body = SendEmailRequest {
            from: format!("{} <{}>", self.sender_name, self.sender.as_ref()),
            to: recipient.as_ref(),
            reply_to: reply_to.as_ref(),
            subject,
            html_body: html_content,
            text_body: text_content,
        };
        self.http_client
            .post(&url)
            .header(
                "X-Postmark-Server-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: String,
    to: &'a str,
    reply_to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
}
