//! src/startup.rs

use actix_web::{dev::Server, web, web::Data, App, HttpServer};
use anyhow::Context;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::domain::EmailAddress;
use crate::email_client::EmailClient;
use crate::routes::{health_check, relay_contact_message};

/// Inbox that receives relayed contact messages.
pub struct ContactRecipient(pub EmailAddress);

/// Whether delivery errors are echoed back in detail. False in production.
pub struct ErrorVerbosity(pub bool);

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let email_client = configuration.emailclient.client()?;
        let recipient = configuration
            .emailclient
            .recipient()
            .context("Invalid recipient email address in configuration.")?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(
            listener,
            email_client,
            recipient,
            configuration.application.verbose_errors,
        )?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    recipient: EmailAddress,
    verbose_errors: bool,
) -> Result<Server, std::io::Error> {
    // Wrap shared state in smart pointers
    let email_client = Data::new(email_client);
    let recipient = Data::new(ContactRecipient(recipient));
    let verbosity = Data::new(ErrorVerbosity(verbose_errors));
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/api/contact", web::post().to(relay_contact_message))
            .app_data(email_client.clone())
            .app_data(recipient.clone())
            .app_data(verbosity.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
