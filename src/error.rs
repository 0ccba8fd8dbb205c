//! src/error.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::domain::ValidationError;

pub type ApiResult<T> = Result<T, ApiError>;

fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

#[derive(thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    #[error("Failed to send message")]
    DeliveryError {
        #[source]
        source: anyhow::Error,
        /// Include the cause chain in the response body. Driven by
        /// `application.verbose_errors`; must stay false in production so
        /// provider internals never leak to the caller.
        verbose: bool,
    },
}

impl std::fmt::Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::DeliveryError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            ApiError::ValidationError(e) => e.to_string(),
            ApiError::DeliveryError { source, verbose } => {
                if *verbose {
                    format!("{:#}", source)
                } else {
                    self.to_string()
                }
            }
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": error }))
    }
}
