//! Public application error type and its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use shop_assistant::AssistantError;
use thiserror::Error;
use tracing::error;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error(transparent)]
    LlmSetup(#[from] llm_service::LlmError),

    #[error(transparent)]
    Catalog(#[from] product_catalog::CatalogError),

    #[error(transparent)]
    RatesSetup(#[from] currency_exchange::ExchangeError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Any failure of a dialogue turn, carrying its own taxonomy.
    #[error(transparent)]
    Assistant(#[from] AssistantError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // Startup-only; never reaches a client under normal operation.
            AppError::MissingEnv(_)
            | AppError::LlmSetup(_)
            | AppError::Catalog(_)
            | AppError::RatesSetup(_)
            | AppError::Bind(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,

            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,

            AppError::Assistant(err) => match err {
                AssistantError::InvalidInput(_) | AssistantError::UnsupportedCurrency(_) => {
                    StatusCode::BAD_REQUEST
                }
                AssistantError::UpstreamOverloaded => StatusCode::TOO_MANY_REQUESTS,
                AssistantError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
                AssistantError::UnknownTool(_)
                | AssistantError::InvalidToolArguments { .. }
                | AssistantError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingEnv(_) => "MISSING_ENV",
            AppError::LlmSetup(_) => "LLM_CONFIG_ERROR",
            AppError::Catalog(_) => "CATALOG_ERROR",
            AppError::RatesSetup(_) => "RATES_CONFIG_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Assistant(err) => match err {
                AssistantError::InvalidInput(_) => "INVALID_INPUT",
                AssistantError::UnsupportedCurrency(_) => "UNSUPPORTED_CURRENCY",
                AssistantError::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
                AssistantError::UpstreamOverloaded => "UPSTREAM_OVERLOADED",
                AssistantError::UnknownTool(_)
                | AssistantError::InvalidToolArguments { .. }
                | AssistantError::Internal(_) => "INTERNAL_ERROR",
            },
        }
    }

    /// Message placed in the response body.
    ///
    /// Internal defects (unknown tool, bad tool arguments, anything mapped to
    /// `Internal`) are reported opaquely; their detail stays in the logs.
    fn public_message(&self) -> String {
        match self {
            AppError::Assistant(
                AssistantError::UnknownTool(_)
                | AssistantError::InvalidToolArguments { .. }
                | AssistantError::Internal(_),
            ) => "internal error".to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(code = self.error_code(), detail = %self, "request failed");
        }
        let body = ErrorBody {
            error: self.error_code(),
            message: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assistant_errors_map_to_their_statuses() {
        let cases = [
            (
                AssistantError::InvalidInput("empty message".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AssistantError::UnsupportedCurrency("XXX".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AssistantError::UpstreamUnavailable("rate feed down".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AssistantError::UpstreamOverloaded,
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (
                AssistantError::UnknownTool("orderPizza".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AssistantError::Internal("encoding failed".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).status_code(), status);
        }
    }

    #[test]
    fn internal_defects_are_opaque_on_the_wire() {
        let err = AppError::from(AssistantError::UnknownTool("orderPizza".into()));
        assert_eq!(err.public_message(), "internal error");
        assert_eq!(err.error_code(), "INTERNAL_ERROR");

        let err = AppError::from(AssistantError::Internal("tool result encoding: oops".into()));
        assert_eq!(err.public_message(), "internal error");
    }

    #[test]
    fn client_errors_keep_their_detail() {
        let err = AppError::from(AssistantError::UnsupportedCurrency("XYZ".into()));
        assert_eq!(err.public_message(), "unsupported currency: XYZ");
        assert_eq!(err.error_code(), "UNSUPPORTED_CURRENCY");

        let err = AppError::BadRequest("message must not be empty".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
