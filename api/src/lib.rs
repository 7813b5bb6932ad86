//! HTTP surface of the shopping assistant.
//!
//! Exposes a single `POST /chat` endpoint and wires the assistant to its live
//! backends at startup. All handler failures flow through [`AppError`], which
//! owns the status-code mapping and keeps internal defects opaque on the wire.

use std::{env, sync::Arc};

use axum::{Router, routing::post};
use tokio::signal;
use tracing::{error, info};

pub mod core;
pub mod error_handler;

mod routes;

pub use crate::core::app_state::{AppState, LiveAssistant};
pub use error_handler::{AppError, AppResult};

use crate::routes::chat::chat_route::chat_route;

/// Boots the server and serves until Ctrl+C.
pub async fn start() -> Result<(), AppError> {
    let host_url = env::var("API_ADDRESS").map_err(|_| AppError::MissingEnv("API_ADDRESS"))?;

    let state = Arc::new(AppState::from_env()?);
    info!(
        catalog_products = state.catalog_size,
        "application state ready"
    );

    let app = Router::new()
        .route("/chat", post(chat_route))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    info!(address = %host_url, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Resolves when Ctrl+C is received.
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!(%err, "failed to listen for shutdown signal");
    }
}
