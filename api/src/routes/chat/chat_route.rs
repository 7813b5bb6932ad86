use std::sync::Arc;

use axum::extract::{Json, State};
use tracing::{info, instrument};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::chat::chat_request::{ChatRequest, ChatResponse},
};

/// HTTP endpoint for one complete dialogue turn.
///
/// Expects a JSON payload with a non-empty `message`; whitespace-only input
/// is rejected before the assistant is invoked.
#[instrument(name = "chat_route", skip(state, body))]
pub async fn chat_route(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let message = body.message.trim();
    if message.is_empty() {
        return Err(AppError::BadRequest("message must not be empty".into()));
    }

    info!(chars = message.len(), "chat turn started");
    let answer = state.assistant.chat(message).await?;
    info!(chars = answer.len(), "chat turn completed");

    Ok(Json(ChatResponse { answer }))
}
