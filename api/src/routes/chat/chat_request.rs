use serde::{Deserialize, Serialize};

/// Request body of `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The shopper's message; must be non-empty after trimming.
    pub message: String,
}

/// Response body of `POST /chat`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
}
