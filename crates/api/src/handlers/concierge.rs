//! Handler for the Darth ZEN concierge endpoint.

use axum::Json;
use serde::{Deserialize, Serialize};
use voyages_core::concierge;
use voyages_core::rank::Rank;

use crate::error::{AppError, AppResult};

/// Maximum accepted message length in bytes.
pub const MAX_MESSAGE_LENGTH: usize = 2_000;

/// Request body for the concierge chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Caller's rank; unknown or absent values default to Acolyte.
    pub rank: Option<String>,
}

/// Response body: the concierge's single reply.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /concierge
///
/// Stateless: each request carries the full input (message and rank) and
/// gets exactly one reply.
pub async fn chat(Json(request): Json<ChatRequest>) -> AppResult<Json<ChatResponse>> {
    if request.message.trim().is_empty() {
        return Err(AppError::BadRequest(
            "message must not be empty".to_string(),
        ));
    }
    if request.message.len() > MAX_MESSAGE_LENGTH {
        return Err(AppError::BadRequest(format!(
            "message too long: {} bytes (max {MAX_MESSAGE_LENGTH})",
            request.message.len()
        )));
    }

    let rank = Rank::resolve(request.rank.as_deref().unwrap_or_default());
    let reply = concierge::respond(&request.message, rank, &mut rand::rng());

    tracing::debug!(rank = rank.as_str(), "Concierge reply generated");
    Ok(Json(ChatResponse { reply }))
}
