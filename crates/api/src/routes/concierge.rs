//! Route definitions for the concierge chat endpoint.

use axum::routing::post;
use axum::Router;

use crate::handlers::concierge;
use crate::state::AppState;

/// Routes mounted at `/api/v1`.
///
/// ```text
/// POST /concierge    -> chat
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/concierge", post(concierge::chat))
}
