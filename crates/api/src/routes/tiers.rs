//! Route definitions for subscription tier endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::tiers;
use crate::state::AppState;

/// Routes mounted at `/api/v1`.
///
/// ```text
/// GET /tiers           -> list
/// GET /tiers/{rank}    -> get
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tiers", get(tiers::list))
        .route("/tiers/{rank}", get(tiers::get))
}
