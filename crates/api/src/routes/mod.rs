pub mod concierge;
pub mod destinations;
pub mod health;
pub mod tiers;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /destinations          catalog listing (search / rank / filter / sort)
/// /destinations/top      top-rated destinations
/// /tiers                 subscription tier table
/// /tiers/{rank}          tier for a rank (unknown ranks default)
/// /concierge             Darth ZEN chat
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(destinations::router())
        .merge(tiers::router())
        .merge(concierge::router())
}
