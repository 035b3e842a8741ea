//! Route definitions for catalog endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::destinations;
use crate::state::AppState;

/// Routes mounted at `/api/v1`.
///
/// ```text
/// GET /destinations        -> list
/// GET /destinations/top    -> top
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/destinations", get(destinations::list))
        .route("/destinations/top", get(destinations::top))
}
