//! Handlers for subscription tier endpoints.

use axum::extract::Path;
use axum::Json;
use voyages_core::rank::Rank;
use voyages_core::tier::{tier_for, SubscriptionTier, TIERS};

use crate::response::DataResponse;

/// GET /tiers
///
/// The full tier table, ordered by rank.
pub async fn list() -> Json<DataResponse<&'static [SubscriptionTier]>> {
    Json(DataResponse { data: TIERS })
}

/// GET /tiers/{rank}
///
/// The tier for a rank. Unknown ranks resolve to the Acolyte tier rather
/// than a 404, matching the access-default contract.
pub async fn get(Path(rank): Path<String>) -> Json<DataResponse<&'static SubscriptionTier>> {
    Json(DataResponse {
        data: tier_for(Rank::resolve(&rank)),
    })
}
