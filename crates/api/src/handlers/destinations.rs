//! Handlers for catalog listing endpoints.

use axum::extract::Query;
use axum::Json;
use serde::Deserialize;
use voyages_core::catalog::{self, CatalogFilter, CatalogQuery, SortKey, DEFAULT_TOP_COUNT};
use voyages_core::destination::Destination;
use voyages_core::rank::Rank;

use crate::error::AppResult;
use crate::response::DataResponse;

/// Query parameters for the catalog listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Free-text search term.
    pub q: Option<String>,
    /// Caller's rank; unknown or absent values default to Acolyte.
    pub rank: Option<String>,
    /// Sort key (default: `rating`).
    pub sort: Option<String>,
    /// Selector filter (default: `all`).
    pub filter: Option<String>,
}

/// GET /destinations
///
/// Composed catalog query: search, rank-based access filter, selector
/// filter, and sort. Unknown sort or filter keys are a 400; unknown ranks
/// default gracefully.
pub async fn list(
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<&'static Destination>>>> {
    let sort: SortKey = match params.sort.as_deref() {
        Some(key) => key.parse()?,
        None => SortKey::default(),
    };
    let filter: CatalogFilter = match params.filter.as_deref() {
        Some(key) => key.parse()?,
        None => CatalogFilter::default(),
    };
    let rank = Rank::resolve(params.rank.as_deref().unwrap_or_default());

    let results = CatalogQuery {
        query: params.q.as_deref().unwrap_or_default(),
        rank,
        filter,
        sort,
    }
    .run();

    tracing::debug!(
        rank = rank.as_str(),
        results = results.len(),
        "Catalog query served"
    );
    Ok(Json(DataResponse { data: results }))
}

/// Query parameters for the top destinations endpoint.
#[derive(Debug, Deserialize)]
pub struct TopParams {
    /// How many entries to return (default: 10).
    pub count: Option<i64>,
}

/// GET /destinations/top
///
/// The catalog sorted descending by average rating, truncated to `count`.
pub async fn top(
    Query(params): Query<TopParams>,
) -> Json<DataResponse<Vec<&'static Destination>>> {
    let results = catalog::top_destinations(params.count.unwrap_or(DEFAULT_TOP_COUNT));
    Json(DataResponse { data: results })
}
