//! Integration tests for the catalog listing endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

// ---------------------------------------------------------------------------
// Test: default listing is rank-gated to Acolyte
// ---------------------------------------------------------------------------

#[tokio::test]
async fn default_listing_shows_only_acolyte_destinations() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/destinations").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();

    assert_eq!(data.len(), 6);
    for dest in data {
        assert_eq!(dest["requiredRank"], "Acolyte");
    }
}

// ---------------------------------------------------------------------------
// Test: Darth rank sees the full catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn darth_rank_sees_full_catalog() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/destinations?rank=Darth").await;

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 25);
}

// ---------------------------------------------------------------------------
// Test: unknown rank defaults instead of erroring
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_rank_defaults_to_acolyte() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/destinations?rank=GrandMoff").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 6);
}

// ---------------------------------------------------------------------------
// Test: free-text search narrows results
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_term_narrows_results() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/destinations?rank=Darth&q=volcano").await;

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();

    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], "mustafar-volcano-spires");
    // Payload uses the frontend's camelCase contract.
    assert!(data[0]["backgroundLore"].is_string());
    assert!(data[0]["adventureLevel"].is_number());
}

// ---------------------------------------------------------------------------
// Test: price sort is ascending on parsed credits
// ---------------------------------------------------------------------------

#[tokio::test]
async fn price_sort_returns_cheapest_first() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/destinations?rank=Darth&sort=price").await;

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();

    assert_eq!(data[0]["id"], "ambria-desert-monasteries");
    assert_eq!(data[data.len() - 1]["id"], "rakata-prime-star-forge");
}

// ---------------------------------------------------------------------------
// Test: selector filter applies a single predicate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn low_gravity_filter_returns_only_matching_worlds() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/destinations?rank=Darth&filter=low-gravity").await;

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();

    assert_eq!(data.len(), 3);
    for dest in data {
        assert!(dest["gravityLevel"].as_f64().unwrap() < 0.8);
    }
}

// ---------------------------------------------------------------------------
// Test: invalid sort / filter keys are a 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_sort_key_returns_400() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/destinations?sort=popularity").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn invalid_filter_key_returns_400() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/destinations?filter=cheap").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: no matches is an empty 200, never an error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unmatched_search_returns_empty_data() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/destinations?rank=Darth&q=xyzzy").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: top destinations endpoint
// ---------------------------------------------------------------------------

#[tokio::test]
async fn top_defaults_to_ten_sorted_by_rating() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/destinations/top").await;

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();

    assert_eq!(data.len(), 10);
    let averages: Vec<f64> = data
        .iter()
        .map(|d| d["ratings"]["average"].as_f64().unwrap())
        .collect();
    for pair in averages.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[tokio::test]
async fn top_with_zero_count_is_empty() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/destinations/top?count=0").await;

    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn top_with_oversized_count_returns_whole_catalog() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/destinations/top?count=1000").await;

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 25);
}
