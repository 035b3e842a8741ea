//! Integration tests for the Darth ZEN concierge endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;
use voyages_core::concierge::{FALLBACK_REPLIES, UPGRADE_REQUIRED};

// ---------------------------------------------------------------------------
// Test: Acolytes (and absent ranks) hit the access gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_rank_defaults_to_acolyte_and_is_gated() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/concierge",
        json!({ "message": "what is the most dangerous place" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["reply"], UPGRADE_REQUIRED);
}

// ---------------------------------------------------------------------------
// Test: named-destination lookup embeds lore and stats
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lord_asking_about_mustafar_gets_lore_and_stats() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/concierge",
        json!({ "message": "tell me about mustafar", "rank": "Lord" }),
    )
    .await;

    let json = body_json(response).await;
    let reply = json["reply"].as_str().unwrap();

    assert!(reply.contains("Once the site of Anakin's transformation"));
    assert!(reply.contains("Adventure Level: 9/10, Danger: 8/10, Gravity: 1.2G"));
}

// ---------------------------------------------------------------------------
// Test: randomized rules answer from the candidate set
// ---------------------------------------------------------------------------

#[tokio::test]
async fn low_gravity_request_names_a_qualifying_world() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/concierge",
        json!({ "message": "low gravity please", "rank": "Lord" }),
    )
    .await;

    let json = body_json(response).await;
    let reply = json["reply"].as_str().unwrap();

    let low_worlds = [
        "Nyx-Korr Shadow Realm",
        "Roon Floating Citadels",
        "Rakata Prime Star Forge",
    ];
    assert!(
        low_worlds.iter().any(|name| reply.contains(name)),
        "unexpected reply: {reply}"
    );
}

#[tokio::test]
async fn nonsense_input_draws_from_the_fallback_set() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/concierge",
        json!({ "message": "xyzzy nonsense", "rank": "Inquisitor" }),
    )
    .await;

    let json = body_json(response).await;
    let reply = json["reply"].as_str().unwrap();

    assert!(
        FALLBACK_REPLIES.contains(&reply),
        "unexpected reply: {reply}"
    );
}

// ---------------------------------------------------------------------------
// Test: subscription question embeds the caller's rank
// ---------------------------------------------------------------------------

#[tokio::test]
async fn subscription_question_embeds_current_rank() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/concierge",
        json!({ "message": "tell me about my subscription", "rank": "Darth" }),
    )
    .await;

    let json = body_json(response).await;
    let reply = json["reply"].as_str().unwrap();
    assert!(reply.contains("Your current rank is Darth."));
}

// ---------------------------------------------------------------------------
// Test: request validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_message_returns_400() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/concierge",
        json!({ "message": "   ", "rank": "Lord" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn missing_message_field_returns_422() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/concierge", json!({ "rank": "Lord" })).await;

    // Axum's Json extractor rejects bodies that fail deserialization.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
