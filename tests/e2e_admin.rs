mod support;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use sougi_core::application::ports::cache::CacheStore;
use sougi_core::infrastructure::cache::InMemoryCacheStore;
use support::{
    ADMIN_KEY, SAKURA_ID, ScriptedGenerator, TestPorts, make_test_router, make_test_router_with,
    post_json, post_json_as_admin, read_json,
};
use tower::ServiceExt; // for oneshot

const CLEAR_URI: &str = "/api/v1/admin/cache/clear";

async fn seeded_store() -> Arc<InMemoryCacheStore> {
    let store = Arc::new(InMemoryCacheStore::new());
    for key in ["search:練馬区", "search:板橋区", "place:ChIJsakura0001", "slug:nerima-sakura"] {
        store.set(key, "{}", None).await.unwrap();
    }
    store
}

#[tokio::test]
async fn clear_requires_admin_key() {
    let app = make_test_router();
    let resp = app
        .oneshot(post_json(CLEAR_URI, &json!({ "namespace": "search" })))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn wrong_admin_key_is_rejected() {
    let app = make_test_router();
    let resp = app
        .oneshot(post_json_as_admin(
            CLEAR_URI,
            &json!({ "namespace": "search" }),
            "not-the-key",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_routes_fail_closed_without_configured_key() {
    let app = make_test_router_with(TestPorts::default(), None);
    let resp = app
        .oneshot(post_json_as_admin(
            CLEAR_URI,
            &json!({ "namespace": "search" }),
            ADMIN_KEY,
        ))
        .await
        .unwrap();
    support::assert_error_response(
        resp,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
    )
    .await;
}

#[tokio::test]
async fn clears_only_the_requested_namespace() {
    let store = seeded_store().await;
    let app = make_test_router_with(
        TestPorts {
            store: store.clone(),
            ..TestPorts::default()
        },
        Some(ADMIN_KEY),
    );

    let resp = app
        .oneshot(post_json_as_admin(
            CLEAR_URI,
            &json!({ "namespace": "search" }),
            ADMIN_KEY,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let report = read_json(resp).await;
    assert_eq!(report["pattern"], "search:*");
    assert_eq!(report["scanned"], 2);
    assert_eq!(report["deleted"], 2);
    assert_eq!(report["verified"], 2);
    assert!(report["failed"].as_array().unwrap().is_empty());

    assert!(!store.exists("search:練馬区").await.unwrap());
    assert!(store.exists("place:ChIJsakura0001").await.unwrap());
    assert!(store.exists("slug:nerima-sakura").await.unwrap());
}

#[tokio::test]
async fn bearer_token_is_accepted_and_dry_run_keeps_keys() {
    let store = seeded_store().await;
    let app = make_test_router_with(
        TestPorts {
            store: store.clone(),
            ..TestPorts::default()
        },
        Some(ADMIN_KEY),
    );

    let req = axum::http::Request::builder()
        .method("POST")
        .uri(CLEAR_URI)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {ADMIN_KEY}"))
        .body(axum::body::Body::from(
            json!({ "namespace": "place", "dry_run": true }).to_string(),
        ))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let report = read_json(resp).await;
    assert_eq!(report["dry_run"], true);
    assert_eq!(report["scanned"], 1);
    assert_eq!(report["deleted"], 0);
    assert!(store.exists("place:ChIJsakura0001").await.unwrap());
}

#[tokio::test]
async fn unknown_namespace_is_bad_request() {
    let app = make_test_router();
    let resp = app
        .oneshot(post_json_as_admin(
            CLEAR_URI,
            &json!({ "namespace": "sessions" }),
            ADMIN_KEY,
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn regenerate_description_requires_admin() {
    let generator = Arc::new(ScriptedGenerator::always(&support::good_description(
        "さくら会館",
    )));
    let app = make_test_router_with(
        TestPorts {
            generator: generator.clone(),
            ..TestPorts::default()
        },
        Some(ADMIN_KEY),
    );
    let uri = format!("/api/v1/places/{SAKURA_ID}/description/regenerate");

    let resp = app
        .clone()
        .oneshot(post_json(&uri, &json!({})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(generator.count(), 0);

    let resp = app
        .oneshot(post_json_as_admin(&uri, &json!({}), ADMIN_KEY))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["cached"], false);
    assert_eq!(body["name"], "さくら会館");
    assert_eq!(generator.count(), 1);
}
