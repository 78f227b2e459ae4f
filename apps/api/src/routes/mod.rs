pub mod health;
pub mod preferences;

use axum::{
    routing::{get, post},
    Router,
};

use crate::quote::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Quote API
        .route("/api/v1/quotes", post(handlers::handle_calculate))
        .route("/api/v1/quotes/latest", get(handlers::handle_latest_quote))
        .route("/api/v1/layout", post(handlers::handle_layout_preview))
        // Display preferences
        .route(
            "/api/v1/preferences",
            get(preferences::handle_get_preferences).put(preferences::handle_put_preferences),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::cache::MemoryCache;
    use crate::config::Config;

    fn test_state() -> AppState {
        AppState {
            config: Config::default(),
            cache: Arc::new(MemoryCache::new()),
        }
    }

    async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = build_router(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn gloss_order(width: &str, height: &str, quantity: &str) -> Value {
        json!({
            "material": "gloss",
            "stickers": [{ "width": width, "height": height, "quantity": quantity }],
            "vinyl_cost": "420",
            "vat_rate_percent": "15",
            "include_vat": true,
            "rounded_corners": false
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&test_state(), get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_copy_before_calculate_has_no_quote() {
        let (status, body) = send(&test_state(), get_req("/api/v1/quotes/latest")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "NO_QUOTE_AVAILABLE");
    }

    #[tokio::test]
    async fn test_calculate_then_copy_returns_same_figures() {
        let state = test_state();
        let (status, body) = send(&state, post_json("/api/v1/quotes", gloss_order("100", "150", "5"))).await;
        assert_eq!(status, StatusCode::OK);

        let quote: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(quote["material"], "gloss");
        assert_eq!(quote["lines"][0]["status"], "priced");
        assert_eq!(quote["lines"][0]["layout"]["price_per_sticker"], 6.83);
        assert_eq!(quote["totals"]["total_excl_vat"], 40.98);
        assert_eq!(quote["totals"]["total_incl_vat"], 47.13);
        assert_eq!(quote["totals"]["below_minimum_order"], true);

        let (status, copied) = send(&state, get_req("/api/v1/quotes/latest")).await;
        assert_eq!(status, StatusCode::OK);
        let copied = String::from_utf8(copied).unwrap();
        assert_eq!(Some(copied.as_str()), quote["text"].as_str());
        assert!(copied.contains("R6.83 excl VAT per sticker (6 stickers per row)"));
    }

    #[tokio::test]
    async fn test_missing_material_keeps_previous_quote() {
        let state = test_state();
        let (status, _) = send(&state, post_json("/api/v1/quotes", gloss_order("100", "150", "5"))).await;
        assert_eq!(status, StatusCode::OK);
        let (_, before) = send(&state, get_req("/api/v1/quotes/latest")).await;

        let mut order = gloss_order("64", "30", "15");
        order["material"] = json!("unspecified");
        let (status, body) = send(&state, post_json("/api/v1/quotes", order)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "NO_MATERIAL_SELECTED");

        let (_, after) = send(&state, get_req("/api/v1/quotes/latest")).await;
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_all_invalid_lines_produce_no_cached_quote() {
        let state = test_state();
        let (status, body) = send(&state, post_json("/api/v1/quotes", gloss_order("0", "150", "5"))).await;
        assert_eq!(status, StatusCode::OK);
        let quote: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(quote["lines"][0]["status"], "rejected");
        assert!(quote["totals"].is_null());
        assert!(quote["text"].is_null());

        let (status, _) = send(&state, get_req("/api/v1/quotes/latest")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_empty_overrides_use_defaults() {
        let state = test_state();
        let order = json!({
            "material": "matt",
            "stickers": [{ "width": 100, "height": 150, "quantity": "" }],
            "vinyl_cost": "",
            "vat_rate_percent": "abc",
            "include_vat": true
        });
        let (status, body) = send(&state, post_json("/api/v1/quotes", order)).await;
        assert_eq!(status, StatusCode::OK);
        let quote: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(quote["vat_rate"], 0.15);
        assert_eq!(quote["lines"][0]["spec"]["quantity"], 1);
        assert_eq!(quote["lines"][0]["layout"]["price_per_sticker"], 6.83);
    }

    #[tokio::test]
    async fn test_layout_preview() {
        let state = test_state();
        let (status, body) = send(
            &state,
            post_json("/api/v1/layout", json!({ "width": 100, "height": "150" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let layout: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(layout["price_per_sticker"], 6.83);
        assert_eq!(layout["stickers_per_row"], 6);
        assert_eq!(layout["orientation"], "horizontal");

        let (status, body) = send(
            &state,
            post_json("/api/v1/layout", json!({ "width": "wide", "height": 10 })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "INVALID_DIMENSIONS");
    }

    #[tokio::test]
    async fn test_preferences_round_trip() {
        let state = test_state();
        let (_, body) = send(&state, get_req("/api/v1/preferences")).await;
        let prefs: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(prefs["dark_mode"], false);

        let put = Request::builder()
            .method("PUT")
            .uri("/api/v1/preferences")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "dark_mode": true }).to_string()))
            .unwrap();
        let (status, _) = send(&state, put).await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&state, get_req("/api/v1/preferences")).await;
        let prefs: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(prefs["dark_mode"], true);
    }
}
