pub mod chat;
pub mod health;
pub mod response;
pub mod state;

pub use response::{ApiError, ApiResponse};
pub use state::AppState;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};

use crate::middleware::rate_limit_middleware;

/// Build the API router. Rate limiting applies to the chat route only;
/// health probes stay reachable when the limit is hit.
pub fn router(state: AppState) -> Router {
    let chat_routes = Router::new()
        .route("/api/chat", post(chat::chat))
        .route_layer(from_fn_with_state(state.clone(), rate_limit_middleware));

    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/health/detailed", get(health::health_detailed))
        .merge(chat_routes)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppCore;
    use crate::config::{Environment, ServerConfig};
    use crate::error::Result;
    use crate::models::RawEvent;
    use crate::models::event::RawCategory;
    use crate::services::catalog::EventSource;
    use crate::services::lexicon::CategoryKey;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct StubSource(Vec<RawEvent>);

    #[async_trait]
    impl EventSource for StubSource {
        async fn fetch_events(
            &self,
            _category: Option<CategoryKey>,
            _days: u32,
        ) -> Result<Vec<RawEvent>> {
            Ok(self.0.clone())
        }
    }

    fn test_config(rate_limit: Option<u64>) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            catalog_base_url: "http://127.0.0.1:0".to_string(),
            nasa_api_key: None,
            model_service_url: "http://127.0.0.1:0".to_string(),
            cache_ttl_secs: 300,
            cache_capacity: 100,
            rate_limit_per_minute: rate_limit,
            environment: Environment::Development,
        }
    }

    fn test_router(events: Vec<RawEvent>, rate_limit: Option<u64>) -> Router {
        let core = AppCore::with_source(test_config(rate_limit), Arc::new(StubSource(events)));
        router(Arc::new(core))
    }

    fn chat_request(message: &str) -> Request<Body> {
        let body = serde_json::json!({ "message": message }).to_string();
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn wildfire_event() -> RawEvent {
        RawEvent {
            id: Some("EONET_1".to_string()),
            title: Some("Canyon Fire".to_string()),
            categories: vec![RawCategory {
                id: Some(8),
                title: Some("Wildfires".to_string()),
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_health_route() {
        let response = test_router(Vec::new(), None)
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_chat_happy_path() {
        let response = test_router(vec![wildfire_event()], None)
            .oneshot(chat_request("Show me wildfires from the past week"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["events"].as_array().unwrap().len(), 1);
        assert!(
            parsed["response"]
                .as_str()
                .unwrap()
                .contains("1 recent wildfires event")
        );
    }

    #[tokio::test]
    async fn test_blank_message_rejected_before_pipeline() {
        let response = test_router(vec![wildfire_event()], None)
            .oneshot(chat_request("   "))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_oversized_message_rejected() {
        let message = "x".repeat(501);
        let response = test_router(Vec::new(), None)
            .oneshot(chat_request(&message))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rate_limit_applies_to_chat_only() {
        let router = test_router(Vec::new(), Some(1));

        let first = router
            .clone()
            .oneshot(chat_request("wildfires today"))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = router
            .clone()
            .oneshot(chat_request("wildfires today"))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);

        let health = router
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(health.status(), StatusCode::OK);
    }
}
