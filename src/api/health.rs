//! Health endpoints.
//!
//! `/api/health` is a plain liveness check; `/api/health/detailed` probes
//! the event catalog and the model service with bounded timeouts and
//! reports a healthy / degraded / unhealthy rollup.

use std::time::Duration;

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::warn;

use crate::api::state::AppState;

/// Timeout for dependency probes.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize)]
pub struct Health {
    status: String,
    message: String,
}

#[derive(Serialize)]
pub struct DetailedHealth {
    status: String,
    timestamp: String,
    dependencies: Dependencies,
    issues: Vec<String>,
}

#[derive(Serialize)]
pub struct Dependencies {
    event_catalog: bool,
    model_service: bool,
}

// GET /api/health
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy".to_string(),
        message: "geochat is running".to_string(),
    })
}

// GET /api/health/detailed
pub async fn health_detailed(State(state): State<AppState>) -> Json<DetailedHealth> {
    let client = reqwest::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new());

    let catalog_url = format!("{}/categories", state.config.catalog_base_url);
    let models_url = format!("{}/models", state.config.model_service_url);

    let (catalog_up, model_service_up) = tokio::join!(
        probe(&client, &catalog_url, "event catalog"),
        probe(&client, &models_url, "model service"),
    );

    let mut issues = Vec::new();
    if !catalog_up {
        issues.push("Event catalog is unavailable - event data may not be current".to_string());
    }
    if !model_service_up {
        issues.push("Model service is unavailable - chat functionality may be limited".to_string());
    }

    let status = match (catalog_up, model_service_up) {
        (true, true) => "healthy",
        (false, false) => "unhealthy",
        _ => "degraded",
    };

    Json(DetailedHealth {
        status: status.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        dependencies: Dependencies {
            event_catalog: catalog_up,
            model_service: model_service_up,
        },
        issues,
    })
}

async fn probe(client: &reqwest::Client, url: &str, name: &str) -> bool {
    match client.get(url).send().await {
        Ok(response) => response.status().is_success(),
        Err(err) => {
            warn!(dependency = name, error = %err, "health probe failed");
            false
        }
    }
}
