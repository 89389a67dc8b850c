//! Event catalog client.
//!
//! Talks to the EONET-shaped catalog API over HTTP. Errors are returned to
//! the caller rather than swallowed here, so the orchestrator can log them
//! before degrading to an empty result.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::models::RawEvent;
use crate::services::lexicon::CategoryKey;

/// Timeout for catalog event requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of raw catalog events. Seam for stubbing the catalog in tests.
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn fetch_events(
        &self,
        category: Option<CategoryKey>,
        days: u32,
    ) -> Result<Vec<RawEvent>>;
}

#[derive(Debug, Deserialize)]
struct EventsEnvelope {
    #[serde(default)]
    events: Vec<RawEvent>,
}

pub struct CatalogClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into(),
            api_key,
        }
    }
}

#[async_trait]
impl EventSource for CatalogClient {
    async fn fetch_events(
        &self,
        category: Option<CategoryKey>,
        days: u32,
    ) -> Result<Vec<RawEvent>> {
        let mut params: Vec<(&str, String)> = vec![
            ("status", "open".to_string()),
            ("days", days.to_string()),
        ];
        if let Some(category) = category {
            debug!(
                category = category.as_str(),
                id = category.eonet_id(),
                "mapped category to catalog id"
            );
            params.push(("category", category.eonet_id().to_string()));
        }
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.clone()));
        }

        let response = self
            .client
            .get(format!("{}/events", self.base_url))
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let body = response.text().await?;
        let envelope: EventsEnvelope = serde_json::from_str(&body)?;
        let mut events = envelope.events;

        // The upstream API has been seen returning a superset even when a
        // category filter was sent; re-filter locally.
        if let Some(category) = category {
            let before = events.len();
            events = filter_by_category(events, category);
            info!(
                before,
                after = events.len(),
                category = category.as_str(),
                "filtered catalog events"
            );
        } else {
            info!(count = events.len(), "fetched catalog events");
        }

        Ok(events)
    }
}

/// Keep only events whose category list actually contains `category`.
fn filter_by_category(events: Vec<RawEvent>, category: CategoryKey) -> Vec<RawEvent> {
    let id = category.eonet_id();
    events
        .into_iter()
        .filter(|event| event.categories.iter().any(|cat| cat.id == Some(id)))
        .collect()
}
