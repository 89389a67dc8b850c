//! Chat pipeline orchestrator.
//!
//! Wires intent extraction, the cached catalog fetch and response synthesis
//! into one `answer` call. Catalog failures are logged and degrade to an
//! empty event list, so a dead upstream reads as "no events" to the user
//! instead of an error.

use std::sync::Arc;

use tracing::{error, info};

use crate::models::{ChatResponse, Event};
use crate::services::cache::EventCache;
use crate::services::catalog::EventSource;
use crate::services::{intent, synthesis};

pub struct ChatService {
    source: Arc<dyn EventSource>,
    cache: EventCache,
}

impl ChatService {
    pub fn new(source: Arc<dyn EventSource>, cache: EventCache) -> Self {
        Self { source, cache }
    }

    /// Run the full pipeline for one message: extract intent, fetch events
    /// (through the cache), normalize and synthesize. Never fails for a
    /// well-formed message.
    pub async fn answer(&self, message: &str) -> ChatResponse {
        let query = intent::extract(message);
        info!(
            category = query.category.map(|c| c.as_str()).unwrap_or("all"),
            days = query.days,
            region = ?query.region,
            "extracted intent"
        );

        let raw_events = match self
            .cache
            .get_or_fetch(&query, || {
                self.source.fetch_events(query.category, query.days)
            })
            .await
        {
            Ok(events) => events,
            Err(err) => {
                error!(error = %err, "catalog fetch failed, continuing with no events");
                Vec::new()
            }
        };

        let events: Vec<Event> = raw_events.iter().map(Event::from).collect();
        let response = synthesis::synthesize(message, &raw_events);

        ChatResponse { response, events }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CatalogError, Result};
    use crate::models::RawEvent;
    use crate::models::event::RawCategory;
    use crate::services::cache::EventCache;
    use crate::services::lexicon::CategoryKey;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct StubSource {
        events: Vec<RawEvent>,
        calls: AtomicUsize,
        fail: bool,
    }

    impl StubSource {
        fn with_events(events: Vec<RawEvent>) -> Self {
            Self {
                events,
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                events: Vec::new(),
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl EventSource for StubSource {
        async fn fetch_events(
            &self,
            _category: Option<CategoryKey>,
            _days: u32,
        ) -> Result<Vec<RawEvent>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(CatalogError::Status(
                    reqwest::StatusCode::SERVICE_UNAVAILABLE,
                ));
            }
            Ok(self.events.clone())
        }
    }

    fn tagged(title: &str, id: u32) -> RawEvent {
        RawEvent {
            id: Some(format!("EONET_{}", id)),
            title: Some(format!("{} event", title)),
            categories: vec![RawCategory {
                id: Some(id),
                title: Some(title.to_string()),
            }],
            ..Default::default()
        }
    }

    fn service(source: StubSource) -> (ChatService, Arc<StubSource>) {
        let source = Arc::new(source);
        let cache = EventCache::new(Duration::from_secs(300), 10);
        (ChatService::new(source.clone(), cache), source)
    }

    #[tokio::test]
    async fn test_wildfire_round_trip() {
        let events = vec![tagged("Wildfires", 8), tagged("Wildfires", 8)];
        let (service, _) = service(StubSource::with_events(events));

        let response = service
            .answer("Show me wildfires from the past week")
            .await;
        assert_eq!(response.events.len(), 2);
        assert!(response.response.contains("2"));
        assert!(response.response.contains("wildfires"));
    }

    #[tokio::test]
    async fn test_volcano_scenario_exact_summary() {
        let events = vec![
            tagged("Volcanoes", 12),
            tagged("Volcanoes", 12),
            tagged("Volcanoes", 12),
        ];
        let (service, _) = service(StubSource::with_events(events));

        let response = service.answer("What volcanoes happened today?").await;
        assert_eq!(response.events.len(), 3);
        assert_eq!(
            response.response,
            "I found 3 recent volcanoes events for you. Check out the event cards below for detailed information about each one."
        );
    }

    #[tokio::test]
    async fn test_earthquake_summary_ignores_stub_data() {
        let (service, _) = service(StubSource::with_events(vec![tagged("Wildfires", 8)]));

        let response = service.answer("earthquakes this week").await;
        assert!(
            response
                .response
                .starts_with("I understand you're asking about earthquakes")
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_degrades_to_no_events() {
        let (service, _) = service(StubSource::failing());

        let response = service.answer("storms in europe").await;
        assert!(response.events.is_empty());
        assert!(response.response.contains("couldn't find any recent natural events"));
    }

    #[tokio::test]
    async fn test_repeat_question_served_from_cache() {
        let (service, source) = service(StubSource::with_events(vec![tagged("Floods", 9)]));

        service.answer("floods this week").await;
        service.answer("floods this week").await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_events_are_normalized() {
        let raw = RawEvent {
            categories: vec![RawCategory {
                id: Some(8),
                title: Some("Wildfires".to_string()),
            }],
            ..Default::default()
        };
        let (service, _) = service(StubSource::with_events(vec![raw]));

        let response = service.answer("wildfires today").await;
        assert_eq!(response.events[0].title, "Unknown Event");
        assert_eq!(response.events[0].id, "");
    }
}
