//! Catalog event records.
//!
//! [`RawEvent`] mirrors the catalog wire shape with every field optional, so
//! partial upstream records deserialize instead of failing the whole batch.
//! [`Event`] is the normalized projection exposed to API callers, with the
//! defaulting done once here rather than scattered through the handlers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event record as returned by the catalog. Never mutated after parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub categories: Vec<RawCategory>,
    #[serde(default)]
    pub geometries: Vec<RawGeometry>,
    #[serde(default)]
    pub sources: Vec<RawSource>,
    #[serde(default)]
    pub closed: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCategory {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawGeometry {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, rename = "type")]
    pub geometry_type: Option<String>,
    #[serde(default)]
    pub coordinates: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Normalized event exposed to API callers. Required fields are defaulted
/// from the raw record; built fresh per response and never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
    pub categories: Vec<EventCategory>,
    pub geometries: Vec<EventGeometry>,
    pub sources: Vec<EventSource>,
    pub closed: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCategory {
    pub id: u32,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventGeometry {
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSource {
    pub id: String,
    pub url: String,
}

impl From<&RawEvent> for Event {
    fn from(raw: &RawEvent) -> Self {
        Event {
            id: raw.id.clone().unwrap_or_default(),
            title: raw
                .title
                .clone()
                .unwrap_or_else(|| "Unknown Event".to_string()),
            description: raw.description.clone(),
            link: raw.link.clone(),
            categories: raw
                .categories
                .iter()
                .map(|cat| EventCategory {
                    id: cat.id.unwrap_or(0),
                    title: cat
                        .title
                        .clone()
                        .unwrap_or_else(|| "Unknown Category".to_string()),
                })
                .collect(),
            geometries: raw
                .geometries
                .iter()
                .map(|geom| EventGeometry {
                    date: geom.date.clone(),
                    geometry_type: geom
                        .geometry_type
                        .clone()
                        .unwrap_or_else(|| "Point".to_string()),
                    coordinates: match &geom.coordinates {
                        Value::Null => Value::Array(Vec::new()),
                        other => other.clone(),
                    },
                })
                .collect(),
            sources: raw
                .sources
                .iter()
                .map(|src| EventSource {
                    id: src.id.clone().unwrap_or_default(),
                    url: src.url.clone().unwrap_or_default(),
                })
                .collect(),
            closed: raw.closed.clone(),
        }
    }
}
