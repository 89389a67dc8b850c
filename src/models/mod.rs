pub mod chat;
pub mod event;

pub use chat::{ChatRequest, ChatResponse};
pub use event::{Event, EventCategory, EventGeometry, EventSource, RawEvent};
