pub mod cache;
pub mod catalog;
pub mod chat;
pub mod intent;
pub mod lexicon;
pub mod synthesis;

pub use cache::EventCache;
pub use catalog::{CatalogClient, EventSource};
pub use chat::ChatService;
