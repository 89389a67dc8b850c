//! Chat request/response wire types.

use serde::{Deserialize, Serialize};

use crate::models::event::Event;

pub const MESSAGE_MAX_LEN: usize = 500;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    /// Validate and trim the message: 1-500 characters, not blank.
    pub fn validated_message(&self) -> Result<&str, String> {
        let message = self.message.trim();
        if message.is_empty() {
            return Err("Message cannot be empty or only whitespace".to_string());
        }
        if message.chars().count() > MESSAGE_MAX_LEN {
            return Err(format!(
                "Message must be at most {} characters",
                MESSAGE_MAX_LEN
            ));
        }
        Ok(message)
    }
}

/// The result of one pipeline run: conversational summary plus the
/// normalized events it describes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub events: Vec<Event>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_message_rejected() {
        let request = ChatRequest {
            message: "   ".to_string(),
        };
        assert!(request.validated_message().is_err());
    }

    #[test]
    fn test_oversized_message_rejected() {
        let request = ChatRequest {
            message: "x".repeat(MESSAGE_MAX_LEN + 1),
        };
        assert!(request.validated_message().is_err());
    }

    #[test]
    fn test_message_trimmed() {
        let request = ChatRequest {
            message: "  wildfires today  ".to_string(),
        };
        assert_eq!(request.validated_message().unwrap(), "wildfires today");
    }
}
