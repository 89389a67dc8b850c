use axum::{Json, extract::State};
use tracing::{debug, error};

use crate::api::response::ApiError;
use crate::api::state::AppState;
use crate::models::{ChatRequest, ChatResponse};

// POST /api/chat
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let message = match request.validated_message() {
        Ok(message) => message,
        Err(reason) => {
            if state.config.environment.is_production() {
                error!("rejected chat request: invalid message");
            } else {
                error!(%reason, raw = %request.message, "rejected chat request");
            }
            return Err(ApiError::Validation(reason));
        }
    };

    debug!(len = message.len(), "handling chat message");
    let response = state.chat.answer(message).await;
    Ok(Json(response))
}
