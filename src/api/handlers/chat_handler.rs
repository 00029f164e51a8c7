use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::chat_dto::*},
    error::AppError,
    security::validation::RequestValidator,
};

/// 为一条消息挑选固定回复
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.validator.validate_message(&request.message)?;
    let message = RequestValidator::sanitize_string(&request.message);
    debug!("Chat message received: {} chars", message.chars().count());

    let response = {
        let mut rng = state.rng.lock().await;
        state.selector.select_response(&message, &mut **rng)
    };
    state.metrics.record_chat();

    Ok(Json(ChatResponse {
        response,
        timestamp: Utc::now(),
    }))
}
