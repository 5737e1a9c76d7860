//! Router for the chat API

use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};

use super::public;
use crate::api::public::ApiError;
use crate::api::routes::conversation::public::ConversationResponse;
use crate::api::state::AppState;
use crate::chat::submit_turn;

type SharedState = Arc<AppState>;

/// Send the user's message to the model and record the reply
async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::ChatRequest>,
) -> Result<Json<public::ChatResponse>, ApiError> {
    // Only one turn may be in flight at a time
    let _turn = state.turn.try_acquire().map_err(|_| {
        ApiError::new(StatusCode::CONFLICT, "A reply is already in progress")
    })?;

    let mut conversation = state.conversation.lock().await;
    if let Some(prompt) = &payload.system_prompt {
        conversation.set_system_prompt(prompt);
    }

    let reply = submit_turn(
        &mut conversation,
        state.client.as_ref(),
        &state.config.model,
        &payload.message,
    )
    .await?;

    Ok(Json(public::ChatResponse {
        reply,
        conversation: ConversationResponse::from(&*conversation),
    }))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(chat_handler))
}
