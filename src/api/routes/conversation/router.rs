//! Router for the conversation API

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post, put},
};

use super::public;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Get the system prompt and every message in the conversation
async fn conversation_state(State(state): State<SharedState>) -> Json<public::ConversationResponse> {
    let conversation = state.conversation.lock().await;
    Json(public::ConversationResponse::from(&*conversation))
}

/// Replace the system prompt used for subsequent requests
async fn update_system_prompt(
    State(state): State<SharedState>,
    Json(payload): Json<public::SystemPromptRequest>,
) -> Json<public::ConversationResponse> {
    let mut conversation = state.conversation.lock().await;
    conversation.set_system_prompt(&payload.system_prompt);
    tracing::debug!("System prompt updated");
    Json(public::ConversationResponse::from(&*conversation))
}

/// Discard all turns, keeping only the current system prompt
async fn reset_conversation(
    State(state): State<SharedState>,
    Json(payload): Json<public::ResetRequest>,
) -> Json<public::ConversationResponse> {
    let mut conversation = state.conversation.lock().await;
    if let Some(prompt) = payload.system_prompt {
        conversation.set_system_prompt(&prompt);
    }
    conversation.reset();
    tracing::info!("Chat memory reset");
    Json(public::ConversationResponse::from(&*conversation))
}

/// Create the conversation router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(conversation_state))
        .route("/system-prompt", put(update_system_prompt))
        .route("/reset", post(reset_conversation))
}
