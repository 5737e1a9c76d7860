//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::api::routes::conversation::public::ConversationResponse;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    // Prompt field text at submission time, applied before the turn
    #[serde(default)]
    pub system_prompt: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatResponse {
    pub reply: String,
    pub conversation: ConversationResponse,
}
