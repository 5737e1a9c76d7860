//! Public types for the conversation API
use serde::{Deserialize, Serialize};

use crate::chat::{Conversation, Message, Role, render_markdown};

/// A user or assistant turn ready for display
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct RenderedMessage {
    pub role: Role,
    pub html: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ConversationResponse {
    pub system_prompt: String,
    pub messages: Vec<Message>,
    pub rendered: Vec<RenderedMessage>,
}

impl From<&Conversation> for ConversationResponse {
    fn from(conversation: &Conversation) -> Self {
        let rendered = conversation
            .history()
            .iter()
            .map(|m| RenderedMessage {
                role: m.role,
                html: render_markdown(&m.content),
            })
            .collect();
        Self {
            system_prompt: conversation.system_prompt().to_string(),
            messages: conversation.messages().to_vec(),
            rendered,
        }
    }
}

#[derive(Deserialize)]
pub struct SystemPromptRequest {
    pub system_prompt: String,
}

/// Optionally carries the prompt field's current text so it is applied
/// before the reset.
#[derive(Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub system_prompt: Option<String>,
}
