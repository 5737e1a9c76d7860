use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversationError {
    #[error("Message is empty")]
    EmptyMessage,
}

/// Message history for a single chat session along with the editable
/// system prompt.
///
/// `messages[0]` is always a system message. Its content is refreshed
/// on `reset`; edits made with `set_system_prompt` are picked up when
/// the request payload is built by `snapshot_for_request`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversation {
    system_prompt: String,
    messages: Vec<Message>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_PROMPT)
    }
}

impl Conversation {
    pub fn new(system_prompt: &str) -> Self {
        Self {
            system_prompt: system_prompt.to_string(),
            messages: vec![Message::new(Role::System, system_prompt)],
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// The full message list, starting with the system message
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// User and assistant turns in conversation order
    pub fn history(&self) -> &[Message] {
        &self.messages[1..]
    }

    pub fn set_system_prompt(&mut self, text: &str) {
        self.system_prompt = text.to_string();
    }

    pub fn append_user(&mut self, text: &str) -> Result<(), ConversationError> {
        if text.trim().is_empty() {
            return Err(ConversationError::EmptyMessage);
        }
        self.messages.push(Message::new(Role::User, text));
        Ok(())
    }

    pub fn append_assistant(&mut self, text: &str) {
        self.messages.push(Message::new(Role::Assistant, text));
    }

    /// Drop every turn and re-seed with the current system prompt.
    pub fn reset(&mut self) {
        self.messages = vec![Message::new(Role::System, &self.system_prompt)];
    }

    /// Build the message list sent to the model: the live system
    /// prompt followed by every non-system message in order.
    pub fn snapshot_for_request(&self) -> Vec<Message> {
        let mut snapshot = Vec::with_capacity(self.messages.len());
        snapshot.push(Message::new(Role::System, &self.system_prompt));
        snapshot.extend(
            self.messages
                .iter()
                .filter(|m| m.role != Role::System)
                .cloned(),
        );
        snapshot
    }
}
