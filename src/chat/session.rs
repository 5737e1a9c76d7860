use thiserror::Error;

use super::conversation::{Conversation, ConversationError};
use crate::mistral::{ChatCompletion, CompletionError};

#[derive(Debug, Error)]
pub enum TurnError {
    #[error(transparent)]
    Conversation(#[from] ConversationError),

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

/// Run one user turn: record the user's message, ask the model for a
/// reply and record it.
///
/// When the completion fails the user's message stays in the
/// conversation and no assistant message is added.
pub async fn submit_turn(
    conversation: &mut Conversation,
    client: &dyn ChatCompletion,
    model: &str,
    text: &str,
) -> Result<String, TurnError> {
    conversation.append_user(text)?;

    let snapshot = conversation.snapshot_for_request();
    let reply = client
        .complete(&snapshot, model)
        .await
        .inspect_err(|e| tracing::error!("Chat completion failed: {}", e))?;

    conversation.append_assistant(&reply);
    Ok(reply)
}
