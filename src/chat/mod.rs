mod conversation;
mod markdown;
mod session;

pub use conversation::{Conversation, ConversationError, DEFAULT_SYSTEM_PROMPT, Message, Role};
pub use markdown::render_markdown;
pub use session::{TurnError, submit_turn};
