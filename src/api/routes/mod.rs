//! API routes module

pub mod chat;
pub mod conversation;

use std::sync::Arc;

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Chat turn routes
        .nest("/chat", chat::router())
        // Conversation state routes
        .nest("/conversation", conversation::router())
}
