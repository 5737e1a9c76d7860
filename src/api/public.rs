//! Public API types

use axum::response::{IntoResponse, Response};
use http::StatusCode;

use crate::chat::{ConversationError, TurnError};

// Errors

pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Always log the error
        tracing::error!("{}", self.message);

        (self.status, self.message).into_response()
    }
}

/// Empty input is the caller's fault, anything that went wrong talking
/// to the model is reported as a bad gateway.
impl From<TurnError> for ApiError {
    fn from(err: TurnError) -> Self {
        match err {
            TurnError::Conversation(ConversationError::EmptyMessage) => {
                Self::new(StatusCode::BAD_REQUEST, "Message is empty")
            }
            TurnError::Completion(e) => Self::new(StatusCode::BAD_GATEWAY, format!("API Error: {e}")),
        }
    }
}

// Re-export public types from each route

pub mod chat {
    pub use crate::api::routes::chat::public::*;
}

pub mod conversation {
    pub use crate::api::routes::conversation::public::*;
}
