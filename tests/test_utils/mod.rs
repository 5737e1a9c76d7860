//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, body::Body};

use chatbot::api::AppState;
use chatbot::api::app;
use chatbot::chat::Message;
use chatbot::core::AppConfig;
use chatbot::mistral::{ChatCompletion, CompletionError};

/// Stands in for the remote model. Returns queued results in order and
/// records each request's messages.
#[derive(Default)]
pub struct FakeCompletion {
    replies: Mutex<Vec<Result<String, CompletionError>>>,
    pub requests: Mutex<Vec<Vec<Message>>>,
}

impl FakeCompletion {
    pub fn replying(replies: Vec<Result<String, CompletionError>>) -> Self {
        let mut replies = replies;
        replies.reverse();
        Self {
            replies: Mutex::new(replies),
            requests: Mutex::new(vec![]),
        }
    }
}

#[async_trait]
impl ChatCompletion for FakeCompletion {
    async fn complete(&self, messages: &[Message], _model: &str) -> Result<String, CompletionError> {
        self.requests.lock().unwrap().push(messages.to_vec());
        self.replies
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Ok("default reply".to_string()))
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        api_hostname: String::from("http://localhost:9999"),
        api_key: String::from("test-api-key"),
        model: String::from("open-mistral-7b"),
        system_message: String::from("You are a helpful assistant."),
    }
}

/// Creates a test application router backed by the given fake model.
pub fn test_app(client: Arc<FakeCompletion>) -> Router {
    let (app, _) = test_app_with_state(client);
    app
}

/// Like `test_app` but also hands back the shared state.
pub fn test_app_with_state(client: Arc<dyn ChatCompletion>) -> (Router, Arc<AppState>) {
    let app_state = Arc::new(AppState::new(test_config(), client));
    (app(Arc::clone(&app_state)), app_state)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not valid UTF-8")
}
