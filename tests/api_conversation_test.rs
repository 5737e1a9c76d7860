//! Integration tests for the conversation API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use chatbot::api::public::conversation::ConversationResponse;
    use chatbot::chat::{Message, Role};
    use tower::util::ServiceExt;

    use crate::test_utils::{FakeCompletion, body_to_string, test_app};

    async fn send(app: &Router, request: Request<Body>) -> ConversationResponse {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_string(response.into_body()).await;
        serde_json::from_str(&body).unwrap()
    }

    fn get_conversation() -> Request<Body> {
        Request::builder()
            .uri("/api/conversation")
            .body(Body::empty())
            .unwrap()
    }

    fn set_prompt(prompt: &str) -> Request<Body> {
        Request::builder()
            .uri("/api/conversation/system-prompt")
            .method("PUT")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::json!({ "system_prompt": prompt }).to_string(),
            ))
            .unwrap()
    }

    fn reset(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .uri("/api/conversation/reset")
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn chat(message: &str) -> Request<Body> {
        Request::builder()
            .uri("/api/chat")
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::json!({ "message": message }).to_string(),
            ))
            .unwrap()
    }

    /// Tests the initial state is a single default system message
    #[tokio::test]
    async fn it_starts_with_the_configured_system_prompt() {
        let app = test_app(Arc::new(FakeCompletion::default()));

        let state = send(&app, get_conversation()).await;
        assert_eq!(state.system_prompt, "You are a helpful assistant.");
        assert_eq!(
            state.messages,
            vec![Message::new(Role::System, "You are a helpful assistant.")]
        );
    }

    /// Tests editing the prompt does not rewrite stored history
    #[tokio::test]
    async fn it_updates_the_system_prompt() {
        let app = test_app(Arc::new(FakeCompletion::default()));

        let state = send(&app, set_prompt("Be terse.")).await;
        assert_eq!(state.system_prompt, "Be terse.");
        assert_eq!(state.messages[0].content, "You are a helpful assistant.");
    }

    /// Tests reset collapses several turns to the current prompt
    #[tokio::test]
    async fn it_resets_to_the_current_system_prompt() {
        let app = test_app(Arc::new(FakeCompletion::default()));

        for message in ["one", "two", "three"] {
            app.clone().oneshot(chat(message)).await.unwrap();
        }
        assert_eq!(send(&app, get_conversation()).await.messages.len(), 7);

        send(&app, set_prompt("Be terse.")).await;
        let once = send(&app, reset(serde_json::json!({}))).await;
        assert_eq!(
            once.messages,
            vec![Message::new(Role::System, "Be terse.")]
        );

        let twice = send(&app, reset(serde_json::json!({}))).await;
        assert_eq!(twice.messages, once.messages);
        assert_eq!(twice.system_prompt, once.system_prompt);
    }

    /// Tests a prompt update without a JSON body is rejected
    #[tokio::test]
    async fn it_rejects_prompt_update_without_body() {
        let app = test_app(Arc::new(FakeCompletion::default()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/conversation/system-prompt")
                    .method("PUT")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    /// Tests a reset carrying the prompt field applies it before re-seeding
    #[tokio::test]
    async fn it_resets_with_the_submitted_system_prompt() {
        let app = test_app(Arc::new(FakeCompletion::default()));

        app.clone().oneshot(chat("Hello")).await.unwrap();

        let state = send(
            &app,
            reset(serde_json::json!({ "system_prompt": "Answer in French." })),
        )
        .await;
        assert_eq!(state.system_prompt, "Answer in French.");
        assert_eq!(
            state.messages,
            vec![Message::new(Role::System, "Answer in French.")]
        );
        assert!(state.rendered.is_empty());
    }

    /// Tests history is returned as escaped HTML for display
    #[tokio::test]
    async fn it_renders_history_as_markdown() {
        let client = Arc::new(FakeCompletion::replying(vec![Ok(
            "Here you go:\n\n- **one**\n- `two`".to_string(),
        )]));
        let app = test_app(client);

        app.clone().oneshot(chat("<b>list</b> please")).await.unwrap();

        let state = send(&app, get_conversation()).await;
        assert_eq!(state.rendered.len(), 2);
        assert_eq!(state.rendered[0].role, Role::User);
        assert!(state.rendered[0].html.contains("&lt;b&gt;list&lt;/b&gt;"));
        assert_eq!(state.rendered[1].role, Role::Assistant);
        assert!(state.rendered[1].html.contains("<li><strong>one</strong></li>"));
        assert!(state.rendered[1].html.contains("<code>two</code>"));
    }
}
