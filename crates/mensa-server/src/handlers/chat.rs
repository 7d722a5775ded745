//! The chat endpoint: validation, agent invocation, result interpretation.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use mensa_agent::Agent;
use mensa_core::AgentResult;
use tokio::time::timeout;
use tracing::{debug, error, info};

use crate::dto::{ChatRequest, ChatResponse};
use crate::ServerState;

const INVALID_INPUT_MESSAGE: &str = "Please provide a valid input.";

const UPSTREAM_FAILURE_MESSAGE: &str =
    "Sorry, something went wrong. Please try again with a specific menu request.";

const UNRESOLVED_MESSAGE: &str =
    "I couldn't process that request. Try asking something like \"What's for dinner today?\".";

/// Chat endpoint. Always responds with a `{"output": string}` body.
pub async fn chat(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> (StatusCode, Json<ChatResponse>) {
    // Parsed by hand rather than with the Json extractor so malformed
    // bodies get the same `{"output": ...}` shape as every other response.
    let req: ChatRequest = serde_json::from_slice(&body).unwrap_or_default();

    let input = req.input.trim();
    if input.is_empty() {
        debug!("Rejected blank chat input");
        return respond(StatusCode::BAD_REQUEST, INVALID_INPUT_MESSAGE);
    }

    info!("Chat request: {}...", input.chars().take(50).collect::<String>());

    let result = match timeout(state.request_timeout, state.agent.ask(input)).await {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            // Upstream details are logged here and never reach the client.
            error!("Agent call failed: {}", e);
            return respond(StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILURE_MESSAGE);
        }
        Err(_) => {
            error!("Agent call timed out after {:?}", state.request_timeout);
            return respond(StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILURE_MESSAGE);
        }
    };

    interpret(result)
}

/// Maps an agent result to an HTTP response.
///
/// The result is treated as partial: a present output may still be the
/// loop's give-up message, in which case the last recorded tool
/// observation is surfaced instead of discarding a correct lookup.
fn interpret(result: AgentResult) -> (StatusCode, Json<ChatResponse>) {
    if let Some(output) = &result.output {
        if !hit_iteration_limit(output) {
            return respond(StatusCode::OK, output);
        }
    }

    if let Some(observation) = result.last_observation() {
        info!("Surfacing last tool observation as the answer");
        return respond(StatusCode::OK, observation);
    }

    respond(StatusCode::INTERNAL_SERVER_ERROR, UNRESOLVED_MESSAGE)
}

/// Detects iteration exhaustion from the result text.
///
/// The loop reports exhaustion in its output message rather than a
/// structured code, so this matches the phrase case-insensitively.
fn hit_iteration_limit(output: &str) -> bool {
    output
        .to_lowercase()
        .contains("agent stopped due to max iterations")
}

fn respond(status: StatusCode, output: &str) -> (StatusCode, Json<ChatResponse>) {
    (status, Json(ChatResponse { output: output.to_string() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_router;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use mensa_agent::{Agent, MAX_ITERATIONS_MESSAGE};
    use mensa_core::{AgentError, AgentStep, ToolCall};
    use std::time::Duration;
    use tower::ServiceExt;

    /// Agent stub returning a canned result, or an error when `result` is None.
    struct StubAgent {
        result: Option<AgentResult>,
    }

    #[async_trait]
    impl Agent for StubAgent {
        async fn ask(&self, _input: &str) -> Result<AgentResult, AgentError> {
            match &self.result {
                Some(result) => Ok(result.clone()),
                None => Err(AgentError::LlmError("connection refused".into())),
            }
        }
    }

    fn test_app(result: Option<AgentResult>) -> axum::Router {
        let state = Arc::new(ServerState {
            agent: Arc::new(StubAgent { result }),
            request_timeout: Duration::from_secs(5),
        });
        build_router(state)
    }

    async fn post_chat(app: axum::Router, body: &str) -> (StatusCode, ChatResponse) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/chat")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn menu_step(observation: Option<&str>) -> AgentStep {
        AgentStep {
            action: ToolCall {
                id: "call_1".into(),
                name: "menu_lookup".into(),
                arguments: serde_json::json!({ "category": "evening" }),
            },
            observation: observation.map(String::from),
        }
    }

    #[tokio::test]
    async fn blank_input_is_rejected_with_400() {
        let app = test_app(Some(AgentResult::answered("unused")));
        let (status, body) = post_chat(app, r#"{"input": ""}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.output, "Please provide a valid input.");
    }

    #[tokio::test]
    async fn whitespace_only_input_is_rejected_with_400() {
        let app = test_app(Some(AgentResult::answered("unused")));
        let (status, body) = post_chat(app, r#"{"input": "   "}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.output, "Please provide a valid input.");
    }

    #[tokio::test]
    async fn missing_input_field_is_rejected_with_400() {
        let app = test_app(Some(AgentResult::answered("unused")));
        let (status, body) = post_chat(app, "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.output, "Please provide a valid input.");
    }

    #[tokio::test]
    async fn malformed_json_body_keeps_the_response_shape() {
        let app = test_app(Some(AgentResult::answered("unused")));
        let (status, body) = post_chat(app, "not json {").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.output, "Please provide a valid input.");
    }

    #[tokio::test]
    async fn agent_answer_is_returned_verbatim() {
        let app = test_app(Some(AgentResult::answered("Biryani, Raita, Papad, Salad")));
        let (status, body) = post_chat(app, r#"{"input": "what's for dinner?"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.output, "Biryani, Raita, Papad, Salad");
    }

    #[tokio::test]
    async fn agent_failure_yields_generic_500_without_internals() {
        let app = test_app(None);
        let (status, body) = post_chat(app, r#"{"input": "what's for dinner?"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body.output,
            "Sorry, something went wrong. Please try again with a specific menu request."
        );
        assert!(!body.output.contains("connection refused"));
    }

    #[tokio::test]
    async fn exhausted_loop_without_steps_yields_500() {
        let result = AgentResult {
            output: Some(MAX_ITERATIONS_MESSAGE.to_string()),
            intermediate_steps: vec![],
        };
        let app = test_app(Some(result));
        let (status, body) = post_chat(app, r#"{"input": "menus please"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.output.contains("couldn't process"));
    }

    #[tokio::test]
    async fn exhausted_loop_surfaces_last_observation() {
        let result = AgentResult {
            output: Some(MAX_ITERATIONS_MESSAGE.to_string()),
            intermediate_steps: vec![menu_step(Some("Samosa, Chutney, Tea, Biscuits"))],
        };
        let app = test_app(Some(result));
        let (status, body) = post_chat(app, r#"{"input": "evening snacks?"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.output, "Samosa, Chutney, Tea, Biscuits");
    }

    #[tokio::test]
    async fn exhausted_loop_with_observationless_step_yields_500() {
        let result = AgentResult {
            output: Some(MAX_ITERATIONS_MESSAGE.to_string()),
            intermediate_steps: vec![menu_step(Some("ignored")), menu_step(None)],
        };
        let app = test_app(Some(result));
        let (status, body) = post_chat(app, r#"{"input": "evening snacks?"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.output.contains("couldn't process"));
    }

    #[tokio::test]
    async fn sentinel_detection_is_case_insensitive() {
        let result = AgentResult {
            output: Some("...agent stopped due to max iterations...".to_string()),
            intermediate_steps: vec![menu_step(Some("Samosa, Chutney, Tea, Biscuits"))],
        };
        let app = test_app(Some(result));
        let (status, body) = post_chat(app, r#"{"input": "snacks?"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.output, "Samosa, Chutney, Tea, Biscuits");
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok() {
        let app = test_app(Some(AgentResult::answered("unused")));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn index_serves_the_chat_page() {
        let app = test_app(Some(AgentResult::answered("unused")));
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("<html"));
    }
}
