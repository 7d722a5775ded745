//! Agent facade: one "ask a question, get an answer" capability.
//!
//! [`AgentExecutor`] composes the LLM client, a fixed system instruction,
//! and the tool registry into a bounded reasoning loop. Each round the
//! model either answers or requests tool calls; tool results are fed back
//! into the conversation and recorded as intermediate steps so callers can
//! recover a useful observation even when the model never summarizes.

use async_trait::async_trait;
use mensa_core::{AgentError, AgentResult, AgentStep};
use mensa_llm::{ChatResponse, LlmClient};
use mensa_tools::{Tool, ToolRegistry};
use tracing::{debug, info, warn};

/// Default system instruction given to the model.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that uses the available tools when needed.";

/// Default bound on reasoning iterations, limiting runaway tool-call loops.
pub const DEFAULT_MAX_ITERATIONS: usize = 5;

/// Final output emitted when the reasoning loop runs out of iterations.
pub const MAX_ITERATIONS_MESSAGE: &str = "Agent stopped due to max iterations.";

/// Something that can answer a user's question.
///
/// The seam between the HTTP layer and the reasoning loop; the server
/// depends on this trait rather than on [`AgentExecutor`] directly.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Answers a single user input. Stateless across calls.
    async fn ask(&self, input: &str) -> Result<AgentResult, AgentError>;
}

/// Runs a bounded tool-calling loop against the LLM.
///
/// Constructed once at startup and shared by reference; holds no
/// per-request state.
pub struct AgentExecutor {
    client: LlmClient,
    tools: ToolRegistry,
    system_prompt: String,
    max_iterations: usize,
}

impl AgentExecutor {
    /// Creates an executor with the default system prompt and iteration bound.
    pub fn new(client: LlmClient, tools: ToolRegistry) -> Self {
        Self {
            client,
            tools,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Replaces the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Replaces the iteration bound.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Executes one tool call, resolving it against the registry.
    ///
    /// Never aborts the loop: unknown tools and tool failures are turned
    /// into error-text observations the model can react to.
    async fn run_tool(&self, name: &str, arguments: serde_json::Value) -> String {
        let Some(tool) = self.tools.get(name) else {
            warn!("Model requested unknown tool: {}", name);
            return format!("Unknown tool: {}", name);
        };

        match tool.execute(arguments).await {
            Ok(output) => output,
            Err(e) => {
                warn!("Tool '{}' failed: {}", name, e);
                format!("Tool '{}' failed: {}", name, e)
            }
        }
    }
}

#[async_trait]
impl Agent for AgentExecutor {
    async fn ask(&self, input: &str) -> Result<AgentResult, AgentError> {
        let schemas = self.tools.list();
        let mut messages = vec![LlmClient::user_message(input)?];
        let mut steps: Vec<AgentStep> = Vec::new();

        for iteration in 1..=self.max_iterations {
            let response = self
                .client
                .chat_with_tools(&self.system_prompt, &messages, &schemas)
                .await?;

            match response {
                ChatResponse::Content(llm_response) => {
                    info!(
                        "Final answer after {} iteration(s): {} chars",
                        iteration,
                        llm_response.content.len()
                    );
                    return Ok(AgentResult {
                        output: Some(llm_response.content),
                        intermediate_steps: steps,
                    });
                }
                ChatResponse::ToolCalls { calls, metrics } => {
                    debug!(
                        "Iteration {}: {} tool call(s), {}ms, tokens: {}/{}",
                        iteration,
                        calls.len(),
                        metrics.elapsed_ms,
                        metrics.input_tokens,
                        metrics.output_tokens
                    );

                    messages.push(LlmClient::assistant_tool_calls_message(&calls)?);

                    for call in calls {
                        info!("Executing tool: {}", call.name);
                        let observation = self.run_tool(&call.name, call.arguments.clone()).await;
                        debug!("Tool result: {} chars", observation.len());

                        messages.push(LlmClient::tool_result_message(&call.id, &observation)?);
                        steps.push(AgentStep {
                            action: call,
                            observation: Some(observation),
                        });
                    }
                }
            }
        }

        warn!(
            "Reasoning loop exhausted after {} iterations ({} steps recorded)",
            self.max_iterations,
            steps.len()
        );
        Ok(AgentResult {
            output: Some(MAX_ITERATIONS_MESSAGE.to_string()),
            intermediate_steps: steps,
        })
    }
}
