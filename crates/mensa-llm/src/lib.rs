//! LLM client abstraction for the OpenAI chat-completions API.
//!
//! Provides tool-calling chat completions and the message-building helpers
//! needed to run a tool conversation, plus per-call usage metrics.

mod client;

pub use client::{ChatResponse, LlmClient, LlmMetrics, LlmResponse};
