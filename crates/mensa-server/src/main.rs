//! HTTP server entry point and Axum router setup.
//!
//! Builds the agent once during startup, configures routes, and starts
//! the Axum server on port 3000.

mod dto;
mod handlers;

use std::sync::Arc;
use std::time::Duration;

use mensa_agent::{Agent, AgentExecutor};
use mensa_llm::LlmClient;
use mensa_tools::ToolRegistry;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

const MODEL: &str = "gpt-4o-mini";

/// Upper bound on one agent run, including all tool-call rounds.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Shared server state accessible from all handlers.
pub struct ServerState {
    pub agent: Arc<dyn Agent>,
    pub request_timeout: Duration,
}

/// Assembles the application router over the given state.
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/api/chat", post(handlers::chat::chat))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let state = Arc::new(init_server_state());
    let app = build_router(state);

    let addr = "0.0.0.0:3000";
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Initializes the server state: the tool registry and the agent.
fn init_server_state() -> ServerState {
    let tool_registry = ToolRegistry::with_defaults();
    info!("Registered tools: {:?}", tool_registry.tool_names());

    let client = LlmClient::new(MODEL);
    let agent = AgentExecutor::new(client, tool_registry);
    info!("Agent ready (model: {})", MODEL);

    ServerState {
        agent: Arc::new(agent),
        request_timeout: REQUEST_TIMEOUT,
    }
}
