use crate::prelude::{eprintln, *};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use super::Server;

/// Path the JSON-RPC endpoint is mounted on
pub const MCP_PATH: &str = "/mcp";

pub async fn run_http(options: super::cli::HttpOptions, server: Server) -> Result<()> {
    let addr = format!("{}:{}", options.host, options.port);
    let verbose = server.verbose;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    if verbose {
        eprintln!("uitdb MCP server listening on http://{addr}");
        eprintln!("Health endpoint: http://{addr}/");
        eprintln!("MCP endpoint: http://{addr}{MCP_PATH}");
    }

    axum::serve(listener, router(server))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

fn router(server: Server) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health_handler))
        .route(MCP_PATH, post(mcp_handler))
        .layer(cors)
        .with_state(Arc::new(server))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "ok": true,
        "service": "uitdb-mcp",
        "mcp_endpoint": MCP_PATH
    }))
}

/// One JSON-RPC message per POST; the reply is the response body
async fn mcp_handler(State(server): State<Arc<Server>>, body: String) -> Response {
    match super::handle_request(&body, &server).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
