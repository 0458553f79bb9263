use crate::prelude::{eprintln, *};
use crate::search::SearchArgs;
use serde::Deserialize;
use uitdb_core::error::SearchError;

use super::{CallToolResult, Content, JsonRpcError};

#[derive(Debug, Deserialize)]
struct SearchUitArgs {
    #[serde(alias = "endpoint")]
    resource: String,
    #[serde(alias = "q")]
    query: Option<String>,
    limit: Option<usize>,
    page: Option<usize>,
    #[serde(rename = "dateFrom", alias = "start")]
    date_from: Option<String>,
    #[serde(rename = "dateTo", alias = "end")]
    date_to: Option<String>,
    city: Option<String>,
}

impl From<SearchUitArgs> for SearchArgs {
    fn from(args: SearchUitArgs) -> Self {
        Self {
            resource: args.resource,
            query: args.query,
            limit: args.limit,
            page: args.page,
            date_from: args.date_from,
            date_to: args.date_to,
            city: args.city,
        }
    }
}

/// Map a search failure onto a JSON-RPC error with its kind in `data`
fn search_error(err: SearchError) -> JsonRpcError {
    let code = if err.is_invalid_input() { -32602 } else { -32603 };
    let mut data = serde_json::json!({ "kind": err.kind() });
    if let SearchError::UpstreamStatus { status, .. } = &err {
        data["status"] = serde_json::json!(status);
    }

    JsonRpcError {
        code,
        message: format!("Tool execution error: {err}"),
        data: Some(data),
    }
}

pub async fn handle_search_uit(
    arguments: Option<serde_json::Value>,
    server: &crate::mcp::Server,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: SearchUitArgs = serde_json::from_value(arguments.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError {
            code: -32602,
            message: format!("Invalid arguments: {e}"),
            data: None,
        })?;

    if server.verbose {
        eprintln!(
            "Calling search_uit: resource={}, query={:?}, limit={:?}, page={:?}",
            args.resource, args.query, args.limit, args.page
        );
    }

    let search_data = server
        .search
        .search(args.into())
        .await
        .map_err(search_error)?;

    // Convert to JSON and wrap in MCP result format
    let json_string = serde_json::to_string_pretty(&search_data).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Serialization error: {e}"),
        data: None,
    })?;

    let result = CallToolResult {
        content: vec![Content::Text { text: json_string }],
        is_error: None,
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}
