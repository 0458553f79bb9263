mod search;

use serde::{Deserialize, Serialize};

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool};

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "uitdb".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = vec![Tool {
        name: "search_uit".to_string(),
        description: "Search the UiTdatabank (Flemish cultural events database) Search API for events, places or organizers. Events are returned as compact records with id, name, startDate, endDate, status, url, location and organizer; places and organizers are returned as raw API records. Supports free-text query, date range and city filters. Uses UITDB_API_KEY and/or UITDB_CLIENT_ID when set.".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "resource": {
                    "type": "string",
                    "description": "Resource to search",
                    "enum": ["events", "places", "organizers"]
                },
                "query": {
                    "type": "string",
                    "description": "Free-text search term (optional)"
                },
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Number of items per page (default: 10). Only sent when the server uses size/page pagination."
                },
                "page": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Page number, 1-indexed (default: 1)"
                },
                "dateFrom": {
                    "type": "string",
                    "description": "ISO-8601 start date (e.g., '2025-09-01')"
                },
                "dateTo": {
                    "type": "string",
                    "description": "ISO-8601 end date"
                },
                "city": {
                    "type": "string",
                    "description": "Filter on city (addressLocality, e.g., 'Gent')"
                }
            },
            "required": ["resource"]
        }),
    }];

    let result = ToolsList { tools };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

pub async fn handle_tools_call(
    params: Option<serde_json::Value>,
    server: &super::Server,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError {
            code: -32602,
            message: format!("Invalid params: {e}"),
            data: None,
        })?;

    match params.name.as_str() {
        "search_uit" => search::handle_search_uit(params.arguments, server).await,
        _ => Err(JsonRpcError {
            code: -32602,
            message: format!("Unknown tool: {}", params.name),
            data: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paging_arguments_are_positive_integers() {
        let list = handle_tools_list().unwrap();
        let properties = &list["tools"][0]["inputSchema"]["properties"];

        for field in ["limit", "page"] {
            assert_eq!(properties[field]["type"], json!("integer"), "{field}");
            assert_eq!(properties[field]["minimum"], json!(1), "{field}");
        }
    }
}
