// Axum handlers and tool dispatch for the MCP time server
use axum::{
    body::Body,
    http::{header, StatusCode},
    response::Response,
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::rpc::{
    InitializeParams, JsonRpcErrorResponse, JsonRpcRequest, JsonRpcResponse, ToolCallParams,
    INVALID_PARAMS, METHOD_NOT_FOUND, PARSE_ERROR,
};
use crate::time;
use crate::tools;
use crate::types::CallToolResult;

pub async fn mcp_handler(Json(request_value): Json<Value>) -> Response {
    let raw_id = request_value.get("id").cloned().unwrap_or(Value::Null);
    let request: JsonRpcRequest = match serde_json::from_value(request_value) {
        Ok(req) => req,
        Err(_) => {
            return json_response(&JsonRpcErrorResponse::new(
                raw_id,
                PARSE_ERROR,
                "Parse error".to_string(),
            ))
        }
    };

    // No id: a notification. Acknowledge and move on.
    let Some(id) = request.id else {
        return empty_response();
    };

    tracing::debug!(method = %request.method, "dispatching request");
    match request.method.as_str() {
        "initialize" => handle_initialize(id, request.params),
        "tools/list" => json_response(&JsonRpcResponse::new(
            id,
            json!({ "tools": tools::tool_catalog() }),
        )),
        "tools/call" => handle_tool_call(id, request.params),
        _ => json_response(&JsonRpcErrorResponse::new(
            id,
            METHOD_NOT_FOUND,
            "Method not found".to_string(),
        )),
    }
}

fn handle_initialize(id: Value, params: Option<Value>) -> Response {
    let params: Result<InitializeParams, _> =
        serde_json::from_value(params.unwrap_or(Value::Null));
    match params {
        Ok(_params) => json_response(&JsonRpcResponse::new(
            id,
            json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {
                        "listChanged": false
                    }
                },
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        )),
        Err(e) => json_response(&JsonRpcErrorResponse::new(
            id,
            INVALID_PARAMS,
            format!("Invalid params for initialize: {e}"),
        )),
    }
}

fn handle_tool_call(id: Value, params: Option<Value>) -> Response {
    let params: ToolCallParams = match serde_json::from_value(params.unwrap_or(Value::Null)) {
        Ok(p) => p,
        Err(_) => {
            return json_response(&JsonRpcErrorResponse::new(
                id,
                INVALID_PARAMS,
                "Invalid params for tools/call".to_string(),
            ))
        }
    };
    json_response(&JsonRpcResponse::new(
        id,
        dispatch_tool(&params.name, &params.arguments),
    ))
}

/// Route a tool invocation to its implementation. Every outcome, including
/// an unknown tool name, comes back as a `CallToolResult` so the caller
/// always gets an inspectable response rather than a protocol fault.
pub fn dispatch_tool(name: &str, arguments: &Value) -> CallToolResult {
    match name {
        tools::CURRENT_TIME_TOOL => {
            // A timezone that is present but not a string counts as absent.
            let timezone = arguments.get("timezone").and_then(Value::as_str);
            match time::current_time(timezone) {
                Ok(text) => CallToolResult::text(text),
                Err(e) => CallToolResult::error(e.to_string()),
            }
        }
        other => CallToolResult::error(format!("Unknown tool: {other}")),
    }
}

fn empty_response() -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap_or_else(|_| Response::new(Body::from("{}")))
}

pub fn json_response<T: Serialize>(payload: &T) -> Response {
    match serde_json::to_string(payload) {
        Ok(body) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap_or_else(|_| {
                Response::new(Body::from(r#"{"error":"failed to build response"}"#))
            }),
        Err(_) => Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .body(Body::from(r#"{"error":"failed to serialize response"}"#))
            .unwrap_or_else(|_| {
                Response::new(Body::from(r#"{"error":"failed to serialize response"}"#))
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ToolContent;

    fn text_of(result: &CallToolResult) -> &str {
        let ToolContent::Text { text } = &result.content[0];
        text
    }

    #[test]
    fn unknown_tool_is_a_structured_failure() {
        let result = dispatch_tool("nonexistentTool", &json!({}));
        assert!(result.is_error);
        assert_eq!(text_of(&result), "Error: Unknown tool: nonexistentTool");
    }

    #[test]
    fn invalid_timezone_is_a_structured_failure() {
        let result = dispatch_tool(tools::CURRENT_TIME_TOOL, &json!({"timezone": "Invalid/Zone"}));
        assert!(result.is_error);
        assert!(text_of(&result).starts_with("Error: Invalid timezone: Invalid/Zone"));
    }

    #[test]
    fn non_string_timezone_counts_as_absent() {
        let result = dispatch_tool(tools::CURRENT_TIME_TOOL, &json!({"timezone": 42}));
        assert!(!result.is_error);
        assert!(text_of(&result).ends_with('Z'));
    }
}
