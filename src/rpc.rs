// JSON-RPC 2.0 envelope types and error helpers
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound JSON-RPC message. A missing (or null) `id` marks a notification.
#[allow(dead_code)]
#[derive(Deserialize, Debug)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

#[derive(Deserialize, Debug)]
pub struct ToolCallParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

#[allow(dead_code)]
#[derive(Deserialize, Debug)]
pub struct InitializeParams {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: Value,
    #[serde(rename = "clientInfo")]
    pub client_info: Value,
}

#[derive(Serialize, Debug)]
pub struct JsonRpcResponse<T> {
    pub jsonrpc: String,
    pub id: Value,
    pub result: T,
}

impl<T> JsonRpcResponse<T> {
    pub fn new(id: Value, result: T) -> Self {
        JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id,
            result,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct JsonRpcErrorResponse {
    pub jsonrpc: String,
    pub id: Value,
    pub error: ErrorObject,
}

#[derive(Serialize, Debug)]
pub struct ErrorObject {
    pub code: i32,
    pub message: String,
}

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

impl JsonRpcErrorResponse {
    pub fn new(id: Value, code: i32, message: String) -> Self {
        JsonRpcErrorResponse {
            jsonrpc: "2.0".to_string(),
            id,
            error: ErrorObject { code, message },
        }
    }
}
