// Tool registry for the time server
use serde_json::{json, Value};
use std::sync::OnceLock;

pub const CURRENT_TIME_TOOL: &str = "getCurrentTime";

/// The full tool catalog. Built once at first use, immutable for the life
/// of the process, served by reference to every `tools/list` request.
pub fn tool_catalog() -> &'static Value {
    static CATALOG: OnceLock<Value> = OnceLock::new();
    CATALOG.get_or_init(|| {
        json!([
            {
                "name": CURRENT_TIME_TOOL,
                "description": "Get the current time as an ISO-8601 timestamp, optionally rendered in a caller-supplied IANA timezone",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "timezone": {
                            "type": "string",
                            "description": "IANA timezone name (e.g., 'America/New_York', 'Europe/London'). Defaults to UTC"
                        }
                    }
                },
                "annotations": {
                    "title": "Get Current Time",
                    "readOnlyHint": true,
                    "destructiveHint": false,
                    "idempotentHint": false,
                    "openWorldHint": false
                }
            }
        ])
    })
}
