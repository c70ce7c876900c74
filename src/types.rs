// Tool-call response envelope
use serde::{Deserialize, Serialize};

/// One content item in a tool result. Only text content is produced here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
}

/// The `{content, isError}` envelope every tool invocation resolves to,
/// success or failure. Failure is data, never a fault past the dispatcher.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CallToolResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl CallToolResult {
    pub fn text(text: String) -> Self {
        CallToolResult {
            content: vec![ToolContent::Text { text }],
            is_error: false,
        }
    }

    pub fn error(message: String) -> Self {
        CallToolResult {
            content: vec![ToolContent::Text {
                text: format!("Error: {message}"),
            }],
            is_error: true,
        }
    }
}
