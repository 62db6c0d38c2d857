//! Type definitions for MCP tool inputs and protocol payloads
//!
//! Tool inputs derive `JsonSchema` so `tools/list` can advertise their
//! shape; the remaining types mirror the MCP wire format.

use openapi_explorer_lib::HttpMethod;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use openapi_explorer_lib::SearchQuery as SearchApiByKeywordInput;

// ============================================================================
// TOOL INPUTS
// ============================================================================

/// Input for the get-api-paths tool (takes no arguments)
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetApiPathsInput {}

/// Input for the get-api-path-method tool
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetApiPathMethodInput {
    /// API path exactly as declared in the document (e.g. "/v1/users")
    pub path: String,
}

/// Input for the get-api-details tool
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetApiDetailsInput {
    /// API path exactly as declared in the document
    pub path: String,

    /// HTTP method in lowercase: get, post, put, delete, patch, head, options or trace
    pub method: HttpMethod,
}

// ============================================================================
// PROTOCOL PAYLOADS
// ============================================================================

/// Entry returned by `tools/list`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// Parameters of a `tools/call` request
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,

    #[serde(default)]
    pub arguments: Option<Value>,
}

/// Single content block of a tool result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextContent {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

/// Result of a `tools/call` request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    pub content: Vec<TextContent>,
    pub is_error: bool,
}

impl ToolCallResult {
    /// Successful result carrying one text block
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![TextContent {
                kind: "text",
                text: text.into(),
            }],
            is_error: false,
        }
    }
}

/// Parameters of a `resources/read` request
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceReadParams {
    pub uri: String,
}

/// Body of a resource returned by `resources/read`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContents {
    pub uri: String,
    pub mime_type: &'static str,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_details_input_requires_lowercase_method() {
        let input: GetApiDetailsInput =
            serde_json::from_value(json!({ "path": "/v1/users", "method": "post" })).unwrap();
        assert_eq!(input.method, HttpMethod::Post);

        assert!(serde_json::from_value::<GetApiDetailsInput>(
            json!({ "path": "/v1/users", "method": "fetch" })
        )
        .is_err());
    }

    #[test]
    fn test_tool_call_result_wire_format() {
        let value = serde_json::to_value(ToolCallResult::text("/v1/users")).unwrap();
        assert_eq!(
            value,
            json!({
                "content": [{ "type": "text", "text": "/v1/users" }],
                "isError": false
            })
        );
    }

    #[test]
    fn test_method_schema_lists_canonical_methods() {
        let schema = schemars::schema_for!(GetApiDetailsInput).to_value();
        let text = schema.to_string();
        for method in HttpMethod::ALL {
            assert!(text.contains(&format!("\"{}\"", method.as_str())));
        }
    }
}
