//! Protocol-level error type for the MCP server
//!
//! Catalog lookups never fail; these errors cover the JSON-RPC envelope
//! (malformed requests, unknown tools, invalid arguments) and are turned
//! into JSON-RPC error objects by [`Error::to_json_rpc`].

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Result type for MCP operations
pub type Result<T> = std::result::Result<T, Error>;

/// JSON-RPC 2.0 error codes used by the server.
pub mod codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
    pub const RESOURCE_NOT_FOUND: i32 = -32002;
}

/// MCP server error carrying a JSON-RPC error code
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
#[error("{message}")]
pub struct Error {
    /// JSON-RPC error code (see [`codes`])
    pub code: i32,

    /// Human-readable error message
    pub message: String,

    /// Additional error context (e.g., tool name, offending parameter)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Error {
    /// Create a new error with a code and message
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Add context information as JSON
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Request line was not valid JSON
    pub fn parse_error(reason: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", reason.into()))
    }

    /// Request was JSON but not a valid JSON-RPC 2.0 request
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::new(
            codes::INVALID_REQUEST,
            format!("Invalid request: {}", reason.into()),
        )
    }

    /// JSON-RPC method is not handled by this server
    pub fn method_not_found(method: impl Into<String>) -> Self {
        Self::new(
            codes::METHOD_NOT_FOUND,
            format!("Unknown method: {}", method.into()),
        )
    }

    /// `tools/call` named a tool this server does not expose
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(codes::METHOD_NOT_FOUND, format!("Unknown tool: {}", name))
            .with_data(json!({ "tool": name }))
    }

    /// Invalid parameter error
    pub fn invalid_params(param: impl Into<String>, reason: impl Into<String>) -> Self {
        let p = param.into();
        Self::new(codes::INVALID_PARAMS, format!("Invalid parameter: {}", p)).with_data(json!({
            "parameter": p,
            "reason": reason.into()
        }))
    }

    /// `resources/read` named an unknown resource URI
    pub fn resource_not_found(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        Self::new(
            codes::RESOURCE_NOT_FOUND,
            format!("Resource not found: {}", uri),
        )
        .with_data(json!({ "uri": uri }))
    }

    /// Internal server error
    pub fn internal(reason: impl Into<String>) -> Self {
        Self::new(
            codes::INTERNAL_ERROR,
            format!("Internal server error: {}", reason.into()),
        )
    }

    /// JSON-RPC `error` member for this error
    pub fn to_json_rpc(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| {
            json!({ "code": self.code, "message": self.message })
        })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::internal(err.to_string())
    }
}
