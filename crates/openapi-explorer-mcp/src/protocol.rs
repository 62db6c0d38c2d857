//! JSON-RPC 2.0 request handling
//!
//! One line of input maps to at most one response. Notifications (requests
//! without an `id`) are processed silently.

use crate::resources::read_resource;
use crate::server::McpServerState;
use crate::tools::{call_tool, list_tools};
use crate::types::{ResourceReadParams, ToolCallParams, ToolCallResult};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, warn};

pub const JSONRPC_VERSION: &str = "2.0";

/// Handle a raw request line, returning the response to write, if any
pub async fn handle_message(state: &McpServerState, line: &str) -> Option<Value> {
    let request: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(e) => {
            warn!("Discarding unparsable request: {}", e);
            return Some(parse_error_response(e.to_string()));
        }
    };

    let Some(object) = request.as_object() else {
        return Some(error_response(
            Value::Null,
            &Error::invalid_request("request must be a JSON object"),
        ));
    };

    let id = object.get("id").cloned();

    if object.get("jsonrpc").and_then(Value::as_str) != Some(JSONRPC_VERSION) {
        return Some(error_response(
            id.unwrap_or(Value::Null),
            &Error::invalid_request("jsonrpc must be \"2.0\""),
        ));
    }

    let Some(method) = object.get("method").and_then(Value::as_str) else {
        return Some(error_response(
            id.unwrap_or(Value::Null),
            &Error::invalid_request("missing method"),
        ));
    };

    let Some(id) = id else {
        debug!("Received notification {}", method);
        return None;
    };

    let params = object.get("params").cloned().unwrap_or(Value::Null);
    match dispatch(state, method, params).await {
        Ok(result) => Some(json!({ "jsonrpc": JSONRPC_VERSION, "id": id, "result": result })),
        Err(err) => {
            debug!("Request {} failed: {}", method, err);
            Some(error_response(id, &err))
        }
    }
}

async fn dispatch(state: &McpServerState, method: &str, params: Value) -> Result<Value> {
    match method {
        "initialize" => Ok(state.initialize_result()),
        "ping" => Ok(json!({})),
        "tools/list" => Ok(json!({ "tools": list_tools() })),
        "tools/call" => {
            let call: ToolCallParams = parse_params(params)?;
            let text = call_tool(&state.catalog, &call.name, call.arguments)?;
            Ok(serde_json::to_value(ToolCallResult::text(text))?)
        }
        "resources/list" => Ok(json!({ "resources": state.resources() })),
        "resources/read" => {
            let read: ResourceReadParams = parse_params(params)?;
            let contents = read_resource(state, &read.uri).await?;
            Ok(json!({ "contents": [contents] }))
        }
        other => Err(Error::method_not_found(other)),
    }
}

fn parse_params<T: DeserializeOwned>(params: Value) -> Result<T> {
    serde_json::from_value(params).map_err(|e| Error::invalid_params("params", e.to_string()))
}

/// Response for a line that could not be decoded or parsed
pub fn parse_error_response(reason: impl Into<String>) -> Value {
    error_response(Value::Null, &Error::parse_error(reason))
}

fn error_response(id: Value, error: &Error) -> Value {
    json!({ "jsonrpc": JSONRPC_VERSION, "id": id, "error": error.to_json_rpc() })
}
