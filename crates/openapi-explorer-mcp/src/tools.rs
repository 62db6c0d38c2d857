//! MCP tool implementations over the loaded OpenAPI catalog
//!
//! This module defines the four tools exposed by the MCP server:
//! - get-api-paths: List every path in the document
//! - get-api-path-method: List the HTTP methods declared on one path
//! - get-api-details: Render the full description of one operation
//! - search-api-by-keyword: Search paths, summaries and descriptions
//!
//! Tools always answer with text. Unknown paths or methods are reported in
//! that text, so only malformed arguments surface as protocol errors.

use crate::types::*;
use crate::Error;
use openapi_explorer_lib::Catalog;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

/// A tool callable through `tools/call`
pub trait Tool {
    /// Name advertised in `tools/list`
    const NAME: &'static str;

    /// Description advertised in `tools/list`
    const DESCRIPTION: &'static str;

    /// Argument object accepted by the tool
    type Input: DeserializeOwned + JsonSchema;

    /// Run the tool against the catalog
    fn execute(catalog: &Catalog, input: Self::Input) -> String;

    /// Descriptor with the generated input schema
    fn descriptor() -> ToolDescriptor {
        ToolDescriptor {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            input_schema: schemars::schema_for!(Self::Input).to_value(),
        }
    }

    /// Validate raw JSON arguments and run the tool
    fn call(catalog: &Catalog, arguments: Value) -> crate::Result<String> {
        let input = serde_json::from_value(arguments)
            .map_err(|e| Error::invalid_params("arguments", e.to_string()))?;
        Ok(Self::execute(catalog, input))
    }
}

/// Path listing tool handler
pub struct GetApiPathsTool;

impl Tool for GetApiPathsTool {
    const NAME: &'static str = "get-api-paths";
    const DESCRIPTION: &'static str =
        "List every API path declared in the OpenAPI document, one per line.";
    type Input = GetApiPathsInput;

    fn execute(catalog: &Catalog, _input: Self::Input) -> String {
        debug!("Listing API paths");
        catalog.list_paths()
    }
}

/// Method listing tool handler
pub struct GetApiPathMethodTool;

impl Tool for GetApiPathMethodTool {
    const NAME: &'static str = "get-api-path-method";
    const DESCRIPTION: &'static str =
        "List the HTTP methods (get, post, ...) available on a specific API path.";
    type Input = GetApiPathMethodInput;

    fn execute(catalog: &Catalog, input: Self::Input) -> String {
        debug!("Listing methods for {}", input.path);
        catalog.list_methods(&input.path)
    }
}

/// Operation detail tool handler
///
/// Produces a Markdown report with parameters, request body and responses.
pub struct GetApiDetailsTool;

impl Tool for GetApiDetailsTool {
    const NAME: &'static str = "get-api-details";
    const DESCRIPTION: &'static str = "Show the full details of one API operation: description, \
         parameters, request body schema and responses.";
    type Input = GetApiDetailsInput;

    fn execute(catalog: &Catalog, input: Self::Input) -> String {
        debug!("Rendering details for {} {}", input.method.upper(), input.path);
        catalog.api_details(&input.path, input.method)
    }
}

/// Keyword search tool handler
pub struct SearchApiByKeywordTool;

impl Tool for SearchApiByKeywordTool {
    const NAME: &'static str = "search-api-by-keyword";
    const DESCRIPTION: &'static str = "Search API operations by keyword (case-insensitive) in \
         path names and in summaries/descriptions.";
    type Input = SearchApiByKeywordInput;

    fn execute(catalog: &Catalog, input: Self::Input) -> String {
        catalog.search_by_keyword(&input)
    }
}

/// Descriptors for every tool, in the order clients should present them
pub fn list_tools() -> Vec<ToolDescriptor> {
    vec![
        GetApiPathsTool::descriptor(),
        GetApiPathMethodTool::descriptor(),
        GetApiDetailsTool::descriptor(),
        SearchApiByKeywordTool::descriptor(),
    ]
}

/// Dispatch a `tools/call` by name
///
/// Missing or `null` arguments are treated as an empty object.
pub fn call_tool(catalog: &Catalog, name: &str, arguments: Option<Value>) -> crate::Result<String> {
    let arguments = match arguments {
        None | Some(Value::Null) => Value::Object(Default::default()),
        Some(value) => value,
    };

    info!("Calling tool {}", name);
    match name {
        GetApiPathsTool::NAME => GetApiPathsTool::call(catalog, arguments),
        GetApiPathMethodTool::NAME => GetApiPathMethodTool::call(catalog, arguments),
        GetApiDetailsTool::NAME => GetApiDetailsTool::call(catalog, arguments),
        SearchApiByKeywordTool::NAME => SearchApiByKeywordTool::call(catalog, arguments),
        other => Err(Error::unknown_tool(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::codes;
    use serde_json::json;

    fn catalog() -> Catalog {
        Catalog::from_document(
            serde_json::from_value(json!({
                "paths": {
                    "/v1/users": {
                        "get": { "summary": "List users" },
                        "post": { "summary": "Create account" }
                    },
                    "/v1/login": {
                        "post": { "summary": "Log in", "description": "Authenticate a user." }
                    }
                }
            }))
            .unwrap(),
        )
    }

    #[test]
    fn test_list_tools_names_and_schemas() {
        let tools = list_tools();
        let names: Vec<_> = tools.iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "get-api-paths",
                "get-api-path-method",
                "get-api-details",
                "search-api-by-keyword"
            ]
        );

        let details = &tools[2].input_schema;
        let required = details["required"].as_array().unwrap();
        assert!(required.contains(&json!("path")));
        assert!(required.contains(&json!("method")));

        let search = &tools[3].input_schema;
        assert!(search["properties"]["searchInDescription"].is_object());
        assert!(search["properties"]["searchInPath"].is_object());
        assert_eq!(search["required"], json!(["keyword"]));
    }

    #[test]
    fn test_get_api_paths_without_arguments() {
        let text = call_tool(&catalog(), "get-api-paths", None).unwrap();
        assert_eq!(text, "/v1/users\n/v1/login");

        let text = call_tool(&catalog(), "get-api-paths", Some(Value::Null)).unwrap();
        assert_eq!(text, "/v1/users\n/v1/login");
    }

    #[test]
    fn test_get_api_path_method() {
        let text = call_tool(
            &catalog(),
            "get-api-path-method",
            Some(json!({ "path": "/v1/users" })),
        )
        .unwrap();
        assert_eq!(text, "get\npost");

        let text = call_tool(
            &catalog(),
            "get-api-path-method",
            Some(json!({ "path": "/v1/missing" })),
        )
        .unwrap();
        assert_eq!(text, "API path was not found.");
    }

    #[test]
    fn test_get_api_details_method_not_found_is_text() {
        let text = call_tool(
            &catalog(),
            "get-api-details",
            Some(json!({ "path": "/v1/login", "method": "get" })),
        )
        .unwrap();
        assert_eq!(text, "No method \"GET\" found for path \"/v1/login\".");
    }

    #[test]
    fn test_search_defaults_flags() {
        let text = call_tool(
            &catalog(),
            "search-api-by-keyword",
            Some(json!({ "keyword": "authenticate" })),
        )
        .unwrap();
        assert!(text.starts_with("Found 1 API(s) matching the keyword \"authenticate\":"));
        assert!(text.contains("Path: /v1/login\nMethod: POST"));
    }

    #[test]
    fn test_invalid_arguments() {
        let err = call_tool(&catalog(), "get-api-path-method", Some(json!({}))).unwrap_err();
        assert_eq!(err.code, codes::INVALID_PARAMS);

        let err = call_tool(
            &catalog(),
            "get-api-details",
            Some(json!({ "path": "/v1/users", "method": "fetch" })),
        )
        .unwrap_err();
        assert_eq!(err.code, codes::INVALID_PARAMS);
    }

    #[test]
    fn test_unknown_tool() {
        let err = call_tool(&catalog(), "route_plan", None).unwrap_err();
        assert_eq!(err.code, codes::METHOD_NOT_FOUND);
        assert_eq!(err.message, "Unknown tool: route_plan");
    }
}
