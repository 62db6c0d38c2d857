//! Output formatting for query results.
//!
//! Text output is the catalog's own text, unchanged. JSON output serialises
//! the structured form behind each answer; misses become `null` (or an
//! empty list for searches).

use clap::ValueEnum;
use serde::Serialize;

use openapi_explorer_lib::document::Parameter;
use openapi_explorer_lib::search::search;
use openapi_explorer_lib::{Catalog, HttpMethod, Operation, OperationLookup, SearchQuery};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, identical to the MCP tool output.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// JSON view of a single operation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationView<'a> {
    pub path: &'a str,
    pub method: HttpMethod,
    pub operation: &'a Operation,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub path_parameters: &'a [Parameter],
}

pub fn render_paths(catalog: &Catalog, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(catalog.list_paths()),
        OutputFormat::Json => serde_json::to_string_pretty(&catalog.paths().collect::<Vec<_>>()),
    }
}

pub fn render_methods(
    catalog: &Catalog,
    path: &str,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(catalog.list_methods(path)),
        OutputFormat::Json => serde_json::to_string_pretty(&catalog.methods(path)),
    }
}

pub fn render_details(
    catalog: &Catalog,
    path: &str,
    method: HttpMethod,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(catalog.api_details(path, method)),
        OutputFormat::Json => {
            let view = match catalog.lookup(path, method) {
                OperationLookup::Found(operation) => Some(OperationView {
                    path,
                    method,
                    operation,
                    path_parameters: catalog
                        .document()
                        .path_item(path)
                        .map(|item| item.parameters())
                        .unwrap_or_default(),
                }),
                OperationLookup::PathNotFound | OperationLookup::MethodNotFound => None,
            };
            serde_json::to_string_pretty(&view)
        }
    }
}

pub fn render_search(
    catalog: &Catalog,
    query: &SearchQuery,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(catalog.search_by_keyword(query)),
        OutputFormat::Json => serde_json::to_string_pretty(&search(catalog.document(), query)),
    }
}
