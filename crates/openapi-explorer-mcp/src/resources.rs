//! MCP resource implementations for document metadata
//!
//! This module defines the two resources exposed by the MCP server:
//! - openapi://document/info: Document metadata as JSON
//! - openapi://paths: The path list as plain text

use crate::server::McpServerState;
use crate::types::ResourceContents;
use crate::{Error, Result};
use tracing::debug;

pub const DOCUMENT_INFO_URI: &str = "openapi://document/info";
pub const PATHS_URI: &str = "openapi://paths";

/// Document information resource
///
/// Returns title, version, path and operation counts, source file and
/// load timestamp.
pub struct DocumentInfoResource;

impl DocumentInfoResource {
    /// Handle a document info resource read
    pub async fn read(state: &McpServerState) -> Result<String> {
        let info = state.document_info();
        serde_json::to_string(&info).map_err(|e| Error::internal(e.to_string()))
    }
}

/// Path list resource
pub struct PathsResource;

impl PathsResource {
    /// Handle a path list resource read
    pub async fn read(state: &McpServerState) -> Result<String> {
        Ok(state.catalog.list_paths())
    }
}

/// Read a resource by URI
pub async fn read_resource(state: &McpServerState, uri: &str) -> Result<ResourceContents> {
    debug!("Reading resource {}", uri);
    let (mime_type, text) = match uri {
        DOCUMENT_INFO_URI => ("application/json", DocumentInfoResource::read(state).await?),
        PATHS_URI => ("text/plain", PathsResource::read(state).await?),
        other => return Err(Error::resource_not_found(other)),
    };

    Ok(ResourceContents {
        uri: uri.to_string(),
        mime_type,
        text,
    })
}
