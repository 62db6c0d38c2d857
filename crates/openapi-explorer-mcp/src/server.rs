//! MCP server lifecycle and state management
//!
//! This module contains the server state shared by every request handler:
//! the loaded catalog, the advertised server name and the load timestamp.

use anyhow::Context;
use openapi_explorer_lib::{resolve_document_path, Catalog};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// MCP protocol revision implemented by this server
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Server name used when none is configured
pub const DEFAULT_SERVER_NAME: &str = "openapi";

/// Environment variable overriding the server name
pub const SERVER_NAME_ENV_VAR: &str = "OPENAPI_EXPLORER_SERVER_NAME";

/// Main server state holding all runtime resources
///
/// The catalog is loaded once at startup and never mutated, so handlers
/// share it through an `Arc` without locking.
pub struct McpServerState {
    /// Loaded OpenAPI document
    pub catalog: Arc<Catalog>,

    /// Prefix of the advertised server name
    pub server_name: String,

    /// Server initialization timestamp for metadata
    pub initialized_at: chrono::DateTime<chrono::Utc>,
}

/// Metadata about the loaded document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    /// `info.title`, when declared
    pub title: Option<String>,

    /// `info.version`, when declared
    pub version: Option<String>,

    /// `openapi` version string, when declared
    pub openapi: Option<String>,

    /// Number of paths in the document
    pub path_count: usize,

    /// Number of operations across all paths
    pub operation_count: usize,

    /// File the document was loaded from
    pub source: Option<String>,

    /// Timestamp when the document was loaded
    pub loaded_at: String,
}

/// Descriptor for MCP resources exposed by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    pub uri: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mime_type: &'static str,
}

impl McpServerState {
    /// Create server state by resolving and loading the document
    ///
    /// `target` follows the library resolution order: explicit path, then
    /// `OPENAPI_EXPLORER_SPEC`, then the platform data directory. Load
    /// failures keep the library error as their source.
    pub fn load(target: Option<&Path>, server_name: impl Into<String>) -> anyhow::Result<Self> {
        let path = resolve_document_path(target).context("failed to locate the OpenAPI document")?;
        Self::with_path(path, server_name)
    }

    /// Create server state from an explicit document path
    pub fn with_path<P: AsRef<Path>>(
        document_path: P,
        server_name: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let path = document_path.as_ref();

        info!("Loading MCP server state from {}", path.display());

        let catalog = Catalog::from_path(path)
            .with_context(|| format!("failed to load OpenAPI document from {}", path.display()))?;
        Ok(Self::from_catalog(catalog, server_name))
    }

    /// Create server state around an already loaded catalog
    pub fn from_catalog(catalog: Catalog, server_name: impl Into<String>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            server_name: server_name.into(),
            initialized_at: chrono::Utc::now(),
        }
    }

    /// Log readiness once the state is in place
    pub async fn initialize(&self) -> crate::Result<()> {
        let document = self.catalog.document();
        info!(
            "Serving {} paths and {} operations as {}",
            document.paths.len(),
            document.operation_count(),
            self.advertised_name()
        );
        Ok(())
    }

    /// Name reported in `serverInfo`
    pub fn advertised_name(&self) -> String {
        format!("{}-openapi-mcp-server", self.server_name)
    }

    /// Guidance returned to the client on `initialize`
    pub fn instructions(&self) -> String {
        let subject = match self.catalog.document().title() {
            Some(title) => format!("the \"{}\" OpenAPI document", title),
            None => "the loaded OpenAPI document".to_string(),
        };
        format!(
            "Explore {}. Call get-api-paths or search-api-by-keyword to find an endpoint, \
             get-api-path-method to list its methods, then get-api-details for parameters, \
             request body and responses.",
            subject
        )
    }

    /// Result of the `initialize` request
    pub fn initialize_result(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "serverInfo": {
                "name": self.advertised_name(),
                "version": env!("CARGO_PKG_VERSION"),
            },
            "capabilities": { "tools": {}, "resources": {} },
            "instructions": self.instructions(),
        })
    }

    /// Get document metadata for the openapi://document/info resource
    pub fn document_info(&self) -> DocumentInfo {
        let document = self.catalog.document();
        DocumentInfo {
            title: document.info.as_ref().and_then(|i| i.title.clone()),
            version: document.info.as_ref().and_then(|i| i.version.clone()),
            openapi: document.openapi.clone(),
            path_count: document.paths.len(),
            operation_count: document.operation_count(),
            source: self
                .catalog
                .source()
                .map(|p| p.to_string_lossy().to_string()),
            loaded_at: self.initialized_at.to_rfc3339(),
        }
    }

    /// List MCP resources exposed by this server
    pub fn resources(&self) -> Vec<ResourceDescriptor> {
        vec![
            ResourceDescriptor {
                uri: crate::resources::DOCUMENT_INFO_URI,
                name: "Document Info",
                description: "Document metadata: title, version, path and operation counts",
                mime_type: "application/json",
            },
            ResourceDescriptor {
                uri: crate::resources::PATHS_URI,
                name: "API Paths",
                description: "Every API path in the document, one per line",
                mime_type: "text/plain",
            },
        ]
    }
}
