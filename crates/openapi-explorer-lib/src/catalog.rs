//! Catalog loading and the four query operations.
//!
//! Every query answers with text. Lookups that miss return a fixed message
//! instead of an error so callers can forward the result unchanged.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::detail::render_operation;
use crate::document::{Document, HttpMethod, Operation, PathItem};
use crate::error::{Error, Result};
use crate::search::{render_hits, search, SearchQuery};

/// Returned by [`Catalog::list_methods`] for an unknown path.
pub const PATH_NOT_FOUND_MESSAGE: &str = "API path was not found.";

/// Outcome of resolving a path and method against the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OperationLookup<'a> {
    Found(&'a Operation),
    PathNotFound,
    MethodNotFound,
}

/// Read-only view over a loaded OpenAPI document.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    document: Document,
    source: Option<PathBuf>,
}

impl Catalog {
    /// Load a catalog from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::DocumentNotFound {
                path: path.to_path_buf(),
            });
        }

        debug!("reading OpenAPI document from {}", path.display());
        let bytes = fs::read(path)?;
        let document = serde_json::from_slice(&bytes)
            .map_err(|err| Error::invalid_document(Some(path.to_path_buf()), err))?;

        let mut catalog = Self::from_document(document);
        catalog.source = Some(path.to_path_buf());
        info!(
            paths = catalog.document.paths.len(),
            operations = catalog.document.operation_count(),
            "loaded OpenAPI document from {}",
            path.display()
        );
        Ok(catalog)
    }

    /// Load a catalog from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document =
            serde_json::from_reader(reader).map_err(|err| Error::invalid_document(None, err))?;
        Ok(Self::from_document(document))
    }

    /// Wrap an already parsed document.
    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            source: None,
        }
    }

    /// The underlying document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// File the document was loaded from, when loaded via [`Catalog::from_path`].
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Path keys in declaration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.document.paths.keys().map(String::as_str)
    }

    /// Methods declared on `path`, or `None` when the path is unknown.
    pub fn methods(&self, path: &str) -> Option<Vec<HttpMethod>> {
        self.document
            .path_item(path)
            .map(|item| item.methods().collect())
    }

    /// Resolve an operation, distinguishing which lookup step missed.
    pub fn lookup(&self, path: &str, method: HttpMethod) -> OperationLookup<'_> {
        match self.document.path_item(path) {
            None => OperationLookup::PathNotFound,
            Some(item) => match item.operation(method) {
                Some(operation) => OperationLookup::Found(operation),
                None => OperationLookup::MethodNotFound,
            },
        }
    }

    fn path_item(&self, path: &str) -> Option<&PathItem> {
        self.document.path_item(path)
    }

    /// Every path, one per line.
    pub fn list_paths(&self) -> String {
        self.paths().collect::<Vec<_>>().join("\n")
    }

    /// Methods of `path`, one per line, or [`PATH_NOT_FOUND_MESSAGE`].
    pub fn list_methods(&self, path: &str) -> String {
        match self.path_item(path) {
            Some(item) => item
                .methods()
                .map(HttpMethod::as_str)
                .collect::<Vec<_>>()
                .join("\n"),
            None => PATH_NOT_FOUND_MESSAGE.to_string(),
        }
    }

    /// Full report for one operation, or a message naming what was missing.
    pub fn api_details(&self, path: &str, method: HttpMethod) -> String {
        let Some(item) = self.path_item(path) else {
            return path_not_found(path);
        };
        match item.operation(method) {
            Some(operation) => render_operation(path, method, operation, item.parameters()),
            None => method_not_found(path, method),
        }
    }

    /// Keyword search over path names and summaries/descriptions.
    pub fn search_by_keyword(&self, query: &SearchQuery) -> String {
        let hits = search(&self.document, query);
        debug!(keyword = %query.keyword, hits = hits.len(), "keyword search");
        render_hits(&query.keyword, &hits)
    }
}

/// Message for a path that is not in the document.
pub fn path_not_found(path: &str) -> String {
    format!("Path \"{path}\" was not found.")
}

/// Message for a method that is not declared on a known path.
pub fn method_not_found(path: &str, method: HttpMethod) -> String {
    format!("No method \"{}\" found for path \"{path}\".", method.upper())
}
