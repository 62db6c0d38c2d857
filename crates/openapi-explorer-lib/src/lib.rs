//! OpenAPI explorer library entry points.
//!
//! This crate loads a static OpenAPI document into memory and answers the
//! queries an agent needs to explore it: list paths, list methods of a path,
//! render the detail of one operation and search by keyword. Higher-level
//! consumers (MCP server, CLI) should only depend on the items exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod catalog;
pub mod detail;
pub mod document;
pub mod error;
pub mod search;
pub mod source;

pub use catalog::{Catalog, OperationLookup, PATH_NOT_FOUND_MESSAGE};
pub use document::{Document, HttpMethod, Operation, PathItem};
pub use error::{Error, Result};
pub use search::{SearchHit, SearchQuery};
pub use source::{default_document_path, resolve_document_path, SPEC_ENV_VAR};
