//! MCP (Model Context Protocol) server for a static OpenAPI document
//!
//! This crate provides a stdio-based MCP server that lets AI assistants
//! explore an OpenAPI document: list paths, list methods, read operation
//! details and search by keyword.
//!
//! # Architecture
//!
//! The MCP server is organized into the following submodules:
//! - `server`: Server state (loaded catalog, advertised name, metadata)
//! - `protocol`: JSON-RPC 2.0 request dispatch
//! - `tools`: Tool implementations (get-api-paths, get-api-path-method,
//!   get-api-details, search-api-by-keyword)
//! - `resources`: Resource implementations (document info, path list)
//! - `transport`: Newline-delimited stdio transport and server loop
//! - `error`: JSON-RPC error codes and constructors
//!
//! # Transport
//!
//! The server communicates via stdio using JSON-RPC 2.0 messages, one per
//! line. All logging is redirected to stderr to prevent stdout protocol
//! corruption.

pub mod error;
pub mod logging;
pub mod protocol;
pub mod resources;
pub mod server;
pub mod tools;
pub mod transport;
pub mod types;

pub use error::{Error, Result};
pub use logging::configure_tracing;
pub use server::McpServerState;
pub use transport::{run_server_loop, StdioTransport};
