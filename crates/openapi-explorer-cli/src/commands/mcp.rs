//! `mcp` subcommand: run the stdio MCP server.

use anyhow::{Context, Result};
use openapi_explorer_mcp::{configure_tracing, run_server_loop, McpServerState, StdioTransport};

use super::load_catalog;
use crate::GlobalOptions;

/// Public entrypoint orchestrating the MCP server lifecycle
pub fn run(global: &GlobalOptions, server_name: String) -> Result<()> {
    // 1. Configure tracing (stderr only)
    configure_tracing(global.log_level.as_deref())?;

    // 2. Load the document before starting the runtime
    let catalog = load_catalog(global)?;
    let server = McpServerState::from_catalog(catalog, server_name);

    // 3. Create transport and run server loop
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(async {
        let mut transport = StdioTransport::new();
        run_server_loop(&mut transport, &server).await
    })
}
