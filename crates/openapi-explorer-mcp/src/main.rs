use anyhow::{Context, Result};
use clap::Parser;
use openapi_explorer_mcp::server::{DEFAULT_SERVER_NAME, SERVER_NAME_ENV_VAR};
use openapi_explorer_mcp::{configure_tracing, run_server_loop, McpServerState, StdioTransport};
use std::path::PathBuf;

/// Serve an OpenAPI document to MCP clients over stdio.
#[derive(Parser, Debug)]
#[command(name = "openapi-explorer-mcp", version, about)]
struct Args {
    /// OpenAPI JSON document, or a directory containing openapi.json.
    #[arg(long, env = openapi_explorer_lib::SPEC_ENV_VAR)]
    spec: Option<PathBuf>,

    /// Prefix of the advertised server name.
    #[arg(long, env = SERVER_NAME_ENV_VAR, default_value = DEFAULT_SERVER_NAME)]
    server_name: String,

    /// Tracing filter directive (overrides RUST_LOG).
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs MUST go to stderr to avoid stdout protocol corruption
    configure_tracing(args.log_level.as_deref())?;

    let server = McpServerState::load(args.spec.as_deref(), args.server_name)
        .context("Failed to initialize MCP server state")?;

    let mut transport = StdioTransport::new();
    run_server_loop(&mut transport, &server).await
}
