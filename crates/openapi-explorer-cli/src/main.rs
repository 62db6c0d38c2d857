use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use openapi_explorer_cli::output::OutputFormat;
use openapi_explorer_lib::HttpMethod;
use openapi_explorer_mcp::server::{DEFAULT_SERVER_NAME, SERVER_NAME_ENV_VAR};

mod commands;

#[derive(Parser, Debug)]
#[command(author, version, about = "Explore a static OpenAPI document")]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// OpenAPI JSON document, or a directory containing openapi.json.
    /// Falls back to OPENAPI_EXPLORER_SPEC, then the platform data directory.
    #[arg(long, global = true)]
    pub spec: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Tracing filter directive (overrides RUST_LOG).
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every API path in the document.
    Paths,
    /// List the HTTP methods declared on a path.
    Methods {
        /// API path exactly as declared (e.g. /v1/users).
        #[arg(long)]
        path: String,
    },
    /// Show the full details of one operation.
    Details {
        /// API path exactly as declared.
        #[arg(long)]
        path: String,
        /// HTTP method (case-insensitive).
        #[arg(long)]
        method: HttpMethod,
    },
    /// Search operations by keyword in paths, summaries and descriptions.
    Search {
        /// Keyword to search for (case-insensitive).
        #[arg(long)]
        keyword: String,
        /// Do not match summaries and descriptions.
        #[arg(long)]
        no_description: bool,
        /// Do not match path names.
        #[arg(long)]
        no_path: bool,
    },
    /// Serve the document to MCP clients over stdio.
    Mcp {
        /// Prefix of the advertised server name.
        #[arg(long, env = SERVER_NAME_ENV_VAR, default_value = DEFAULT_SERVER_NAME)]
        server_name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global = &cli.global;

    // The MCP server installs its own stderr subscriber.
    if !matches!(cli.command, Command::Mcp { .. }) {
        init_tracing(global.log_level.as_deref())?;
    }

    match cli.command {
        Command::Paths => commands::query::handle_paths(global),
        Command::Methods { path } => commands::query::handle_methods(global, &path),
        Command::Details { path, method } => commands::query::handle_details(global, &path, method),
        Command::Search {
            keyword,
            no_description,
            no_path,
        } => commands::query::handle_search(global, keyword, !no_description, !no_path),
        Command::Mcp { server_name } => commands::mcp::run(global, server_name),
    }
}

// Logs go to stderr so stdout carries only query output.
fn init_tracing(log_level: Option<&str>) -> Result<()> {
    let env_filter = match log_level {
        Some(level) => {
            EnvFilter::try_new(level).with_context(|| format!("invalid log filter '{}'", level))?
        }
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    Ok(())
}
