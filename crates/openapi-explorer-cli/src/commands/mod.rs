// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers and stays focused on parsing.

pub mod mcp;
pub mod query;

use anyhow::{Context, Result};
use openapi_explorer_lib::{resolve_document_path, Catalog};

use crate::GlobalOptions;

/// Resolve the document location from `--spec`, the environment or the
/// platform data directory, then load it.
pub fn load_catalog(global: &GlobalOptions) -> Result<Catalog> {
    let path = resolve_document_path(global.spec.as_deref())
        .context("failed to locate the OpenAPI document")?;
    Catalog::from_path(&path)
        .with_context(|| format!("failed to load OpenAPI document from {}", path.display()))
}
