//! Handlers for the read-only query subcommands.

use anyhow::{Context, Result};

use openapi_explorer_cli::output::{render_details, render_methods, render_paths, render_search};
use openapi_explorer_lib::{HttpMethod, SearchQuery};

use super::load_catalog;
use crate::GlobalOptions;

pub fn handle_paths(global: &GlobalOptions) -> Result<()> {
    let catalog = load_catalog(global)?;
    let text = render_paths(&catalog, global.format).context("failed to render paths")?;
    println!("{}", text);
    Ok(())
}

pub fn handle_methods(global: &GlobalOptions, path: &str) -> Result<()> {
    let catalog = load_catalog(global)?;
    let text = render_methods(&catalog, path, global.format).context("failed to render methods")?;
    println!("{}", text);
    Ok(())
}

pub fn handle_details(global: &GlobalOptions, path: &str, method: HttpMethod) -> Result<()> {
    let catalog = load_catalog(global)?;
    let text = render_details(&catalog, path, method, global.format)
        .context("failed to render operation details")?;
    println!("{}", text);
    Ok(())
}

pub fn handle_search(
    global: &GlobalOptions,
    keyword: String,
    in_description: bool,
    in_path: bool,
) -> Result<()> {
    let catalog = load_catalog(global)?;
    let query = SearchQuery::new(keyword)
        .in_description(in_description)
        .in_path(in_path);
    let text =
        render_search(&catalog, &query, global.format).context("failed to render search hits")?;
    println!("{}", text);
    Ok(())
}
