//! Tracing setup for the stdio server.

use anyhow::{Context, Result};

/// Configure tracing to write only to stderr.
///
/// stdout carries the JSON-RPC stream, so nothing else may be written there.
/// `log_level` takes an `EnvFilter` directive and overrides `RUST_LOG`.
pub fn configure_tracing(log_level: Option<&str>) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = if let Some(level) = log_level {
        EnvFilter::try_new(level).with_context(|| format!("invalid log filter '{}'", level))?
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    Ok(())
}
