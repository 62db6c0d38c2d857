//! Newline-delimited stdio transport and the server loop
//!
//! The transport hands raw lines to [`handle_message`] so malformed JSON
//! becomes a parse error response instead of ending the session.

use crate::protocol::{handle_message, parse_error_response};
use crate::server::McpServerState;
use anyhow::{Context, Result};
use serde_json::Value;
use std::io;
use tokio::io::{
    stdin, stdout, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin,
    Stdout,
};
use tokio::select;
use tokio::signal;

/// Line-oriented transport, stdin/stdout by default.
pub struct StdioTransport<R = BufReader<Stdin>, W = Stdout> {
    reader: R,
    writer: W,
}

impl StdioTransport {
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(stdin()),
            writer: stdout(),
        }
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, W> StdioTransport<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Transport over arbitrary streams (used by tests).
    pub fn from_parts(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Read the next line as raw bytes without its terminator. Returns
    /// Ok(None) on EOF.
    ///
    /// Decoding is left to the caller so a line that is not UTF-8 can be
    /// answered instead of ending the session.
    pub async fn read_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        let bytes = self.reader.read_until(b'\n', &mut line).await?;
        if bytes == 0 {
            return Ok(None);
        }
        while matches!(line.last(), Some(b'\n' | b'\r')) {
            line.pop();
        }
        Ok(Some(line))
    }

    // Keep BrokenPipe distinguishable so the loop can treat it as a disconnect
    fn check_io<T>(res: io::Result<T>) -> io::Result<T> {
        res.map_err(|e| {
            if e.kind() == io::ErrorKind::BrokenPipe {
                io::Error::new(io::ErrorKind::BrokenPipe, "Client disconnected")
            } else {
                e
            }
        })
    }

    /// Write one message followed by a newline and flush.
    pub async fn write_message(&mut self, msg: &Value) -> io::Result<()> {
        let s = serde_json::to_string(msg)?;

        Self::check_io(self.writer.write_all(s.as_bytes()).await)?;
        Self::check_io(self.writer.write_all(b"\n").await)?;
        Self::check_io(self.writer.flush().await)?;

        Ok(())
    }
}

/// Run the server loop: read requests from the transport and answer each
/// before reading the next.
pub async fn run_server_loop<R, W>(
    transport: &mut StdioTransport<R, W>,
    server: &McpServerState,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    tracing::info!("MCP server initialized, waiting for requests...");

    server
        .initialize()
        .await
        .context("failed to initialize MCP server state")?;

    loop {
        select! {
            _ = signal::ctrl_c() => {
                tracing::info!("Received shutdown signal, exiting gracefully");
                break;
            }

            line = transport.read_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        tracing::info!("Client disconnected (EOF)");
                        break;
                    }
                    Err(e) => {
                        tracing::error!("Transport error: {}", e);
                        return Err(e).context("failed to read request");
                    }
                };

                let response = match String::from_utf8(line) {
                    Ok(line) if line.trim().is_empty() => continue,
                    Ok(line) => match handle_message(server, &line).await {
                        Some(response) => response,
                        None => continue,
                    },
                    Err(e) => {
                        tracing::warn!("Discarding request that is not UTF-8: {}", e);
                        parse_error_response(e.to_string())
                    }
                };

                if let Err(e) = transport.write_message(&response).await {
                    if e.kind() == io::ErrorKind::BrokenPipe {
                        tracing::info!("Client disconnected (broken pipe)");
                        break;
                    }
                    return Err(e).context("failed to write response");
                }
            }
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
