use crate::prelude::{eprintln, *};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use super::Server;

/// Serve newline-delimited JSON-RPC until stdin closes
///
/// stdout carries protocol messages only; diagnostics go to stderr.
pub async fn run_stdio(server: Server) -> Result<()> {
    if server.verbose {
        eprintln!("uitdb MCP server ready on stdio");
    }

    let mut reader = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = reader.next_line().await? {
        let message = line.trim();
        if message.is_empty() {
            continue;
        }

        if server.verbose {
            eprintln!("<- {message}");
        }

        // Notifications get no reply
        let Some(response) = super::handle_request(message, &server).await else {
            continue;
        };
        let mut reply = serde_json::to_vec(&response)?;
        reply.push(b'\n');

        if server.verbose {
            eprintln!("-> {}", String::from_utf8_lossy(&reply).trim_end());
        }

        stdout.write_all(&reply).await?;
        stdout.flush().await?;
    }

    log::debug!("stdin closed, stopping MCP server");
    Ok(())
}
