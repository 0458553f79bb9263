#[derive(Debug, clap::Parser)]
#[command(name = "mcp")]
#[command(about = "Serve the search_uit tool to MCP hosts")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Speak JSON-RPC over stdin/stdout, one message per line
    #[clap(name = "stdio")]
    Stdio,

    /// Serve JSON-RPC over HTTP at POST /mcp, with a health check at GET /
    #[clap(name = "http", alias = "sse")]
    Http(HttpOptions),
}

#[derive(Debug, clap::Args)]
pub struct HttpOptions {
    /// Port the HTTP transport listens on
    #[arg(short, long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// Interface to bind (use 0.0.0.0 inside containers)
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,
}
