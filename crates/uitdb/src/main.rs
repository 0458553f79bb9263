#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod client;
mod config;
mod error;
mod mcp;
mod prelude;
mod search;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Search the UiTdatabank events database from the command line or as an MCP tool"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Search API base URL
    #[clap(long, env = "UITDB_BASE_URL", global = true, default_value = config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Search API key, sent as x-api-key header and apiKey parameter
    #[clap(long, env = "UITDB_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// Search API client id, sent as x-client-id header and clientId parameter
    #[clap(long, env = "UITDB_CLIENT_ID", global = true, hide_env_values = true)]
    client_id: Option<String>,

    /// Upstream schema generation: legacy, embedded
    #[clap(long, env = "UITDB_SCHEMA", global = true, default_value = "embedded")]
    schema: String,

    /// Pagination mode: size-page, embed (defaults to the schema's own mode)
    #[clap(long, env = "UITDB_PAGINATION", global = true)]
    pagination: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "UITDB_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Search events, places or organizers
    Search(crate::search::SearchOptions),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Search(options) => crate::search::run(options, app.global).await,
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
