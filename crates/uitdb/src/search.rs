use crate::config::UitdbConfig;
use crate::prelude::{println, *};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::client::UpstreamClient;
use uitdb_core::auth::resolve_auth;
use uitdb_core::error::SearchError;
use uitdb_core::lookup::first_text;
use uitdb_core::normalize::SearchItem;
use uitdb_core::query::{build_query_params, Resource, SearchRequest, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use uitdb_core::search::{transform_search_response, SearchResult};

/// Options for searching the UiTdatabank
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct SearchOptions {
    /// Resource to search: events, places, organizers
    #[arg(value_name = "RESOURCE", default_value = "events")]
    pub resource: String,

    /// Free-text query
    #[arg(short, long)]
    pub query: Option<String>,

    /// Number of items per page
    #[arg(short, long, env = "UITDB_LIMIT", default_value = "10")]
    pub limit: usize,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Earliest date, ISO-8601 (e.g. 2025-09-01)
    #[arg(long = "from")]
    pub date_from: Option<String>,

    /// Latest date, ISO-8601
    #[arg(long = "to")]
    pub date_to: Option<String>,

    /// Filter on city (addressLocality)
    #[arg(long)]
    pub city: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments of one search call, as received from the CLI or the MCP tool
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchArgs {
    pub resource: String,
    pub query: Option<String>,
    pub limit: Option<usize>,
    pub page: Option<usize>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub city: Option<String>,
}

impl From<&SearchOptions> for SearchArgs {
    fn from(options: &SearchOptions) -> Self {
        Self {
            resource: options.resource.clone(),
            query: options.query.clone(),
            limit: Some(options.limit),
            page: Some(options.page),
            date_from: options.date_from.clone(),
            date_to: options.date_to.clone(),
            city: options.city.clone(),
        }
    }
}

/// Search configuration and HTTP client, built once and shared by every call
#[derive(Debug, Clone)]
pub struct SearchService {
    config: UitdbConfig,
    client: UpstreamClient,
}

impl SearchService {
    pub fn new(config: UitdbConfig) -> std::result::Result<Self, SearchError> {
        let client = UpstreamClient::new(&config.base_url)?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: UitdbConfig, client: UpstreamClient) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &UitdbConfig {
        &self.config
    }

    pub async fn search(&self, args: SearchArgs) -> std::result::Result<SearchResult, SearchError> {
        search_data(&self.config, &self.client, args).await
    }
}

/// Public data function - used by both CLI and MCP
///
/// Validates the resource before anything touches the network, then performs
/// one GET and delegates every shaping decision to the core crate.
pub async fn search_data(
    config: &UitdbConfig,
    client: &UpstreamClient,
    args: SearchArgs,
) -> std::result::Result<SearchResult, SearchError> {
    let resource: Resource = args.resource.parse()?;

    let request = SearchRequest::new(resource)
        .with_query(args.query)
        .with_paging(
            args.limit.unwrap_or(DEFAULT_LIMIT),
            args.page.unwrap_or(DEFAULT_PAGE),
        )
        .with_dates(args.date_from, args.date_to)
        .with_city(args.city);

    let auth = resolve_auth(&config.credentials);
    let params = build_query_params(&request, config.pagination, &auth);

    let envelope = client.fetch(resource, &params, &auth.headers).await?;

    let output = transform_search_response(resource, request.page, &envelope, config.profile);
    log::info!(
        "search {} page {} returned {} item(s)",
        resource,
        output.page,
        output.count
    );

    Ok(output)
}

/// Handle the search command
pub async fn run(options: SearchOptions, global: crate::Global) -> Result<()> {
    let service = SearchService::new(UitdbConfig::from_global(&global)?)?;

    if global.verbose {
        let config = service.config();
        println!("Search API Base: {}", config.base_url);
        println!("Schema: {} ({:?})", config.profile, config.pagination);
        println!();
    }

    let data = service.search(SearchArgs::from(&options)).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        println!("{}", format_search_text(&data));
    }

    Ok(())
}

fn format_search_text(data: &SearchResult) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!(
            "UITDATABANK {} (page {}, {} result(s))",
            data.resource.to_string().to_uppercase(),
            data.page,
            data.count
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if data.data.is_empty() {
        result.push_str("\nNo results found.\n");
        return result;
    }

    let mut table = new_table();
    match data.resource {
        Resource::Events => {
            table.add_row(prettytable::row!["Name", "Start", "Location", "Organizer"]);
        }
        Resource::Places | Resource::Organizers => {
            table.add_row(prettytable::row!["Name", "ID"]);
        }
    }

    for item in &data.data {
        match item {
            SearchItem::Compact(event) => {
                table.add_row(prettytable::row![
                    event.name.as_deref().unwrap_or("-"),
                    event.start_date.as_deref().unwrap_or("-"),
                    event.location,
                    event.organizer
                ]);
            }
            SearchItem::Raw(raw) => {
                let name = first_text(raw, &[&["name", "nl"], &["name", "en"], &["name"]])
                    .unwrap_or_else(|| "-".to_string());
                let id = first_text(raw, &[&["@id"], &["id"]]).unwrap_or_else(|| "-".to_string());
                table.add_row(prettytable::row![name, id]);
            }
        }
    }

    result.push('\n');
    result.push_str(&table.to_string());
    result
}
