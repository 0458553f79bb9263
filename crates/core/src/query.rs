//! Search requests and their outbound query parameters

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::auth::AuthParts;
use crate::error::SearchError;

pub const DEFAULT_LIMIT: usize = 10;
pub const DEFAULT_PAGE: usize = 1;

/// Searchable entity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Events,
    Places,
    Organizers,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Events, Resource::Places, Resource::Organizers];

    /// Path segment on the upstream API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Events => "events",
            Resource::Places => "places",
            Resource::Organizers => "organizers",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| SearchError::InvalidResource(s.to_string()))
    }
}

/// How pagination is requested from the upstream.
///
/// The older API generation honours `size`/`page`. The newer one ignores them
/// and needs `embed=true` to return full records instead of references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaginationMode {
    SizePage,
    Embed,
}

impl FromStr for PaginationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "size-page" | "size_page" | "sizepage" => Ok(PaginationMode::SizePage),
            "embed" => Ok(PaginationMode::Embed),
            other => Err(format!(
                "Invalid pagination mode: {other}. Valid modes: size-page, embed"
            )),
        }
    }
}

/// One search call, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub resource: Resource,
    pub query: Option<String>,
    pub limit: usize,
    pub page: usize,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub city: Option<String>,
}

impl SearchRequest {
    /// A request with default paging and no filters.
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            query: None,
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
            date_from: None,
            date_to: None,
            city: None,
        }
    }

    pub fn with_query(mut self, query: Option<String>) -> Self {
        self.query = query;
        self
    }

    /// Limit and page are both at least 1.
    pub fn with_paging(mut self, limit: usize, page: usize) -> Self {
        self.limit = limit.max(1);
        self.page = page.max(1);
        self
    }

    pub fn with_dates(mut self, date_from: Option<String>, date_to: Option<String>) -> Self {
        self.date_from = date_from;
        self.date_to = date_to;
        self
    }

    pub fn with_city(mut self, city: Option<String>) -> Self {
        self.city = city;
        self
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Build the full query string for a request, auth params included.
///
/// Values are passed through as given. Dates are not parsed and text is not
/// case-folded; filtering is entirely up to the upstream.
pub fn build_query_params(
    request: &SearchRequest,
    mode: PaginationMode,
    auth: &AuthParts,
) -> BTreeMap<String, String> {
    let mut params = auth.params.clone();

    if let Some(q) = non_empty(&request.query) {
        params.insert("q".to_string(), q.to_string());
    }

    match mode {
        PaginationMode::SizePage => {
            params.insert("size".to_string(), request.limit.to_string());
            params.insert("page".to_string(), request.page.to_string());
        }
        PaginationMode::Embed => {
            params.insert("embed".to_string(), "true".to_string());
        }
    }

    if let Some(from) = non_empty(&request.date_from) {
        params.insert("dateFrom".to_string(), from.to_string());
    }
    if let Some(to) = non_empty(&request.date_to) {
        params.insert("dateTo".to_string(), to.to_string());
    }
    if let Some(city) = non_empty(&request.city) {
        params.insert("addressLocality".to_string(), city.to_string());
    }

    params
}
