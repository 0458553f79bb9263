use crate::prelude::*;
use uitdb_core::auth::Credentials;
use uitdb_core::normalize::SchemaProfile;
use uitdb_core::query::PaginationMode;

/// Default Search API endpoint (test environment)
pub const DEFAULT_BASE_URL: &str = "https://search-test.uitdatabank.be";

/// Search API configuration, resolved once from the global flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UitdbConfig {
    pub base_url: String,
    pub credentials: Credentials,
    pub profile: SchemaProfile,
    pub pagination: PaginationMode,
}

impl UitdbConfig {
    /// Build the configuration from CLI flags and their environment fallbacks
    ///
    /// When no pagination mode is given, the schema profile's default is used.
    pub fn from_global(global: &crate::Global) -> Result<Self> {
        let profile: SchemaProfile = global
            .schema
            .parse()
            .map_err(|e: String| Error::InvalidConfig(e))?;

        let pagination = match global.pagination.as_deref() {
            Some(mode) => mode
                .parse()
                .map_err(|e: String| Error::InvalidConfig(e))?,
            None => profile.default_pagination(),
        };

        let base_url = global.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::InvalidConfig("UITDB_BASE_URL is empty".to_string()).into());
        }

        Ok(Self {
            base_url,
            credentials: Credentials::new(global.api_key.clone(), global.client_id.clone()),
            profile,
            pagination,
        })
    }
}
