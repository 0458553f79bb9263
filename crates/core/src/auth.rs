//! Outbound credentials for the Search API
//!
//! Each configured credential is sent twice, once as a header and once as a
//! query parameter, because the two API generations read different channels.

use std::collections::BTreeMap;

pub const ACCEPT_HEADER: &str = "Accept";
pub const ACCEPT_JSON: &str = "application/json";

pub const API_KEY_HEADER: &str = "x-api-key";
pub const API_KEY_PARAM: &str = "apiKey";
pub const CLIENT_ID_HEADER: &str = "x-client-id";
pub const CLIENT_ID_PARAM: &str = "clientId";

/// Credentials loaded once at startup. Both are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: Option<String>,
    pub client_id: Option<String>,
}

impl Credentials {
    pub fn new(api_key: Option<String>, client_id: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|v| !v.is_empty()),
            client_id: client_id.filter(|v| !v.is_empty()),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.api_key.is_none() && self.client_id.is_none()
    }
}

/// Query parameters and headers to attach to one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthParts {
    pub params: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
}

/// Derive request params and headers from the configured credentials.
pub fn resolve_auth(credentials: &Credentials) -> AuthParts {
    let mut parts = AuthParts::default();
    parts
        .headers
        .insert(ACCEPT_HEADER.to_string(), ACCEPT_JSON.to_string());

    let channels = [
        (&credentials.api_key, API_KEY_HEADER, API_KEY_PARAM),
        (&credentials.client_id, CLIENT_ID_HEADER, CLIENT_ID_PARAM),
    ];

    for (value, header, param) in channels {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            parts.headers.insert(header.to_string(), value.to_string());
            parts.params.insert(param.to_string(), value.to_string());
        }
    }

    parts
}
