//! Error taxonomy for a single search call
//!
//! The core never performs I/O itself, but the shell reports its transport and
//! decoding failures through these same variants so that every failure reaches
//! the tool boundary with a stable `kind`.

use thiserror::Error;

/// Everything that can make a search call fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The requested resource is not one of `events`, `places`, `organizers`.
    #[error("Invalid resource '{0}'. Valid resources: events, places, organizers")]
    InvalidResource(String),

    /// Connection failure, timeout or any other error before a response arrived.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The upstream answered with a non-2xx status.
    #[error("Search API error [{status}]: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The upstream answered 2xx but the body was not a JSON object.
    #[error("Failed to decode Search API response: {0}")]
    Decode(String),
}

impl SearchError {
    /// Short machine-readable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::InvalidResource(_) => "invalid_resource",
            SearchError::Transport(_) => "transport",
            SearchError::UpstreamStatus { .. } => "upstream_status",
            SearchError::Decode(_) => "decode",
        }
    }

    /// Whether the error was caused by the caller's input rather than the upstream.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SearchError::InvalidResource(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(
            SearchError::InvalidResource("venues".into()).kind(),
            "invalid_resource"
        );
        assert_eq!(SearchError::Transport("timeout".into()).kind(), "transport");
        assert_eq!(
            SearchError::UpstreamStatus {
                status: 503,
                body: String::new()
            }
            .kind(),
            "upstream_status"
        );
        assert_eq!(SearchError::Decode("eof".into()).kind(), "decode");
    }

    #[test]
    fn test_display_carries_status_and_body() {
        let err = SearchError::UpstreamStatus {
            status: 401,
            body: "missing client id".to_string(),
        };
        assert_eq!(err.to_string(), "Search API error [401]: missing client id");
    }

    #[test]
    fn test_only_invalid_resource_is_input_error() {
        assert!(SearchError::InvalidResource("x".into()).is_invalid_input());
        assert!(!SearchError::Decode("x".into()).is_invalid_input());
    }
}
