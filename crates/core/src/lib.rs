//! Core library for uitdb
//!
//! This crate is the **Functional Core** of the uitdb tool: pure functions that
//! turn a search request into outbound query parameters and turn a Search API
//! envelope into a stable, compact result. It performs no I/O.
//!
//! The `uitdb` binary crate is the Imperative Shell. It reads configuration,
//! performs the HTTP call and serves the MCP protocol, delegating every
//! decision about parameters and response shape to this crate.
//!
//! # Module Organization
//!
//! - [`auth`]: credentials to headers and query parameters
//! - [`query`]: search requests, resources and pagination modes
//! - [`lookup`]: null-safe path lookup over `serde_json::Value`
//! - [`normalize`]: envelope item extraction and event compaction
//! - [`search`]: assembly of the final [`search::SearchResult`]
//! - [`error`]: the failure taxonomy shared with the shell
//!
//! # Example Usage
//!
//! ```rust
//! use uitdb_core::auth::{resolve_auth, Credentials};
//! use uitdb_core::normalize::{Envelope, SchemaProfile};
//! use uitdb_core::query::{build_query_params, Resource, SearchRequest};
//! use uitdb_core::search::transform_search_response;
//!
//! let auth = resolve_auth(&Credentials::new(None, Some("my-client".to_string())));
//! let request = SearchRequest::new(Resource::Events).with_query(Some("jazz".to_string()));
//! let params = build_query_params(&request, SchemaProfile::Embedded.default_pagination(), &auth);
//! assert_eq!(params["embed"], "true");
//!
//! let envelope: Envelope = serde_json::from_str(r#"{"member": [], "totalItems": 0}"#).unwrap();
//! let output = transform_search_response(Resource::Events, 1, &envelope, SchemaProfile::Embedded);
//! assert_eq!(output.count, 0);
//! ```

pub mod auth;
pub mod error;
pub mod lookup;
pub mod normalize;
pub mod query;
pub mod search;
