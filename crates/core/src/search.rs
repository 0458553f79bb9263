//! Assembly of the tool-call response

use serde::Serialize;

use crate::normalize::{normalize_envelope, Envelope, SchemaProfile, SearchItem};
use crate::query::Resource;

/// Response of one search call.
///
/// `count` is always the length of `data`, and `page` is the page that was
/// asked for: the embedded API generation does not report paging back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub resource: Resource,
    pub count: usize,
    pub page: usize,
    pub data: Vec<SearchItem>,
    pub raw_meta: Envelope,
}

/// Pure transformation: normalize an envelope into a [`SearchResult`].
pub fn transform_search_response(
    resource: Resource,
    page: usize,
    envelope: &Envelope,
    profile: SchemaProfile,
) -> SearchResult {
    let (data, raw_meta) = normalize_envelope(resource, envelope, profile);

    SearchResult {
        resource,
        count: data.len(),
        page,
        data,
        raw_meta,
    }
}
