//! Pure transformation of Search API envelopes
//!
//! The API has shipped two generations with different layouts. Older responses
//! put results under `member`, identify records with `id` and nest dates under
//! `calendar`. Newer responses with `embed=true` identify records with `@id`
//! and embed full location and organizer objects. One compaction handles both;
//! the [`SchemaProfile`] only picks the identifier key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::lookup::{first_text, text_at};
use crate::query::{PaginationMode, Resource};

/// Envelope keys that may hold the result list, in priority order.
pub const ITEM_KEYS: [&str; 3] = ["items", "member", "results"];

pub const NO_LOCATION: &str = "Geen locatie";
pub const NO_ORGANIZER: &str = "Geen organizer";

/// Top-level JSON object returned by a search call.
pub type Envelope = Map<String, Value>;

/// Which upstream generation's field layout to expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaProfile {
    Legacy,
    #[default]
    Embedded,
}

impl SchemaProfile {
    /// Key holding the record identifier.
    pub fn id_key(&self) -> &'static str {
        match self {
            SchemaProfile::Legacy => "id",
            SchemaProfile::Embedded => "@id",
        }
    }

    /// Pagination the generation understands when nothing else is configured.
    pub fn default_pagination(&self) -> PaginationMode {
        match self {
            SchemaProfile::Legacy => PaginationMode::SizePage,
            SchemaProfile::Embedded => PaginationMode::Embed,
        }
    }
}

impl fmt::Display for SchemaProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaProfile::Legacy => f.write_str("legacy"),
            SchemaProfile::Embedded => f.write_str("embedded"),
        }
    }
}

impl FromStr for SchemaProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(SchemaProfile::Legacy),
            "embedded" | "embed" => Ok(SchemaProfile::Embedded),
            other => Err(format!(
                "Invalid schema profile: {other}. Valid profiles: legacy, embedded"
            )),
        }
    }
}

/// Compact, locale-resolved summary of one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactEvent {
    pub id: Option<String>,
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
    pub url: Option<String>,
    pub location: String,
    pub organizer: String,
}

/// One entry of the output `data` list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchItem {
    Compact(CompactEvent),
    Raw(Value),
}

/// Split an envelope into its result list and the remaining metadata.
///
/// The first of `items`, `member`, `results` that is present wins, even when it
/// holds an empty list. A winning key whose value is not an array yields no
/// items. All three keys are always left out of the metadata.
pub fn extract_items(envelope: &Envelope) -> (Vec<Value>, Envelope) {
    let items = ITEM_KEYS
        .iter()
        .find_map(|key| envelope.get(*key))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let meta = envelope
        .iter()
        .filter(|(key, _)| !ITEM_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    (items, meta)
}

/// Localized name under `base`: Dutch, then English.
fn localized(item: &Value, base: &[&str]) -> Option<String> {
    let mut nl = base.to_vec();
    nl.extend(["name", "nl"]);
    let mut en = base.to_vec();
    en.extend(["name", "en"]);

    first_text(item, &[nl.as_slice(), en.as_slice()])
}

/// Date field on the item itself, else under `calendar`.
fn date_field(item: &Value, field: &str) -> Option<String> {
    text_at(item, &[field]).or_else(|| text_at(item, &["calendar", field]))
}

/// Project a raw event record onto [`CompactEvent`].
///
/// Never fails. Missing data becomes `None` or one of the placeholders.
pub fn compact_event(item: &Value, profile: SchemaProfile) -> CompactEvent {
    let id = text_at(item, &[profile.id_key()]);

    let name = localized(item, &[]).or_else(|| text_at(item, &["name"]));

    let url = text_at(item, &["url"]).or_else(|| id.clone());

    let location = localized(item, &["location"])
        .or_else(|| text_at(item, &["location", "address", "addressLocality"]))
        .unwrap_or_else(|| NO_LOCATION.to_string());

    let organizer = localized(item, &["organizer"])
        .or_else(|| text_at(item, &["organizer", "name"]))
        .unwrap_or_else(|| NO_ORGANIZER.to_string());

    CompactEvent {
        id,
        name,
        start_date: date_field(item, "startDate"),
        end_date: date_field(item, "endDate"),
        status: text_at(item, &["status", "type"]),
        url,
        location,
        organizer,
    }
}

/// Extract and, for events, compact the items of an envelope.
pub fn normalize_envelope(
    resource: Resource,
    envelope: &Envelope,
    profile: SchemaProfile,
) -> (Vec<SearchItem>, Envelope) {
    let (items, meta) = extract_items(envelope);

    let data = match resource {
        Resource::Events => items
            .iter()
            .map(|item| SearchItem::Compact(compact_event(item, profile)))
            .collect(),
        Resource::Places | Resource::Organizers => {
            items.into_iter().map(SearchItem::Raw).collect()
        }
    };

    (data, meta)
}
