use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub video_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: String,
    pub description: String,
    pub resource_id: ResourceId,
    /// Keyed by quality tier name (`maxres`, `standard`, ...).
    pub thumbnails: HashMap<String, Thumbnail>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub published_at: Option<DateTime<Utc>>,
}

/// Unparseable timestamps decode as `None` instead of failing the item.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|t| t.with_timezone(&Utc)))
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    pub snippet: Snippet,
}

impl PlaylistItem {
    pub fn video_id(&self) -> &str {
        &self.snippet.resource_id.video_id
    }

    pub fn watch_url(&self) -> String {
        format!("https://youtu.be/{}", self.video_id())
    }
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItemResponse {
    pub items: Vec<PlaylistItem>,
}
