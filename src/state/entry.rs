//! Entry records exchanged with the server

use serde::{Deserialize, Serialize};

/// Server-side identifier of a blog entry
pub type EntryId = u64;

/// A related record referenced by its display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

/// Payload of `GET /entry/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDetail {
    pub entry_id: EntryId,
    pub blog_name: String,
    pub headline: String,
    pub summary: String,
    #[serde(default)]
    pub body_text: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub pub_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub authors: Vec<NamedRef>,
    #[serde(default)]
    pub tags: Vec<NamedRef>,
}
