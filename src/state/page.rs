//! Server-rendered page context
//!
//! The admin page is rendered by the server: the three entry tables, the
//! options of the blog/author/tag selects and the form's anti-forgery token.
//! A `PageSnapshot` is that context saved as JSON.

use super::forms::SelectOption;
use super::tables::{EntryRow, EntryTable, EntryTables, TableKind};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TablesSnapshot {
    #[serde(default)]
    pub published: Vec<EntryRow>,
    #[serde(default)]
    pub scheduled: Vec<EntryRow>,
    #[serde(default)]
    pub draft: Vec<EntryRow>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSnapshot {
    #[serde(default)]
    pub csrf_token: Option<String>,
    #[serde(default)]
    pub blogs: Vec<SelectOption>,
    #[serde(default)]
    pub authors: Vec<SelectOption>,
    #[serde(default)]
    pub tags: Vec<SelectOption>,
    #[serde(default)]
    pub tables: TablesSnapshot,
}

impl PageSnapshot {
    /// Load a snapshot from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read page snapshot {}", path.display()))?;
        let snapshot = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse page snapshot {}", path.display()))?;
        Ok(snapshot)
    }

    /// Build the numbered entry tables, in page order
    pub fn entry_tables(&self) -> EntryTables {
        EntryTables::new(vec![
            EntryTable::new(TableKind::Published, self.tables.published.clone()),
            EntryTable::new(TableKind::Scheduled, self.tables.scheduled.clone()),
            EntryTable::new(TableKind::Draft, self.tables.draft.clone()),
        ])
    }
}
