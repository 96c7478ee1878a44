//! Configuration handling for the admin client

use crate::api::DEFAULT_SERVER;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const SERVER_ENV: &str = "ENTRY_ADMIN_SERVER";
const COOKIE_ENV: &str = "ENTRY_ADMIN_COOKIE";
const PAGE_ENV: &str = "ENTRY_ADMIN_PAGE";
const LOG_ENV: &str = "ENTRY_ADMIN_LOG";

/// User configuration for the admin client
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdminConfig {
    /// Server root, e.g. `http://127.0.0.1:8000`
    pub server_url: Option<String>,
    /// Cookie string sent with every request (`sessionid=...; csrftoken=...`)
    pub cookies: Option<String>,
    /// JSON snapshot of the server-rendered admin page
    pub page_file: Option<PathBuf>,
}

impl AdminConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "entry-admin", "entry-admin")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Where log output goes: `ENTRY_ADMIN_LOG`, else `entry-admin.log` in
    /// the local data directory. The terminal is owned by the TUI, so logs
    /// never go to stderr.
    pub fn log_path(lookup: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
        lookup(LOG_ENV).map(PathBuf::from).or_else(|| {
            ProjectDirs::from("io", "entry-admin", "entry-admin")
                .map(|dirs| dirs.data_local_dir().join("entry-admin.log"))
        })
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Override fields from `lookup` (the environment in production)
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(server) = lookup(SERVER_ENV) {
            self.server_url = Some(server);
        }
        if let Some(cookies) = lookup(COOKIE_ENV) {
            self.cookies = Some(cookies);
        }
        if let Some(page) = lookup(PAGE_ENV) {
            self.page_file = Some(PathBuf::from(page));
        }
    }

    pub fn server_url(&self) -> &str {
        self.server_url.as_deref().unwrap_or(DEFAULT_SERVER)
    }

    pub fn cookies(&self) -> &str {
        self.cookies.as_deref().unwrap_or("")
    }
}
