//! Trait abstraction for the entry endpoint to enable mocking in tests

use super::error::ApiError;
use super::request::SubmitRequest;
use crate::state::{EntryDetail, EntryId};
use async_trait::async_trait;

/// Operations of the server's `/entry/` endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryApi: Send + Sync {
    /// Send the post form; returns the parsed JSON body on success
    async fn submit_entry(&self, request: SubmitRequest) -> Result<serde_json::Value, ApiError>;

    /// Fetch a single entry for editing
    async fn fetch_entry(&self, entry_id: EntryId) -> Result<EntryDetail, ApiError>;

    /// Delete an entry, echoing `csrf_token` in the request header
    async fn delete_entry(
        &self,
        entry_id: EntryId,
        csrf_token: Option<String>,
    ) -> Result<(), ApiError>;
}
