//! Confirmed deletion of an entry
//!
//! `Idle → Confirming → {Deleting → Idle, Idle}`. Exactly one target can be
//! pending; requesting another while confirming replaces it. Cancelling
//! while deleting closes the modal; the request still completes for the id
//! it was sent with.

use crate::api::ApiError;
use crate::cookie::{get_cookie, CSRF_COOKIE};
use crate::state::{EntryId, EntryTables};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletionPhase {
    #[default]
    Idle,
    Confirming(EntryId),
    Deleting(EntryId),
}

#[derive(Debug, Default)]
pub struct DeletionWorkflow {
    phase: DeletionPhase,
}

/// Token for the delete request, read from the `csrftoken` cookie
pub fn csrf_token(cookies: &str) -> Option<String> {
    get_cookie(cookies, CSRF_COOKIE)
}

impl DeletionWorkflow {
    pub fn phase(&self) -> DeletionPhase {
        self.phase
    }

    /// Whether the confirmation modal is on screen
    pub fn is_confirming(&self) -> bool {
        !matches!(self.phase, DeletionPhase::Idle)
    }

    /// Ask for confirmation to delete `entry_id`
    pub fn request(&mut self, entry_id: EntryId) {
        match self.phase {
            DeletionPhase::Deleting(current) => {
                tracing::debug!("Deletion of {current} in flight, ignoring request for {entry_id}");
            }
            _ => self.phase = DeletionPhase::Confirming(entry_id),
        }
    }

    pub fn cancel(&mut self) {
        if let DeletionPhase::Deleting(entry_id) = self.phase {
            tracing::debug!("Closing modal while entry {entry_id} is being deleted");
        }
        self.phase = DeletionPhase::Idle;
    }

    /// Accept the confirmation; returns the entry to delete
    pub fn confirm(&mut self) -> Option<EntryId> {
        match self.phase {
            DeletionPhase::Confirming(entry_id) => {
                self.phase = DeletionPhase::Deleting(entry_id);
                Some(entry_id)
            }
            _ => None,
        }
    }

    /// Apply the server's answer. On success the entry's row is removed and
    /// its table renumbered; failures are only logged.
    pub fn complete(
        &mut self,
        entry_id: EntryId,
        result: Result<(), ApiError>,
        tables: &mut EntryTables,
    ) -> bool {
        if self.phase == DeletionPhase::Deleting(entry_id) {
            self.phase = DeletionPhase::Idle;
        }
        match result {
            Ok(()) => {
                if tables.remove_entry(entry_id).is_none() {
                    tracing::error!("Row for entry {entry_id} not found");
                }
                true
            }
            Err(err) => {
                tracing::error!("Failed to delete entry {entry_id}: {err}");
                false
            }
        }
    }
}
