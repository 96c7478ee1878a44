//! Create-or-update submission of the post form
//!
//! `Idle → Submitting → Idle`. Entering `Submitting` disables the three
//! submit buttons; every way out of it re-enables them and reports the
//! result through the notification modal.

use crate::api::{ApiError, SubmitRequest, SubmitTicket};
use crate::state::{
    resource_failed_message, FormMethod, NotificationModal, PostForm, CREATED_MESSAGE,
    ERROR_TITLE, REQUEST_FAILED_MESSAGE, SUCCESS_TITLE, UPDATED_MESSAGE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// How a finished submission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Updated,
    Failed,
}

#[derive(Debug, Default)]
pub struct SubmissionWorkflow {
    phase: SubmitPhase,
}

impl SubmissionWorkflow {
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Start a submission: disable the buttons and build the request.
    ///
    /// Returns `None` while another submission is in flight.
    pub fn begin(&mut self, form: &mut PostForm) -> Option<SubmitRequest> {
        if self.phase == SubmitPhase::Submitting || form.buttons_disabled() {
            tracing::debug!("Submission already in flight, ignoring submit");
            return None;
        }
        form.disable_buttons();
        self.phase = SubmitPhase::Submitting;

        let target = form.target().clone();
        Some(SubmitRequest::new(
            target.method,
            target.action,
            form.form_data(),
        ))
    }

    /// Reconcile the form and modal with the server's answer
    pub fn complete(
        &mut self,
        ticket: &SubmitTicket,
        result: Result<serde_json::Value, ApiError>,
        form: &mut PostForm,
        modal: &mut NotificationModal,
    ) -> SubmitOutcome {
        self.phase = SubmitPhase::Idle;
        form.enable_buttons();

        match result {
            Ok(body) => {
                tracing::info!("{} {} succeeded: {}", ticket.method.as_str(), ticket.url, body);
                let (outcome, message) = match ticket.method {
                    FormMethod::Post => (SubmitOutcome::Created, CREATED_MESSAGE),
                    FormMethod::Put => (SubmitOutcome::Updated, UPDATED_MESSAGE),
                };
                modal.show(SUCCESS_TITLE, message);
                form.reset();
                form.hide();
                outcome
            }
            Err(ApiError::Decode { url, message }) => {
                tracing::error!("Unreadable response from {url}: {message}");
                modal.show(ERROR_TITLE, resource_failed_message(&url));
                SubmitOutcome::Failed
            }
            Err(err) => {
                tracing::warn!("{} {} failed: {err}", ticket.method.as_str(), ticket.url);
                modal.show(ERROR_TITLE, REQUEST_FAILED_MESSAGE);
                SubmitOutcome::Failed
            }
        }
    }
}
