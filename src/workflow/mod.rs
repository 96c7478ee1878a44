//! Admin page workflows
//!
//! Each workflow receives the state it mutates and the `EntryApi` it talks
//! to as arguments, so it runs the same against the HTTP client and a mock.

pub mod deletion;
pub mod edit_loader;
pub mod image_preview;
pub mod submission;

pub use deletion::{DeletionPhase, DeletionWorkflow};
pub use edit_loader::EditLoader;
pub use submission::{SubmissionWorkflow, SubmitPhase};
