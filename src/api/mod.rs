//! HTTP access to the entry endpoint

mod client;
mod error;
mod request;
mod traits;

pub use client::{EntryClient, DEFAULT_SERVER};
pub use error::ApiError;
pub use request::{SubmitRequest, SubmitTicket};
pub use traits::EntryApi;

#[cfg(test)]
pub use traits::MockEntryApi;
