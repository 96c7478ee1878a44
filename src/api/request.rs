//! Outgoing mutating requests

use crate::state::{FormData, FormMethod, CSRF_FIELD};

/// Header echoing the anti-forgery token
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// A create-or-update submission built from the post form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub method: FormMethod,
    /// Form action, relative to the server root
    pub url: String,
    pub csrf_token: Option<String>,
    pub data: FormData,
}

impl SubmitRequest {
    /// Build a request, taking the token from the form's CSRF field
    pub fn new(method: FormMethod, url: impl Into<String>, data: FormData) -> Self {
        let csrf_token = data.get(CSRF_FIELD).map(str::to_string);
        Self {
            method,
            url: url.into(),
            csrf_token,
            data,
        }
    }

    pub fn ticket(&self) -> SubmitTicket {
        SubmitTicket {
            method: self.method,
            url: self.url.clone(),
        }
    }
}

/// What the submission workflow needs to remember while a request is in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub method: FormMethod,
    pub url: String,
}
