//! HTTP client for the server's entry endpoint
//!
//! Creates go to `POST /entry/`, updates to `PUT /entry/{id}/`, single
//! entries are read from `GET /entry/{id}` and removed with
//! `DELETE /entry/{id}`. Every mutating request carries the anti-forgery
//! token in the `X-CSRFToken` header.

use super::error::ApiError;
use super::request::{SubmitRequest, CSRF_HEADER};
use super::traits::EntryApi;
use crate::platform;
use crate::state::{EntryDetail, EntryId, FormMethod, FormValue};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

/// Default server address
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8000";

/// Client for the entry endpoint
pub struct EntryClient {
    http: reqwest::Client,
    /// Server root, without trailing slash
    base_url: String,
    /// Cookie header sent with every request (session and CSRF cookies)
    cookies: Option<String>,
}

impl EntryClient {
    pub fn new(base_url: &str, cookies: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            cookies,
        })
    }

    /// Resolve a form action or path against the server root
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match self.cookies.as_deref() {
            Some(cookies) if !cookies.is_empty() => builder.header(COOKIE, cookies),
            _ => builder,
        }
    }
}

fn http_method(method: FormMethod) -> Method {
    match method {
        FormMethod::Post => Method::POST,
        FormMethod::Put => Method::PUT,
    }
}

/// Build the multipart body, reading attached files from disk
async fn multipart_form(parts: Vec<(String, FormValue)>) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for (name, value) in parts {
        form = match value {
            FormValue::Text(text) => form.text(name, text),
            FormValue::File(path) => {
                let bytes = tokio::fs::read(&path)
                    .await
                    .map_err(|source| ApiError::File {
                        path: path.clone(),
                        source,
                    })?;
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| name.clone());
                let part = Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(platform::mime_for(&path))?;
                form.part(name, part)
            }
        };
    }
    Ok(form)
}

fn parse_json<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

async fn read_json<T: DeserializeOwned>(
    url: &str,
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    let body = response.text().await.map_err(|e| ApiError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })?;
    parse_json(url, &body)
}

#[async_trait]
impl EntryApi for EntryClient {
    async fn submit_entry(&self, request: SubmitRequest) -> Result<serde_json::Value, ApiError> {
        let SubmitRequest {
            method,
            url,
            csrf_token,
            data,
        } = request;
        let url = self.url(&url);
        let form = multipart_form(data.into_parts()).await?;

        let mut builder = self.request(http_method(method), &url).multipart(form);
        if let Some(token) = csrf_token {
            builder = builder.header(CSRF_HEADER, token);
        }

        tracing::debug!("{} {}", method.as_str(), url);
        let response = builder.send().await?;
        read_json(&url, response).await
    }

    async fn fetch_entry(&self, entry_id: EntryId) -> Result<EntryDetail, ApiError> {
        let url = self.url(&format!("/entry/{entry_id}"));
        tracing::debug!("GET {}", url);
        let response = self.request(Method::GET, &url).send().await?;
        read_json(&url, response).await
    }

    async fn delete_entry(
        &self,
        entry_id: EntryId,
        csrf_token: Option<String>,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("/entry/{entry_id}"));
        let mut builder = self
            .request(Method::DELETE, &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = csrf_token {
            builder = builder.header(CSRF_HEADER, token);
        }

        tracing::debug!("DELETE {}", url);
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(status.as_u16()))
        }
    }
}
