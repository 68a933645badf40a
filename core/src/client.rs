//! Stateless HTTP request builder and response parser for the TODO API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the round-trip in between.

use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTask, Task};

/// Origin of the public TODO API.
pub const DEFAULT_BASE_URL: &str = "http://jsonplaceholder.typicode.com";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const ENV_BASE_URL: &str = "TODO_API_BASE_URL";

/// Synchronous, stateless client for the TODO API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoClient {
    base_url: String,
}

impl Default for TodoClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from `TODO_API_BASE_URL`, falling back to the
    /// public API.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(ENV_BASE_URL).ok())
    }

    /// Resolve an optional configured base URL; blank means unset.
    pub fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    /// URL of a single task. Empty and dot-segment ids are rejected: URL
    /// parsers resolve them (even percent-encoded) to another route, and no
    /// task can live there.
    fn item_url(&self, id: &str) -> Result<String, ClientError> {
        if matches!(id, "" | "." | "..") {
            return Err(ClientError::ItemNotFound);
        }
        Ok(format!("{}/todos/{}", self.base_url, urlencoding::encode(id)))
    }

    pub fn build_get_all_tasks(&self) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.collection_url(), None)
    }

    pub fn build_get_task_by_id(&self, id: &str) -> Result<HttpRequest, ClientError> {
        Ok(HttpRequest::new(HttpMethod::Get, self.item_url(id)?, None))
    }

    pub fn build_add_task(&self, input: &NewTask) -> Result<HttpRequest, ClientError> {
        let body = serde_json::to_string(input)?;
        Ok(HttpRequest::new(
            HttpMethod::Post,
            self.collection_url(),
            Some(body),
        ))
    }

    pub fn build_update_task(&self, task: &Task) -> Result<HttpRequest, ClientError> {
        let body = serde_json::to_string(task)?;
        Ok(HttpRequest::new(
            HttpMethod::Put,
            self.item_url(&task.id)?,
            Some(body),
        ))
    }

    pub fn build_delete_task_by_id(&self, id: &str) -> Result<HttpRequest, ClientError> {
        Ok(HttpRequest::new(HttpMethod::Delete, self.item_url(id)?, None))
    }

    pub fn parse_get_all_tasks(&self, response: HttpResponse) -> Result<Vec<Task>, ClientError> {
        decode(response)
    }

    pub fn parse_get_task_by_id(&self, response: HttpResponse) -> Result<Task, ClientError> {
        decode(response)
    }

    pub fn parse_add_task(&self, response: HttpResponse) -> Result<Task, ClientError> {
        decode(response)
    }

    pub fn parse_update_task(&self, response: HttpResponse) -> Result<Task, ClientError> {
        decode(response)
    }

    /// Any 2xx succeeds; the body is ignored.
    pub fn parse_delete_task_by_id(&self, response: HttpResponse) -> Result<(), ClientError> {
        check_status(&response)
    }
}

/// Map a non-2xx status to the matching `ClientError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ClientError> {
    match response.status {
        _ if response.is_success() => Ok(()),
        404 => Err(ClientError::ItemNotFound),
        code => Err(ClientError::UnknownError { code }),
    }
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ClientError> {
    check_status(&response)?;
    Ok(serde_json::from_slice(&response.body)?)
}
