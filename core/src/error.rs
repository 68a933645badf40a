//! Error types for the TODO API client.
//!
//! # Design
//! `ItemNotFound` gets a dedicated variant because callers routinely tell
//! "the task does not exist" apart from "the server answered with something
//! unexpected." Every other non-2xx status lands in `UnknownError` with the
//! literal code. `NetworkError` means no response arrived at all.

use thiserror::Error;

/// Errors returned by every client operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The transport produced no response (connection refused, DNS, reset).
    #[error("network error: {0}")]
    NetworkError(String),

    /// The server returned 404.
    #[error("item not found")]
    ItemNotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("unexpected HTTP status {code}")]
    UnknownError { code: u16 },

    /// A JSON body could not be decoded into the expected shape, or a
    /// request payload could not be encoded.
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::JsonParseError(err.to_string())
    }
}

/// Failure of a `Transport` to produce any HTTP response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

impl From<TransportError> for ClientError {
    fn from(err: TransportError) -> Self {
        ClientError::NetworkError(err.to_string())
    }
}
