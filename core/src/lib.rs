//! Client for the JSONPlaceholder-style TODO API.
//!
//! # Overview
//! Two layers. `TodoClient` builds `HttpRequest` values and parses
//! `HttpResponse` values without touching the network (host-does-IO), so
//! the request/response mapping is deterministic and testable on its own.
//! `TodoApiClient` drives it over an injected async `Transport`
//! (`ReqwestTransport` by default).
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Status mapping is uniform: 2xx decodes, 404 is `ItemNotFound`, any
//!   other status is `UnknownError { code }`.
//! - Errors are returned, never raised; nothing retries.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::TodoApiClient;
pub use client::{TodoClient, DEFAULT_BASE_URL, ENV_BASE_URL};
pub use error::{ClientError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
pub use types::{NewTask, Task};
