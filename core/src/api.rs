//! Async TODO API client over an injected `Transport`.
//!
//! # Design
//! `TodoApiClient` composes the stateless `TodoClient` with a transport:
//! build, execute, parse. Each call is an independent future that resolves
//! exactly once. Nothing is retried.

use tracing::{debug, warn, Instrument};

use crate::client::TodoClient;
use crate::error::ClientError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{NewTask, Task};

#[derive(Debug, Clone)]
pub struct TodoApiClient<T = ReqwestTransport> {
    client: TodoClient,
    transport: T,
}

impl TodoApiClient<ReqwestTransport> {
    /// Client for the public API over a default reqwest transport.
    pub fn public() -> Self {
        Self::new(ReqwestTransport::new())
    }
}

impl<T: Transport> TodoApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self::with_client(TodoClient::default(), transport)
    }

    pub fn with_client(client: TodoClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }

    pub async fn get_all_tasks(&self) -> Result<Vec<Task>, ClientError> {
        let request = self.client.build_get_all_tasks();
        self.send(request, |c, r| c.parse_get_all_tasks(r)).await
    }

    pub async fn get_task_by_id(&self, id: &str) -> Result<Task, ClientError> {
        let request = self.client.build_get_task_by_id(id)?;
        self.send(request, |c, r| c.parse_get_task_by_id(r)).await
    }

    pub async fn add_task(
        &self,
        user_id: &str,
        title: &str,
        completed: bool,
    ) -> Result<Task, ClientError> {
        let request = self
            .client
            .build_add_task(&NewTask::new(user_id, title, completed))?;
        self.send(request, |c, r| c.parse_add_task(r)).await
    }

    pub async fn update_task(&self, task: &Task) -> Result<Task, ClientError> {
        let request = self.client.build_update_task(task)?;
        self.send(request, |c, r| c.parse_update_task(r)).await
    }

    pub async fn delete_task_by_id(&self, id: &str) -> Result<(), ClientError> {
        let request = self.client.build_delete_task_by_id(id)?;
        self.send(request, |c, r| c.parse_delete_task_by_id(r)).await
    }

    async fn send<R, F>(&self, request: HttpRequest, parse: F) -> Result<R, ClientError>
    where
        F: FnOnce(&TodoClient, HttpResponse) -> Result<R, ClientError>,
    {
        let span = tracing::debug_span!(
            "todo_api",
            method = request.method.as_str(),
            url = %request.url
        );
        async move {
            let response = match self.transport.execute(request).await {
                Ok(response) => response,
                Err(err) => {
                    warn!(error = %err, "transport failed");
                    return Err(err.into());
                }
            };
            let status = response.status;
            match parse(&self.client, response) {
                Ok(value) => {
                    debug!(status, "request succeeded");
                    Ok(value)
                }
                Err(err) => {
                    warn!(status, error = %err, "request failed");
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }
}
