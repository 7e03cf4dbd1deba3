//! HTTP implementation of [`TaskApi`] on top of `gloo-net`.
//!
//! One `fetch` per call. A response outside the 2xx range is an error even
//! when it carries a body.

use std::future::Future;

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use notion_tasks_core::api::{echoed_task, status_message};
use notion_tasks_core::{
    ClientConfig, NewTask, RequestError, Result, Task, TaskApi, TaskId, TaskPatch,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Task API client bound to one base URL.
#[derive(Debug, Clone, Default)]
pub struct HttpTaskApi {
    config: ClientConfig,
}

impl HttpTaskApi {
    #[must_use]
    pub const fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Await a sent request and reject non-success statuses.
async fn dispatch<F>(method: &'static str, url: &str, sent: F) -> Result<Response>
where
    F: Future<Output = std::result::Result<Response, gloo_net::Error>>,
{
    tracing::debug!(method, url, "sending request");

    let response = sent.await.map_err(|e| {
        tracing::warn!(method, url, error = %e, "request did not complete");
        RequestError::transport(e)
    })?;

    if response.ok() {
        Ok(response)
    } else {
        tracing::warn!(method, url, status = response.status(), "request rejected");
        Err(RequestError::status(
            response.status(),
            response.status_text(),
        ))
    }
}

/// Body of a successful write. The status already decided success, so an
/// unreadable body only costs the echo.
async fn echo(response: Response) -> Option<Task> {
    match response.text().await {
        Ok(body) => echoed_task(&body),
        Err(e) => {
            tracing::debug!(url = %response.url(), error = %e, "mutation response body unreadable");
            None
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response.json::<T>().await.map_err(|e| {
        tracing::warn!(url = %response.url(), error = %e, "response body did not decode");
        RequestError::decode(e)
    })
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> Result<Value> {
        let url = self.config.tasks_url();
        let response = dispatch("GET", &url, Request::get(&url).send()).await?;
        decode(response).await
    }

    async fn create_task(&self, input: &NewTask) -> Result<Option<Task>> {
        let url = self.config.tasks_url();
        let request = Request::post(&url)
            .json(input)
            .map_err(RequestError::transport)?;
        let response = dispatch("POST", &url, request.send()).await?;
        Ok(echo(response).await)
    }

    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> Result<Option<Task>> {
        let url = self.config.task_url(id);
        let request = Request::patch(&url)
            .json(patch)
            .map_err(RequestError::transport)?;
        let response = dispatch("PATCH", &url, request.send()).await?;
        Ok(echo(response).await)
    }

    async fn delete_task(&self, id: TaskId) -> Result<()> {
        let url = self.config.task_url(id);
        dispatch("DELETE", &url, Request::delete(&url).send())
            .await
            .map(|_| ())
    }

    async fn server_status(&self) -> Result<String> {
        let url = self.config.root_url();
        let response = dispatch("GET", &url, Request::get(&url).send()).await?;
        let body: Value = decode(response).await?;
        status_message(&body)
    }
}
