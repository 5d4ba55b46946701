//! `reqwest` implementation of [`TaskGateway`].

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::api::dto::{CreateTaskPayload, MoveTaskPayload};
use crate::board::{
    domain::CardRecord,
    ports::{GatewayError, GatewayResult, TaskGateway},
};
use crate::task::domain::Column;

/// Talks to the task API over HTTP.
///
/// The base URL is the prefix the task routes hang off, for example
/// `http://localhost:3000` or `http://localhost:3000/api`.
#[derive(Debug, Clone)]
pub struct HttpTaskGateway {
    client: Client,
    base_url: Url,
}

impl HttpTaskGateway {
    /// Creates a gateway with a default client.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidUrl`] when `base_url` does not parse or
    /// cannot carry a path.
    pub fn new(base_url: &str) -> GatewayResult<Self> {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a gateway that reuses `client`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidUrl`] when `base_url` does not parse or
    /// cannot carry a path.
    pub fn with_client(client: Client, base_url: &str) -> GatewayResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|err| GatewayError::InvalidUrl(err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> GatewayResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GatewayError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn transport(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

async fn ensure_success(response: Response) -> GatewayResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(GatewayError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> GatewayResult<T> {
    ensure_success(response)
        .await?
        .json::<T>()
        .await
        .map_err(|err| GatewayError::Decode(err.to_string()))
}

#[async_trait]
impl TaskGateway for HttpTaskGateway {
    async fn list(&self) -> GatewayResult<Vec<CardRecord>> {
        let response = self
            .client
            .get(self.endpoint(&["tasks"])?)
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn create(&self, content: &str) -> GatewayResult<CardRecord> {
        let payload = CreateTaskPayload {
            content: Some(content.to_owned()),
        };
        let response = self
            .client
            .post(self.endpoint(&["tasks"])?)
            .json(&payload)
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn delete(&self, id: &str) -> GatewayResult<()> {
        let response = self
            .client
            .delete(self.endpoint(&["tasks", id])?)
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response).await.map(drop)
    }

    async fn move_task(&self, id: &str, column: Column) -> GatewayResult<CardRecord> {
        let payload = MoveTaskPayload {
            column: Some(column.as_str().to_owned()),
        };
        let response = self
            .client
            .put(self.endpoint(&["tasks", id, "move"])?)
            .json(&payload)
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }
}
