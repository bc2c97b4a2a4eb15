//! REST collaborator for the `/transformers` resource
//!
//! `SyncClient` is the seam between the state core and the network. The GUI
//! drives an `HttpSyncClient` through a `SyncWorker`; the state core only ever
//! sees `SyncRequest`/`SyncResponse` messages.

use std::future::Future;

use reqwest::Url;
use tracing::{debug, warn};

use crate::types::{Entity, EntityId, EntityPayload};

mod error;
mod messages;
#[cfg(test)]
pub(crate) mod testing;
mod worker;

pub use error::SyncError;
pub use messages::{SyncOperation, SyncRequest, SyncResponse, SyncResult};
pub use worker::SyncWorker;

/// The four REST operations against the remote resource
pub trait SyncClient: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<Entity>, SyncError>> + Send;

    fn create(
        &self,
        payload: &EntityPayload,
    ) -> impl Future<Output = Result<Entity, SyncError>> + Send;

    fn update(
        &self,
        id: &EntityId,
        payload: &EntityPayload,
    ) -> impl Future<Output = Result<Entity, SyncError>> + Send;

    /// Any non-error response is success; the body is ignored
    fn delete(&self, id: &EntityId) -> impl Future<Output = Result<(), SyncError>> + Send;
}

/// Run one request and tag the result with its generation
pub async fn execute<C: SyncClient>(client: &C, request: SyncRequest) -> SyncResponse {
    let generation = request.generation;
    let result = match request.operation {
        SyncOperation::List => SyncResult::Listed(client.list().await),
        SyncOperation::Create(payload) => SyncResult::Created(client.create(&payload).await),
        SyncOperation::Update(id, payload) => {
            let result = client.update(&id, &payload).await;
            SyncResult::Updated { id, result }
        }
        SyncOperation::Delete(id) => {
            let result = client.delete(&id).await;
            SyncResult::Deleted { id, result }
        }
    };
    SyncResponse { generation, result }
}

/// reqwest-backed client. No timeouts and no retries.
#[derive(Debug, Clone)]
pub struct HttpSyncClient {
    client: reqwest::Client,
    collection_url: Url,
}

impl HttpSyncClient {
    pub fn new(base_url: &str, resource: &str) -> Result<Self, SyncError> {
        let invalid = || SyncError::InvalidBaseUrl(base_url.to_string());

        let mut collection_url = Url::parse(base_url.trim()).map_err(|_| invalid())?;
        if !matches!(collection_url.scheme(), "http" | "https") {
            return Err(invalid());
        }
        collection_url
            .path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(resource.split('/').filter(|segment| !segment.is_empty()));

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| SyncError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            collection_url,
        })
    }

    pub fn collection_url(&self) -> &str {
        self.collection_url.as_str()
    }

    /// `<collection>/<id>` with the id percent-encoded as one path segment
    fn item_url(&self, id: &EntityId) -> Url {
        let mut url = self.collection_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(&id.to_string());
        }
        url
    }

    /// Map non-2xx into `SyncError::Status`, keeping the body for logs
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, SyncError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), body = %body, "Request rejected by server");
        Err(SyncError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

impl SyncClient for HttpSyncClient {
    async fn list(&self) -> Result<Vec<Entity>, SyncError> {
        debug!(url = %self.collection_url, "GET collection");
        let response = self.client.get(self.collection_url.clone()).send().await?;
        let entities = Self::check(response).await?.json().await?;
        Ok(entities)
    }

    async fn create(&self, payload: &EntityPayload) -> Result<Entity, SyncError> {
        debug!(url = %self.collection_url, name = %payload.name, "POST entity");
        let response = self
            .client
            .post(self.collection_url.clone())
            .json(payload)
            .send()
            .await?;
        let entity = Self::check(response).await?.json().await?;
        Ok(entity)
    }

    async fn update(&self, id: &EntityId, payload: &EntityPayload) -> Result<Entity, SyncError> {
        let url = self.item_url(id);
        debug!(url = %url, "PUT entity");
        let response = self.client.put(url).json(payload).send().await?;
        let entity = Self::check(response).await?.json().await?;
        Ok(entity)
    }

    async fn delete(&self, id: &EntityId) -> Result<(), SyncError> {
        let url = self.item_url(id);
        debug!(url = %url, "DELETE entity");
        let response = self.client.delete(url).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}
