//! HTTP client for upstream directory API calls

use crate::{ClientConfig, DirectoryError, DirectoryResult};
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::Envelope;
use std::sync::Arc;
use tokio::sync::{Semaphore, SemaphorePermit};

/// HTTP client for making requests to the upstream directory service.
///
/// Cheap to clone: the reqwest client shares its connection pool and the
/// in-flight limiter is shared behind an `Arc`. Each call is a single
/// attempt; no retries.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    client: Client,
    base_url: String,
    limiter: Arc<Semaphore>,
}

impl DirectoryClient {
    /// Create a new directory client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout {
            builder = builder.timeout(std::time::Duration::from_secs(seconds));
        }
        let client = builder.build().expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            limiter: Arc::new(Semaphore::new(config.max_in_flight)),
        }
    }

    /// Issue a GET and unwrap the envelope into `T`
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> DirectoryResult<T> {
        let _permit = self.acquire_slot().await?;
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Issue a POST with a JSON body and unwrap the envelope into `T`
    pub async fn submit<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        payload: &B,
    ) -> DirectoryResult<T> {
        let _permit = self.acquire_slot().await?;
        let response = self.client.post(self.url(path)).json(payload).send().await?;
        Self::handle_response(response).await
    }

    /// Issue a DELETE carrying a JSON body; the envelope holds a boolean
    /// (`true` = deletion performed).
    pub async fn remove<B: Serialize>(&self, path: &str, payload: &B) -> DirectoryResult<bool> {
        let _permit = self.acquire_slot().await?;
        let response = self
            .client
            .delete(self.url(path))
            .json(payload)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn acquire_slot(&self) -> DirectoryResult<SemaphorePermit<'_>> {
        self.limiter
            .acquire()
            .await
            .map_err(|_| DirectoryError::internal("Request limiter closed"))
    }

    /// Handle the HTTP response: non-success statuses carry the status code
    /// and raw body; successes are parsed as `{"data": T}` and unwrapped.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> DirectoryResult<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(DirectoryError::Upstream {
                status: status.as_u16(),
                message: body,
            });
        }

        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.into_inner())
    }
}
