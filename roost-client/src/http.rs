//! HTTP gateway - network communication
//!
//! The single component that performs network I/O. Owns the
//! `reqwest::Client` plus base URL, issues requests, and unwraps the
//! uniform response envelope. Never retries, caches or de-duplicates:
//! every call is independent and at-most-once from the caller's view.

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ApiResponse;

use crate::{ClientConfig, ClientError, ClientResult};

/// Shown when the backend provides no failure text of its own
const FALLBACK_ERROR: &str = "Request failed";

/// Typed HTTP access with envelope unwrapping
#[derive(Debug, Clone)]
pub struct Gateway {
    client: reqwest::Client,
    base_url: String,
}

impl Gateway {
    /// Build a gateway with its own connection pool and request timeout
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this gateway talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET a single entity; an empty envelope is NotFound, never a silent null
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        expect_data(unwrap_envelope(response).await?, path)
    }

    /// GET a collection; a missing payload is the empty sequence
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Vec<T>> {
        let response = self.client.get(self.url(path)).send().await?;
        let envelope: ApiResponse<Vec<T>> = unwrap_envelope(response).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// POST a structured JSON body
    pub async fn post<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        expect_data(unwrap_envelope(response).await?, path)
    }

    /// PUT a structured JSON body
    pub async fn put<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        expect_data(unwrap_envelope(response).await?, path)
    }

    /// POST a multipart body
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<T> {
        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        expect_data(unwrap_envelope(response).await?, path)
    }

    /// PUT a multipart body
    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<T> {
        let response = self
            .client
            .put(self.url(path))
            .multipart(form)
            .send()
            .await?;
        expect_data(unwrap_envelope(response).await?, path)
    }

    /// DELETE with no expected payload; success is the absence of an error
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        accept_empty(response).await
    }

    /// DELETE carrying a JSON body
    pub async fn delete_with_body<B>(&self, path: &str, body: &B) -> ClientResult<()>
    where
        B: Serialize + Sync,
    {
        let response = self
            .client
            .delete(self.url(path))
            .json(body)
            .send()
            .await?;
        accept_empty(response).await
    }
}

/// Parse the body as an envelope and surface backend failures
async fn unwrap_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> ClientResult<ApiResponse<T>> {
    let status = response.status();
    let text = response.text().await?;
    let envelope: ApiResponse<T> = match serde_json::from_str(&text) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => {
            let text = text.trim();
            return Err(ClientError::Api(if text.is_empty() {
                FALLBACK_ERROR.to_string()
            } else {
                text.to_string()
            }));
        }
        Err(e) => return Err(ClientError::InvalidResponse(e.to_string())),
    };
    if !status.is_success() || !envelope.success {
        return Err(ClientError::Api(
            envelope.failure_text().unwrap_or(FALLBACK_ERROR).to_string(),
        ));
    }
    Ok(envelope)
}

/// A delete response carries no payload; an empty 2xx body is also accepted
async fn accept_empty(response: reqwest::Response) -> ClientResult<()> {
    let status = response.status();
    let text = response.text().await?;
    if status.is_success() && text.trim().is_empty() {
        return Ok(());
    }
    let envelope: ApiResponse<serde_json::Value> = match serde_json::from_str(&text) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => {
            let text = text.trim();
            return Err(ClientError::Api(if text.is_empty() {
                FALLBACK_ERROR.to_string()
            } else {
                text.to_string()
            }));
        }
        Err(e) => return Err(ClientError::InvalidResponse(e.to_string())),
    };
    if !status.is_success() || !envelope.success {
        return Err(ClientError::Api(
            envelope.failure_text().unwrap_or(FALLBACK_ERROR).to_string(),
        ));
    }
    Ok(())
}

/// A single-entity envelope must carry data even when `success` is true
fn expect_data<T>(envelope: ApiResponse<T>, path: &str) -> ClientResult<T> {
    envelope
        .data
        .ok_or_else(|| ClientError::NotFound(path.to_string()))
}
