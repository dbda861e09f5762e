//! reqwest-backed client for the specialties endpoints.

use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::specialty::Specialty;

use super::error::ApiError;

const RESOURCE_PATH: &str = "api/specialties";
const SEARCH_PATH: &str = "api/_search/specialties";

/// HTTP client for the specialties resource.
///
/// Each method performs a single attempt; there are no retries and no
/// timeouts beyond the reqwest defaults.
#[derive(Clone)]
pub struct SpecialtyApi {
    client: Client,
    base_url: String,
}

impl SpecialtyApi {
    /// Create a client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api.base_url.clone())
    }

    /// Fetch every specialty.
    ///
    /// A throwaway `cacheBuster` parameter defeats HTTP-level response
    /// caching between fetches; it means nothing to the backend.
    pub async fn list(&self) -> Result<Vec<Specialty>, ApiError> {
        let url = format!("{}/{}", self.base_url, RESOURCE_PATH);
        let request = self
            .client
            .get(&url)
            .query(&[("cacheBuster", epoch_millis().to_string())]);
        self.execute(request, &url).await
    }

    /// Query the search endpoint.
    pub async fn search(&self, query: &str) -> Result<Vec<Specialty>, ApiError> {
        let url = format!("{}/{}", self.base_url, SEARCH_PATH);
        let request = self.client.get(&url).query(&[("query", query)]);
        self.execute(request, &url).await
    }

    /// Fetch a single specialty by id.
    pub async fn get(&self, id: i64) -> Result<Specialty, ApiError> {
        let url = self.item_url(id);
        let request = self.client.get(&url);
        self.execute(request, &url).await
    }

    /// Create a specialty; returns the server's representation.
    pub async fn create(&self, entity: &Specialty) -> Result<Specialty, ApiError> {
        let url = format!("{}/{}", self.base_url, RESOURCE_PATH);
        let request = self.client.post(&url).json(&entity.cleaned());
        self.execute(request, &url).await
    }

    /// Replace a specialty. Full-replace semantics.
    pub async fn update(&self, entity: &Specialty) -> Result<Specialty, ApiError> {
        let id = entity.id.ok_or(ApiError::MissingId)?;
        let url = self.item_url(id);
        let request = self.client.put(&url).json(&entity.cleaned());
        self.execute(request, &url).await
    }

    /// Patch a specialty. Merge semantics are the backend's.
    pub async fn partial_update(&self, entity: &Specialty) -> Result<Specialty, ApiError> {
        let id = entity.id.ok_or(ApiError::MissingId)?;
        let url = self.item_url(id);
        let request = self.client.patch(&url).json(&entity.cleaned());
        self.execute(request, &url).await
    }

    /// Delete a specialty by id. The response body is ignored.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let url = self.item_url(id);
        let request = self.client.delete(&url);
        let response = self.send(request, &url).await?;
        check_status(response, &url).await?;
        Ok(())
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}/{}", self.base_url, RESOURCE_PATH, id)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<T, ApiError> {
        let response = self.send(request, url).await?;
        let response = check_status(response, url).await?;
        response.json().await.map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response, ApiError> {
        tracing::debug!(url = %url, "Sending request");
        request
            .send()
            .await
            .map_err(|source| ApiError::Connection {
                url: url.to_string(),
                source,
            })
    }
}

async fn check_status(response: Response, url: &str) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        url: url.to_string(),
        message: problem_message(&body),
    })
}

/// Pull a human-readable message out of an error body.
///
/// The backend emits RFC 7807 problem details; prefer `detail`, then
/// `title`, then the raw text.
fn problem_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "title"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no response body".to_string()
    } else {
        trimmed.to_string()
    }
}

fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
