//! HTTP implementation of [`ContentStore`].
//!
//! Talks to the store's HTTP API: `POST /v{api}/data/query/{dataset}` for
//! queries, `POST /v{api}/data/mutate/{dataset}` for mutations. Mutations
//! require a token; queries on public datasets do not.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::error::StoreError;
use crate::gateway::{Ack, ContentStore, MutationSpec, QuerySpec, ResultSet};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection configuration for the external store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL, e.g. `https://<project>.api.sanity.io`.
    pub base_url: String,
    pub dataset: String,
    /// API version date, e.g. `2023-05-03`.
    pub api_version: String,
    /// Token for mutations (and private-dataset reads).
    pub token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            dataset: dataset.into(),
            api_version: "2023-05-03".to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read configuration from the environment (`STORE_BASE_URL`,
    /// `STORE_DATASET`, optional `STORE_TOKEN` and `STORE_TIMEOUT_MS`).
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = std::env::var("STORE_BASE_URL")
            .map_err(|_| anyhow::anyhow!("STORE_BASE_URL is not set"))?;
        let dataset = std::env::var("STORE_DATASET")
            .map_err(|_| anyhow::anyhow!("STORE_DATASET is not set"))?;

        let mut config = Self::new(base_url, dataset);
        if let Ok(token) = std::env::var("STORE_TOKEN") {
            config.token = Some(token);
        }
        if let Ok(ms) = std::env::var("STORE_TIMEOUT_MS") {
            let ms: u64 = ms
                .parse()
                .map_err(|_| anyhow::anyhow!("STORE_TIMEOUT_MS must be an integer"))?;
            config.timeout = Duration::from_millis(ms);
        }
        Ok(config)
    }
}

/// Reqwest-backed content store client.
pub struct HttpContentStore {
    http: reqwest::Client,
    config: StoreConfig,
}

impl HttpContentStore {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(Self { http, config })
    }

    fn endpoint(&self, operation: &str) -> String {
        format!(
            "{}/v{}/data/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.api_version,
            operation,
            self.config.dataset
        )
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn post(&self, url: &str, body: &JsonValue) -> Result<JsonValue, StoreError> {
        let response = self
            .apply_auth(self.http.post(url))
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(transport_error)?;
        if !(200..300).contains(&status) {
            return Err(classify_status(status, text));
        }

        serde_json::from_str(&text).map_err(StoreError::malformed_result)
    }
}

#[async_trait]
impl ContentStore for HttpContentStore {
    async fn fetch(&self, query: &QuerySpec) -> Result<ResultSet, StoreError> {
        tracing::debug!(query = %query.query, "store fetch");
        let body = serde_json::to_value(query).map_err(StoreError::malformed_result)?;
        let mut envelope = self.post(&self.endpoint("query"), &body).await?;
        // The query endpoint wraps the result tree: {"result": ..., "ms": ...}.
        match envelope.get_mut("result") {
            Some(result) => Ok(result.take()),
            None => Err(StoreError::MalformedResult(
                "query response missing `result`".to_string(),
            )),
        }
    }

    async fn mutate(&self, mutations: &[MutationSpec]) -> Result<Ack, StoreError> {
        if self.config.token.is_none() {
            return Err(StoreError::Unauthorized(
                "mutations require STORE_TOKEN".to_string(),
            ));
        }
        tracing::debug!(count = mutations.len(), "store mutate");
        let body = serde_json::json!({
            "mutations": mutations.iter().map(MutationSpec::to_wire).collect::<Vec<_>>(),
        });
        let url = format!("{}?returnIds=true", self.endpoint("mutate"));
        let envelope = self.post(&url, &body).await?;
        serde_json::from_value(envelope).map_err(StoreError::malformed_result)
    }
}

fn transport_error(err: reqwest::Error) -> StoreError {
    if err.is_timeout() {
        StoreError::Unavailable(format!("request timed out: {err}"))
    } else {
        StoreError::Unavailable(err.to_string())
    }
}

/// Map a non-2xx store response to the error taxonomy.
fn classify_status(status: u16, body: String) -> StoreError {
    match status {
        400 => StoreError::MalformedQuery(body),
        401 | 403 => StoreError::Unauthorized(body),
        404 => StoreError::NotFound(body),
        _ => StoreError::Api {
            status,
            message: body,
        },
    }
}
