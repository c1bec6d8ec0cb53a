//! OpenAI-compatible embeddings client.
//!
//! Minimal client around `POST {endpoint}/v1/embeddings`. Accepts a batch
//! of inputs per request; response items carry an `index` and are
//! re-sorted before use so the output order always matches the input
//! order.
//!
//! Constructor validation:
//! - `cfg.api_key` must be non-empty
//! - `cfg.endpoint` must start with http:// or https://
//! - `cfg.model` must be non-empty

use std::time::{Duration, Instant};

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::config::EmbeddingConfig;
use crate::errors::{EmbedError, make_snippet};
use crate::provider::EmbeddingsProvider;

/// Thin client for an OpenAI-compatible embeddings API.
///
/// Internally keeps a preconfigured `reqwest::Client` with bearer auth,
/// JSON content type, and a request timeout.
#[derive(Debug)]
pub struct OpenAiEmbedder {
    client: reqwest::Client,
    cfg: EmbeddingConfig,
    url_embeddings: String,
}

impl OpenAiEmbedder {
    /// Creates a new [`OpenAiEmbedder`] from the given config.
    ///
    /// # Errors
    /// - [`EmbedError::Config`] for an empty key/model or a non-HTTP
    ///   endpoint
    /// - [`EmbedError::Http`] if the HTTP client cannot be built
    pub fn new(cfg: EmbeddingConfig) -> Result<Self, EmbedError> {
        if cfg.api_key.trim().is_empty() {
            return Err(EmbedError::Config("api key must not be empty".into()));
        }
        if cfg.model.trim().is_empty() {
            return Err(EmbedError::Config("model name must not be empty".into()));
        }
        let endpoint = cfg.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(EmbedError::Config(format!(
                "invalid endpoint `{}`: must start with http:// or https://",
                cfg.endpoint
            )));
        }

        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(60));

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", cfg.api_key.trim()))
                .map_err(|e| EmbedError::Config(format!("invalid API key header: {e}")))?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        let url_embeddings = format!("{}/v1/embeddings", endpoint.trim_end_matches('/'));

        info!(
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            dimension = cfg.dimension,
            "OpenAiEmbedder initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_embeddings,
        })
    }

    /// Retrieves embedding vectors for a batch of inputs, one request.
    ///
    /// The response is re-sorted by item index; count and dimension are
    /// validated before the vectors are returned.
    ///
    /// # Errors
    /// - [`EmbedError::HttpStatus`] for non-2xx responses
    /// - [`EmbedError::Http`] for transport failures
    /// - [`EmbedError::Decode`] if the JSON cannot be parsed
    /// - [`EmbedError::CountMismatch`] / [`EmbedError::VectorSizeMismatch`]
    ///   when the response shape is off
    pub async fn embeddings(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, EmbedError> {
        if inputs.is_empty() {
            return Ok(Vec::new());
        }

        let started = Instant::now();
        let body = EmbeddingsRequest {
            model: &self.cfg.model,
            input: inputs,
        };

        debug!(
            model = %self.cfg.model,
            batch = inputs.len(),
            "POST {}", self.url_embeddings
        );

        let resp = self
            .client
            .post(&self.url_embeddings)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let url = self.url_embeddings.clone();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %status,
                %url,
                %snippet,
                latency_ms = started.elapsed().as_millis(),
                "embeddings endpoint returned non-success status"
            );

            return Err(EmbedError::HttpStatus {
                status,
                url,
                snippet,
            });
        }

        let out: EmbeddingsResponse = resp.json().await.map_err(|e| {
            EmbedError::Decode(format!("serde error: {e}; expected `data[].embedding`"))
        })?;

        let mut data = out.data;
        data.sort_by_key(|item| item.index);

        if data.len() != inputs.len() {
            return Err(EmbedError::CountMismatch {
                got: data.len(),
                want: inputs.len(),
            });
        }
        for item in &data {
            if item.embedding.len() != self.cfg.dimension {
                return Err(EmbedError::VectorSizeMismatch {
                    got: item.embedding.len(),
                    want: self.cfg.dimension,
                });
            }
        }

        info!(
            batch = inputs.len(),
            latency_ms = started.elapsed().as_millis(),
            "embeddings completed"
        );

        Ok(data.into_iter().map(|item| item.embedding).collect())
    }
}

impl EmbeddingsProvider for OpenAiEmbedder {
    fn embed_batch<'a>(
        &'a self,
        inputs: &'a [String],
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Vec<Vec<f32>>, EmbedError>> + Send + 'a>,
    > {
        Box::pin(self.embeddings(inputs))
    }
}

/// Request body for `/v1/embeddings`.
#[derive(Debug, Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

/// Response body for `/v1/embeddings`.
#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingItem>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingItem {
    embedding: Vec<f32>,
    #[serde(default)]
    index: usize,
}
