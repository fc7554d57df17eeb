use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to an embedding provider
///
/// Every variant means the same thing to the matching engine: the embedding
/// is unavailable for this call and the fail-open path applies.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Embedding call timed out")]
    Timeout,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Capability to turn text into fixed-dimension vectors
///
/// Injected into the matching engine; any provider honoring the one-vector-
/// per-input, same-order contract is substitutable.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a batch of documents, one vector per input text, same order
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    /// Embed a single query text
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

/// Cosine similarity between two vectors, in [-1, 1]
///
/// Returns 0.0 for mismatched lengths or zero-magnitude vectors rather than
/// producing NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += f64::from(*x) * f64::from(*y);
        norm_a += f64::from(*x) * f64::from(*x);
        norm_b += f64::from(*y) * f64::from(*y);
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Cohere embed API client
///
/// Handles all communication with the Cohere `/v1/embed` endpoint. Requests
/// carry a hard timeout so a stuck provider cannot hang a matching batch.
pub struct CohereClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

/// Default Cohere API endpoint
pub const COHERE_API_URL: &str = "https://api.cohere.ai";
/// Embedding model used for both documents and queries
pub const COHERE_EMBED_MODEL: &str = "embed-english-v3.0";
/// Per-request timeout for embed calls
pub const EMBED_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    texts: &'a [String],
    model: &'a str,
    input_type: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

impl CohereClient {
    /// Create a new client against the production Cohere endpoint
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(COHERE_API_URL.to_string(), api_key, COHERE_EMBED_MODEL.to_string())
    }

    /// Create a client from loaded configuration
    pub fn from_settings(settings: &crate::config::CohereSettings) -> Self {
        Self::with_endpoint(
            settings.endpoint.clone(),
            settings.api_key.clone(),
            settings.model.clone(),
        )
    }

    /// Create a client against a custom endpoint (used by tests)
    pub fn with_endpoint(base_url: String, api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(EMBED_REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            model,
            client,
        }
    }

    async fn embed_with_input_type(
        &self,
        texts: &[String],
        input_type: &str,
    ) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let url = format!("{}/v1/embed", self.base_url);
        let request = EmbedRequest {
            texts,
            model: &self.model,
            input_type,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(EmbeddingError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::ApiError(format!("{}: {}", status, body)));
        }

        let parsed: EmbedResponse = response
            .json()
            .await
            .map_err(|e| EmbeddingError::InvalidResponse(e.to_string()))?;

        if parsed.embeddings.len() != texts.len() {
            return Err(EmbeddingError::InvalidResponse(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                parsed.embeddings.len()
            )));
        }

        Ok(parsed.embeddings)
    }
}

#[async_trait]
impl EmbeddingProvider for CohereClient {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.embed_with_input_type(texts, "search_document").await
    }

    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let texts = [text.to_string()];
        let mut embeddings = self.embed_with_input_type(&texts, "search_query").await?;
        embeddings
            .pop()
            .ok_or_else(|| EmbeddingError::InvalidResponse("empty embeddings array".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity_identical_vectors() {
        let v = vec![0.5, 0.5, 0.5];
        let similarity = cosine_similarity(&v, &v);
        assert!((similarity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_orthogonal_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_opposite_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[tokio::test]
    async fn test_cohere_embed_parses_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/embed")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"embeddings": [[0.1, 0.2], [0.3, 0.4]]}"#)
            .create_async()
            .await;

        let client = CohereClient::with_endpoint(
            server.url(),
            "test-key".to_string(),
            COHERE_EMBED_MODEL.to_string(),
        );

        let texts = vec!["first".to_string(), "second".to_string()];
        let embeddings = client.embed(&texts).await.unwrap();

        assert_eq!(embeddings.len(), 2);
        assert_eq!(embeddings[0], vec![0.1, 0.2]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_cohere_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/embed")
            .with_status(401)
            .create_async()
            .await;

        let client = CohereClient::with_endpoint(
            server.url(),
            "bad-key".to_string(),
            COHERE_EMBED_MODEL.to_string(),
        );

        let err = client.embed(&["text".to_string()]).await.unwrap_err();
        assert!(matches!(err, EmbeddingError::Unauthorized));
    }

    #[tokio::test]
    async fn test_cohere_count_mismatch_is_invalid_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/embed")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"embeddings": [[0.1, 0.2]]}"#)
            .create_async()
            .await;

        let client = CohereClient::with_endpoint(
            server.url(),
            "test-key".to_string(),
            COHERE_EMBED_MODEL.to_string(),
        );

        let texts = vec!["first".to_string(), "second".to_string()];
        let err = client.embed(&texts).await.unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidResponse(_)));
    }
}
