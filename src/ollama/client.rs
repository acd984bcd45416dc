use super::types::*;
use crate::{Error, Result};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}

pub struct OllamaClient {
    client: reqwest::Client,
    generate_url: String,
}

impl OllamaClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            generate_url: format!("{}/api/generate", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl InferenceBackend for OllamaClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        debug!(
            "Sending generate request to {} (model {}, {} prompt bytes)",
            self.generate_url,
            request.model,
            request.prompt.len()
        );

        let response = self
            .client
            .post(&self.generate_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(Error::backend(format!(
                "Ollama returned {}: {}",
                status, body
            )));
        }

        let bytes = response.bytes().await?;
        let generated: GenerateResponse = serde_json::from_slice(&bytes)?;

        debug!(
            "Received generate response with {} bytes of text",
            generated.response.len()
        );

        Ok(generated)
    }
}
