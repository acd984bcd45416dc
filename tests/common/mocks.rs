use async_trait::async_trait;
use tidy_relay::{
    Error, Result,
    ollama::{GenerateRequest, GenerateResponse, InferenceBackend},
};
use std::sync::{Arc, Mutex};

/// Mock inference backend that records every request it receives
#[derive(Debug, Default)]
pub struct MockBackend {
    pub requests: Arc<Mutex<Vec<GenerateRequest>>>,
    pub reply: Option<String>,
    pub error: Option<String>,
}

impl MockBackend {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            ..Default::default()
        }
    }

    pub fn failing(error: &str) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Default::default()
        }
    }

    pub fn get_requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceBackend for MockBackend {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::backend(error.clone()));
        }

        Ok(GenerateResponse {
            response: self.reply.clone().unwrap_or_default(),
            model: Some("llama3".to_string()),
            done: Some(true),
        })
    }
}
