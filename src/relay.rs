use crate::{
    Error, Result,
    config::{OLLAMA_API_URL_ENV, OllamaConfig},
    ollama::{GenerateOptions, GenerateRequest, InferenceBackend, OllamaClient},
    prompt,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Validates a chat message, wraps it in the tidying prompt and performs one
/// generate call. No state is shared between calls, so clones are cheap and
/// independent.
#[derive(Clone)]
pub struct ChatRelay {
    backend: Option<Arc<dyn InferenceBackend>>,
}

impl ChatRelay {
    pub fn new(config: &OllamaConfig) -> Self {
        match config.base_url.as_deref() {
            Some(base_url) => Self::with_backend(Arc::new(OllamaClient::new(base_url))),
            None => {
                warn!(
                    "{} is not set; chat requests will fail until it is configured",
                    OLLAMA_API_URL_ENV
                );
                Self { backend: None }
            }
        }
    }

    pub fn with_backend(backend: Arc<dyn InferenceBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    pub fn unconfigured() -> Self {
        Self { backend: None }
    }

    /// Returns the trimmed model reply for `user_message`.
    pub async fn relay(&self, user_message: Option<&str>) -> Result<String> {
        let user_message = match user_message {
            Some(message) if !trim_message(message).is_empty() => message,
            _ => return Err(Error::validation("userMessage is missing or blank")),
        };

        let backend = self.backend.as_ref().ok_or_else(|| {
            Error::config(format!("{} is not set", OLLAMA_API_URL_ENV))
        })?;

        let request = generate_request(user_message);
        debug!("Dispatching prompt of {} bytes", request.prompt.len());

        let reply = backend.generate(request).await?;
        let message = trim_message(&reply.response).to_string();

        info!("Relayed model reply of {} bytes", message.len());
        Ok(message)
    }
}

/// Whitespace as clients see it: `char::is_whitespace` plus the BOM, minus NEL.
fn is_message_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

fn trim_message(message: &str) -> &str {
    message.trim_matches(is_message_whitespace)
}

/// Generate payload for a single, non-streamed completion of `user_message`.
pub fn generate_request(user_message: &str) -> GenerateRequest {
    GenerateRequest {
        model: prompt::MODEL.to_string(),
        prompt: prompt::build_prompt(user_message),
        stream: false,
        options: GenerateOptions {
            temperature: prompt::TEMPERATURE,
            stop: prompt::STOP_SEQUENCES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ollama::GenerateResponse;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingBackend {
        reply: Option<String>,
        requests: Mutex<Vec<GenerateRequest>>,
    }

    #[async_trait]
    impl InferenceBackend for RecordingBackend {
        async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
            self.requests.lock().unwrap().push(request);
            match &self.reply {
                Some(text) => Ok(GenerateResponse {
                    response: text.clone(),
                    model: None,
                    done: Some(true),
                }),
                None => Err(Error::backend("connection refused")),
            }
        }
    }

    #[test]
    fn test_generate_request_fields() {
        let request = generate_request("옷이 쌓여 있어요");
        assert_eq!(request.model, "llama3");
        assert!(!request.stream);
        assert_eq!(request.options.temperature, 0.3);
        assert_eq!(request.options.stop, vec!["<|eot_id|>", "<|end_of_text|>"]);
        assert_eq!(request.prompt, prompt::build_prompt("옷이 쌓여 있어요"));
    }

    #[tokio::test]
    async fn test_relay_trims_reply() {
        let backend = Arc::new(RecordingBackend {
            reply: Some("\n  먼저 바닥부터 치워 보세요.  \n".to_string()),
            ..Default::default()
        });
        let relay = ChatRelay::with_backend(backend.clone());

        let message = relay.relay(Some("방이 너무 지저분해요")).await.unwrap();

        assert_eq!(message, "먼저 바닥부터 치워 보세요.");
        assert_eq!(backend.requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_message_skips_backend() {
        let backend = Arc::new(RecordingBackend::default());
        let relay = ChatRelay::with_backend(backend.clone());

        for input in [
            None,
            Some(""),
            Some("   "),
            Some("\t\n"),
            Some("\u{FEFF}"),
            Some("\u{3000}\u{FEFF} "),
        ] {
            let err = relay.relay(input).await.unwrap_err();
            assert!(matches!(err, Error::Validation(_)));
        }
        assert!(backend.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_next_line_is_not_blank() {
        let backend = Arc::new(RecordingBackend {
            reply: Some("\u{FEFF}답변\u{FEFF}".to_string()),
            ..Default::default()
        });
        let relay = ChatRelay::with_backend(backend.clone());

        let message = relay.relay(Some("\u{0085}")).await.unwrap();

        assert_eq!(message, "답변");
        assert_eq!(backend.requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unconfigured_fails_fast() {
        let relay = ChatRelay::new(&OllamaConfig { base_url: None });

        let err = relay.relay(Some("hello")).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn test_validation_precedes_configuration() {
        let err = ChatRelay::unconfigured().relay(Some(" ")).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_backend_error_propagates() {
        let relay = ChatRelay::with_backend(Arc::new(RecordingBackend::default()));
        let err = relay.relay(Some("hello")).await.unwrap_err();
        assert!(matches!(err, Error::Backend(_)));
    }
}
