use super::{extractor::ChatPayload, types::InferenceResult};
use crate::{Error, relay::ChatRelay};
use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{error, info, warn};

pub async fn chat(
    State(relay): State<ChatRelay>,
    ChatPayload(request): ChatPayload,
) -> (StatusCode, Json<InferenceResult>) {
    info!(
        "Received chat request ({} chars, history attached: {})",
        request
            .user_message
            .as_deref()
            .map(|m| m.chars().count())
            .unwrap_or(0),
        request.conversation_history.is_some()
    );

    match relay.relay(request.user_message.as_deref()).await {
        Ok(message) => (StatusCode::OK, Json(InferenceResult::ok(message))),
        Err(e) => {
            match &e {
                Error::Validation(_) => warn!("Invalid chat request: {}", e),
                _ => error!("Ollama API call failed: {}", e),
            }
            (
                e.status_code(),
                Json(InferenceResult::failure(e.public_message())),
            )
        }
    }
}
