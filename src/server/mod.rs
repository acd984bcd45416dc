mod extractor;
pub mod handlers;
mod types;

pub use extractor::{ChatPayload, ChatPayloadRejection};
pub use types::{ChatRequest, InferenceResult};

use crate::{Result, config::Config, relay::ChatRelay};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, header::CONTENT_TYPE},
    routing::post,
};
use std::net::SocketAddr;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::info;

pub const CHAT_PATH: &str = "/api/chat";

pub fn router(relay: ChatRelay, body_limit_bytes: usize) -> Router {
    Router::new()
        .route(CHAT_PATH, post(handlers::chat))
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(SetResponseHeaderLayer::overriding(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(relay)
}

pub async fn run(config: Config) -> Result<()> {
    let relay = ChatRelay::new(&config.ollama);
    let app = router(relay, config.server.body_limit_bytes);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
