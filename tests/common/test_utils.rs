use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use tidy_relay::server::{CHAT_PATH, InferenceResult};
use tower::ServiceExt; // for `oneshot`

pub const TEST_BODY_LIMIT: usize = 1024 * 1024;

/// POST a raw JSON body to the chat endpoint
pub async fn post_chat_raw(
    app: Router,
    body: impl Into<Body>,
) -> (StatusCode, Option<String>, InferenceResult) {
    post_chat_as(app, "application/json", body).await
}

/// POST a raw body with the given content type to the chat endpoint
pub async fn post_chat_as(
    app: Router,
    content_type: &str,
    body: impl Into<Body>,
) -> (StatusCode, Option<String>, InferenceResult) {
    let request = Request::builder()
        .method("POST")
        .uri(CHAT_PATH)
        .header("content-type", content_type)
        .body(body.into())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let result: InferenceResult = serde_json::from_slice(&bytes).unwrap();

    (status, content_type, result)
}

/// POST a JSON value to the chat endpoint
pub async fn post_chat(app: Router, body: serde_json::Value) -> (StatusCode, InferenceResult) {
    let (status, _, result) = post_chat_raw(app, body.to_string()).await;
    (status, result)
}
