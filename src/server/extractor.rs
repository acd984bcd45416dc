//! Chat body extractor accepting JSON and urlencoded form bodies.
//!
//! Any rejection is answered in the usual `{ success, message }` shape.

use super::types::{ChatRequest, InferenceResult};
use crate::error::VALIDATION_FAILURE_MESSAGE;
use async_trait::async_trait;
use axum::{
    Form, Json,
    extract::{
        FromRequest, Request,
        rejection::{FormRejection, JsonRejection},
    },
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use tracing::warn;

pub struct ChatPayload(pub ChatRequest);

/// Body could not be read or decoded. Oversized bodies keep their 413.
#[derive(Debug)]
pub struct ChatPayloadRejection {
    status: StatusCode,
    detail: String,
}

impl ChatPayloadRejection {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn new(status: StatusCode, detail: String) -> Self {
        let status = match status {
            StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        };
        Self { status, detail }
    }
}

impl From<JsonRejection> for ChatPayloadRejection {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<FormRejection> for ChatPayloadRejection {
    fn from(rejection: FormRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ChatPayloadRejection {
    fn into_response(self) -> Response {
        warn!("Rejected chat request body: {}", self.detail);
        (
            self.status,
            Json(InferenceResult::failure(VALIDATION_FAILURE_MESSAGE)),
        )
            .into_response()
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| {
            essence
                .trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}

#[async_trait]
impl<S> FromRequest<S> for ChatPayload
where
    S: Send + Sync,
{
    type Rejection = ChatPayloadRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(request) = Form::<ChatRequest>::from_request(req, state).await?;
            Ok(ChatPayload(request))
        } else {
            let Json(request) = Json::<ChatRequest>::from_request(req, state).await?;
            Ok(ChatPayload(request))
        }
    }
}
