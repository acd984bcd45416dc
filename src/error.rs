use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Message returned to callers when `userMessage` is missing or blank.
pub const VALIDATION_FAILURE_MESSAGE: &str = "userMessage는 필수 항목입니다.";

/// Message returned to callers for every configuration or backend failure.
pub const RELAY_FAILURE_MESSAGE: &str = "AI 어시스턴트를 호출하는 데 실패했습니다.";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// HTTP status reported to the caller for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed caller-facing text. The error detail itself is only ever logged.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => VALIDATION_FAILURE_MESSAGE,
            _ => RELAY_FAILURE_MESSAGE,
        }
    }
}
