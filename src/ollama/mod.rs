mod client;
mod types;

pub use client::{InferenceBackend, OllamaClient};
pub use types::*;
