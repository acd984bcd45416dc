pub mod config;
pub mod error;
pub mod ollama;
pub mod prompt;
pub mod relay;
pub mod server;

pub use error::{Error, Result};
