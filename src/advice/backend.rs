//! Text generation backend interface

use async_trait::async_trait;
use thiserror::Error;

/// Why a generation call produced no usable text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Transport failure or non-success HTTP status
    #[error("generation backend unavailable: {message}")]
    Unavailable { message: String },

    #[error("generation backend returned no text")]
    EmptyResponse,

    #[error("no generation backend configured")]
    NotConfigured,
}

impl BackendError {
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Prompt in, text out. One attempt per call, no retries.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String, BackendError>;

    /// Model name for logging
    fn model_name(&self) -> &str;
}
