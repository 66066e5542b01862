//! Error types and handling for the Yuletide planner

use thiserror::Error;

use crate::advice::BackendError;
use crate::catalog::CatalogError;

/// Main error type for the Yuletide planner
#[derive(Error, Debug)]
pub enum YuletideError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Destination catalog loading errors
    #[error("Catalog error: {source}")]
    Catalog {
        #[from]
        source: CatalogError,
    },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Text generation backend errors
    #[error("Generation backend error: {source}")]
    Backend {
        #[from]
        source: BackendError,
    },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl YuletideError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            YuletideError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            YuletideError::Catalog { source } => {
                format!("Could not load the destination catalog: {source}")
            }
            YuletideError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            YuletideError::Backend { .. } => {
                "The text generation service is unavailable. Curated content was used instead."
                    .to_string()
            }
            YuletideError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            YuletideError::General { message } => message.clone(),
        }
    }
}
