//! Core error types for mindful-core.
//!
//! This module defines the error hierarchy using thiserror. Analyzer
//! failures are reported per dimension so the engine can decide whether a
//! single missing dimension fails the whole call or is only recorded.

use std::path::PathBuf;
use thiserror::Error;

use crate::insight::Dimension;

/// Core error type for mindful-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Analysis-related errors
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the session analyzers and the engine boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// A dimension's required sub-collection is empty or degenerate
    #[error("Insufficient data for {dimension}: {reason}")]
    DataInsufficient { dimension: Dimension, reason: String },

    /// A session record failed boundary validation
    #[error("Malformed session record at index {index}: field '{field}' {message}")]
    MalformedRecord {
        index: usize,
        field: String,
        message: String,
    },

    /// No session records were supplied
    #[error("No session records supplied")]
    EmptySessions,
}

impl AnalysisError {
    /// Shorthand for a `DataInsufficient` error.
    pub fn insufficient(dimension: Dimension, reason: impl Into<String>) -> Self {
        AnalysisError::DataInsufficient {
            dimension,
            reason: reason.into(),
        }
    }

    /// Shorthand for a `MalformedRecord` error.
    pub fn malformed(index: usize, field: &str, message: impl Into<String>) -> Self {
        AnalysisError::MalformedRecord {
            index,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
