//! Configuration storage.

mod config;

pub use config::{AnalyticsConfig, BreathingConfig, EngineConfig, FailurePolicy, FlowConfig};

use std::path::PathBuf;

use crate::error::CoreError;

/// Returns `~/.config/mindful-insights[-dev]/` based on MINDFUL_INSIGHTS_ENV.
///
/// Set MINDFUL_INSIGHTS_ENV=dev to use the development directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, CoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("MINDFUL_INSIGHTS_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("mindful-insights-dev")
    } else {
        base_dir.join("mindful-insights")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
