//! TOML-based analytics configuration.
//!
//! Stores the tunable parts of the engine:
//! - Breathing warning and irregularity thresholds
//! - UTC offset used to bucket flow states by local hour
//! - Failure policy for dimensions that cannot be computed
//!
//! Configuration is stored at `~/.config/mindful-insights/config.toml`.

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, CoreError};

const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Breathing analysis thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreathingConfig {
    /// Consistency (percent) below which the insight becomes a warning
    #[serde(default = "default_warning_consistency")]
    pub warning_consistency: f64,
    /// Deviation from the mean rate (breaths/min) counted as an irregularity
    #[serde(default = "default_irregularity_deviation")]
    pub irregularity_deviation: f64,
    /// Irregularity count above which impact becomes high
    #[serde(default = "default_high_impact_irregularities")]
    pub high_impact_irregularities: usize,
}

/// Flow-state bucketing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Offset from UTC applied before taking the hour of a flow start time
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

/// What the engine does when a dimension cannot be computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Return every insight that could be computed and list the skipped dimensions
    #[default]
    Partial,
    /// Fail the whole call on the first analyzer failure
    Strict,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

/// Engine configuration.
///
/// Serialized to/from TOML at `~/.config/mindful-insights/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub breathing: BreathingConfig,
    #[serde(default)]
    pub flow: FlowConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

fn default_warning_consistency() -> f64 {
    70.0
}
fn default_irregularity_deviation() -> f64 {
    3.0
}
fn default_high_impact_irregularities() -> usize {
    10
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self {
            warning_consistency: default_warning_consistency(),
            irregularity_deviation: default_irregularity_deviation(),
            high_impact_irregularities: default_high_impact_irregularities(),
        }
    }
}

impl AnalyticsConfig {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::InvalidValue {
            key: key.to_string(),
            message: "unknown config key".to_string(),
        };
        let unparsable = |kind: &str| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("cannot parse '{value}' as {kind}"),
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().map_or(true, |p| p.is_empty()) {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|_| unparsable("bool"))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<i64>() {
                            serde_json::Value::Number(n.into())
                        } else {
                            value
                                .parse::<f64>()
                                .ok()
                                .and_then(serde_json::Number::from_f64)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| unparsable("number"))?
                        }
                    }
                    serde_json::Value::Object(_) => return Err(unknown()),
                    _ => serde_json::Value::String(value.to_string()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Default location of the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created.
    pub fn default_path() -> Result<PathBuf, CoreError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, or defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or is invalid.
    pub fn load() -> Result<Self, CoreError> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`, or defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds invalid values.
    pub fn load_from(path: &Path) -> Result<Self, CoreError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
                .into())
            }
        };

        let cfg: AnalyticsConfig = toml::from_str(&content).map_err(ConfigError::from)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), CoreError> {
        self.save_to(&Self::default_path()?)
    }

    /// Persist to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<(), CoreError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first out-of-range key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.breathing.irregularity_deviation.is_finite()
            || self.breathing.irregularity_deviation < 0.0
        {
            return Err(ConfigError::InvalidValue {
                key: "breathing.irregularity_deviation".to_string(),
                message: "must be a non-negative number".to_string(),
            });
        }
        if !self.breathing.warning_consistency.is_finite() {
            return Err(ConfigError::InvalidValue {
                key: "breathing.warning_consistency".to_string(),
                message: "must be a finite number".to_string(),
            });
        }
        if self.flow.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(ConfigError::InvalidValue {
                key: "flow.utc_offset_minutes".to_string(),
                message: format!("must be within ±{MAX_UTC_OFFSET_MINUTES} minutes"),
            });
        }
        Ok(())
    }

    /// Offset used to derive the local hour of flow start times.
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.flow.utc_offset_minutes.saturating_mul(60))
            .unwrap_or_else(|| Utc.fix())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key.
    ///
    /// The new value must parse as the type of the existing value, and the
    /// resulting config must validate. The config is left unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is unparsable or out of range.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: AnalyticsConfig =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}
