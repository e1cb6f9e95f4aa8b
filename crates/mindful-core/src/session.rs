//! Session record types and boundary validation.
//!
//! A [`SessionRecord`] is the finished numeric summary of one mindfulness
//! session. Records arrive from the capture pipeline as camelCase JSON and
//! are read-only to the engine.

use chrono::{DateTime, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, CoreError};

/// Numeric fields every record must carry.
const REQUIRED_NUMBERS: [&str; 5] = [
    "focusScore",
    "calmScore",
    "environmentNoise",
    "lightLevel",
    "temperature",
];

/// Posture observed during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Posture {
    Good,
    Poor,
    #[default]
    Neutral,
}

/// One detected deep-focus interval within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowState {
    /// Interval start as Unix epoch milliseconds
    pub start_time: i64,
    /// Interval length in minutes
    pub duration: f64,
}

impl FlowState {
    pub fn new(start_time: i64, duration: f64) -> Self {
        Self {
            start_time,
            duration,
        }
    }

    /// Hour of day (0-23) at which the interval started, in the given offset.
    ///
    /// Returns `None` when `start_time` is outside the representable range.
    pub fn start_hour(&self, offset: FixedOffset) -> Option<u32> {
        DateTime::from_timestamp_millis(self.start_time)
            .map(|utc| utc.with_timezone(&offset).hour())
    }
}

/// Summarized measurements of one completed session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Session length in minutes
    pub duration: u32,
    pub focus_score: f64,
    pub calm_score: f64,
    pub emotional_state: String,
    /// Grouping label such as "morning" or "evening"
    pub time_of_day: String,
    #[serde(default)]
    pub participants: u32,
    pub soundscape: String,
    /// Breaths-per-minute samples taken through the session
    #[serde(default)]
    pub breathing_rate: Vec<f64>,
    #[serde(default)]
    pub posture: Posture,
    /// Ambient noise in dB
    pub environment_noise: f64,
    /// Light level in percent
    pub light_level: f64,
    /// Temperature in °C
    pub temperature: f64,
    #[serde(default)]
    pub breaks: u32,
    #[serde(default)]
    pub distractions: u32,
    #[serde(default)]
    pub flow_states: Vec<FlowState>,
}

impl SessionRecord {
    /// Mean of focus and calm scores.
    pub fn avg_score(&self) -> f64 {
        (self.focus_score + self.calm_score) / 2.0
    }

    /// Decode the record at `index` from an untyped JSON value.
    ///
    /// Shape problems serde would report without context (negative or
    /// fractional duration, non-numeric scores) are mapped to the offending
    /// field before decoding.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::MalformedRecord` naming the first offending field.
    pub fn from_json(index: usize, value: serde_json::Value) -> Result<Self, AnalysisError> {
        let obj = value
            .as_object()
            .ok_or_else(|| AnalysisError::malformed(index, "record", "must be a JSON object"))?;

        match obj.get("duration").map(|d| d.as_i64()) {
            None => return Err(AnalysisError::malformed(index, "duration", "is missing")),
            Some(None) => {
                return Err(AnalysisError::malformed(
                    index,
                    "duration",
                    "must be a positive integer",
                ))
            }
            Some(Some(n)) if n <= 0 => {
                return Err(AnalysisError::malformed(index, "duration", "must be positive"))
            }
            Some(Some(n)) if n > i64::from(u32::MAX) => {
                return Err(AnalysisError::malformed(index, "duration", "is too large"))
            }
            Some(Some(_)) => {}
        }

        for field in REQUIRED_NUMBERS {
            match obj.get(field) {
                Some(v) if v.is_number() => {}
                Some(v) => {
                    return Err(AnalysisError::malformed(
                        index,
                        field,
                        format!("must be a number, got {v}"),
                    ))
                }
                None => return Err(AnalysisError::malformed(index, field, "is missing")),
            }
        }

        let record: SessionRecord = serde_json::from_value(value)
            .map_err(|e| AnalysisError::malformed(index, "record", e.to_string()))?;
        record.validate(index)?;
        Ok(record)
    }

    /// Check basic shape expectations for the record at `index`.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::MalformedRecord` naming the first offending field.
    pub fn validate(&self, index: usize) -> Result<(), AnalysisError> {
        if self.duration == 0 {
            return Err(AnalysisError::malformed(index, "duration", "must be positive"));
        }

        let numeric = [
            ("focusScore", self.focus_score),
            ("calmScore", self.calm_score),
            ("environmentNoise", self.environment_noise),
            ("lightLevel", self.light_level),
            ("temperature", self.temperature),
        ];
        for (field, value) in numeric {
            if !value.is_finite() {
                return Err(AnalysisError::malformed(index, field, "must be a finite number"));
            }
        }

        if let Some(rate) = self
            .breathing_rate
            .iter()
            .find(|r| !r.is_finite() || **r <= 0.0)
        {
            return Err(AnalysisError::malformed(
                index,
                "breathingRate",
                format!("contains non-positive sample {rate}"),
            ));
        }

        for flow in &self.flow_states {
            if !flow.duration.is_finite() || flow.duration < 0.0 {
                return Err(AnalysisError::malformed(
                    index,
                    "flowStates.duration",
                    format!("must be a non-negative number, got {}", flow.duration),
                ));
            }
            if DateTime::from_timestamp_millis(flow.start_time).is_none() {
                return Err(AnalysisError::malformed(
                    index,
                    "flowStates.startTime",
                    format!("timestamp {} is out of range", flow.start_time),
                ));
            }
        }

        Ok(())
    }
}

/// Validate every record, failing on the first malformed one.
///
/// # Errors
///
/// Returns `AnalysisError::EmptySessions` for an empty slice, or the first
/// `MalformedRecord` found.
pub fn validate_sessions(sessions: &[SessionRecord]) -> Result<(), AnalysisError> {
    if sessions.is_empty() {
        return Err(AnalysisError::EmptySessions);
    }
    sessions
        .iter()
        .enumerate()
        .try_for_each(|(index, session)| session.validate(index))
}

/// Parse a JSON array of session records.
///
/// # Errors
///
/// Returns `CoreError::Json` if the input is not a JSON array, or
/// `MalformedRecord` for the first record that fails shape checks.
pub fn parse_sessions(json: &str) -> Result<Vec<SessionRecord>, CoreError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let sessions = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| SessionRecord::from_json(index, value))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(sessions)
}
