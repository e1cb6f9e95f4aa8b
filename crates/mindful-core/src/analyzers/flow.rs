//! Flow-state analysis.
//!
//! Flow intervals from every session are pooled. Minutes of flow are
//! accumulated per hour of day; the peak hour is found by scanning hours
//! 0 through 23 in order from a running best of (hour 0, 0 minutes), so
//! the earliest hour wins a tie.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::insight::Dimension;
use crate::session::SessionRecord;

/// Pooled flow-state statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowAnalysis {
    /// Mean flow interval length in minutes
    pub average_flow_duration: f64,
    /// Hour of day (0-23) with the most accumulated flow minutes
    pub peak_flow_hour: u32,
    /// Flow intervals per session
    pub flow_frequency: f64,
    /// Total pooled flow intervals
    pub total_flows: usize,
}

impl FlowAnalysis {
    /// Peak hour rendered as `H:00`.
    pub fn peak_flow_time(&self) -> String {
        format!("{}:00", self.peak_flow_hour)
    }
}

/// Analyze when and how often flow states occur.
///
/// # Errors
///
/// Returns `DataInsufficient` when no session recorded a flow state, and
/// `MalformedRecord` if a start time cannot be mapped to a date.
pub fn analyze_flow_states(
    sessions: &[SessionRecord],
    offset: FixedOffset,
) -> Result<FlowAnalysis, AnalysisError> {
    let mut minutes_by_hour = [0.0_f64; 24];
    let mut total_minutes = 0.0;
    let mut total_flows = 0usize;

    for (index, session) in sessions.iter().enumerate() {
        for flow in &session.flow_states {
            let hour = flow.start_hour(offset).ok_or_else(|| {
                AnalysisError::malformed(index, "flowStates.startTime", "is out of range")
            })?;
            minutes_by_hour[hour as usize] += flow.duration;
            total_minutes += flow.duration;
            total_flows += 1;
        }
    }

    if total_flows == 0 {
        return Err(AnalysisError::insufficient(
            Dimension::FlowState,
            "no flow states recorded",
        ));
    }

    let mut peak_hour = 0u32;
    let mut peak_minutes = 0.0;
    for (hour, minutes) in minutes_by_hour.iter().enumerate() {
        if *minutes > peak_minutes {
            peak_hour = hour as u32;
            peak_minutes = *minutes;
        }
    }

    Ok(FlowAnalysis {
        average_flow_duration: total_minutes / total_flows as f64,
        peak_flow_hour: peak_hour,
        flow_frequency: total_flows as f64 / sessions.len() as f64,
        total_flows,
    })
}
