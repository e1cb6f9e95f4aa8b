//! Time-of-day performance patterns.

use serde::{Deserialize, Serialize};

use super::group_scores;
use crate::error::AnalysisError;
use crate::insight::Dimension;
use crate::session::SessionRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeOfDayAnalysis {
    /// Label of the best-scoring time-of-day group
    pub optimal_time: String,
    /// Mean average score of that group
    pub avg_score: f64,
    /// Share of all sessions falling in that group, in percent
    pub consistency: f64,
}

/// Find the time of day with the highest mean average score.
///
/// Groups are scanned in first-seen order against a running best that
/// starts at score 0, replacing it only on a strictly greater mean.
///
/// # Errors
///
/// Returns `DataInsufficient` when the slice is empty or no group's mean
/// score rises above zero.
pub fn analyze_time_of_day(
    sessions: &[SessionRecord],
) -> Result<TimeOfDayAnalysis, AnalysisError> {
    let groups = group_scores(sessions, |s| s.time_of_day.as_str());

    let mut best: Option<(&str, f64, usize)> = None;
    let mut best_score = 0.0;
    for (label, group) in &groups {
        let avg_score = group.mean();
        if avg_score > best_score {
            best = Some((*label, avg_score, group.count));
            best_score = avg_score;
        }
    }

    let (label, avg_score, count) = best.ok_or_else(|| {
        AnalysisError::insufficient(
            Dimension::TimeOfDay,
            "no time-of-day group scored above zero",
        )
    })?;

    Ok(TimeOfDayAnalysis {
        optimal_time: label.to_string(),
        avg_score,
        consistency: count as f64 / sessions.len() as f64 * 100.0,
    })
}
