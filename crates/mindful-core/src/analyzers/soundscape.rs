//! Soundscape effectiveness.
//!
//! Sessions are grouped by soundscape label. The baseline is the unweighted
//! mean of the group means, so a soundscape used once counts as much as one
//! used every day.

use serde::{Deserialize, Serialize};

use super::group_scores;
use crate::error::AnalysisError;
use crate::insight::Dimension;
use crate::session::SessionRecord;

/// Mean average score for one soundscape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundscapeScore {
    pub soundscape: String,
    pub avg_score: f64,
    pub session_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundscapeAnalysis {
    pub best_soundscape: String,
    pub best_score: f64,
    /// Mean of per-soundscape means
    pub baseline: f64,
    /// Percent by which the best soundscape beats the baseline
    pub improvement: f64,
    /// Per-soundscape means in first-seen order
    pub by_soundscape: Vec<SoundscapeScore>,
}

/// Rank soundscapes by the average score of their sessions.
///
/// The best group is chosen by strict greater-than over first-seen order.
/// A zero baseline yields an improvement of 0.
///
/// # Errors
///
/// Returns `DataInsufficient` for an empty slice.
pub fn analyze_soundscapes(
    sessions: &[SessionRecord],
) -> Result<SoundscapeAnalysis, AnalysisError> {
    let by_soundscape: Vec<SoundscapeScore> = group_scores(sessions, |s| s.soundscape.as_str())
        .into_iter()
        .map(|(label, group)| SoundscapeScore {
            soundscape: label.to_string(),
            avg_score: group.mean(),
            session_count: group.count,
        })
        .collect();

    let (first, rest) = by_soundscape.split_first().ok_or_else(|| {
        AnalysisError::insufficient(Dimension::Soundscape, "no sessions recorded")
    })?;

    let mut best = first;
    for candidate in rest {
        if candidate.avg_score > best.avg_score {
            best = candidate;
        }
    }
    let best_soundscape = best.soundscape.clone();
    let best_score = best.avg_score;

    let baseline =
        by_soundscape.iter().map(|s| s.avg_score).sum::<f64>() / by_soundscape.len() as f64;
    let improvement = if baseline == 0.0 {
        0.0
    } else {
        (best_score - baseline) / baseline * 100.0
    };

    Ok(SoundscapeAnalysis {
        best_soundscape,
        best_score,
        baseline,
        improvement,
        by_soundscape,
    })
}
