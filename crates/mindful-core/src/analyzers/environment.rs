//! Environmental factor analysis.
//!
//! Picks the noise/light/temperature triple of the best-scoring session and
//! reports how representative that optimum is of the whole history.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::insight::Dimension;
use crate::session::SessionRecord;

/// Environment of the best-scoring session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentAnalysis {
    pub optimal_noise: f64,
    pub optimal_light: f64,
    pub optimal_temp: f64,
    /// Average score of the optimal session
    pub optimal_score: f64,
    /// Mean score as a percentage of the optimal score
    pub environmental_impact: f64,
}

/// Analyze which environment coincides with peak scores.
///
/// The optimum is found by a linear scan that only replaces the current best
/// on a strictly greater score, so the first session reaching the maximum wins.
///
/// # Errors
///
/// Returns `DataInsufficient` for an empty slice or when the optimal score
/// is zero, which leaves the impact ratio undefined.
pub fn analyze_environment(
    sessions: &[SessionRecord],
) -> Result<EnvironmentAnalysis, AnalysisError> {
    let (first, rest) = sessions.split_first().ok_or_else(|| {
        AnalysisError::insufficient(Dimension::Environment, "no sessions recorded")
    })?;

    let mut optimal = first;
    let mut optimal_score = first.avg_score();
    for session in rest {
        let score = session.avg_score();
        if score > optimal_score {
            optimal = session;
            optimal_score = score;
        }
    }

    if optimal_score == 0.0 {
        return Err(AnalysisError::insufficient(
            Dimension::Environment,
            "optimal session score is zero",
        ));
    }

    let mean_score =
        sessions.iter().map(SessionRecord::avg_score).sum::<f64>() / sessions.len() as f64;

    Ok(EnvironmentAnalysis {
        optimal_noise: optimal.environment_noise,
        optimal_light: optimal.light_level,
        optimal_temp: optimal.temperature,
        optimal_score,
        environmental_impact: mean_score / optimal_score * 100.0,
    })
}
