//! Optimal session duration.
//!
//! A single best-session lookup, not a regression: the duration of the
//! session with the highest average score is reported, so one extreme
//! session decides the result.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::insight::Dimension;
use crate::session::SessionRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalDuration {
    /// Duration in minutes of the best-scoring session
    pub duration: u32,
    /// Average score of that session
    pub avg_score: f64,
}

/// Find the duration of the highest-scoring session.
///
/// Ties keep the first session reaching the maximum.
///
/// # Errors
///
/// Returns `DataInsufficient` for an empty slice.
pub fn analyze_optimal_duration(
    sessions: &[SessionRecord],
) -> Result<OptimalDuration, AnalysisError> {
    let (first, rest) = sessions.split_first().ok_or_else(|| {
        AnalysisError::insufficient(Dimension::OptimalDuration, "no sessions recorded")
    })?;

    let mut best = OptimalDuration {
        duration: first.duration,
        avg_score: first.avg_score(),
    };
    for session in rest {
        let avg_score = session.avg_score();
        if avg_score > best.avg_score {
            best = OptimalDuration {
                duration: session.duration,
                avg_score,
            };
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::test_support::session;

    #[test]
    fn test_single_outlier_decides() {
        let sessions = vec![session(10, 50.0, 50.0), session(60, 99.0, 99.0)];
        let result = analyze_optimal_duration(&sessions).unwrap();
        assert_eq!(result.duration, 60);
        assert_eq!(result.avg_score, 99.0);
    }

    #[test]
    fn test_ties_keep_first_seen() {
        let sessions = vec![
            session(15, 80.0, 90.0),
            session(25, 90.0, 80.0),
            session(5, 10.0, 10.0),
        ];
        let result = analyze_optimal_duration(&sessions).unwrap();
        assert_eq!(result.duration, 15);
    }

    #[test]
    fn test_empty_is_insufficient() {
        assert!(matches!(
            analyze_optimal_duration(&[]),
            Err(AnalysisError::DataInsufficient { dimension: Dimension::OptimalDuration, .. })
        ));
    }
}
