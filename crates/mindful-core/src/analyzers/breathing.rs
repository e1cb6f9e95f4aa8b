//! Breathing pattern analysis.
//!
//! Pools every breathing-rate sample across sessions and scores how regular
//! the rate is using the coefficient of variation:
//!
//! ```text
//! consistency = 100 − (std_dev / average_rate) × 100
//! ```
//!
//! The score is not clamped; highly variable input can drive it negative.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::insight::Dimension;
use crate::session::SessionRecord;
use crate::storage::BreathingConfig;

/// Pooled breathing-rate statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreathingAnalysis {
    /// Mean breaths per minute
    pub average_rate: f64,
    /// Population variance of the samples
    pub variance: f64,
    /// Coefficient-of-variation score in percent
    pub consistency: f64,
    /// Samples deviating from the mean by more than the configured threshold
    pub irregularities: usize,
    /// Number of pooled samples
    pub sample_count: usize,
}

/// Analyze breathing regularity over all sessions.
///
/// # Errors
///
/// Returns `DataInsufficient` when no session carries a breathing sample.
pub fn analyze_breathing(
    sessions: &[SessionRecord],
    config: &BreathingConfig,
) -> Result<BreathingAnalysis, AnalysisError> {
    let rates: Vec<f64> = sessions
        .iter()
        .flat_map(|s| s.breathing_rate.iter().copied())
        .collect();

    if rates.is_empty() {
        return Err(AnalysisError::insufficient(
            Dimension::Breathing,
            "no breathing-rate samples recorded",
        ));
    }

    let n = rates.len() as f64;
    let average_rate = rates.iter().sum::<f64>() / n;
    let variance = rates
        .iter()
        .map(|r| (r - average_rate).powi(2))
        .sum::<f64>()
        / n;
    let consistency = 100.0 - (variance.sqrt() / average_rate) * 100.0;
    let irregularities = rates
        .iter()
        .filter(|r| (*r - average_rate).abs() > config.irregularity_deviation)
        .count();

    Ok(BreathingAnalysis {
        average_rate,
        variance,
        consistency,
        irregularities,
        sample_count: rates.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::test_support::session;

    fn with_rates(rates: Vec<f64>) -> SessionRecord {
        let mut record = session(10, 80.0, 80.0);
        record.breathing_rate = rates;
        record
    }

    #[test]
    fn test_identical_samples_are_fully_consistent() {
        let sessions = vec![with_rates(vec![12.0; 5]), with_rates(vec![12.0; 3])];
        let result = analyze_breathing(&sessions, &BreathingConfig::default()).unwrap();

        assert_eq!(result.average_rate, 12.0);
        assert_eq!(result.variance, 0.0);
        assert_eq!(result.consistency, 100.0);
        assert_eq!(result.irregularities, 0);
        assert_eq!(result.sample_count, 8);
    }

    #[test]
    fn test_samples_are_pooled_across_sessions() {
        // mean 12, deviations ±2 → variance 4, std dev 2
        let sessions = vec![with_rates(vec![10.0]), with_rates(vec![14.0])];
        let result = analyze_breathing(&sessions, &BreathingConfig::default()).unwrap();

        assert_eq!(result.average_rate, 12.0);
        assert_eq!(result.variance, 4.0);
        assert!((result.consistency - (100.0 - 2.0 / 12.0 * 100.0)).abs() < 1e-9);
        assert_eq!(result.irregularities, 0);
    }

    #[test]
    fn test_irregularities_use_strict_threshold() {
        // mean 12: 8 deviates by 4 (counted), 15 by 3 (not counted)
        let sessions = vec![with_rates(vec![8.0, 13.0, 12.0, 15.0, 12.0])];
        let result = analyze_breathing(&sessions, &BreathingConfig::default()).unwrap();

        assert_eq!(result.average_rate, 12.0);
        assert_eq!(result.irregularities, 1);
    }

    #[test]
    fn test_consistency_is_not_clamped() {
        let sessions = vec![with_rates(vec![1.0, 1.0, 1.0, 40.0])];
        let result = analyze_breathing(&sessions, &BreathingConfig::default()).unwrap();
        assert!(result.consistency < 0.0);
    }

    #[test]
    fn test_custom_deviation_threshold() {
        let config = BreathingConfig {
            irregularity_deviation: 1.0,
            ..BreathingConfig::default()
        };
        let sessions = vec![with_rates(vec![10.0, 14.0])];
        let result = analyze_breathing(&sessions, &config).unwrap();
        assert_eq!(result.irregularities, 2);
    }

    #[test]
    fn test_no_samples_is_insufficient() {
        let sessions = vec![with_rates(Vec::new()), with_rates(Vec::new())];
        let err = analyze_breathing(&sessions, &BreathingConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::DataInsufficient { dimension: Dimension::Breathing, .. }
        ));
    }
}
