//! Engine entry point.
//!
//! Runs every dimension analyzer over one immutable snapshot of session
//! records and returns their insights in a fixed order: breathing,
//! environment, flow, duration, soundscape, time of day, emotion.
//!
//! ## Failure policy
//!
//! | Policy | Analyzer fails | Result |
//! |--------|----------------|--------|
//! | Partial | any | remaining insights, failed dimension listed in `skipped` |
//! | Strict | any | whole call fails with that analyzer's error |
//!
//! An empty or malformed session list fails the call under both policies.

use serde::{Deserialize, Serialize};

use crate::analyzers::{
    analyze_breathing, analyze_emotional_consistency, analyze_environment, analyze_flow_states,
    analyze_optimal_duration, analyze_soundscapes, analyze_time_of_day,
};
use crate::error::AnalysisError;
use crate::insight::{Dimension, Insight};
use crate::session::{validate_sessions, SessionRecord};
use crate::storage::{AnalyticsConfig, FailurePolicy};
use crate::synthesizer;

/// A dimension that could not be computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedDimension {
    pub dimension: Dimension,
    pub reason: String,
}

/// Outcome of one `analyze` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Insights in fixed dimension order
    pub insights: Vec<Insight>,
    /// Dimensions left out, in the same order
    #[serde(default)]
    pub skipped: Vec<SkippedDimension>,
}

impl AnalysisReport {
    /// True when every dimension produced an insight.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Stateless session-analytics engine.
#[derive(Debug, Clone, Default)]
pub struct InsightEngine {
    config: AnalyticsConfig,
}

impl InsightEngine {
    /// Create an engine with default thresholds and the partial failure policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Analyze a session history.
    ///
    /// # Errors
    ///
    /// Returns `EmptySessions` or `MalformedRecord` when the input fails
    /// boundary validation, and under the strict policy the first analyzer
    /// error.
    pub fn analyze(&self, sessions: &[SessionRecord]) -> Result<AnalysisReport, AnalysisError> {
        validate_sessions(sessions)?;

        let mut report = AnalysisReport::default();
        for dimension in Dimension::ALL {
            match self.insight_for(dimension, sessions) {
                Ok(insight) => {
                    tracing::debug!(%dimension, description = %insight.description, "insight computed");
                    report.insights.push(insight);
                }
                Err(err) => match self.config.engine.failure_policy {
                    FailurePolicy::Strict => return Err(err),
                    FailurePolicy::Partial => {
                        tracing::warn!(%dimension, "skipping dimension: {err}");
                        report.skipped.push(SkippedDimension {
                            dimension,
                            reason: err.to_string(),
                        });
                    }
                },
            }
        }

        tracing::info!(
            sessions = sessions.len(),
            insights = report.insights.len(),
            skipped = report.skipped.len(),
            "session analysis finished"
        );
        Ok(report)
    }

    /// Run one dimension's analyzer and synthesize its insight.
    pub fn insight_for(
        &self,
        dimension: Dimension,
        sessions: &[SessionRecord],
    ) -> Result<Insight, AnalysisError> {
        let breathing = &self.config.breathing;
        match dimension {
            Dimension::Breathing => analyze_breathing(sessions, breathing)
                .map(|a| synthesizer::breathing_insight(&a, breathing)),
            Dimension::Environment => {
                analyze_environment(sessions).map(|a| synthesizer::environment_insight(&a))
            }
            Dimension::FlowState => analyze_flow_states(sessions, self.config.utc_offset())
                .map(|a| synthesizer::flow_insight(&a)),
            Dimension::OptimalDuration => {
                analyze_optimal_duration(sessions).map(|a| synthesizer::duration_insight(&a))
            }
            Dimension::Soundscape => {
                analyze_soundscapes(sessions).map(|a| synthesizer::soundscape_insight(&a))
            }
            Dimension::TimeOfDay => {
                analyze_time_of_day(sessions).map(|a| synthesizer::time_of_day_insight(&a))
            }
            Dimension::Emotion => analyze_emotional_consistency(sessions)
                .map(|a| synthesizer::emotion_insight(&a)),
        }
    }
}

/// Analyze with the default configuration.
///
/// # Errors
///
/// See [`InsightEngine::analyze`].
pub fn analyze(sessions: &[SessionRecord]) -> Result<AnalysisReport, AnalysisError> {
    InsightEngine::new().analyze(sessions)
}
