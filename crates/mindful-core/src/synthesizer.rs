//! Insight synthesis.
//!
//! Maps each analyzer's numeric result to an [`Insight`] using fixed
//! narrative templates. Confidence levels are declared per analyzer, not
//! derived from the data.

use crate::analyzers::{
    BreathingAnalysis, EmotionalAnalysis, EnvironmentAnalysis, FlowAnalysis, OptimalDuration,
    SoundscapeAnalysis, TimeOfDayAnalysis,
};
use crate::insight::{Impact, Insight, InsightCategory, InsightType};
use crate::storage::BreathingConfig;

pub const BREATHING_CONFIDENCE: f64 = 0.95;
pub const ENVIRONMENT_CONFIDENCE: f64 = 0.88;
pub const FLOW_CONFIDENCE: f64 = 0.92;
pub const DURATION_CONFIDENCE: f64 = 0.85;
pub const SOUNDSCAPE_CONFIDENCE: f64 = 0.92;
pub const TIME_OF_DAY_CONFIDENCE: f64 = 0.88;
pub const EMOTION_CONFIDENCE: f64 = 0.82;

pub const BREATHING_TITLE: &str = "Breathing Pattern Analysis";
pub const ENVIRONMENT_TITLE: &str = "Optimal Environment Settings";
pub const FLOW_TITLE: &str = "Flow State Analysis";
pub const DURATION_TITLE: &str = "Optimal Session Duration";
pub const SOUNDSCAPE_TITLE: &str = "Most Effective Soundscape";
pub const TIME_OF_DAY_TITLE: &str = "Peak Performance Time";
pub const EMOTION_TITLE: &str = "Emotional Consistency";

/// Techniques attached to every breathing insight.
pub const BREATHING_SUGGESTIONS: [&str; 3] = [
    "Practice 4-7-8 breathing technique",
    "Set breathing reminders during sessions",
    "Try guided breathing exercises",
];

pub const META_ENVIRONMENTAL_IMPACT: &str = "environmentalImpact";
pub const META_FLOW_FREQUENCY: &str = "flowFrequency";
pub const META_IMPROVEMENT: &str = "improvement";
pub const META_CONSISTENCY: &str = "consistency";

/// Round to the nearest whole number for display, halves toward +∞.
fn whole(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

pub fn breathing_insight(analysis: &BreathingAnalysis, config: &BreathingConfig) -> Insight {
    let insight_type = if analysis.consistency < config.warning_consistency {
        InsightType::Warning
    } else {
        InsightType::Achievement
    };
    let impact = if analysis.irregularities > config.high_impact_irregularities {
        Impact::High
    } else {
        Impact::Medium
    };

    Insight::new(
        insight_type,
        BREATHING_TITLE,
        format!(
            "Your breathing consistency is at {}% with an average rate of {:.1} breaths per minute",
            whole(analysis.consistency),
            analysis.average_rate
        ),
        BREATHING_CONFIDENCE,
        impact,
        InsightCategory::Physical,
    )
    .with_suggestions(&BREATHING_SUGGESTIONS)
}

pub fn environment_insight(analysis: &EnvironmentAnalysis) -> Insight {
    Insight::new(
        InsightType::Recommendation,
        ENVIRONMENT_TITLE,
        format!(
            "Your focus peaks in environments with {}% light, {}°C, and {}dB ambient noise",
            analysis.optimal_light, analysis.optimal_temp, analysis.optimal_noise
        ),
        ENVIRONMENT_CONFIDENCE,
        Impact::High,
        InsightCategory::Environment,
    )
    .with_metadata(META_ENVIRONMENTAL_IMPACT, analysis.environmental_impact)
}

pub fn flow_insight(analysis: &FlowAnalysis) -> Insight {
    Insight::new(
        InsightType::Pattern,
        FLOW_TITLE,
        format!(
            "You achieve flow states most frequently at {}, lasting an average of {} minutes",
            analysis.peak_flow_time(),
            whole(analysis.average_flow_duration)
        ),
        FLOW_CONFIDENCE,
        Impact::High,
        InsightCategory::Mental,
    )
    .with_metadata(META_FLOW_FREQUENCY, analysis.flow_frequency)
}

pub fn duration_insight(analysis: &OptimalDuration) -> Insight {
    Insight::new(
        InsightType::Pattern,
        DURATION_TITLE,
        format!(
            "Your mindfulness scores peak during {}-minute sessions",
            analysis.duration
        ),
        DURATION_CONFIDENCE,
        Impact::Medium,
        InsightCategory::Progress,
    )
}

pub fn soundscape_insight(analysis: &SoundscapeAnalysis) -> Insight {
    Insight::new(
        InsightType::Recommendation,
        SOUNDSCAPE_TITLE,
        format!(
            "{} soundscapes improve your scores by {}%",
            analysis.best_soundscape,
            whole(analysis.improvement)
        ),
        SOUNDSCAPE_CONFIDENCE,
        Impact::Medium,
        InsightCategory::Environment,
    )
    .with_metadata(META_IMPROVEMENT, analysis.improvement)
}

pub fn time_of_day_insight(analysis: &TimeOfDayAnalysis) -> Insight {
    Insight::new(
        InsightType::Pattern,
        TIME_OF_DAY_TITLE,
        format!(
            "You achieve best results during {} sessions with {}% consistency",
            analysis.optimal_time,
            whole(analysis.consistency)
        ),
        TIME_OF_DAY_CONFIDENCE,
        Impact::High,
        InsightCategory::Mental,
    )
    .with_metadata(META_CONSISTENCY, analysis.consistency)
}

pub fn emotion_insight(analysis: &EmotionalAnalysis) -> Insight {
    Insight::new(
        InsightType::Achievement,
        EMOTION_TITLE,
        format!(
            "You most often achieve a \"{}\" state during sessions",
            analysis.dominant_state
        ),
        EMOTION_CONFIDENCE,
        Impact::Medium,
        InsightCategory::Mental,
    )
}
