//! Plain-language recommendations derived from a set of insights.
//!
//! The default [`StaticRecommender`] returns a fixed list and ignores its
//! input. Implement [`Recommender`] to derive suggestions from the insights.

use crate::insight::Insight;

/// Recommendations returned regardless of the insights supplied.
pub const STATIC_RECOMMENDATIONS: [&str; 4] = [
    "Try scheduling your sessions during your peak performance time",
    "Experiment with longer durations when using nature soundscapes",
    "Consider joining group sessions to boost engagement",
    "Practice breathing exercises before high-focus sessions",
];

/// Source of recommendation text.
pub trait Recommender: Send + Sync {
    fn recommend(&self, insights: &[Insight]) -> Vec<String>;
}

/// Returns [`STATIC_RECOMMENDATIONS`] for any input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRecommender;

impl Recommender for StaticRecommender {
    fn recommend(&self, _insights: &[Insight]) -> Vec<String> {
        STATIC_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect()
    }
}

/// Recommendations from the default recommender.
pub fn recommend(insights: &[Insight]) -> Vec<String> {
    StaticRecommender.recommend(insights)
}
