//! Dimension analyzers.
//!
//! Each analyzer is a free function over the session slice returning a small
//! result struct. Analyzers share no state and can run in any order.

mod breathing;
mod duration;
mod emotion;
mod environment;
mod flow;
mod soundscape;
mod time_of_day;

pub use breathing::{analyze_breathing, BreathingAnalysis};
pub use duration::{analyze_optimal_duration, OptimalDuration};
pub use emotion::{analyze_emotional_consistency, EmotionalAnalysis};
pub use environment::{analyze_environment, EnvironmentAnalysis};
pub use flow::{analyze_flow_states, FlowAnalysis};
pub use soundscape::{analyze_soundscapes, SoundscapeAnalysis, SoundscapeScore};
pub use time_of_day::{analyze_time_of_day, TimeOfDayAnalysis};

use indexmap::IndexMap;

use crate::session::SessionRecord;

/// Running score total for one label group.
#[derive(Debug, Clone, Copy, Default)]
struct ScoreGroup {
    total: f64,
    count: usize,
}

impl ScoreGroup {
    fn record(&mut self, score: f64) {
        self.total += score;
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        self.total / self.count as f64
    }
}

/// Group average scores by label, preserving first-seen label order.
fn group_scores<'a, F>(sessions: &'a [SessionRecord], label: F) -> IndexMap<&'a str, ScoreGroup>
where
    F: Fn(&'a SessionRecord) -> &'a str,
{
    let mut groups: IndexMap<&str, ScoreGroup> = IndexMap::new();
    for session in sessions {
        groups
            .entry(label(session))
            .or_default()
            .record(session.avg_score());
    }
    groups
}
