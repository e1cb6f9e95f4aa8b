//! Emotional consistency: the most frequent emotional state.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::insight::Dimension;
use crate::session::SessionRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalAnalysis {
    pub dominant_state: String,
    pub occurrences: usize,
    pub total_sessions: usize,
}

/// Find the modal emotional state.
///
/// Labels are counted in first-seen order and scanned with strict
/// greater-than, so among tied labels the one seen first wins.
///
/// # Errors
///
/// Returns `DataInsufficient` for an empty slice.
pub fn analyze_emotional_consistency(
    sessions: &[SessionRecord],
) -> Result<EmotionalAnalysis, AnalysisError> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for session in sessions {
        *counts.entry(session.emotional_state.as_str()).or_insert(0) += 1;
    }

    let mut dominant: Option<(&str, usize)> = None;
    for (state, count) in &counts {
        match dominant {
            Some((_, best)) if *count <= best => {}
            _ => dominant = Some((*state, *count)),
        }
    }

    let (state, occurrences) = dominant.ok_or_else(|| {
        AnalysisError::insufficient(Dimension::Emotion, "no sessions recorded")
    })?;

    Ok(EmotionalAnalysis {
        dominant_state: state.to_string(),
        occurrences,
        total_sessions: sessions.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::test_support::session;

    fn feeling(states: &[&str]) -> Vec<SessionRecord> {
        states
            .iter()
            .map(|state| {
                let mut record = session(10, 80.0, 80.0);
                record.emotional_state = state.to_string();
                record
            })
            .collect()
    }

    #[test]
    fn test_mode_of_states() {
        let sessions = feeling(&["peaceful", "focused", "peaceful"]);
        let result = analyze_emotional_consistency(&sessions).unwrap();
        assert_eq!(result.dominant_state, "peaceful");
        assert_eq!(result.occurrences, 2);
        assert_eq!(result.total_sessions, 3);
    }

    #[test]
    fn test_tie_goes_to_first_seen_label() {
        let sessions = feeling(&["relaxed", "focused", "focused", "relaxed"]);
        let result = analyze_emotional_consistency(&sessions).unwrap();
        assert_eq!(result.dominant_state, "relaxed");
    }

    #[test]
    fn test_empty_is_insufficient() {
        assert!(analyze_emotional_consistency(&[]).is_err());
    }
}
