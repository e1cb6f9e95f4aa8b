//! # Mindful Insights Core Library
//!
//! This library turns a history of recorded mindfulness sessions into
//! human-readable insights. It is a pure, synchronous computation: callers
//! supply validated session records, the engine holds no state between calls.
//!
//! ## Architecture
//!
//! - **Analyzers**: seven independent functions, one per dimension
//!   (breathing, environment, flow, duration, soundscape, time of day, emotion)
//! - **Synthesizer**: fixed narrative templates turning analyzer results into insights
//! - **Engine**: runs the analyzers in a fixed order under a configurable failure policy
//! - **Recommendations**: supplementary plain-language suggestions
//!
//! ## Key Components
//!
//! - [`InsightEngine`]: Engine entry point
//! - [`SessionRecord`]: Input record
//! - [`Insight`]: Output finding
//! - [`AnalyticsConfig`]: TOML-backed thresholds and policy

pub mod analyzers;
pub mod engine;
pub mod error;
pub mod insight;
pub mod recommend;
pub mod session;
pub mod storage;
pub mod synthesizer;

pub use engine::{analyze, AnalysisReport, InsightEngine, SkippedDimension};
pub use error::{AnalysisError, ConfigError, CoreError};
pub use insight::{Dimension, Impact, Insight, InsightCategory, InsightType};
pub use recommend::{recommend, Recommender, StaticRecommender, STATIC_RECOMMENDATIONS};
pub use session::{parse_sessions, validate_sessions, FlowState, Posture, SessionRecord};
pub use storage::{AnalyticsConfig, FailurePolicy};
