//! Core engine turning raw per-student assessment scores into letter grades,
//! qualitative remarks, cohort rankings, and batch summary statistics.
//!
//! The crate deliberately stops at the processing boundary: persistence and
//! name resolution are reached through the collaborator traits in
//! [`grading::repository`], and the wire-facing shapes in [`grading::views`]
//! are plain serde types so an embedding transport can serialize them without
//! reshaping.

pub mod config;
pub mod error;
pub mod grading;
pub mod telemetry;

pub use config::{AppConfig, AppEnvironment};
pub use error::EngineError;
