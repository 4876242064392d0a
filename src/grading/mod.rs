//! Grade computation, cohort ranking, and batch summary processing.
//!
//! Raw submissions enter through [`intake`], which collapses the two wire
//! shapes into one normalized form. The [`scoring`] engine aggregates
//! component scores and applies the fixed grade scale, [`rank`] orders each
//! per-subject cohort, [`report`] produces the batch statistics, and
//! [`service`] ties the pipeline to the store and directory collaborators.

pub mod domain;
pub mod intake;
pub mod rank;
pub mod report;
pub mod repository;
pub mod scoring;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    AssessmentComponent, ComponentScore, ComponentType, ResultKey, ResultRecord, ScoreSubmission,
    Term,
};
pub use intake::{BulkResultRequest, BulkScoreRow, SingleResultRequest, SubmissionError};
pub use report::BatchReport;
pub use repository::{
    DirectoryError, NameDirectory, ResultStore, StoreError, UNKNOWN_STUDENT, UNKNOWN_SUBJECT,
};
pub use scoring::{Grade, GradedScore, GradingConfig, GradingEngine, Remark, ScoreBreakdown};
pub use service::{BatchOutcome, ResultService, ResultServiceError};
pub use views::{BulkResultView, SingleResultView};
