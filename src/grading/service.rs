use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDate;
use tracing::{info, warn};

use super::domain::{ResultKey, ResultRecord, ScoreSubmission};
use super::intake::{self, BulkResultRequest, SingleResultRequest, SubmissionError};
use super::rank;
use super::report::{self, BatchReport};
use super::repository::{
    DirectoryError, NameDirectory, ResultStore, StoreError, UNKNOWN_STUDENT, UNKNOWN_SUBJECT,
};
use super::scoring::{GradingConfig, GradingEngine};

/// Service composing intake, the grading engine, ranking, and the store.
///
/// The store has no transaction spanning the delete-then-insert of a
/// re-submission, so writes for the same result key are serialized through
/// an in-process advisory lock. That closes the replace window within this
/// process only; concurrent writers in other processes remain a documented
/// hazard of the store contract.
pub struct ResultService<S, D> {
    store: Arc<S>,
    directory: Arc<D>,
    engine: GradingEngine,
    locks: KeyLocks,
}

impl<S, D> ResultService<S, D>
where
    S: ResultStore + 'static,
    D: NameDirectory + 'static,
{
    pub fn new(store: Arc<S>, directory: Arc<D>, config: GradingConfig) -> Self {
        Self {
            store,
            directory,
            engine: GradingEngine::new(config),
            locks: KeyLocks::default(),
        }
    }

    /// Process a bulk submission: validate, grade, and rank every row, then
    /// persist the accepted records. A bad row never aborts the batch; the
    /// outcome carries results and per-record errors together.
    pub fn submit_batch(
        &self,
        request: BulkResultRequest,
        today: NaiveDate,
    ) -> Result<BatchOutcome, ResultServiceError> {
        let (context, rows) = intake::batch_context(&request, today)?;
        let submitted = rows.len();

        let mut errors = Vec::new();
        let mut accepted = Vec::new();
        for (index, row) in rows.iter().enumerate() {
            match intake::normalize_bulk_row(&context, index, row) {
                Ok(submission) => accepted.push(self.finalize(submission)),
                Err(rejection) => {
                    warn!(record = index, %rejection, "bulk record rejected");
                    errors.push(rejection.to_string());
                }
            }
        }
        let rejected = errors.len();

        let ranked = rank::assign_positions(accepted);
        let summary = report::summarize(&ranked, today);

        for record in &ranked {
            if let Err(failure) = self.replace_stored_result(record) {
                match failure {
                    StoreError::Unavailable(_) => return Err(failure.into()),
                    StoreError::Rejected(_) => {
                        warn!(student = %record.student_id, %failure, "result write rejected");
                        errors.push(format!("student {}: {failure}", record.student_id));
                    }
                }
            }
        }

        let message = if rejected == 0 {
            format!("Processed {} result records", ranked.len())
        } else {
            format!(
                "Processed {} of {submitted} result records ({rejected} rejected)",
                ranked.len()
            )
        };
        info!(
            class = %context.class_id,
            term = context.term.label(),
            session = %context.academic_year,
            accepted = ranked.len(),
            rejected,
            "bulk results processed"
        );

        Ok(BatchOutcome {
            results: ranked,
            errors,
            summary,
            message,
        })
    }

    /// Process one single-record submission with replace-then-insert
    /// semantics: all stored components under the key are deleted, the new
    /// components inserted, and the canonical result recomputed from what
    /// the store now holds. The delete result is observed before the insert
    /// is issued.
    pub fn submit_single(
        &self,
        request: SingleResultRequest,
        today: NaiveDate,
    ) -> Result<ResultRecord, ResultServiceError> {
        let submission = intake::normalize_single(&request, today)?;
        let key = submission.key();

        let guard = self.locks.for_key(&key);
        let _held = guard.lock().unwrap_or_else(PoisonError::into_inner);

        self.store.delete_components(&key)?;
        self.store
            .insert_components(submission.storable_components(self.engine.config()))?;

        let stored = self.store.find_components(&key)?;
        let graded = self.engine.score_components(&stored);

        let record = ResultRecord {
            student_name: self.student_display_name(&submission.student_id),
            subject_name: self.subject_display_name(&submission.subject_id),
            student_id: submission.student_id,
            subject_id: submission.subject_id,
            class_id: submission.class_id,
            term: submission.term,
            academic_year: submission.academic_year,
            continuous_assessment: graded.breakdown.continuous_assessment,
            examination: graded.breakdown.examination,
            total: graded.breakdown.total,
            grade: graded.grade,
            remark: graded.remark,
            position: None,
            recorded_on: submission.recorded_on,
        };

        self.store.delete_results(&key)?;
        self.store.insert_results(vec![record.clone()])?;

        info!(
            student = %record.student_id,
            subject = %record.subject_id,
            grade = record.grade.label(),
            "result recorded"
        );
        Ok(record)
    }

    fn finalize(&self, submission: ScoreSubmission) -> ResultRecord {
        let graded = self.engine.score_submission(&submission);
        ResultRecord {
            student_name: self.student_display_name(&submission.student_id),
            subject_name: self.subject_display_name(&submission.subject_id),
            student_id: submission.student_id,
            subject_id: submission.subject_id,
            class_id: submission.class_id,
            term: submission.term,
            academic_year: submission.academic_year,
            continuous_assessment: graded.breakdown.continuous_assessment,
            examination: graded.breakdown.examination,
            total: graded.breakdown.total,
            grade: graded.grade,
            remark: graded.remark,
            position: None,
            recorded_on: submission.recorded_on,
        }
    }

    /// Replace-on-write for the canonical record of one key.
    fn replace_stored_result(&self, record: &ResultRecord) -> Result<(), StoreError> {
        let key = record.key();
        let guard = self.locks.for_key(&key);
        let _held = guard.lock().unwrap_or_else(PoisonError::into_inner);

        self.store.delete_results(&key)?;
        self.store.insert_results(vec![record.clone()])
    }

    fn student_display_name(&self, student_id: &str) -> String {
        display_name(
            self.directory.student_name(student_id),
            UNKNOWN_STUDENT,
            student_id,
        )
    }

    fn subject_display_name(&self, subject_id: &str) -> String {
        display_name(
            self.directory.subject_name(subject_id),
            UNKNOWN_SUBJECT,
            subject_id,
        )
    }
}

fn display_name(
    lookup: Result<Option<String>, DirectoryError>,
    placeholder: &str,
    id: &str,
) -> String {
    match lookup {
        Ok(Some(name)) => name,
        Ok(None) => placeholder.to_string(),
        Err(failure) => {
            warn!(%id, %failure, "directory lookup failed, using placeholder");
            placeholder.to_string()
        }
    }
}

/// Everything a bulk submission produces: finalized records, per-record
/// error strings, the batch summary, and a human-readable message.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub results: Vec<ResultRecord>,
    pub errors: Vec<String>,
    pub summary: BatchReport,
    pub message: String,
}

/// Error raised by the result service.
#[derive(Debug, thiserror::Error)]
pub enum ResultServiceError {
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One mutex per result key, created on first use.
#[derive(Default)]
struct KeyLocks {
    inner: Mutex<HashMap<ResultKey, Arc<Mutex<()>>>>,
}

impl KeyLocks {
    fn for_key(&self, key: &ResultKey) -> Arc<Mutex<()>> {
        let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        map.entry(key.clone()).or_default().clone()
    }
}
