//! Boundary adapter for the two submission payload shapes.
//!
//! The bulk path submits two numbered assessment scores plus an exam per row;
//! the single path submits one lump continuous-assessment value. Both are
//! normalized here into [`ScoreSubmission`] so the engine sees exactly one
//! input shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{ComponentScore, ComponentType, ScoreSubmission, Term};

/// Bulk submission body: one class/term/session context plus raw score rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkResultRequest {
    pub class_id: Option<String>,
    pub term: Option<String>,
    pub session: Option<String>,
    pub results: Option<Vec<BulkScoreRow>>,
}

/// One raw row of the bulk body. Numeric fields are optional on the wire and
/// default to zero rather than invalidating the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkScoreRow {
    pub student_id: Option<String>,
    pub subject_id: Option<String>,
    pub assessment1: Option<f64>,
    pub assessment2: Option<f64>,
    pub exam: Option<f64>,
}

/// Single-record submission body. Field naming follows the wire contract of
/// that endpoint, which differs from the bulk rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleResultRequest {
    pub student_id: Option<String>,
    pub subject_id: Option<String>,
    #[serde(rename = "class")]
    pub class_id: Option<String>,
    pub term: Option<String>,
    pub session: Option<String>,
    pub continuous_assessment: Option<f64>,
    pub examination: Option<f64>,
}

/// Submission-time parameters shared by every row of a bulk request.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchContext {
    pub class_id: String,
    pub term: Term,
    pub academic_year: String,
    pub recorded_on: NaiveDate,
}

/// Validation errors raised while normalizing inbound payloads.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("unrecognized term `{0}`")]
    InvalidTerm(String),
    #[error("record {row}: missing studentId, record skipped")]
    MissingStudentId { row: usize },
    #[error("record {row}: missing subjectId for student {student_id}, record skipped")]
    MissingSubjectId { row: usize, student_id: String },
    #[error("student {student_id}: score is not a finite number, record skipped")]
    NonFiniteScore { student_id: String },
}

/// The default-to-zero policy for absent numeric fields.
///
/// Named so the permissive fallback is a deliberate, testable rule: a row
/// with no scores still grades (to `F9`) instead of being discarded.
pub(crate) fn score_or_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

fn required<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, SubmissionError> {
    match value.as_deref() {
        Some(present) if !present.trim().is_empty() => Ok(present),
        _ => Err(SubmissionError::MissingField(field)),
    }
}

fn parse_term(value: &Option<String>) -> Result<Term, SubmissionError> {
    let raw = required(value, "term")?;
    Term::parse(raw).ok_or_else(|| SubmissionError::InvalidTerm(raw.to_string()))
}

/// Validate the top-level bulk context. Failure here rejects the whole
/// request before any row is processed.
pub fn batch_context(
    request: &BulkResultRequest,
    today: NaiveDate,
) -> Result<(BatchContext, Vec<BulkScoreRow>), SubmissionError> {
    let class_id = required(&request.class_id, "classId")?.to_string();
    let term = parse_term(&request.term)?;
    let academic_year = required(&request.session, "session")?.to_string();
    let rows = request
        .results
        .clone()
        .ok_or(SubmissionError::MissingField("results"))?;

    Ok((
        BatchContext {
            class_id,
            term,
            academic_year,
            recorded_on: today,
        },
        rows,
    ))
}

/// Normalize one bulk row against its batch context.
pub fn normalize_bulk_row(
    context: &BatchContext,
    row_index: usize,
    row: &BulkScoreRow,
) -> Result<ScoreSubmission, SubmissionError> {
    let student_id = row
        .student_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or(SubmissionError::MissingStudentId { row: row_index })?
        .to_string();
    let subject_id = row
        .subject_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| SubmissionError::MissingSubjectId {
            row: row_index,
            student_id: student_id.clone(),
        })?
        .to_string();

    let components = vec![
        ComponentScore {
            component: ComponentType::Ca1,
            score: score_or_zero(row.assessment1),
        },
        ComponentScore {
            component: ComponentType::Ca2,
            score: score_or_zero(row.assessment2),
        },
        ComponentScore {
            component: ComponentType::Exam,
            score: score_or_zero(row.exam),
        },
    ];
    ensure_finite(&components, &student_id)?;

    Ok(ScoreSubmission {
        student_id,
        subject_id,
        class_id: context.class_id.clone(),
        term: context.term,
        academic_year: context.academic_year.clone(),
        recorded_on: context.recorded_on,
        components,
    })
}

/// Normalize the single-record payload. Every identity field is fatal here:
/// the single path is all-or-nothing.
pub fn normalize_single(
    request: &SingleResultRequest,
    today: NaiveDate,
) -> Result<ScoreSubmission, SubmissionError> {
    let student_id = required(&request.student_id, "studentId")?.to_string();
    let subject_id = required(&request.subject_id, "subjectId")?.to_string();
    let class_id = required(&request.class_id, "class")?.to_string();
    let term = parse_term(&request.term)?;
    let academic_year = required(&request.session, "session")?.to_string();

    let components = vec![
        ComponentScore {
            component: ComponentType::Ca1,
            score: score_or_zero(request.continuous_assessment),
        },
        ComponentScore {
            component: ComponentType::Exam,
            score: score_or_zero(request.examination),
        },
    ];
    ensure_finite(&components, &student_id)?;

    Ok(ScoreSubmission {
        student_id,
        subject_id,
        class_id,
        term,
        academic_year,
        recorded_on: today,
        components,
    })
}

fn ensure_finite(
    components: &[ComponentScore],
    student_id: &str,
) -> Result<(), SubmissionError> {
    if components.iter().any(|part| !part.score.is_finite()) {
        return Err(SubmissionError::NonFiniteScore {
            student_id: student_id.to_string(),
        });
    }
    Ok(())
}
