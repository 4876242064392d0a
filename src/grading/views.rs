use serde::Serialize;

use super::domain::ResultRecord;
use super::report::BatchReport;
use super::service::BatchOutcome;

/// Wire shape of a successful bulk submission response. `errors` disappears
/// from the payload entirely when no record failed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkResultView {
    pub success: bool,
    pub data: Vec<ResultRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    pub summary: BatchReport,
    pub message: String,
}

impl From<BatchOutcome> for BulkResultView {
    fn from(outcome: BatchOutcome) -> Self {
        Self {
            success: true,
            data: outcome.results,
            errors: outcome.errors,
            summary: outcome.summary,
            message: outcome.message,
        }
    }
}

/// Wire shape of a successful single-record response. The record carries no
/// position; ranking is a batch-only concept.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleResultView {
    pub success: bool,
    pub data: ResultRecord,
    pub message: String,
}

impl From<ResultRecord> for SingleResultView {
    fn from(record: ResultRecord) -> Self {
        let message = format!(
            "Result recorded for {} in {}",
            record.student_name, record.subject_name
        );
        Self {
            success: true,
            data: record,
            message,
        }
    }
}
