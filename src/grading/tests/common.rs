use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::grading::domain::{AssessmentComponent, ResultKey, ResultRecord, Term};
use crate::grading::intake::{BulkResultRequest, BulkScoreRow, SingleResultRequest};
use crate::grading::repository::{
    DirectoryError, NameDirectory, ResultStore, StoreError,
};
use crate::grading::scoring::{Grade, GradingConfig};
use crate::grading::service::ResultService;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date")
}

pub(super) fn bulk_row(
    student_id: Option<&str>,
    subject_id: Option<&str>,
    assessment1: Option<f64>,
    assessment2: Option<f64>,
    exam: Option<f64>,
) -> BulkScoreRow {
    BulkScoreRow {
        student_id: student_id.map(str::to_string),
        subject_id: subject_id.map(str::to_string),
        assessment1,
        assessment2,
        exam,
    }
}

pub(super) fn bulk_request(rows: Vec<BulkScoreRow>) -> BulkResultRequest {
    BulkResultRequest {
        class_id: Some("jss2a".to_string()),
        term: Some("First".to_string()),
        session: Some("2024/2025".to_string()),
        results: Some(rows),
    }
}

pub(super) fn single_request(
    student_id: &str,
    subject_id: &str,
    continuous_assessment: Option<f64>,
    examination: Option<f64>,
) -> SingleResultRequest {
    SingleResultRequest {
        student_id: Some(student_id.to_string()),
        subject_id: Some(subject_id.to_string()),
        class_id: Some("jss2a".to_string()),
        term: Some("First".to_string()),
        session: Some("2024/2025".to_string()),
        continuous_assessment,
        examination,
    }
}

pub(super) fn build_service() -> (
    ResultService<MemoryStore, StaticDirectory>,
    Arc<MemoryStore>,
    Arc<StaticDirectory>,
) {
    let store = Arc::new(MemoryStore::default());
    let directory = Arc::new(StaticDirectory::with_sample_names());
    let service = ResultService::new(store.clone(), directory.clone(), GradingConfig::default());
    (service, store, directory)
}

pub(super) fn graded_record(student_id: &str, subject_id: &str, total: f64) -> ResultRecord {
    let grade = Grade::from_total(total);
    ResultRecord {
        student_id: student_id.to_string(),
        student_name: format!("Student {student_id}"),
        subject_id: subject_id.to_string(),
        subject_name: format!("Subject {subject_id}"),
        class_id: "jss2a".to_string(),
        term: Term::First,
        academic_year: "2024/2025".to_string(),
        continuous_assessment: 0.0,
        examination: total,
        total,
        grade,
        remark: grade.remark(),
        position: None,
        recorded_on: today(),
    }
}

#[derive(Default)]
pub(super) struct MemoryStore {
    components: Mutex<Vec<AssessmentComponent>>,
    results: Mutex<Vec<ResultRecord>>,
}

impl MemoryStore {
    pub(super) fn components(&self) -> Vec<AssessmentComponent> {
        self.components.lock().expect("store mutex poisoned").clone()
    }

    pub(super) fn results(&self) -> Vec<ResultRecord> {
        self.results.lock().expect("store mutex poisoned").clone()
    }
}

impl ResultStore for MemoryStore {
    fn find_components(&self, key: &ResultKey) -> Result<Vec<AssessmentComponent>, StoreError> {
        let guard = self.components.lock().expect("store mutex poisoned");
        Ok(guard
            .iter()
            .filter(|component| component.key() == *key)
            .cloned()
            .collect())
    }

    fn delete_components(&self, key: &ResultKey) -> Result<u64, StoreError> {
        let mut guard = self.components.lock().expect("store mutex poisoned");
        let before = guard.len();
        guard.retain(|component| component.key() != *key);
        Ok((before - guard.len()) as u64)
    }

    fn insert_components(&self, components: Vec<AssessmentComponent>) -> Result<(), StoreError> {
        let mut guard = self.components.lock().expect("store mutex poisoned");
        guard.extend(components);
        Ok(())
    }

    fn delete_results(&self, key: &ResultKey) -> Result<u64, StoreError> {
        let mut guard = self.results.lock().expect("store mutex poisoned");
        let before = guard.len();
        guard.retain(|record| record.key() != *key);
        Ok((before - guard.len()) as u64)
    }

    fn insert_results(&self, records: Vec<ResultRecord>) -> Result<(), StoreError> {
        let mut guard = self.results.lock().expect("store mutex poisoned");
        guard.extend(records);
        Ok(())
    }
}

#[derive(Default)]
pub(super) struct StaticDirectory {
    students: HashMap<String, String>,
    subjects: HashMap<String, String>,
}

impl StaticDirectory {
    pub(super) fn with_sample_names() -> Self {
        let mut directory = Self::default();
        directory
            .students
            .insert("st-001".to_string(), "Adaeze Okafor".to_string());
        directory
            .students
            .insert("st-002".to_string(), "Bola Adeyemi".to_string());
        directory
            .students
            .insert("st-003".to_string(), "Chidi Eze".to_string());
        directory
            .students
            .insert("st-004".to_string(), "Deborah Musa".to_string());
        directory
            .subjects
            .insert("sub-math".to_string(), "Mathematics".to_string());
        directory
            .subjects
            .insert("sub-eng".to_string(), "English Language".to_string());
        directory
    }
}

impl NameDirectory for StaticDirectory {
    fn student_name(&self, student_id: &str) -> Result<Option<String>, DirectoryError> {
        Ok(self.students.get(student_id).cloned())
    }

    fn subject_name(&self, subject_id: &str) -> Result<Option<String>, DirectoryError> {
        Ok(self.subjects.get(subject_id).cloned())
    }
}

pub(super) struct FailingDirectory;

impl NameDirectory for FailingDirectory {
    fn student_name(&self, _student_id: &str) -> Result<Option<String>, DirectoryError> {
        Err(DirectoryError::Unavailable("directory offline".to_string()))
    }

    fn subject_name(&self, _subject_id: &str) -> Result<Option<String>, DirectoryError> {
        Err(DirectoryError::Unavailable("directory offline".to_string()))
    }
}

pub(super) struct UnavailableStore;

impl ResultStore for UnavailableStore {
    fn find_components(&self, _key: &ResultKey) -> Result<Vec<AssessmentComponent>, StoreError> {
        Err(StoreError::Unavailable("document store offline".to_string()))
    }

    fn delete_components(&self, _key: &ResultKey) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("document store offline".to_string()))
    }

    fn insert_components(&self, _components: Vec<AssessmentComponent>) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("document store offline".to_string()))
    }

    fn delete_results(&self, _key: &ResultKey) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("document store offline".to_string()))
    }

    fn insert_results(&self, _records: Vec<ResultRecord>) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("document store offline".to_string()))
    }
}

/// Fails every delete while counting insert attempts, proving a failed
/// delete never falls through to the insert step.
#[derive(Default)]
pub(super) struct DeleteFailsStore {
    pub(super) insert_attempts: Mutex<usize>,
}

impl ResultStore for DeleteFailsStore {
    fn find_components(&self, _key: &ResultKey) -> Result<Vec<AssessmentComponent>, StoreError> {
        Ok(Vec::new())
    }

    fn delete_components(&self, _key: &ResultKey) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("delete timed out".to_string()))
    }

    fn insert_components(&self, _components: Vec<AssessmentComponent>) -> Result<(), StoreError> {
        *self.insert_attempts.lock().expect("store mutex poisoned") += 1;
        Ok(())
    }

    fn delete_results(&self, _key: &ResultKey) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("delete timed out".to_string()))
    }

    fn insert_results(&self, _records: Vec<ResultRecord>) -> Result<(), StoreError> {
        *self.insert_attempts.lock().expect("store mutex poisoned") += 1;
        Ok(())
    }
}

/// Accepts component traffic but refuses result writes, so batch persistence
/// failures surface per record instead of aborting.
#[derive(Default)]
pub(super) struct RejectingStore {
    inner: MemoryStore,
}

impl ResultStore for RejectingStore {
    fn find_components(&self, key: &ResultKey) -> Result<Vec<AssessmentComponent>, StoreError> {
        self.inner.find_components(key)
    }

    fn delete_components(&self, key: &ResultKey) -> Result<u64, StoreError> {
        self.inner.delete_components(key)
    }

    fn insert_components(&self, components: Vec<AssessmentComponent>) -> Result<(), StoreError> {
        self.inner.insert_components(components)
    }

    fn delete_results(&self, key: &ResultKey) -> Result<u64, StoreError> {
        self.inner.delete_results(key)
    }

    fn insert_results(&self, _records: Vec<ResultRecord>) -> Result<(), StoreError> {
        Err(StoreError::Rejected("schema validation failed".to_string()))
    }
}
