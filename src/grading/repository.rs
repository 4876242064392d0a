use super::domain::{AssessmentComponent, ResultKey, ResultRecord};

/// Storage abstraction over the external document store.
///
/// The store exposes find / delete-many / insert-many primitives and no
/// transaction spanning them; callers that need replace-then-insert
/// consistency must sequence the calls themselves (see
/// [`super::service::ResultService`]).
pub trait ResultStore: Send + Sync {
    fn find_components(&self, key: &ResultKey) -> Result<Vec<AssessmentComponent>, StoreError>;
    fn delete_components(&self, key: &ResultKey) -> Result<u64, StoreError>;
    fn insert_components(&self, components: Vec<AssessmentComponent>) -> Result<(), StoreError>;
    fn delete_results(&self, key: &ResultKey) -> Result<u64, StoreError>;
    fn insert_results(&self, records: Vec<ResultRecord>) -> Result<(), StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store cannot be reached at all; processing stops.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// The store refused this particular write; the record it belonged to
    /// carries the error while the rest of a batch continues.
    #[error("write rejected: {0}")]
    Rejected(String),
}

/// Directory collaborator resolving opaque ids to display names.
///
/// Lookup failure must never fail grading; the service degrades to the
/// placeholder names below.
pub trait NameDirectory: Send + Sync {
    fn student_name(&self, student_id: &str) -> Result<Option<String>, DirectoryError>;
    fn subject_name(&self, subject_id: &str) -> Result<Option<String>, DirectoryError>;
}

/// Directory lookup error.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}

pub const UNKNOWN_STUDENT: &str = "Unknown Student";
pub const UNKNOWN_SUBJECT: &str = "Unknown Subject";
