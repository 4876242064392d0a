use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::scoring::{Grade, GradingConfig, Remark};

/// Academic term a score was recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Term {
    First,
    Second,
    Third,
}

impl Term {
    /// Lenient parse of the term strings seen on submission payloads.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "first" | "first term" | "1" | "1st" => Some(Self::First),
            "second" | "second term" | "2" | "2nd" => Some(Self::Second),
            "third" | "third term" | "3" | "3rd" => Some(Self::Third),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Term::First => "First",
            Term::Second => "Second",
            Term::Third => "Third",
        }
    }
}

/// Kind of score contribution recorded for a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    #[serde(rename = "CA1")]
    Ca1,
    #[serde(rename = "CA2")]
    Ca2,
    Assignment,
    Exam,
}

impl ComponentType {
    pub const fn label(self) -> &'static str {
        match self {
            ComponentType::Ca1 => "CA1",
            ComponentType::Ca2 => "CA2",
            ComponentType::Assignment => "Assignment",
            ComponentType::Exam => "Exam",
        }
    }

    pub const fn is_exam(self) -> bool {
        matches!(self, ComponentType::Exam)
    }

    /// Component-specific score ceiling. Recorded on the stored entry but not
    /// enforced against the submitted score.
    pub fn default_max(self, config: &GradingConfig) -> f64 {
        if self.is_exam() {
            config.exam_max
        } else {
            config.ca_component_max
        }
    }
}

/// Identity of the one canonical result a submission targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultKey {
    pub student_id: String,
    pub subject_id: String,
    pub term: Term,
    pub academic_year: String,
}

/// One stored score contribution. All components sharing a [`ResultKey`] are
/// deleted and re-inserted whenever a new submission targets that key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentComponent {
    pub student_id: String,
    pub subject_id: String,
    pub term: Term,
    pub academic_year: String,
    pub component: ComponentType,
    pub score: f64,
    pub max_score: f64,
}

impl AssessmentComponent {
    pub fn key(&self) -> ResultKey {
        ResultKey {
            student_id: self.student_id.clone(),
            subject_id: self.subject_id.clone(),
            term: self.term,
            academic_year: self.academic_year.clone(),
        }
    }
}

/// A single typed score inside a normalized submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScore {
    pub component: ComponentType,
    pub score: f64,
}

/// The one internal submission shape both intake paths normalize into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmission {
    pub student_id: String,
    pub subject_id: String,
    pub class_id: String,
    pub term: Term,
    pub academic_year: String,
    pub recorded_on: NaiveDate,
    pub components: Vec<ComponentScore>,
}

impl ScoreSubmission {
    pub fn key(&self) -> ResultKey {
        ResultKey {
            student_id: self.student_id.clone(),
            subject_id: self.subject_id.clone(),
            term: self.term,
            academic_year: self.academic_year.clone(),
        }
    }

    /// Materialize the storable component entries for this submission.
    ///
    /// Zero-valued scores are not materialized: the stored set carries one
    /// entry per non-zero continuous-assessment value plus the examination
    /// entry when present, mirroring how re-submissions replace prior rows.
    pub fn storable_components(&self, config: &GradingConfig) -> Vec<AssessmentComponent> {
        self.components
            .iter()
            .filter(|part| part.score != 0.0)
            .map(|part| AssessmentComponent {
                student_id: self.student_id.clone(),
                subject_id: self.subject_id.clone(),
                term: self.term,
                academic_year: self.academic_year.clone(),
                component: part.component,
                score: part.score,
                max_score: part.component.default_max(config),
            })
            .collect()
    }
}

/// The canonical, finalized outcome for one student/subject/term/session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub student_id: String,
    pub student_name: String,
    pub subject_id: String,
    pub subject_name: String,
    pub class_id: String,
    pub term: Term,
    pub academic_year: String,
    pub continuous_assessment: f64,
    pub examination: f64,
    pub total: f64,
    pub grade: Grade,
    pub remark: Remark,
    /// Rank within the per-subject cohort. Batch submissions only; the
    /// single-record path leaves it unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    pub recorded_on: NaiveDate,
}

impl ResultRecord {
    pub fn key(&self) -> ResultKey {
        ResultKey {
            student_id: self.student_id.clone(),
            subject_id: self.subject_id.clone(),
            term: self.term,
            academic_year: self.academic_year.clone(),
        }
    }
}
