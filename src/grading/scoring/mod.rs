mod aggregate;
mod config;
mod scale;

pub use aggregate::{aggregate, aggregate_scores, ScoreBreakdown};
pub use config::GradingConfig;
pub use scale::{Grade, Remark};

use super::domain::{AssessmentComponent, ScoreSubmission};
use serde::{Deserialize, Serialize};

/// Stateless evaluator combining aggregation and the grade scale.
pub struct GradingEngine {
    config: GradingConfig,
}

impl GradingEngine {
    pub fn new(config: GradingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GradingConfig {
        &self.config
    }

    /// Grade the components stored under one result key.
    pub fn score_components(&self, components: &[AssessmentComponent]) -> GradedScore {
        GradedScore::from_breakdown(aggregate(components))
    }

    /// Grade a normalized submission directly, without a store round-trip.
    pub fn score_submission(&self, submission: &ScoreSubmission) -> GradedScore {
        GradedScore::from_breakdown(aggregate_scores(&submission.components))
    }
}

/// Aggregated sub-totals plus the derived grade and remark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradedScore {
    pub breakdown: ScoreBreakdown,
    pub grade: Grade,
    pub remark: Remark,
}

impl GradedScore {
    fn from_breakdown(breakdown: ScoreBreakdown) -> Self {
        let grade = Grade::from_total(breakdown.total);
        Self {
            breakdown,
            grade,
            remark: grade.remark(),
        }
    }
}
