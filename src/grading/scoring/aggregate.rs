use serde::{Deserialize, Serialize};

use super::super::domain::{AssessmentComponent, ComponentScore, ComponentType};

/// Canonical split of one result key's components into its two sub-totals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub continuous_assessment: f64,
    pub examination: f64,
    pub total: f64,
}

/// Combine the components recorded for one (student, subject, term, session)
/// key: non-exam scores sum into the continuous-assessment sub-total, the
/// exam score stands alone.
///
/// A duplicate exam entry should not exist under replace-on-write, but a
/// concurrent writer can produce one; the last entry in iteration order wins
/// deterministically rather than being rejected.
pub fn aggregate(components: &[AssessmentComponent]) -> ScoreBreakdown {
    aggregate_parts(
        components
            .iter()
            .map(|component| (component.component, component.score)),
    )
}

/// Aggregate a normalized submission's typed scores without materializing
/// stored entries first.
pub fn aggregate_scores(parts: &[ComponentScore]) -> ScoreBreakdown {
    aggregate_parts(parts.iter().map(|part| (part.component, part.score)))
}

fn aggregate_parts<I>(parts: I) -> ScoreBreakdown
where
    I: IntoIterator<Item = (ComponentType, f64)>,
{
    let mut continuous_assessment = 0.0;
    let mut examination = 0.0;

    for (component, score) in parts {
        if component.is_exam() {
            examination = score;
        } else {
            continuous_assessment += score;
        }
    }

    ScoreBreakdown {
        continuous_assessment,
        examination,
        total: continuous_assessment + examination,
    }
}
