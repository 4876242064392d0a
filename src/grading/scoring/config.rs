use serde::{Deserialize, Serialize};

/// Component score ceilings recorded on stored assessment entries.
///
/// Ceilings are descriptive, not enforced: a submitted score above its
/// component ceiling still flows through aggregation and grading unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingConfig {
    pub ca_component_max: f64,
    pub exam_max: f64,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            ca_component_max: 40.0,
            exam_max: 60.0,
        }
    }
}
