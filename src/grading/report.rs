use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::ResultRecord;
use super::scoring::Grade;

/// Cohort-level statistics over one finalized batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub total_records: usize,
    /// Mean of totals, rounded half-up to the display integer.
    pub average_score: i64,
    pub highest_score: f64,
    pub lowest_score: f64,
    pub grade_distribution: BTreeMap<Grade, usize>,
    /// Integer percentage of records whose grade passes ([`Grade::is_pass`]).
    pub pass_rate: u32,
    pub generated_on: NaiveDate,
}

/// Compute the batch summary over the accepted result set.
///
/// An empty batch reports zeros across the board rather than failing.
pub fn summarize(results: &[ResultRecord], generated_on: NaiveDate) -> BatchReport {
    if results.is_empty() {
        return BatchReport {
            total_records: 0,
            average_score: 0,
            highest_score: 0.0,
            lowest_score: 0.0,
            grade_distribution: BTreeMap::new(),
            pass_rate: 0,
            generated_on,
        };
    }

    let mut sum = 0.0;
    let mut highest = f64::NEG_INFINITY;
    let mut lowest = f64::INFINITY;
    let mut grade_distribution: BTreeMap<Grade, usize> = BTreeMap::new();
    let mut passed = 0usize;

    for record in results {
        sum += record.total;
        highest = highest.max(record.total);
        lowest = lowest.min(record.total);
        *grade_distribution.entry(record.grade).or_insert(0) += 1;
        if record.grade.is_pass() {
            passed += 1;
        }
    }

    let count = results.len();
    BatchReport {
        total_records: count,
        average_score: round_half_up(sum / count as f64),
        highest_score: highest,
        lowest_score: lowest,
        grade_distribution,
        pass_rate: round_half_up(passed as f64 * 100.0 / count as f64) as u32,
        generated_on,
    }
}

/// Round-half-up to the nearest integer, matching the integer-percentage
/// display convention of issued reports.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
