use std::cmp::Ordering;

use super::domain::ResultRecord;

/// Assign 1-based positions within each per-subject cohort of one batch.
///
/// Cohorts are the records sharing a `subject_id`; ranking never crosses
/// subjects or batch invocations. Each cohort is stable-sorted by total
/// descending, so equal totals keep their submission order and receive
/// distinct adjacent positions. The returned list is grouped by cohort in
/// first-seen subject order.
pub fn assign_positions(results: Vec<ResultRecord>) -> Vec<ResultRecord> {
    let mut cohorts: Vec<(String, Vec<ResultRecord>)> = Vec::new();
    for record in results {
        match cohorts
            .iter_mut()
            .find(|(subject_id, _)| *subject_id == record.subject_id)
        {
            Some((_, cohort)) => cohort.push(record),
            None => cohorts.push((record.subject_id.clone(), vec![record])),
        }
    }

    let mut ranked = Vec::with_capacity(cohorts.iter().map(|(_, c)| c.len()).sum());
    for (_, mut cohort) in cohorts {
        rank_cohort(&mut cohort);
        ranked.append(&mut cohort);
    }
    ranked
}

/// Rank one cohort in place. Relies on the sort being stable; re-ordering
/// ties by name or id would change which of two equal totals takes the
/// higher position.
pub fn rank_cohort(cohort: &mut [ResultRecord]) {
    cohort.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
    for (index, record) in cohort.iter_mut().enumerate() {
        record.position = Some(index as u32 + 1);
    }
}
