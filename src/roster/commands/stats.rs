use crate::commands::{CmdResult, StatsSummary};
use crate::error::Result;
use crate::model::Employee;
use crate::query;
use crate::records::RecordStore;
use crate::store::Persistence;

/// Aggregates over the records matching `filter_term` (the same substring
/// match the list view uses). Ties for "most common" go to the value seen
/// first in insertion order.
pub fn run<P: Persistence>(store: &RecordStore<P>, filter_term: &str) -> Result<CmdResult> {
    let filtered: Vec<&Employee> = store
        .all()
        .iter()
        .filter(|e| query::matches_filter(e, filter_term))
        .collect();

    let roles: Vec<&str> = filtered.iter().map(|e| e.role.as_str()).collect();
    let departments: Vec<&str> = filtered.iter().map(|e| e.department.as_str()).collect();

    let summary = StatsSummary {
        total: filtered.len(),
        distinct_roles: distinct_count(&roles),
        distinct_departments: distinct_count(&departments),
        most_common_role: most_common(&roles),
        most_common_department: most_common(&departments),
    };

    Ok(CmdResult::default().with_stats(summary))
}

fn distinct_count(values: &[&str]) -> usize {
    let mut seen: Vec<&str> = Vec::new();
    for v in values {
        if !seen.contains(v) {
            seen.push(v);
        }
    }
    seen.len()
}

// First occurrence wins ties: a later value only replaces the current best
// with a strictly greater count.
fn most_common(values: &[&str]) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for v in values {
        let count = values.iter().filter(|o| *o == v).count();
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((v, count)),
        }
    }
    best.map(|(v, _)| v.to_string())
}
