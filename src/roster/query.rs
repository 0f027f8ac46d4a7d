//! The query pipeline: filter, then sort, then paginate.
//!
//! [`view`] is a pure function of its inputs and recomputes from scratch on
//! every call. The collection is memory-resident and UI-scale, so there is
//! nothing worth caching; the worst case is one O(n log n) sort.

use crate::model::{Employee, PageRequest, SortDirection, SortSpec};

/// The materialized result of one filter/sort/paginate pass.
#[derive(Debug, Clone)]
pub struct RecordView {
    /// How many records survived the filter (across all pages).
    pub total_filtered: usize,
    /// `ceil(total_filtered / per_page)`; 0 when nothing matched.
    pub total_pages: usize,
    /// The requested page, clamped to the available range. An out-of-range
    /// page request yields an empty slice, never an error.
    pub items: Vec<Employee>,
}

/// Case-insensitive substring match across all four display fields. An
/// empty term matches every record. Every view over the collection (the
/// list page, stats, export) filters through this one predicate.
pub fn matches_filter(employee: &Employee, filter_term: &str) -> bool {
    let term = filter_term.to_lowercase();
    term.is_empty()
        || employee.name.to_lowercase().contains(&term)
        || employee.email.to_lowercase().contains(&term)
        || employee.role.to_lowercase().contains(&term)
        || employee.department.to_lowercase().contains(&term)
}

/// Derive the page a UI would render: filter by substring, stable-sort,
/// slice. Order matters and is fixed: filter first, sort second, paginate
/// last.
pub fn view(
    records: &[Employee],
    filter_term: &str,
    sort: &SortSpec,
    page: &PageRequest,
) -> RecordView {
    // 1. Filter.
    let mut filtered: Vec<&Employee> = records
        .iter()
        .filter(|e| matches_filter(e, filter_term))
        .collect();

    // 2. Sort: stable, ordinal on the lowercased value. Descending reverses
    //    the comparator, not the sequence, so tied elements keep their
    //    filtered relative order in both directions.
    if let Some(key) = sort.key {
        filtered.sort_by(|a, b| {
            let ord = key
                .value_of(a)
                .to_lowercase()
                .cmp(&key.value_of(b).to_lowercase());
            match sort.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }

    // 3. Paginate.
    let total_filtered = filtered.len();
    let total_pages = total_filtered.div_ceil(page.per_page);
    let start = (page.page - 1).saturating_mul(page.per_page);
    let items = filtered
        .into_iter()
        .skip(start)
        .take(page.per_page)
        .cloned()
        .collect();

    RecordView {
        total_filtered,
        total_pages,
        items,
    }
}
