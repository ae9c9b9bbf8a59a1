use std::cmp::Ordering;

/// Orders records by a nullable primary key with a secondary tie-breaker.
///
/// Records without a primary key always sink below records that have one;
/// an absent key is "no defined order", never zero. The sort is stable, so
/// re-running on identical input yields identical output.
///
/// Returns `false` when there is nothing to sort, which callers treat as a
/// no-op rather than an error.
pub fn order_records<T>(
    records: &mut [T],
    primary: impl Fn(&T) -> Option<i64>,
    secondary: impl Fn(&T) -> i64,
) -> bool {
    if records.is_empty() {
        return false;
    }
    records.sort_by(|a, b| compare_keys(primary(a), primary(b), secondary(a), secondary(b)));
    true
}

fn compare_keys(
    primary_a: Option<i64>,
    primary_b: Option<i64>,
    secondary_a: i64,
    secondary_b: i64,
) -> Ordering {
    match (primary_a, primary_b) {
        (Some(a), Some(b)) => a.cmp(&b).then(secondary_a.cmp(&secondary_b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => secondary_a.cmp(&secondary_b),
    }
}

#[cfg(test)]
#[path = "tests/ordering_tests.rs"]
mod tests;
