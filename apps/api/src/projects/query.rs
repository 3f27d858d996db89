use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::project::ProjectStatus;

/// ILIKE pattern matching `term` anywhere, with LIKE wildcards in the term
/// taken literally.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.trim().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ProjectStats {
    pub total: i64,
    pub by_status: BTreeMap<String, i64>,
}

/// Every known status appears in `by_status`, zero when absent.
pub fn build_stats(counts: Vec<(String, i64)>) -> ProjectStats {
    let mut by_status: BTreeMap<String, i64> = ProjectStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), 0))
        .collect();
    let mut total = 0;
    for (status, count) in counts {
        total += count;
        *by_status.entry(status).or_insert(0) += count;
    }
    ProjectStats { total, by_status }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern(" rust "), "%rust%");
        assert_eq!(contains_pattern("100%_done\\"), "%100\\%\\_done\\\\%");
    }

    #[test]
    fn test_stats_fill_missing_statuses() {
        let stats = build_stats(vec![("Active".to_string(), 2), ("Pending".to_string(), 1)]);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.by_status["Active"], 2);
        assert_eq!(stats.by_status["Complete"], 0);
        assert_eq!(stats.by_status["Pending"], 1);
    }
}
