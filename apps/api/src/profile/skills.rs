/// Trims every skill, drops empty ones, and removes case-insensitive
/// duplicates keeping the first spelling seen.
pub fn normalize_skills<'a, I>(skills: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut seen = std::collections::HashSet::new();
    skills
        .into_iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .map(String::from)
        .collect()
}

/// Appends `incoming` after `existing`, normalized as one list.
pub fn merge_skills(existing: &[String], incoming: &[String]) -> Vec<String> {
    normalize_skills(existing.iter().chain(incoming))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_trims_and_dedups() {
        let skills = owned(&[" Rust ", "", "rust", "Go", "  ", "GO", "Python"]);
        assert_eq!(normalize_skills(&skills), owned(&["Rust", "Go", "Python"]));
    }

    #[test]
    fn test_merge_keeps_existing_spelling_and_order() {
        let merged = merge_skills(&owned(&["TypeScript", "Docker"]), &owned(&["docker", "Kafka"]));
        assert_eq!(merged, owned(&["TypeScript", "Docker", "Kafka"]));
    }
}
