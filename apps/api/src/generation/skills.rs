//! Heuristic skill tagging by keyword.
//!
//! Each skill goes to the first category in `CATEGORY_KEYWORDS` order whose
//! keyword list has a case-insensitive substring match. Ties between
//! categories (e.g. "docker" is listed under both DevOps and Tools) resolve to
//! the earlier category. Unmatched skills fall back to Frontend when they look
//! web-related, else Tools.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Mobile,
    Database,
    DevOps,
    Tools,
    Design,
    Languages,
}

impl SkillCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Mobile => "Mobile",
            SkillCategory::Database => "Database",
            SkillCategory::DevOps => "DevOps",
            SkillCategory::Tools => "Tools",
            SkillCategory::Design => "Design",
            SkillCategory::Languages => "Languages",
        }
    }

    /// Font Awesome class for the category heading.
    pub fn icon(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "fas fa-code",
            SkillCategory::Backend => "fas fa-server",
            SkillCategory::Mobile => "fas fa-mobile-alt",
            SkillCategory::Database => "fas fa-database",
            SkillCategory::DevOps => "fas fa-cloud",
            SkillCategory::Tools => "fas fa-tools",
            SkillCategory::Design => "fas fa-paint-brush",
            SkillCategory::Languages => "fas fa-globe",
        }
    }
}

/// Match table, in render and tie-break order.
pub const CATEGORY_KEYWORDS: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Frontend,
        &[
            "react", "angular", "vue", "javascript", "typescript", "html", "css", "sass",
            "bootstrap", "tailwind", "next.js", "nuxt.js",
        ],
    ),
    (
        SkillCategory::Backend,
        &[
            "node.js", "express", "nestjs", "spring", "django", "flask", "laravel", "php",
            "python", "java", "c#", ".net", "ruby", "rails", "go",
        ],
    ),
    (
        SkillCategory::Mobile,
        &[
            "react native", "flutter", "android", "ios", "swift", "kotlin", "xamarin", "ionic",
        ],
    ),
    (
        SkillCategory::Database,
        &[
            "mysql", "postgresql", "mongodb", "redis", "sqlite", "oracle", "sql server",
            "firebase", "dynamodb",
        ],
    ),
    (
        SkillCategory::DevOps,
        &[
            "docker", "kubernetes", "aws", "azure", "gcp", "jenkins", "gitlab",
            "github actions", "terraform", "ansible", "nginx", "apache",
        ],
    ),
    (
        SkillCategory::Tools,
        &[
            "git", "webpack", "vite", "docker", "jenkins", "jira", "figma", "adobe xd",
            "photoshop",
        ],
    ),
    (
        SkillCategory::Design,
        &[
            "figma", "adobe xd", "photoshop", "illustrator", "sketch", "ui/ux", "wireframing",
            "prototyping",
        ],
    ),
    (
        SkillCategory::Languages,
        &["french", "english", "spanish", "german", "arabic"],
    ),
];

const WEB_HINTS: &[&str] = &["js", "script", "css", "html"];

/// Skills sharing a category, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<String>,
}

/// Assigns one skill to its category.
pub fn categorize(skill: &str) -> SkillCategory {
    let lower = skill.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or_else(|| {
            if WEB_HINTS.iter().any(|h| lower.contains(h)) {
                SkillCategory::Frontend
            } else {
                SkillCategory::Tools
            }
        })
}

/// Partitions skills into non-empty groups ordered by the category table.
pub fn group_skills(skills: &[String]) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = CATEGORY_KEYWORDS
        .iter()
        .map(|(category, _)| SkillGroup {
            category: *category,
            skills: Vec::new(),
        })
        .collect();

    for skill in skills {
        let category = categorize(skill);
        if let Some(group) = groups.iter_mut().find(|g| g.category == category) {
            group.skills.push(skill.clone());
        }
    }

    groups.retain(|g| !g.skills.is_empty());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        assert_eq!(categorize("PostgreSQL"), SkillCategory::Database);
        assert_eq!(categorize("ReactJS"), SkillCategory::Frontend);
        assert_eq!(categorize("Kubernetes"), SkillCategory::DevOps);
        assert_eq!(categorize("English"), SkillCategory::Languages);
    }

    #[test]
    fn test_first_match_wins() {
        // "react native" is a Mobile keyword but "react" matches Frontend first.
        assert_eq!(categorize("React Native"), SkillCategory::Frontend);
        // "docker" appears under DevOps and Tools; DevOps comes first.
        assert_eq!(categorize("Docker"), SkillCategory::DevOps);
        // "figma" appears under Tools and Design; Tools comes first.
        assert_eq!(categorize("Figma"), SkillCategory::Tools);
        // "go" is a Backend substring of "MongoDB", which Backend sees before Database.
        assert_eq!(categorize("MongoDB"), SkillCategory::Backend);
    }

    #[test]
    fn test_unmatched_web_hint_goes_to_frontend() {
        assert_eq!(categorize("Three.js"), SkillCategory::Frontend);
        assert_eq!(categorize("Alpine.js"), SkillCategory::Frontend);
    }

    #[test]
    fn test_unmatched_falls_back_to_tools() {
        assert_eq!(categorize("Rust"), SkillCategory::Tools);
        assert_eq!(categorize("Leadership"), SkillCategory::Tools);
    }

    #[test]
    fn test_groups_follow_table_order_and_drop_empty() {
        let groups = group_skills(&skills(&["English", "Rust", "React", "Redis"]));
        let order: Vec<_> = groups.iter().map(|g| g.category).collect();
        assert_eq!(
            order,
            vec![
                SkillCategory::Frontend,
                SkillCategory::Database,
                SkillCategory::Tools,
                SkillCategory::Languages,
            ]
        );
    }

    #[test]
    fn test_groups_keep_input_order_within_category() {
        let groups = group_skills(&skills(&["Vue", "Angular", "React"]));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].skills, skills(&["Vue", "Angular", "React"]));
    }

    #[test]
    fn test_no_skills_no_groups() {
        assert!(group_skills(&[]).is_empty());
    }
}
