use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Active,
    Complete,
    Pending,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Active,
        ProjectStatus::Complete,
        ProjectStatus::Pending,
    ];

    /// Exact, case-sensitive match on the stored label.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Active" => Some(ProjectStatus::Active),
            "Complete" => Some(ProjectStatus::Complete),
            "Pending" => Some(ProjectStatus::Pending),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Complete => "Complete",
            ProjectStatus::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_name: String,
    pub duration: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub image: String,
    pub link_demo: String,
    pub link_github: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(ProjectStatus::parse("Active"), Some(ProjectStatus::Active));
        assert_eq!(ProjectStatus::parse("active"), None);
        assert_eq!(ProjectStatus::parse("Archived"), None);
        for status in ProjectStatus::ALL {
            assert_eq!(ProjectStatus::parse(status.as_str()), Some(status));
        }
    }
}
