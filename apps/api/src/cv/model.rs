//! Response schema of the CV parser. Every field is optional on the wire.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedCv {
    pub personal: Personal,
    pub profile: Summary,
    pub skills: Skills,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Personal {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    pub title: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: Option<String>,
    pub role: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub name: Option<String>,
    pub level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_parser_example() {
        let cv: ParsedCv = serde_json::from_str(
            r#"{
                "personal": {"full_name": "Jane Doe", "linkedin": "https://linkedin.com/in/janedoe"},
                "profile": {"title": "Software Engineer", "summary": "Backend engineer."},
                "skills": {"technical": ["Python", "Docker"], "soft": ["Teamwork"]},
                "experience": [{"company": "ACME Corp", "role": "Backend Engineer"}],
                "education": [],
                "languages": [{"name": "French", "level": "Native"}]
            }"#,
        )
        .unwrap();
        assert_eq!(cv.personal.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(cv.skills.technical, vec!["Python", "Docker"]);
        assert_eq!(cv.languages[0].name.as_deref(), Some("French"));
        assert!(cv.personal.github.is_none());
    }

    #[test]
    fn test_missing_sections_default() {
        let cv: ParsedCv = serde_json::from_str("{}").unwrap();
        assert!(cv.experience.is_empty());
        assert!(cv.profile.summary.is_none());
    }
}
