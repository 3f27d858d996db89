//! Folding a parsed CV into an existing profile. Existing values always win;
//! the CV only fills gaps and extends the skill list.

use crate::cv::model::ParsedCv;
use crate::models::user::{SocialLinksRow, UserRow};
use crate::profile::skills::merge_skills;
use crate::social::links::SocialLinksPatch;
use crate::validation::is_web_url;

/// Changes to write. `None` leaves the stored value untouched.
#[derive(Debug, Default, PartialEq)]
pub struct ProfileMerge {
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

impl ProfileMerge {
    pub fn social_patch(&self) -> Option<SocialLinksPatch> {
        if self.linkedin.is_none() && self.github.is_none() {
            return None;
        }
        Some(SocialLinksPatch {
            linkedin: self.linkedin.clone(),
            github: self.github.clone(),
            ..Default::default()
        })
    }
}

fn cleaned(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn fill(current: &str, incoming: &Option<String>) -> Option<String> {
    if current.trim().is_empty() {
        cleaned(incoming)
    } else {
        None
    }
}

/// Links are only taken when the stored one is empty and the CV's is a web URL.
fn fill_link(current: Option<&str>, incoming: &Option<String>) -> Option<String> {
    if current.is_some_and(|c| !c.trim().is_empty()) {
        return None;
    }
    cleaned(incoming).filter(|link| is_web_url(link))
}

pub fn plan_merge(user: &UserRow, social: Option<&SocialLinksRow>, cv: &ParsedCv) -> ProfileMerge {
    let mut incoming_skills = cv.skills.technical.clone();
    incoming_skills.extend(cv.languages.iter().filter_map(|l| cleaned(&l.name)));

    ProfileMerge {
        bio: fill(&user.bio, &cv.profile.summary),
        phone: fill(&user.phone, &cv.personal.phone),
        location: fill(&user.location, &cv.personal.address),
        skills: merge_skills(&user.skills, &incoming_skills),
        linkedin: fill_link(social.map(|s| s.linkedin.as_str()), &cv.personal.linkedin),
        github: fill_link(social.map(|s| s.github.as_str()), &cv.personal.github),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::cv::model::{Language, Personal, Skills, Summary};

    fn user() -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            username: "Ada".to_string(),
            last_name: String::new(),
            email: "ada@example.com".to_string(),
            bio: String::new(),
            profile_image: String::new(),
            phone: "+33 1 00".to_string(),
            location: String::new(),
            skills: vec!["Rust".to_string()],
            template_selected: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn cv() -> ParsedCv {
        ParsedCv {
            personal: Personal {
                phone: Some("+44 20".to_string()),
                address: Some(" London ".to_string()),
                linkedin: Some("https://linkedin.com/in/ada".to_string()),
                github: Some("github.com/ada".to_string()),
                ..Default::default()
            },
            profile: Summary {
                summary: Some("Analyst and engineer".to_string()),
                ..Default::default()
            },
            skills: Skills {
                technical: vec!["rust".to_string(), "Docker".to_string()],
                soft: vec!["Patience".to_string()],
            },
            languages: vec![Language {
                name: Some("English".to_string()),
                level: Some("Native".to_string()),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_fills_only_empty_fields() {
        let merge = plan_merge(&user(), None, &cv());
        assert_eq!(merge.bio.as_deref(), Some("Analyst and engineer"));
        assert_eq!(merge.phone, None);
        assert_eq!(merge.location.as_deref(), Some("London"));
    }

    #[test]
    fn test_skills_appended_without_duplicates() {
        let merge = plan_merge(&user(), None, &cv());
        assert_eq!(merge.skills, vec!["Rust", "Docker", "English"]);
    }

    #[test]
    fn test_links_need_empty_slot_and_valid_url() {
        let merge = plan_merge(&user(), None, &cv());
        assert_eq!(merge.linkedin.as_deref(), Some("https://linkedin.com/in/ada"));
        assert_eq!(merge.github, None);

        let stored = SocialLinksRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            linkedin: "https://linkedin.com/in/someone".to_string(),
            github: String::new(),
            facebook: String::new(),
            instagram: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let merge = plan_merge(&user(), Some(&stored), &cv());
        assert_eq!(merge.linkedin, None);
        assert!(merge.social_patch().is_none());
    }
}
