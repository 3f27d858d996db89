//! Read-only views consumed by the generator.
//!
//! These are looser than the storage rows: every field has a
//! default so a partially filled profile or project still renders, and the
//! tech stack keeps whatever shape the caller sent.

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::project::{ProjectRow, ProjectStatus};
use crate::models::template::TemplateRow;
use crate::models::user::{SocialLinksRow, UserRow};

// ────────────────────────────────────────────────────────────────────────────
// Template
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Strict parse used when validating stored templates.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Anything other than `"dark"` renders light.
impl From<String> for Theme {
    fn from(label: String) -> Self {
        Theme::parse(&label).unwrap_or_default()
    }
}

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Layout {
    /// Enabled section keys. Empty means every section is enabled.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub theme: Theme,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateView {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Ordered palette: primary, secondary, accent, neutral. May be shorter.
    #[serde(default, deserialize_with = "null_as_default")]
    pub colors: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub layout: Layout,
}

// ────────────────────────────────────────────────────────────────────────────
// Profile
// ────────────────────────────────────────────────────────────────────────────

/// Social links. Keys outside these four are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub bio: String,
    /// Bare filename under the uploads base, an absolute URL, or empty.
    #[serde(default)]
    pub profile_image: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
}

// ────────────────────────────────────────────────────────────────────────────
// Project
// ────────────────────────────────────────────────────────────────────────────

/// A project's technologies, as either a list or a comma-separated string.
/// Any other JSON shape is kept as `Other` and normalizes to nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TechStack {
    List(Vec<String>),
    Csv(String),
    Other(serde_json::Value),
}

impl Default for TechStack {
    fn default() -> Self {
        TechStack::List(Vec::new())
    }
}

impl TechStack {
    /// Lists pass through as given; strings are split on commas, trimmed, and
    /// empty pieces dropped.
    pub fn normalize(&self) -> Vec<String> {
        match self {
            TechStack::List(items) => items.clone(),
            TechStack::Csv(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect(),
            TechStack::Other(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectView {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech_stack: TechStack,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link_demo: Option<String>,
    #[serde(default)]
    pub link_github: Option<String>,
    /// Raw status label. Absent or unrecognized values render as `Complete`.
    #[serde(default)]
    pub status: Option<String>,
}

impl ProjectView {
    pub fn resolved_status(&self) -> ProjectStatus {
        self.status
            .as_deref()
            .and_then(ProjectStatus::parse)
            .unwrap_or(ProjectStatus::Complete)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Conversions from storage rows
// ────────────────────────────────────────────────────────────────────────────

impl From<&TemplateRow> for TemplateView {
    fn from(row: &TemplateRow) -> Self {
        TemplateView {
            name: row.name.clone(),
            colors: row.colors.clone(),
            layout: Layout {
                sections: row.sections.clone(),
                theme: Theme::from(row.theme.clone()),
            },
        }
    }
}

impl From<&SocialLinksRow> for SocialLinks {
    fn from(row: &SocialLinksRow) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        SocialLinks {
            linkedin: non_empty(&row.linkedin),
            github: non_empty(&row.github),
            facebook: non_empty(&row.facebook),
            instagram: non_empty(&row.instagram),
        }
    }
}

impl UserProfile {
    pub fn from_rows(user: &UserRow, social: Option<&SocialLinksRow>) -> Self {
        UserProfile {
            username: user.username.clone(),
            bio: user.bio.clone(),
            profile_image: user.profile_image.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            location: user.location.clone(),
            skills: user.skills.clone(),
            social_links: social.map(SocialLinks::from).unwrap_or_default(),
        }
    }
}

impl From<&ProjectRow> for ProjectView {
    fn from(row: &ProjectRow) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        ProjectView {
            title: row.title.clone(),
            company_name: row.company_name.clone(),
            description: row.description.clone(),
            tech_stack: TechStack::List(row.tech_stack.clone()),
            image: row.image.clone(),
            link_demo: non_empty(&row.link_demo),
            link_github: non_empty(&row.link_github),
            status: Some(row.status.clone()),
        }
    }
}
