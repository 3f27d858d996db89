use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::SocialLinksRow;
use crate::validation::{finish, is_web_url};

/// The four supported networks as plain strings; empty means "no link".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinksBody {
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub instagram: String,
}

impl From<SocialLinksRow> for SocialLinksBody {
    fn from(row: SocialLinksRow) -> Self {
        SocialLinksBody {
            linkedin: row.linkedin,
            github: row.github,
            facebook: row.facebook,
            instagram: row.instagram,
        }
    }
}

/// Partial update; absent networks keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialLinksPatch {
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
}

impl SocialLinksPatch {
    fn entries(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("LinkedIn", self.linkedin.as_deref()),
            ("GitHub", self.github.as_deref()),
            ("Facebook", self.facebook.as_deref()),
            ("Instagram", self.instagram.as_deref()),
        ]
    }

    /// Every non-empty link must be a web URL. All bad links are reported at once.
    pub fn validate(&self) -> Result<(), AppError> {
        let errors = self
            .entries()
            .into_iter()
            .filter_map(|(network, value)| match value.map(str::trim) {
                Some(v) if !v.is_empty() && !is_web_url(v) => {
                    Some(format!("Invalid {network} URL"))
                }
                _ => None,
            })
            .collect();
        finish(errors)
    }
}

impl From<SocialLinksBody> for SocialLinksPatch {
    fn from(body: SocialLinksBody) -> Self {
        SocialLinksPatch {
            linkedin: Some(body.linkedin),
            github: Some(body.github),
            facebook: Some(body.facebook),
            instagram: Some(body.instagram),
        }
    }
}

pub async fn fetch_social_links(
    db: &PgPool,
    user_id: Uuid,
) -> Result<Option<SocialLinksRow>, sqlx::Error> {
    sqlx::query_as::<_, SocialLinksRow>("SELECT * FROM social_links WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(db)
        .await
}

/// Creates the owner's row if missing, then applies the present fields.
pub async fn upsert_social_links(
    db: &PgPool,
    user_id: Uuid,
    patch: &SocialLinksPatch,
) -> Result<SocialLinksRow, sqlx::Error> {
    let trimmed = |v: &Option<String>| v.as_deref().map(|s| s.trim().to_string());
    sqlx::query_as::<_, SocialLinksRow>(
        "INSERT INTO social_links (id, user_id, linkedin, github, facebook, instagram)
         VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''), COALESCE($5, ''), COALESCE($6, ''))
         ON CONFLICT (user_id) DO UPDATE SET
            linkedin = COALESCE($3, social_links.linkedin),
            github = COALESCE($4, social_links.github),
            facebook = COALESCE($5, social_links.facebook),
            instagram = COALESCE($6, social_links.instagram),
            updated_at = now()
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(trimmed(&patch.linkedin))
    .bind(trimmed(&patch.github))
    .bind(trimmed(&patch.facebook))
    .bind(trimmed(&patch.instagram))
    .fetch_one(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_links_are_valid() {
        assert!(SocialLinksPatch::default().validate().is_ok());
        assert!(SocialLinksPatch::from(SocialLinksBody::default()).validate().is_ok());
    }

    #[test]
    fn test_all_bad_links_reported_together() {
        let patch = SocialLinksPatch {
            linkedin: Some("linkedin".to_string()),
            github: Some("https://github.com/ada".to_string()),
            instagram: Some("javascript:alert(1)".to_string()),
            ..Default::default()
        };
        let Err(AppError::Validation(msg)) = patch.validate() else {
            panic!("expected a validation error");
        };
        assert!(msg.contains("LinkedIn"));
        assert!(msg.contains("Instagram"));
        assert!(!msg.contains("GitHub"));
    }
}
