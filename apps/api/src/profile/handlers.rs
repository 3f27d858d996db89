//! Axum route handlers for the owner's profile.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::identity::CurrentUser;
use crate::models::portfolio::PortfolioRow;
use crate::models::user::UserRow;
use crate::portfolios::service::upsert_owner_portfolio;
use crate::profile::skills::normalize_skills;
use crate::social::links::{
    fetch_social_links, upsert_social_links, SocialLinksBody, SocialLinksPatch,
};
use crate::state::AppState;
use crate::templates::handlers::fetch_template;
use crate::validation::{finish, is_email};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub user: UserRow,
    pub social_links: SocialLinksBody,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub profile_image: Option<String>,
    pub skills: Option<Vec<String>>,
    pub social_links: Option<SocialLinksPatch>,
}

impl UpdateProfileRequest {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();
        if self.username.as_deref().is_some_and(|u| u.trim().is_empty()) {
            errors.push("username cannot be empty".to_string());
        }
        if self.email.as_deref().is_some_and(|e| !is_email(e.trim())) {
            errors.push("email is not a valid address".to_string());
        }
        finish(errors)?;
        if let Some(links) = &self.social_links {
            links.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct SelectTemplateRequest {
    pub template_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct SelectTemplateResponse {
    pub profile: ProfileResponse,
    pub portfolio: PortfolioRow,
}

// ────────────────────────────────────────────────────────────────────────────
// Queries
// ────────────────────────────────────────────────────────────────────────────

/// User row plus social links (empty strings when none are stored).
pub async fn load_profile(db: &PgPool, user_id: Uuid) -> Result<ProfileResponse, AppError> {
    let user = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;

    let social_links = fetch_social_links(db, user_id)
        .await?
        .map(SocialLinksBody::from)
        .unwrap_or_default();

    Ok(ProfileResponse { user, social_links })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<ProfileResponse>, AppError> {
    Ok(Json(load_profile(&state.db, user_id).await?))
}

/// PUT /api/v1/profile
///
/// Partial update. Skills are trimmed and de-duplicated case-insensitively.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    request.validate()?;

    let trimmed = |v: &Option<String>| v.as_deref().map(|s| s.trim().to_string());
    let updated = sqlx::query(
        "UPDATE users SET
            username = COALESCE($2, username),
            last_name = COALESCE($3, last_name),
            email = COALESCE($4, email),
            bio = COALESCE($5, bio),
            phone = COALESCE($6, phone),
            location = COALESCE($7, location),
            profile_image = COALESCE($8, profile_image),
            skills = COALESCE($9, skills),
            updated_at = now()
         WHERE id = $1",
    )
    .bind(user_id)
    .bind(trimmed(&request.username))
    .bind(trimmed(&request.last_name))
    .bind(trimmed(&request.email))
    .bind(trimmed(&request.bio))
    .bind(trimmed(&request.phone))
    .bind(trimmed(&request.location))
    .bind(trimmed(&request.profile_image))
    .bind(request.skills.as_ref().map(|s| normalize_skills(s)))
    .execute(&state.db)
    .await?
    .rows_affected();

    if updated == 0 {
        return Err(AppError::NotFound(format!("User {user_id} not found")));
    }

    if let Some(links) = &request.social_links {
        upsert_social_links(&state.db, user_id, links).await?;
    }

    Ok(Json(load_profile(&state.db, user_id).await?))
}

/// PUT /api/v1/profile/template
///
/// Records the selected template and regenerates the owner's portfolio with
/// it, creating the portfolio on first use.
pub async fn handle_select_template(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<SelectTemplateRequest>,
) -> Result<Json<SelectTemplateResponse>, AppError> {
    let template = fetch_template(&state.db, request.template_id).await?;

    sqlx::query("UPDATE users SET template_selected = $2, updated_at = now() WHERE id = $1")
        .bind(user_id)
        .bind(template.id)
        .execute(&state.db)
        .await?;

    let portfolio = upsert_owner_portfolio(&state.db, user_id, template.id).await?;
    tracing::info!(
        "User {user_id} selected template '{}', portfolio {}",
        template.name,
        portfolio.id
    );

    Ok(Json(SelectTemplateResponse {
        profile: load_profile(&state.db, user_id).await?,
        portfolio,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_validation() {
        assert!(UpdateProfileRequest::default().validate().is_ok());

        let request = UpdateProfileRequest {
            username: Some(" ".to_string()),
            email: Some("nope".to_string()),
            ..Default::default()
        };
        let Err(AppError::Validation(msg)) = request.validate() else {
            panic!("expected a validation error");
        };
        assert!(msg.contains("username"));
        assert!(msg.contains("email"));
    }

    #[test]
    fn test_update_validates_nested_links() {
        let request = UpdateProfileRequest {
            social_links: Some(SocialLinksPatch {
                github: Some("not-a-url".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}
