//! Axum route handlers for the owner's social links.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::identity::CurrentUser;
use crate::social::links::{
    fetch_social_links, upsert_social_links, SocialLinksBody, SocialLinksPatch,
};
use crate::state::AppState;

/// GET /api/v1/social-links
///
/// Returns empty strings for every network when nothing is stored yet.
pub async fn handle_get_social_links(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<SocialLinksBody>, AppError> {
    let links = fetch_social_links(&state.db, user_id)
        .await?
        .map(SocialLinksBody::from)
        .unwrap_or_default();
    Ok(Json(links))
}

/// POST /api/v1/social-links
///
/// Replaces all four links, creating the row if needed.
pub async fn handle_upsert_social_links(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(body): Json<SocialLinksBody>,
) -> Result<Json<SocialLinksBody>, AppError> {
    let patch = SocialLinksPatch::from(body);
    patch.validate()?;
    let row = upsert_social_links(&state.db, user_id, &patch).await?;
    Ok(Json(row.into()))
}

/// PUT /api/v1/social-links
///
/// Updates only the networks present in the body.
pub async fn handle_update_social_links(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(patch): Json<SocialLinksPatch>,
) -> Result<Json<SocialLinksBody>, AppError> {
    patch.validate()?;
    if fetch_social_links(&state.db, user_id).await?.is_none() {
        return Err(AppError::NotFound("No social links to update".to_string()));
    }
    let row = upsert_social_links(&state.db, user_id, &patch).await?;
    Ok(Json(row.into()))
}

/// DELETE /api/v1/social-links
pub async fn handle_delete_social_links(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Value>, AppError> {
    let deleted = sqlx::query("DELETE FROM social_links WHERE user_id = $1")
        .bind(user_id)
        .execute(&state.db)
        .await?
        .rows_affected();
    if deleted == 0 {
        return Err(AppError::NotFound("No social links to delete".to_string()));
    }
    Ok(Json(json!({ "deleted": true })))
}
