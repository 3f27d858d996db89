//! Axum route handlers for CV import.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::cv::merge::plan_merge;
use crate::cv::model::ParsedCv;
use crate::errors::AppError;
use crate::identity::CurrentUser;
use crate::profile::handlers::{load_profile, ProfileResponse};
use crate::social::links::{fetch_social_links, upsert_social_links};
use crate::state::AppState;

/// Upper bound for an uploaded CV.
pub const MAX_CV_BYTES: usize = 10 * 1024 * 1024;

fn looks_like_pdf(file_name: &str, content_type: Option<&str>, data: &[u8]) -> bool {
    content_type == Some("application/pdf")
        || file_name.to_lowercase().ends_with(".pdf")
        || data.starts_with(b"%PDF")
}

/// POST /api/v1/profile/cv
///
/// Sends the uploaded PDF (multipart field `file`) to the CV parser and
/// returns the parsed CV as a preview. Nothing is stored.
pub async fn handle_parse_cv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParsedCv>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("cv.pdf").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;

        if data.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }
        if !looks_like_pdf(&file_name, content_type.as_deref(), &data) {
            return Err(AppError::Validation("Only PDF files are accepted".to_string()));
        }

        info!("Parsing CV '{file_name}' ({} bytes)", data.len());
        let parsed = state.cv_parser.parse(&file_name, data.to_vec()).await?;
        return Ok(Json(parsed));
    }

    Err(AppError::Validation("Missing multipart field 'file'".to_string()))
}

/// POST /api/v1/profile/cv/apply
///
/// Merges a parsed CV into the owner's profile and returns the result.
pub async fn handle_apply_cv(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(cv): Json<ParsedCv>,
) -> Result<Json<ProfileResponse>, AppError> {
    let current = load_profile(&state.db, user_id).await?;
    let social = fetch_social_links(&state.db, user_id).await?;
    let merge = plan_merge(&current.user, social.as_ref(), &cv);

    sqlx::query(
        "UPDATE users SET
            bio = COALESCE($2, bio),
            phone = COALESCE($3, phone),
            location = COALESCE($4, location),
            skills = $5,
            updated_at = now()
         WHERE id = $1",
    )
    .bind(user_id)
    .bind(&merge.bio)
    .bind(&merge.phone)
    .bind(&merge.location)
    .bind(&merge.skills)
    .execute(&state.db)
    .await?;

    if let Some(patch) = merge.social_patch() {
        upsert_social_links(&state.db, user_id, &patch).await?;
    }

    info!(
        "Applied CV to user {user_id}: {} skills after merge",
        merge.skills.len()
    );
    Ok(Json(load_profile(&state.db, user_id).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_detection() {
        assert!(looks_like_pdf("cv.PDF", None, b""));
        assert!(looks_like_pdf("upload", Some("application/pdf"), b""));
        assert!(looks_like_pdf("upload", None, b"%PDF-1.7"));
        assert!(!looks_like_pdf("cv.docx", Some("application/msword"), b"PK"));
    }
}
