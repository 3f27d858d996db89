//! Axum route handlers for the template catalog.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::template::TemplateRow;
use crate::pagination::{PageQuery, Paginated};
use crate::state::AppState;
use crate::templates::validation::{is_category, validate_template, TemplateFields};

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CategoryFilter {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTemplateRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub preview: String,
    pub colors: Vec<String>,
    #[serde(default)]
    pub sections: Vec<String>,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_category() -> String {
    "general".to_string()
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTemplateRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub preview: Option<String>,
    pub colors: Option<Vec<String>>,
    pub sections: Option<Vec<String>>,
    pub theme: Option<String>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
}

// ────────────────────────────────────────────────────────────────────────────
// Queries
// ────────────────────────────────────────────────────────────────────────────

/// Loads one template or fails with 404.
pub async fn fetch_template(db: &PgPool, template_id: Uuid) -> Result<TemplateRow, AppError> {
    sqlx::query_as::<_, TemplateRow>("SELECT * FROM templates WHERE id = $1")
        .bind(template_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Template {template_id} not found")))
}

fn map_duplicate_name(error: sqlx::Error) -> AppError {
    match &error {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::Validation("A template with this name already exists".to_string())
        }
        _ => AppError::Database(error),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates?category=&page=&limit=
pub async fn handle_list_templates(
    State(state): State<AppState>,
    Query(filter): Query<CategoryFilter>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Paginated<TemplateRow>>, AppError> {
    let templates = sqlx::query_as::<_, TemplateRow>(
        "SELECT * FROM templates
         WHERE ($1::text IS NULL OR category = $1)
         ORDER BY created_at DESC
         LIMIT $2 OFFSET $3",
    )
    .bind(&filter.category)
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(&state.db)
    .await?;

    let total: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM templates WHERE ($1::text IS NULL OR category = $1)",
    )
    .bind(&filter.category)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(Paginated::new(templates, &page, total)))
}

/// GET /api/v1/templates/active
pub async fn handle_active_templates(
    State(state): State<AppState>,
) -> Result<Json<Vec<TemplateRow>>, AppError> {
    let templates = sqlx::query_as::<_, TemplateRow>(
        "SELECT * FROM templates WHERE is_active ORDER BY created_at DESC",
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(templates))
}

/// GET /api/v1/templates/category/:category
///
/// Active templates of one category.
pub async fn handle_templates_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<TemplateRow>>, AppError> {
    if !is_category(&category) {
        return Err(AppError::Validation(format!("Unknown category '{category}'")));
    }

    let templates = sqlx::query_as::<_, TemplateRow>(
        "SELECT * FROM templates WHERE category = $1 AND is_active ORDER BY created_at DESC",
    )
    .bind(&category)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(templates))
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(
    State(state): State<AppState>,
    Path(template_id): Path<Uuid>,
) -> Result<Json<TemplateRow>, AppError> {
    Ok(Json(fetch_template(&state.db, template_id).await?))
}

/// POST /api/v1/templates
pub async fn handle_create_template(
    State(state): State<AppState>,
    Json(request): Json<CreateTemplateRequest>,
) -> Result<(StatusCode, Json<TemplateRow>), AppError> {
    validate_template(&TemplateFields {
        name: Some(&request.name),
        colors: Some(&request.colors),
        theme: Some(&request.theme),
        category: Some(&request.category),
    })?;

    let template = sqlx::query_as::<_, TemplateRow>(
        "INSERT INTO templates
            (id, name, description, preview, colors, sections, theme, category, is_active)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(request.name.trim())
    .bind(&request.description)
    .bind(&request.preview)
    .bind(&request.colors)
    .bind(&request.sections)
    .bind(&request.theme)
    .bind(&request.category)
    .bind(request.is_active)
    .fetch_one(&state.db)
    .await
    .map_err(map_duplicate_name)?;

    tracing::info!(template_id = %template.id, name = %template.name, "Template created");
    Ok((StatusCode::CREATED, Json(template)))
}

/// PUT /api/v1/templates/:id
///
/// Partial update; absent fields keep their stored value.
pub async fn handle_update_template(
    State(state): State<AppState>,
    Path(template_id): Path<Uuid>,
    Json(request): Json<UpdateTemplateRequest>,
) -> Result<Json<TemplateRow>, AppError> {
    validate_template(&TemplateFields {
        name: request.name.as_deref(),
        colors: request.colors.as_deref(),
        theme: request.theme.as_deref(),
        category: request.category.as_deref(),
    })?;

    let template = sqlx::query_as::<_, TemplateRow>(
        "UPDATE templates SET
            name = COALESCE($2, name),
            description = COALESCE($3, description),
            preview = COALESCE($4, preview),
            colors = COALESCE($5, colors),
            sections = COALESCE($6, sections),
            theme = COALESCE($7, theme),
            category = COALESCE($8, category),
            is_active = COALESCE($9, is_active),
            updated_at = now()
         WHERE id = $1
         RETURNING *",
    )
    .bind(template_id)
    .bind(request.name.as_deref().map(str::trim))
    .bind(&request.description)
    .bind(&request.preview)
    .bind(&request.colors)
    .bind(&request.sections)
    .bind(&request.theme)
    .bind(&request.category)
    .bind(request.is_active)
    .fetch_optional(&state.db)
    .await
    .map_err(map_duplicate_name)?
    .ok_or_else(|| AppError::NotFound(format!("Template {template_id} not found")))?;

    Ok(Json(template))
}

/// DELETE /api/v1/templates/:id
///
/// Refused while portfolios still use the template.
pub async fn handle_delete_template(
    State(state): State<AppState>,
    Path(template_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let in_use: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM portfolios WHERE template_id = $1")
            .bind(template_id)
            .fetch_one(&state.db)
            .await?;
    if in_use > 0 {
        return Err(AppError::Validation(format!(
            "Template is used by {in_use} portfolio(s)"
        )));
    }

    let deleted = sqlx::query("DELETE FROM templates WHERE id = $1")
        .bind(template_id)
        .execute(&state.db)
        .await?
        .rows_affected();
    if deleted == 0 {
        return Err(AppError::NotFound(format!("Template {template_id} not found")));
    }

    Ok(Json(json!({ "deleted": template_id })))
}
