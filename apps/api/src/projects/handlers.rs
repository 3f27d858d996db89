//! Axum route handlers for the owner's projects.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::model::TechStack;
use crate::identity::CurrentUser;
use crate::models::project::{ProjectRow, ProjectStatus};
use crate::pagination::{PageQuery, Paginated, MAX_LIMIT};
use crate::projects::query::{build_stats, contains_pattern, ProjectStats};
use crate::projects::validation::{stored_tech_stack, validate_project, ProjectFields};
use crate::state::AppState;

const DEFAULT_RECENT: i64 = 5;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StatusFilter {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub company_name: String,
    pub duration: String,
    pub category: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: TechStack,
    #[serde(default)]
    pub image: String,
    pub link_demo: Option<String>,
    pub link_github: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProjectRequest {
    pub company_name: Option<String>,
    pub duration: Option<String>,
    pub category: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tech_stack: Option<TechStack>,
    pub image: Option<String>,
    pub link_demo: Option<String>,
    pub link_github: Option<String>,
    pub status: Option<String>,
}

fn parse_status(label: &str) -> Result<ProjectStatus, AppError> {
    ProjectStatus::parse(label)
        .ok_or_else(|| AppError::Validation(format!("Unknown project status '{label}'")))
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value.as_deref().map(|v| v.trim().to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/projects?status=&page=&limit=
pub async fn handle_list_projects(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Query(filter): Query<StatusFilter>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Paginated<ProjectRow>>, AppError> {
    let status = filter.status.as_deref().map(parse_status).transpose()?;
    let status = status.map(|s| s.as_str());

    let projects = sqlx::query_as::<_, ProjectRow>(
        "SELECT * FROM projects
         WHERE user_id = $1 AND ($2::text IS NULL OR status = $2)
         ORDER BY created_at DESC, id
         LIMIT $3 OFFSET $4",
    )
    .bind(user_id)
    .bind(status)
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(&state.db)
    .await?;

    let total: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM projects WHERE user_id = $1 AND ($2::text IS NULL OR status = $2)",
    )
    .bind(user_id)
    .bind(status)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(Paginated::new(projects, &page, total)))
}

/// GET /api/v1/projects/status/:status
pub async fn handle_projects_by_status(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(status): Path<String>,
) -> Result<Json<Vec<ProjectRow>>, AppError> {
    let status = parse_status(&status)?;

    let projects = sqlx::query_as::<_, ProjectRow>(
        "SELECT * FROM projects WHERE user_id = $1 AND status = $2
         ORDER BY created_at DESC, id",
    )
    .bind(user_id)
    .bind(status.as_str())
    .fetch_all(&state.db)
    .await?;

    Ok(Json(projects))
}

/// GET /api/v1/projects/search?q=
///
/// Case-insensitive substring match over title, description, company,
/// category and each technology.
pub async fn handle_search_projects(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<ProjectRow>>, AppError> {
    if query.q.trim().is_empty() {
        return Err(AppError::Validation("q cannot be empty".to_string()));
    }

    let projects = sqlx::query_as::<_, ProjectRow>(
        "SELECT * FROM projects
         WHERE user_id = $1 AND (
            title ILIKE $2 OR description ILIKE $2 OR company_name ILIKE $2
            OR category ILIKE $2
            OR EXISTS (SELECT 1 FROM unnest(tech_stack) AS tech WHERE tech ILIKE $2)
         )
         ORDER BY created_at DESC, id",
    )
    .bind(user_id)
    .bind(contains_pattern(&query.q))
    .fetch_all(&state.db)
    .await?;

    Ok(Json(projects))
}

/// GET /api/v1/projects/stats
pub async fn handle_project_stats(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<ProjectStats>, AppError> {
    let counts: Vec<(String, i64)> = sqlx::query_as(
        "SELECT status, COUNT(*) FROM projects WHERE user_id = $1 GROUP BY status",
    )
    .bind(user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(build_stats(counts)))
}

/// GET /api/v1/projects/recent?limit=
pub async fn handle_recent_projects(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<RecentQuery>,
) -> Result<Json<Vec<ProjectRow>>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_RECENT).clamp(1, MAX_LIMIT);

    let projects = sqlx::query_as::<_, ProjectRow>(
        "SELECT * FROM projects WHERE user_id = $1 ORDER BY created_at DESC, id LIMIT $2",
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(projects))
}

/// GET /api/v1/projects/:id
pub async fn handle_get_project(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(project_id): Path<Uuid>,
) -> Result<Json<ProjectRow>, AppError> {
    let project = sqlx::query_as::<_, ProjectRow>(
        "SELECT * FROM projects WHERE id = $1 AND user_id = $2",
    )
    .bind(project_id)
    .bind(user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Project {project_id} not found")))?;

    Ok(Json(project))
}

/// POST /api/v1/projects
pub async fn handle_create_project(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectRow>), AppError> {
    validate_project(&ProjectFields {
        company_name: Some(&request.company_name),
        duration: Some(&request.duration),
        category: Some(&request.category),
        title: Some(&request.title),
        description: Some(&request.description),
        tech_stack: Some(&request.tech_stack),
        link_demo: request.link_demo.as_deref(),
        link_github: request.link_github.as_deref(),
        status: request.status.as_deref(),
    })?;

    let status = request
        .status
        .as_deref()
        .and_then(ProjectStatus::parse)
        .unwrap_or(ProjectStatus::Active);

    let project = sqlx::query_as::<_, ProjectRow>(
        "INSERT INTO projects
            (id, user_id, company_name, duration, category, title, description,
             tech_stack, image, link_demo, link_github, status)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(request.company_name.trim())
    .bind(request.duration.trim())
    .bind(request.category.trim())
    .bind(request.title.trim())
    .bind(request.description.trim())
    .bind(stored_tech_stack(&request.tech_stack))
    .bind(request.image.trim())
    .bind(trimmed(&request.link_demo).unwrap_or_default())
    .bind(trimmed(&request.link_github).unwrap_or_default())
    .bind(status.as_str())
    .fetch_one(&state.db)
    .await?;

    tracing::info!("Created project {} for user {user_id}", project.id);
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/v1/projects/:id
///
/// Partial update; the same rules apply to the fields present.
pub async fn handle_update_project(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(project_id): Path<Uuid>,
    Json(request): Json<UpdateProjectRequest>,
) -> Result<Json<ProjectRow>, AppError> {
    validate_project(&ProjectFields {
        company_name: request.company_name.as_deref(),
        duration: request.duration.as_deref(),
        category: request.category.as_deref(),
        title: request.title.as_deref(),
        description: request.description.as_deref(),
        tech_stack: request.tech_stack.as_ref(),
        link_demo: request.link_demo.as_deref(),
        link_github: request.link_github.as_deref(),
        status: request.status.as_deref(),
    })?;

    let project = sqlx::query_as::<_, ProjectRow>(
        "UPDATE projects SET
            company_name = COALESCE($3, company_name),
            duration = COALESCE($4, duration),
            category = COALESCE($5, category),
            title = COALESCE($6, title),
            description = COALESCE($7, description),
            tech_stack = COALESCE($8, tech_stack),
            image = COALESCE($9, image),
            link_demo = COALESCE($10, link_demo),
            link_github = COALESCE($11, link_github),
            status = COALESCE($12, status),
            updated_at = now()
         WHERE id = $1 AND user_id = $2
         RETURNING *",
    )
    .bind(project_id)
    .bind(user_id)
    .bind(trimmed(&request.company_name))
    .bind(trimmed(&request.duration))
    .bind(trimmed(&request.category))
    .bind(trimmed(&request.title))
    .bind(trimmed(&request.description))
    .bind(request.tech_stack.as_ref().map(stored_tech_stack))
    .bind(trimmed(&request.image))
    .bind(trimmed(&request.link_demo))
    .bind(trimmed(&request.link_github))
    .bind(&request.status)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Project {project_id} not found")))?;

    Ok(Json(project))
}

/// DELETE /api/v1/projects/:id
pub async fn handle_delete_project(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(project_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let deleted = sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
        .bind(project_id)
        .bind(user_id)
        .execute(&state.db)
        .await?
        .rows_affected();
    if deleted == 0 {
        return Err(AppError::NotFound(format!("Project {project_id} not found")));
    }

    Ok(Json(json!({ "deleted": project_id })))
}
