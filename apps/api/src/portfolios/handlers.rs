//! Axum route handlers for portfolios, including the public viewer.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::identity::CurrentUser;
use crate::models::portfolio::PortfolioRow;
use crate::pagination::{PageQuery, Paginated};
use crate::portfolios::service::{create_portfolio, fetch_owned_portfolio, regenerate_portfolio};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePortfolioRequest {
    pub template_id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePortfolioRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub template_id: Option<Uuid>,
}

async fn fetch_published(state: &AppState, slug: &str) -> Result<PortfolioRow, AppError> {
    sqlx::query_as::<_, PortfolioRow>(
        "SELECT * FROM portfolios WHERE public_url = $1 AND is_published",
    )
    .bind(slug)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("No published portfolio at '{slug}'")))
}

/// GET /api/v1/portfolios
///
/// Published portfolios, newest first.
pub async fn handle_list_published(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Paginated<PortfolioRow>>, AppError> {
    let portfolios = sqlx::query_as::<_, PortfolioRow>(
        "SELECT * FROM portfolios WHERE is_published
         ORDER BY created_at DESC LIMIT $1 OFFSET $2",
    )
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(&state.db)
    .await?;

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM portfolios WHERE is_published")
        .fetch_one(&state.db)
        .await?;

    Ok(Json(Paginated::new(portfolios, &page, total)))
}

/// GET /api/v1/portfolios/user
pub async fn handle_list_owned(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Query(page): Query<PageQuery>,
) -> Result<Json<Paginated<PortfolioRow>>, AppError> {
    let portfolios = sqlx::query_as::<_, PortfolioRow>(
        "SELECT * FROM portfolios WHERE user_id = $1
         ORDER BY created_at DESC LIMIT $2 OFFSET $3",
    )
    .bind(user_id)
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(&state.db)
    .await?;

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM portfolios WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(&state.db)
        .await?;

    Ok(Json(Paginated::new(portfolios, &page, total)))
}

/// GET /api/v1/portfolios/my
///
/// The owner's most recent portfolio.
pub async fn handle_my_portfolio(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<PortfolioRow>, AppError> {
    let portfolio = sqlx::query_as::<_, PortfolioRow>(
        "SELECT * FROM portfolios WHERE user_id = $1 ORDER BY created_at DESC LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound("No portfolio yet".to_string()))?;

    Ok(Json(portfolio))
}

/// GET /api/v1/portfolios/:id
pub async fn handle_get_portfolio(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(portfolio_id): Path<Uuid>,
) -> Result<Json<PortfolioRow>, AppError> {
    Ok(Json(fetch_owned_portfolio(&state.db, user_id, portfolio_id).await?))
}

/// POST /api/v1/portfolios
pub async fn handle_create_portfolio(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<CreatePortfolioRequest>,
) -> Result<(StatusCode, Json<PortfolioRow>), AppError> {
    let portfolio = create_portfolio(
        &state.db,
        user_id,
        request.template_id,
        request.title,
        request.description,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(portfolio)))
}

/// PUT /api/v1/portfolios/:id
///
/// Updates title and description; a different template regenerates the content.
pub async fn handle_update_portfolio(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(portfolio_id): Path<Uuid>,
    Json(request): Json<UpdatePortfolioRequest>,
) -> Result<Json<PortfolioRow>, AppError> {
    let current = fetch_owned_portfolio(&state.db, user_id, portfolio_id).await?;

    let updated = sqlx::query_as::<_, PortfolioRow>(
        "UPDATE portfolios SET
            title = COALESCE($2, title),
            description = COALESCE($3, description),
            updated_at = now()
         WHERE id = $1
         RETURNING *",
    )
    .bind(portfolio_id)
    .bind(&request.title)
    .bind(&request.description)
    .fetch_one(&state.db)
    .await?;

    match request.template_id {
        Some(template_id) if template_id != current.template_id => {
            Ok(Json(regenerate_portfolio(&state.db, &updated, template_id).await?))
        }
        _ => Ok(Json(updated)),
    }
}

/// DELETE /api/v1/portfolios/:id
pub async fn handle_delete_portfolio(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(portfolio_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let portfolio = fetch_owned_portfolio(&state.db, user_id, portfolio_id).await?;

    sqlx::query("DELETE FROM portfolios WHERE id = $1")
        .bind(portfolio.id)
        .execute(&state.db)
        .await?;

    Ok(Json(json!({ "deleted": portfolio.id })))
}

/// PUT /api/v1/portfolios/:id/publish
pub async fn handle_publish_portfolio(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(portfolio_id): Path<Uuid>,
) -> Result<Json<PortfolioRow>, AppError> {
    fetch_owned_portfolio(&state.db, user_id, portfolio_id).await?;

    let portfolio = sqlx::query_as::<_, PortfolioRow>(
        "UPDATE portfolios SET is_published = TRUE, updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(portfolio_id)
    .fetch_one(&state.db)
    .await?;

    tracing::info!("Published portfolio {} at /p/{}", portfolio.id, portfolio.public_url);
    Ok(Json(portfolio))
}

/// POST /api/v1/portfolios/:id/regenerate
///
/// Re-renders with the portfolio's current template and the owner's latest data.
pub async fn handle_regenerate_portfolio(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(portfolio_id): Path<Uuid>,
) -> Result<Json<PortfolioRow>, AppError> {
    let portfolio = fetch_owned_portfolio(&state.db, user_id, portfolio_id).await?;
    let regenerated = regenerate_portfolio(&state.db, &portfolio, portfolio.template_id).await?;
    Ok(Json(regenerated))
}

/// GET /api/v1/portfolios/public/:slug
pub async fn handle_get_public_portfolio(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PortfolioRow>, AppError> {
    Ok(Json(fetch_published(&state, &slug).await?))
}

/// GET /p/:slug
///
/// Serves the stored document as-is.
pub async fn handle_view_public_portfolio(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    Ok(Html(fetch_published(&state, &slug).await?.html_content))
}
